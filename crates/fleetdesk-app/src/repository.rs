//! Local truck list kept in sync with the remote API

use tokio::sync::watch;

use fleetdesk_domain::TruckGateway;
use fleetdesk_infra::HttpTruckGateway;
use fleetdesk_types::{Result, Truck};

use crate::config::Config;

/// Open an HTTP-backed repository for the configured endpoint
pub fn open_truck_repository(
    config: &Config,
    endpoint_override: Option<&str>,
) -> Result<TruckRepository<HttpTruckGateway>> {
    let endpoint = config.resolve_endpoint(endpoint_override)?;
    Ok(TruckRepository::new(HttpTruckGateway::new(&endpoint)?))
}

/// Observable state of a [`TruckRepository`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TruckListState {
    /// Trucks in server order, ids unique
    pub items: Vec<Truck>,
    /// Number of requests currently in flight
    pub in_flight: usize,
}

impl TruckListState {
    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }
}

/// Marks the repository busy for as long as it lives
struct BusyGuard<'a> {
    state: &'a watch::Sender<TruckListState>,
}

impl<'a> BusyGuard<'a> {
    fn enter(state: &'a watch::Sender<TruckListState>) -> Self {
        state.send_modify(|s| s.in_flight += 1);
        Self { state }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.state
            .send_modify(|s| s.in_flight = s.in_flight.saturating_sub(1));
    }
}

/// In-memory truck collection backed by a [`TruckGateway`].
///
/// All state lives in one `watch` channel value, so the repository can be
/// shared across tasks and observed with [`TruckRepository::subscribe`].
/// Overlapping calls are allowed; the busy flag stays set until the last
/// one finishes.
pub struct TruckRepository<G> {
    gateway: G,
    state: watch::Sender<TruckListState>,
}

impl<G: TruckGateway> TruckRepository<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: watch::Sender::new(TruckListState::default()),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Receive a notification on every state change
    pub fn subscribe(&self) -> watch::Receiver<TruckListState> {
        self.state.subscribe()
    }

    pub fn is_busy(&self) -> bool {
        self.state.borrow().is_busy()
    }

    /// Snapshot of the current items
    pub fn items(&self) -> Vec<Truck> {
        self.state.borrow().items.clone()
    }

    pub fn get(&self, id: &str) -> Option<Truck> {
        self.state
            .borrow()
            .items
            .iter()
            .find(|t| t.has_id(id))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replace the local list with the server's.
    ///
    /// On failure the error is logged and the current items are left
    /// exactly as they were. Returns the number of trucks loaded.
    pub async fn fetch_all(&self) -> Result<usize> {
        let _busy = BusyGuard::enter(&self.state);

        match self.gateway.list().await {
            Ok(trucks) => {
                let count = trucks.len();
                self.state.send_modify(|s| s.items = trucks);
                tracing::debug!(count, "Truck list loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch trucks");
                Err(e)
            }
        }
    }

    /// Create a truck on the server and return the stored record.
    ///
    /// The local list is not touched; pass the result to
    /// [`TruckRepository::reconcile_update`].
    pub async fn create(&self, data: &Truck) -> Result<Truck> {
        let _busy = BusyGuard::enter(&self.state);

        self.gateway.create(data).await.inspect_err(|e| {
            tracing::error!(error = %e, code = %data.code, "Failed to create truck");
        })
    }

    /// Replace the truck `id` on the server and return the stored record
    pub async fn update(&self, id: &str, data: &Truck) -> Result<Truck> {
        let _busy = BusyGuard::enter(&self.state);

        self.gateway.update(id, data).await.inspect_err(|e| {
            tracing::error!(error = %e, id, "Failed to update truck");
        })
    }

    /// Merge one server-returned record into the local list.
    ///
    /// Replaces the item with the same id in place, appends when the id is
    /// not yet known, and ignores records without an id.
    pub fn reconcile_update(&self, updated: Truck) {
        let Some(id) = updated.id.clone() else {
            return;
        };

        self.state.send_modify(|s| {
            match s.items.iter().position(|t| t.has_id(&id)) {
                Some(index) => s.items[index] = updated,
                None => s.items.push(updated),
            }
        });
    }

    /// Drop a truck from the local list only. Returns whether it was present.
    pub fn reconcile_remove(&self, id: &str) -> bool {
        self.state.send_if_modified(|s| {
            match s.items.iter().position(|t| t.has_id(id)) {
                Some(index) => {
                    s.items.remove(index);
                    true
                }
                None => false,
            }
        })
    }
}
