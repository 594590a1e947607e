//! Gateway trait for the remote truck API

use async_trait::async_trait;
use std::sync::Arc;

use fleetdesk_types::{Result, Truck};

/// Remote source of truth for truck records.
///
/// Implementations perform exactly one request per call and never touch
/// any local collection.
#[async_trait]
pub trait TruckGateway: Send + Sync {
    /// List all trucks in server order
    async fn list(&self) -> Result<Vec<Truck>>;

    /// Create a truck; the response carries the server-assigned id
    async fn create(&self, truck: &Truck) -> Result<Truck>;

    /// Replace the truck identified by `id`
    async fn update(&self, id: &str, truck: &Truck) -> Result<Truck>;
}

#[async_trait]
impl<T: TruckGateway + ?Sized> TruckGateway for Arc<T> {
    async fn list(&self) -> Result<Vec<Truck>> {
        (**self).list().await
    }

    async fn create(&self, truck: &Truck) -> Result<Truck> {
        (**self).create(truck).await
    }

    async fn update(&self, id: &str, truck: &Truck) -> Result<Truck> {
        (**self).update(id, truck).await
    }
}
