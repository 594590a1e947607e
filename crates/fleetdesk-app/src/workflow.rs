//! Form submission use cases

use serde::Serialize;

use fleetdesk_domain::{validate_truck, TruckGateway};
use fleetdesk_types::{Error, Result, Truck};

use crate::repository::TruckRepository;

/// What a successful submission did on the server
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", content = "truck", rename_all = "lowercase")]
pub enum SubmitOutcome {
    Created(Truck),
    Updated(Truck),
}

impl SubmitOutcome {
    pub fn truck(&self) -> &Truck {
        match self {
            SubmitOutcome::Created(t) | SubmitOutcome::Updated(t) => t,
        }
    }
}

/// Partial edit applied on top of an existing truck
#[derive(Debug, Clone, Default)]
pub struct TruckEdit {
    pub code: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
}

/// Apply `edit` to a copy of `existing`; untouched fields and extras are kept
pub fn merge_edit(existing: &Truck, edit: TruckEdit) -> Truck {
    let mut truck = existing.clone();
    if let Some(code) = edit.code {
        truck.code = code;
    }
    if let Some(name) = edit.name {
        truck.name = name;
    }
    if let Some(status) = edit.status {
        truck.status = status;
    }
    if let Some(description) = edit.description {
        truck.set_description(description);
    }
    truck
}

/// Validate a form and save it.
///
/// Forms with an id are updated, others created. Invalid forms fail with
/// [`Error::Validation`] before any request is made. The returned record is
/// merged into the repository's list.
pub async fn submit_truck<G: TruckGateway>(
    repo: &TruckRepository<G>,
    form: &Truck,
) -> Result<SubmitOutcome> {
    let validation = validate_truck(form);
    if !validation.is_valid {
        tracing::warn!(errors = ?validation.errors, "Truck form rejected");
        return Err(Error::Validation(validation.errors));
    }

    let outcome = match form.id.as_deref() {
        Some(id) => SubmitOutcome::Updated(repo.update(id, form).await?),
        None => SubmitOutcome::Created(repo.create(form).await?),
    };

    repo.reconcile_update(outcome.truck().clone());
    Ok(outcome)
}
