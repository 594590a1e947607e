//! Application service layer - truck repository, config, submit workflow

pub mod config;
pub mod repository;
pub mod workflow;

pub use repository::{open_truck_repository, TruckListState, TruckRepository};
pub use workflow::{merge_edit, submit_truck, SubmitOutcome, TruckEdit};
