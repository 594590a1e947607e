//! Domain layer: validation rules and the remote gateway seam

pub mod gateway;
pub mod service;

pub use gateway::TruckGateway;
pub use service::{validate_truck, ValidationResult};
