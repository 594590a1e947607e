//! Domain services

pub mod validator;

pub use validator::{validate_truck, ValidationResult};
