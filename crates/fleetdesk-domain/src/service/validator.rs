//! Required-field validation for truck forms

use serde::{Deserialize, Serialize};

use fleetdesk_types::{Truck, TruckStatus};

/// Outcome of validating a truck before submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Names of the failing fields, in rule order
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e == field)
    }
}

/// Validate `code`, `name` and `status`.
///
/// Every rule runs; failures are reported in the order code, name, status.
/// Emptiness is by length, so whitespace-only values pass.
pub fn validate_truck(truck: &Truck) -> ValidationResult {
    let mut errors = Vec::new();

    if truck.code.is_empty() {
        errors.push("code".to_string());
    }
    if truck.name.is_empty() {
        errors.push("name".to_string());
    }
    if truck.status.parse::<TruckStatus>().is_err() {
        errors.push("status".to_string());
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(code: &str, name: &str, status: &str) -> Truck {
        Truck {
            code: code.to_string(),
            name: name.to_string(),
            status: status.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_truck() {
        let result = validate_truck(&form("A", "B", "active"));
        assert_eq!(
            result,
            ValidationResult {
                is_valid: true,
                errors: vec![]
            }
        );
    }

    #[test]
    fn test_all_rules_fail_in_order() {
        let result = validate_truck(&form("", "", "bogus"));
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["code", "name", "status"]);
    }

    #[test]
    fn test_empty_code_reported() {
        for status in ["active", "inactive", "bogus"] {
            let result = validate_truck(&form("", "Hauler", status));
            assert!(!result.is_valid);
            assert!(result.has_error("code"));
        }
    }

    #[test]
    fn test_allowed_statuses_pass() {
        for status in TruckStatus::ALL {
            let result = validate_truck(&form("", "", status.as_str()));
            assert!(!result.has_error("status"), "{} rejected", status);
        }
    }

    #[test]
    fn test_unknown_statuses_fail() {
        for status in ["", "Active", "retired", " active"] {
            let result = validate_truck(&form("A", "B", status));
            assert_eq!(result.errors, vec!["status"], "{:?} accepted", status);
        }
    }

    #[test]
    fn test_whitespace_counts_as_present() {
        let result = validate_truck(&form(" ", " ", "maintenance"));
        assert!(result.is_valid);
    }

    #[test]
    fn test_other_fields_ignored() {
        let mut truck = form("A", "B", "inactive");
        truck.set_description("");
        truck
            .extra
            .insert("plate".to_string(), serde_json::Value::Null);
        assert!(validate_truck(&truck).is_valid);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(validate_truck(&form("", "B", "active"))).unwrap();
        assert_eq!(value, serde_json::json!({"isValid": false, "errors": ["code"]}));
    }
}
