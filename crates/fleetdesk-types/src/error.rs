//! Error types for fleetdesk

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("No API endpoint configured (use --endpoint, FLEETDESK_API_ENDPOINT or `config --set-endpoint`)")]
    MissingEndpoint,

    #[error("Invalid API endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected response body (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid truck fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Truck not found: {0}")]
    TruckNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_fields() {
        let err = Error::Validation(vec!["code".to_string(), "status".to_string()]);
        assert_eq!(err.to_string(), "Invalid truck fields: code, status");
    }

    #[test]
    fn test_config_error_converts() {
        let err: Error = ConfigError::MissingEndpoint.into();
        assert!(matches!(err, Error::Config(ConfigError::MissingEndpoint)));
    }

    #[test]
    fn test_decode_error_carries_status() {
        let source = serde_json::from_str::<Vec<u8>>("<html>").unwrap_err();
        let err = Error::Decode { status: 502, source };
        assert!(err.to_string().starts_with("Unexpected response body (HTTP 502)"));
    }
}
