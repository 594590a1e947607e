//! Configuration management for fleetdesk
//!
//! Config stored at: ~/.config/fleetdesk/config.json

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use fleetdesk_infra::http_gateway::parse_endpoint;
use fleetdesk_types::{ConfigError, OutputFormat, Result};

/// Environment variable consulted for the API endpoint
pub const ENDPOINT_ENV: &str = "FLEETDESK_API_ENDPOINT";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the truck API (e.g. "http://localhost:3000/api")
    #[serde(default)]
    pub api_endpoint: Option<String>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fleetdesk");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or return defaults
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Pick the endpoint to use: `override_endpoint` wins over the file value.
    ///
    /// The result is checked to be an http(s) URL.
    pub fn resolve_endpoint(&self, override_endpoint: Option<&str>) -> Result<String> {
        let endpoint = override_endpoint
            .or(self.api_endpoint.as_deref())
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .ok_or(ConfigError::MissingEndpoint)?;

        parse_endpoint(endpoint)?;
        Ok(endpoint.to_string())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fleetdesk Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(
            f,
            "API endpoint:   {}",
            self.api_endpoint.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(f, "Output format:  {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}
