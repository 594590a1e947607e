//! Truck record and status definitions

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Operational status of a truck.
///
/// The wire form is the lowercase name. This is a closed set: any other
/// value coming from a form or the API is rejected by validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruckStatus {
    Active,
    Inactive,
    Maintenance,
}

impl TruckStatus {
    /// All allowed statuses in display order
    pub const ALL: [TruckStatus; 3] = [
        TruckStatus::Active,
        TruckStatus::Inactive,
        TruckStatus::Maintenance,
    ];

    /// Wire value used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            TruckStatus::Active => "active",
            TruckStatus::Inactive => "inactive",
            TruckStatus::Maintenance => "maintenance",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            TruckStatus::Active => "Active",
            TruckStatus::Inactive => "Inactive",
            TruckStatus::Maintenance => "Maintenance",
        }
    }
}

impl std::fmt::Display for TruckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the allowed status values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl std::fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown truck status: {:?}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for TruckStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TruckStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

const DESCRIPTION_KEY: &str = "description";

/// A truck record as exchanged with the API.
///
/// `status` is kept as the raw wire string so that unvalidated form data can
/// be represented. Everything else, `description` included, is carried in
/// `extra` without inspection and written back unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Truck {
    /// Server-assigned identifier, absent until created
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Truck {
    /// New unsaved truck (no id)
    pub fn new(code: impl Into<String>, name: impl Into<String>, status: TruckStatus) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            status: status.as_str().to_string(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.set_description(description);
        self
    }

    /// Description when the server sent it as a string
    pub fn description(&self) -> Option<&str> {
        self.extra.get(DESCRIPTION_KEY).and_then(Value::as_str)
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.extra
            .insert(DESCRIPTION_KEY.to_string(), Value::String(description.into()));
    }

    /// Parsed status, or `None` if the raw value is not an allowed status
    pub fn status(&self) -> Option<TruckStatus> {
        self.status.parse().ok()
    }

    /// Whether this record has an id equal to `id`
    pub fn has_id(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
    }
}
