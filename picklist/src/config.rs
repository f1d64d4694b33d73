//! List configuration.

use serde::{Deserialize, Serialize};

use crate::collection::DEFAULT_ID_PREFIX;
use crate::error::Result;
use crate::selection::SelectionMode;

/// Per-list configuration supplied by the host.
///
/// ```
/// use picklist::{ListConfig, SelectionMode};
///
/// let config = ListConfig::from_json(r#"{ "selection_mode": "single" }"#).unwrap();
/// assert_eq!(config.selection_mode, SelectionMode::Single);
/// assert_eq!(config.id_prefix, "wal-id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Which selection operations have effect.
    pub selection_mode: SelectionMode,
    /// Prefix for ids generated for records that carry none.
    pub id_prefix: String,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::default(),
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }
}

impl ListConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection mode.
    pub fn selection_mode(mut self, mode: SelectionMode) -> Self {
        self.selection_mode = mode;
        self
    }

    /// Set the generated id prefix.
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Parse configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
