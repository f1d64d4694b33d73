//! Selection modes and the operations each one permits.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ListError;

/// Selection mode for a list.
///
/// Operations a mode does not permit are silent no-ops, not errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// No selection allowed
    None,
    /// At most one item selected; range extension moves the selection
    Single,
    /// Unrestricted: Ctrl+toggle, Shift+range and select-all
    #[default]
    Multiple,
}

impl SelectionMode {
    /// Whether any item may be selected at all.
    pub fn allows_selection(self) -> bool {
        self != Self::None
    }

    /// Whether every item may be selected at once.
    pub fn allows_select_all(self) -> bool {
        self == Self::Multiple
    }

    /// Whether more than one item may be selected at a time.
    pub fn allows_multiple(self) -> bool {
        self == Self::Multiple
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Multiple => "multiple",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMode {
    type Err = ListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            _ => Err(ListError::UnknownSelectionMode(s.to_string())),
        }
    }
}
