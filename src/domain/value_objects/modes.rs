//! Interaction modes for checking and selecting

use serde::{Deserialize, Serialize};

/// How toggling a checkbox affects the rest of the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Parent and child check states are linked
    #[default]
    Cascade,
    /// Each node is checked independently
    Strict,
}

impl CheckMode {
    /// Maps the `check_strictly` flag onto a mode
    pub fn from_strict(check_strictly: bool) -> Self {
        if check_strictly {
            CheckMode::Strict
        } else {
            CheckMode::Cascade
        }
    }

    pub fn is_strict(&self) -> bool {
        matches!(self, CheckMode::Strict)
    }
}

/// Cardinality of row selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
    /// Selecting a node replaces the selection with its ancestor path
    #[default]
    Single,
    /// Selecting a node adds its ancestor path; deselecting removes only the node
    Multiple,
}

impl SelectMode {
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple {
            SelectMode::Multiple
        } else {
            SelectMode::Single
        }
    }
}
