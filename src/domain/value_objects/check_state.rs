//! CheckState value object - the rendered state of a node's checkbox

use serde::Serialize;

/// Derived check state for a tree node
///
/// Only `Checked` is ever stored (as membership in the checked key set).
/// `Indeterminate` is recomputed from the set and the tree shape on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    /// Node key is in the checked set (●)
    Checked,
    /// Node and all descendants unchecked, or a leaf not in the set (○)
    Unchecked,
    /// Some but not all descendants checked (◐)
    Indeterminate,
}

impl CheckState {
    pub fn is_checked(&self) -> bool {
        matches!(self, CheckState::Checked)
    }
}

impl std::fmt::Display for CheckState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckState::Checked => write!(f, "checked"),
            CheckState::Unchecked => write!(f, "unchecked"),
            CheckState::Indeterminate => write!(f, "indeterminate"),
        }
    }
}
