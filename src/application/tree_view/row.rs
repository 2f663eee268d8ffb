//! Flattened rows for rendering

use serde::Serialize;

use crate::domain::value_objects::CheckState;

/// A visible tree node, flattened depth-first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeRow {
    pub key: String,
    pub title: String,
    /// Depth level (0 = root)
    pub depth: usize,
    pub check_state: CheckState,
    pub expanded: bool,
    pub selected: bool,
    pub has_children: bool,
    pub disabled: bool,
    /// Rendered with a leaf marker instead of a chevron
    pub leaf: bool,
    /// Number of nodes below this one
    pub descendant_count: usize,
}
