//! Row selection
//!
//! Selecting a node always brings its ancestors along. In single mode the
//! selection becomes exactly that path; in multiple mode the path is added,
//! and deselecting removes only the clicked key.

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::{KeySet, SelectMode};

use super::traversal::ancestor_path;

/// Result of a selection click
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOutcome {
    /// The would-be selected set
    pub selected_keys: KeySet,
    /// Whether the clicked node was unselected before the click
    pub selected: bool,
}

/// Next selected set after clicking `node`, or `None` for a disabled node
pub fn select_node(
    forest: &[TreeNode],
    selected: &KeySet,
    node: &TreeNode,
    mode: SelectMode,
) -> Option<SelectOutcome> {
    if node.disabled {
        return None;
    }

    let was_selected = selected.contains(&node.key);
    let path: KeySet = ancestor_path(forest, &node.key)
        .into_iter()
        .chain(std::iter::once(node.key.clone()))
        .collect();

    let selected_keys = match mode {
        SelectMode::Single => path,
        SelectMode::Multiple if was_selected => selected.without(&node.key),
        SelectMode::Multiple => selected.union(&path),
    };

    Some(SelectOutcome {
        selected_keys,
        selected: !was_selected,
    })
}
