//! Expand/collapse state

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::KeySet;

use super::traversal::collect_expandable_keys;

/// Next expanded set after toggling `node`; `None` for nodes without children
pub fn toggle_expand(expanded: &KeySet, node: &TreeNode) -> Option<KeySet> {
    if !node.has_children() {
        return None;
    }
    Some(expanded.toggled(&node.key))
}

/// Expanded set that opens every node with children
pub fn expand_all(forest: &[TreeNode]) -> KeySet {
    collect_expandable_keys(forest)
}
