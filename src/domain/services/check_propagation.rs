//! Check-state propagation
//!
//! Computes the next checked key set for a checkbox toggle.
//!
//! - Strict mode flips the toggled key and nothing else.
//! - Cascade mode checks or unchecks the whole subtree, re-derives every
//!   ancestor from its children (deepest first), then sweeps the forest
//!   bottom-up so that every internal node is checked exactly when all of its
//!   children are.
//!
//! The indeterminate state is never stored; `check_state` derives it from the
//! set and the tree shape.

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::{CheckMode, CheckState, KeySet};

use super::traversal::{ancestor_path, collect_descendant_keys, find_node, subtree_keys, visit};

/// Next checked set after toggling `node`
pub fn toggle_check(
    forest: &[TreeNode],
    checked: &KeySet,
    node: &TreeNode,
    mode: CheckMode,
) -> KeySet {
    match mode {
        CheckMode::Strict => checked.toggled(&node.key),
        CheckMode::Cascade => {
            let subtree = subtree_keys(node);
            let mut next = if checked.contains(&node.key) {
                checked.difference(&subtree)
            } else {
                checked.union(&subtree)
            };

            for ancestor_key in ancestor_path(forest, &node.key).iter().rev() {
                if let Some(ancestor) = find_node(forest, ancestor_key) {
                    rederive(ancestor, &mut next);
                }
            }

            sweep(forest, &mut next);
            next
        }
    }
}

/// Re-derive every internal node's membership from its children, bottom-up
pub fn reconcile_checked(forest: &[TreeNode], checked: &KeySet) -> KeySet {
    let mut next = checked.clone();
    sweep(forest, &mut next);
    next
}

/// Rendered check state of `node` for a given checked set
pub fn check_state(node: &TreeNode, checked: &KeySet) -> CheckState {
    if checked.contains(&node.key) {
        return CheckState::Checked;
    }

    let descendants = collect_descendant_keys(node);
    if descendants.is_empty() {
        return CheckState::Unchecked;
    }

    let checked_count = descendants.intersection_count(checked);
    if checked_count > 0 && checked_count < descendants.len() {
        CheckState::Indeterminate
    } else {
        CheckState::Unchecked
    }
}

/// Checked set with every enabled node checked
pub fn check_all(forest: &[TreeNode], mode: CheckMode) -> KeySet {
    let mut next = KeySet::new();
    visit(forest, &mut |node, _| {
        if !node.disabled {
            next.insert(node.key.as_str());
        }
    });
    match mode {
        CheckMode::Strict => next,
        CheckMode::Cascade => reconcile_checked(forest, &next),
    }
}

/// Checked set with nothing checked
pub fn check_none() -> KeySet {
    KeySet::new()
}

/// True when every internal node satisfies the cascade invariant
pub fn is_consistent(forest: &[TreeNode], checked: &KeySet) -> bool {
    let mut consistent = true;
    visit(forest, &mut |node, _| {
        if node.has_children() && checked.contains(&node.key) != all_children_checked(node, checked)
        {
            consistent = false;
        }
    });
    consistent
}

fn all_children_checked(node: &TreeNode, checked: &KeySet) -> bool {
    node.children.iter().all(|child| checked.contains(&child.key))
}

fn rederive(node: &TreeNode, checked: &mut KeySet) {
    if !node.has_children() {
        return;
    }
    if all_children_checked(node, checked) {
        checked.insert(node.key.as_str());
    } else {
        checked.remove(&node.key);
    }
}

fn sweep(nodes: &[TreeNode], checked: &mut KeySet) {
    for node in nodes {
        if node.has_children() {
            sweep(&node.children, checked);
            rederive(node, checked);
        }
    }
}
