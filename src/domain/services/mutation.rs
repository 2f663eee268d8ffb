//! Structural tree mutation
//!
//! Each operation rebuilds the forest instead of editing it in place, so a
//! forest handed to a caller stays valid after the mutation.

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::KeySet;

use super::traversal::{find_node, subtree_keys};

/// Outcome of deleting a node together with its subtree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeDelete {
    /// The node as it was before removal
    pub node: TreeNode,
    /// The node's key plus every descendant key
    pub removed_keys: KeySet,
    /// Forest without the subtree
    pub forest: Vec<TreeNode>,
}

/// Forest with every node keyed `key` (and its subtree) removed
pub fn remove_node(forest: &[TreeNode], key: &str) -> Vec<TreeNode> {
    forest
        .iter()
        .filter(|node| node.key != key)
        .map(|node| TreeNode {
            children: remove_node(&node.children, key),
            ..node.clone()
        })
        .collect()
}

/// Forest with `child` appended under `parent_key`, or as a new root
pub fn insert_child(forest: &[TreeNode], parent_key: Option<&str>, child: TreeNode) -> Vec<TreeNode> {
    match parent_key {
        None => {
            let mut next = forest.to_vec();
            next.push(child);
            next
        }
        Some(parent_key) => forest
            .iter()
            .map(|node| {
                let mut children = insert_child(&node.children, Some(parent_key), child.clone());
                if node.key == parent_key {
                    children.push(child.clone());
                }
                TreeNode {
                    children,
                    ..node.clone()
                }
            })
            .collect(),
    }
}

/// Remove `key`'s subtree from the forest and report what went with it
pub fn cascade_delete(forest: &[TreeNode], key: &str) -> Option<CascadeDelete> {
    let node = find_node(forest, key)?.clone();
    let removed_keys = subtree_keys(&node);
    Some(CascadeDelete {
        forest: remove_node(forest, key),
        removed_keys,
        node,
    })
}

/// `keys` without anything in `removed`
pub fn prune_keys(keys: &KeySet, removed: &KeySet) -> KeySet {
    keys.difference(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::traversal::collect_all_keys;

    fn keys(items: &[&str]) -> KeySet {
        items.iter().copied().collect()
    }

    fn sample() -> Vec<TreeNode> {
        vec![
            TreeNode::new("1", "One").with_children(vec![
                TreeNode::new("1-1", "One One").with_child(TreeNode::new("1-1-1", "Deep")),
                TreeNode::new("1-2", "One Two"),
            ]),
            TreeNode::new("2", "Two"),
        ]
    }

    #[test]
    fn remove_node_drops_subtree() {
        let forest = sample();
        let next = remove_node(&forest, "1-1");

        assert_eq!(collect_all_keys(&next), keys(&["1", "1-2", "2"]));
        // Original forest untouched
        assert_eq!(collect_all_keys(&forest).len(), 5);
    }

    #[test]
    fn remove_root() {
        let next = remove_node(&sample(), "1");
        assert_eq!(collect_all_keys(&next), keys(&["2"]));
    }

    #[test]
    fn remove_missing_key_keeps_shape() {
        let forest = sample();
        assert_eq!(remove_node(&forest, "nope"), forest);
    }

    #[test]
    fn insert_child_under_parent() {
        let next = insert_child(&sample(), Some("1-2"), TreeNode::new("new", "New"));
        let parent = find_node(&next, "1-2").unwrap();
        assert_eq!(parent.children.len(), 1);
        assert_eq!(parent.children[0].key, "new");
    }

    #[test]
    fn insert_child_as_root() {
        let next = insert_child(&sample(), None, TreeNode::new("3", "Three"));
        assert_eq!(next.len(), 3);
        assert_eq!(next[2].key, "3");
    }

    #[test]
    fn insert_child_appends_after_existing_children() {
        let next = insert_child(&sample(), Some("1"), TreeNode::new("1-3", "One Three"));
        let order: Vec<&str> = next[0].children.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(order, vec!["1-1", "1-2", "1-3"]);
    }

    #[test]
    fn cascade_delete_reports_removed_keys() {
        let outcome = cascade_delete(&sample(), "1-1").unwrap();

        assert_eq!(outcome.node.key, "1-1");
        assert_eq!(outcome.removed_keys, keys(&["1-1", "1-1-1"]));
        assert!(find_node(&outcome.forest, "1-1").is_none());
        assert!(find_node(&outcome.forest, "1-1-1").is_none());
    }

    #[test]
    fn cascade_delete_missing_key() {
        assert!(cascade_delete(&sample(), "nope").is_none());
    }

    #[test]
    fn prune_removes_only_listed_keys() {
        let pruned = prune_keys(&keys(&["1", "1-1", "2"]), &keys(&["1-1", "1-1-1"]));
        assert_eq!(pruned, keys(&["1", "2"]));
    }
}
