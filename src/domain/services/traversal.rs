//! Tree traversal
//!
//! Pure queries over a forest. Nothing here captures state, so every
//! function can be recomputed on each render.

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::KeySet;

/// Every key in the forest, depth-first
pub fn collect_all_keys(forest: &[TreeNode]) -> KeySet {
    let mut keys = KeySet::new();
    visit(forest, &mut |node, _| {
        keys.insert(node.key.as_str());
    });
    keys
}

/// Keys of every node that has children (the nodes "expand all" opens)
pub fn collect_expandable_keys(forest: &[TreeNode]) -> KeySet {
    let mut keys = KeySet::new();
    visit(forest, &mut |node, _| {
        if node.has_children() {
            keys.insert(node.key.as_str());
        }
    });
    keys
}

/// Keys strictly below `node`
pub fn collect_descendant_keys(node: &TreeNode) -> KeySet {
    let mut keys = KeySet::new();
    visit(&node.children, &mut |child, _| {
        keys.insert(child.key.as_str());
    });
    keys
}

/// `node` and everything below it
pub fn subtree_keys(node: &TreeNode) -> KeySet {
    collect_descendant_keys(node).with(&node.key)
}

/// Depth-first search; first match wins when keys collide
pub fn find_node<'a>(forest: &'a [TreeNode], key: &str) -> Option<&'a TreeNode> {
    for node in forest {
        if node.key == key {
            return Some(node);
        }
        if let Some(found) = find_node(&node.children, key) {
            return Some(found);
        }
    }
    None
}

/// Root-to-parent keys of the node with `target_key`.
///
/// Empty when the target is a root or is not in the forest.
pub fn ancestor_path(forest: &[TreeNode], target_key: &str) -> Vec<String> {
    fn find_path(nodes: &[TreeNode], target_key: &str, path: &mut Vec<String>) -> bool {
        for node in nodes {
            if node.key == target_key {
                return true;
            }
            path.push(node.key.clone());
            if find_path(&node.children, target_key, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    let mut path = Vec::new();
    if find_path(forest, target_key, &mut path) {
        path
    } else {
        Vec::new()
    }
}

/// Zero-based depth of `key`, or `None` when absent
pub fn node_depth(forest: &[TreeNode], key: &str) -> Option<usize> {
    find_node(forest, key).map(|_| ancestor_path(forest, key).len())
}

/// Total number of nodes in the forest
pub fn count_nodes(forest: &[TreeNode]) -> usize {
    forest
        .iter()
        .map(|node| 1 + count_nodes(&node.children))
        .sum()
}

/// Pre-order walk calling `f(node, depth)` for every node
pub fn visit<'a>(forest: &'a [TreeNode], f: &mut impl FnMut(&'a TreeNode, usize)) {
    fn walk<'a>(nodes: &'a [TreeNode], depth: usize, f: &mut impl FnMut(&'a TreeNode, usize)) {
        for node in nodes {
            f(node, depth);
            walk(&node.children, depth + 1, f);
        }
    }
    walk(forest, 0, f);
}
