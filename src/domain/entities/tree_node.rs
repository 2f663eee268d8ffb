//! Tree node entity
//!
//! A forest is a plain `[TreeNode]`: the top level may hold several roots.
//! Children are owned by their parent, so a forest can never contain cycles.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{PermtreeError, PermtreeResult};

/// A node in a permission tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Unique identifier across the whole forest
    pub key: String,
    /// Display label
    pub title: String,
    /// Child nodes (empty for leaf nodes)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
    /// Excluded from check/select interactions, still rendered and traversed
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    /// Rendering hint only; structure is decided by `children`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_leaf: bool,
}

impl TreeNode {
    /// Create a new tree node
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: Vec::new(),
            disabled: false,
            is_leaf: false,
        }
    }

    /// Create a node flagged as a leaf
    pub fn leaf(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            is_leaf: true,
            ..Self::new(key, title)
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Add a child node
    pub fn add_child(&mut self, child: TreeNode) {
        self.children.push(child);
    }

    /// A node with an empty `children` list is a leaf
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Leaf for display purposes: no children, or flagged as one
    pub fn renders_as_leaf(&self) -> bool {
        self.is_leaf || self.children.is_empty()
    }
}

/// Reject forests with empty or duplicate keys.
///
/// The engine itself tolerates both (first match wins); loaders call this so
/// malformed payloads fail at the boundary instead.
pub fn validate_forest(forest: &[TreeNode]) -> PermtreeResult<()> {
    fn walk<'a>(
        nodes: &'a [TreeNode],
        seen: &mut HashMap<&'a str, &'a str>,
    ) -> PermtreeResult<()> {
        for node in nodes {
            if node.key.trim().is_empty() {
                return Err(PermtreeError::EmptyKey {
                    title: node.title.clone(),
                });
            }
            if let Some(first_title) = seen.insert(&node.key, &node.title) {
                return Err(PermtreeError::DuplicateKey {
                    key: node.key.clone(),
                    first_title: first_title.to_string(),
                    second_title: node.title.clone(),
                });
            }
            walk(&node.children, seen)?;
        }
        Ok(())
    }

    walk(forest, &mut HashMap::new())
}
