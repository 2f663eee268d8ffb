//! TreeView state management and action handling.
//!
//! The view owns the forest and three key-set axes. Every interaction is
//! computed by the domain services, written into the axes the view owns, and
//! reported through the event sink whether or not it was written.

use tracing::{debug, trace};

use crate::domain::entities::TreeNode;
use crate::domain::ports::{TreeEvent, TreeEventSink};
use crate::domain::services::{
    cascade_delete, check_all, check_none, check_state, collect_descendant_keys, expand_all,
    find_node, prune_keys, select_node, toggle_check, toggle_expand,
};
use crate::domain::value_objects::{CheckMode, CheckState, KeySet, SelectMode};

use super::action::TreeAction;
use super::axis::StateAxis;
use super::props::TreeProps;
use super::row::TreeRow;

/// Feature switches fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeFeatures {
    pub checkable: bool,
    pub selectable: bool,
    pub deletable: bool,
    pub check_mode: CheckMode,
    pub select_mode: SelectMode,
    pub default_expand_all: bool,
}

/// Hierarchical tree with expand, check, select and delete interactions
#[derive(Debug, Clone)]
pub struct TreeView {
    forest: Vec<TreeNode>,
    features: TreeFeatures,
    expanded: StateAxis,
    checked: StateAxis,
    selected: StateAxis,
}

impl TreeView {
    /// Create a view, resolving each axis to owned or controlled
    pub fn new(props: TreeProps) -> Self {
        let features = TreeFeatures {
            checkable: props.checkable,
            selectable: props.selectable,
            deletable: props.deletable,
            check_mode: props.check_mode(),
            select_mode: props.select_mode(),
            default_expand_all: props.default_expand_all,
        };

        let expanded_seed = if props.default_expand_all && props.expanded_keys.is_none() {
            expand_all(&props.tree_data)
        } else {
            props.default_expanded_keys
        };

        let view = Self {
            expanded: StateAxis::resolve(props.expanded_keys, expanded_seed),
            checked: StateAxis::resolve(props.checked_keys, props.default_checked_keys),
            selected: StateAxis::resolve(props.selected_keys, props.default_selected_keys),
            forest: props.tree_data,
            features,
        };

        debug!(
            roots = view.forest.len(),
            expanded_controlled = view.expanded.is_controlled(),
            checked_controlled = view.checked.is_controlled(),
            selected_controlled = view.selected.is_controlled(),
            "tree view created"
        );
        view
    }

    pub fn tree_data(&self) -> &[TreeNode] {
        &self.forest
    }

    pub fn features(&self) -> TreeFeatures {
        self.features
    }

    pub fn expanded_keys(&self) -> &KeySet {
        self.expanded.current()
    }

    pub fn checked_keys(&self) -> &KeySet {
        self.checked.current()
    }

    pub fn selected_keys(&self) -> &KeySet {
        self.selected.current()
    }

    pub fn checked_axis(&self) -> &StateAxis {
        &self.checked
    }

    /// Replace the forest wholesale.
    ///
    /// Owned expansion is re-seeded when expand-all is on; every other axis
    /// keeps its keys, and keys that no longer match a node are inert.
    pub fn set_tree_data(&mut self, forest: Vec<TreeNode>) {
        self.forest = forest;
        if self.features.default_expand_all {
            let seeded = expand_all(&self.forest);
            self.expanded.commit(seeded);
        }
        debug!(roots = self.forest.len(), "tree data replaced");
    }

    /// Caller feeds back a controlled expanded set
    pub fn sync_expanded_keys(&mut self, keys: KeySet) {
        self.expanded.sync(keys);
    }

    /// Caller feeds back a controlled checked set
    pub fn sync_checked_keys(&mut self, keys: KeySet) {
        self.checked.sync(keys);
    }

    /// Caller feeds back a controlled selected set
    pub fn sync_selected_keys(&mut self, keys: KeySet) {
        self.selected.sync(keys);
    }

    /// Handle one interaction.
    ///
    /// Returns the emitted event, or `None` when the interaction was a no-op
    /// (feature disabled, disabled node, leaf expand, unknown key).
    pub fn handle_action(
        &mut self,
        action: &TreeAction,
        sink: &mut dyn TreeEventSink,
    ) -> Option<TreeEvent> {
        let event = match action {
            TreeAction::ToggleExpand(key) => self.toggle_expand(key),
            TreeAction::ToggleCheck(key) => self.toggle_check(key),
            TreeAction::Select(key) => self.select(key),
            TreeAction::Delete(key) => self.delete(key),
        };

        match &event {
            Some(event) => {
                debug!(action = %action, event = event.kind(), "tree interaction");
                sink.on_event(event);
            }
            None => debug!(action = %action, "tree interaction ignored"),
        }
        event
    }

    fn toggle_expand(&mut self, key: &str) -> Option<TreeEvent> {
        let node = find_node(&self.forest, key)?;
        let next = toggle_expand(self.expanded.current(), node)?;
        let node = node.clone();

        self.expanded.commit(next.clone());
        Some(TreeEvent::Expanded {
            expanded_keys: next,
            node,
        })
    }

    fn toggle_check(&mut self, key: &str) -> Option<TreeEvent> {
        if !self.features.checkable {
            return None;
        }
        let node = find_node(&self.forest, key)?;
        if node.disabled {
            return None;
        }

        let was_checked = self.checked.current().contains(key);
        let next = toggle_check(
            &self.forest,
            self.checked.current(),
            node,
            self.features.check_mode,
        );
        trace!(key, before = %self.checked.current(), after = %next, "check propagated");
        let node = node.clone();

        self.checked.commit(next.clone());
        Some(TreeEvent::Checked {
            checked_keys: next,
            checked: !was_checked,
            node,
        })
    }

    fn select(&mut self, key: &str) -> Option<TreeEvent> {
        if !self.features.selectable {
            return None;
        }
        let node = find_node(&self.forest, key)?;
        let outcome = select_node(
            &self.forest,
            self.selected.current(),
            node,
            self.features.select_mode,
        )?;
        let node = node.clone();

        self.selected.commit(outcome.selected_keys.clone());
        Some(TreeEvent::Selected {
            selected_keys: outcome.selected_keys,
            selected: outcome.selected,
            node,
        })
    }

    fn delete(&mut self, key: &str) -> Option<TreeEvent> {
        if !self.features.deletable {
            return None;
        }
        let outcome = cascade_delete(&self.forest, key)?;
        trace!(key, removed = %outcome.removed_keys, "cascade delete");

        // Forest and all three axes move together; no intermediate state is observable.
        let expanded = prune_keys(self.expanded.current(), &outcome.removed_keys);
        let checked = prune_keys(self.checked.current(), &outcome.removed_keys);
        let selected = prune_keys(self.selected.current(), &outcome.removed_keys);
        self.forest = outcome.forest;
        self.expanded.commit(expanded);
        self.checked.commit(checked);
        self.selected.commit(selected);

        Some(TreeEvent::Deleted { node: outcome.node })
    }

    /// Check every enabled node. Returns the would-be checked set.
    pub fn check_all(&mut self) -> KeySet {
        let next = check_all(&self.forest, self.features.check_mode);
        self.checked.commit(next.clone());
        next
    }

    /// Uncheck everything. Returns the would-be checked set.
    pub fn check_none(&mut self) -> KeySet {
        let next = check_none();
        self.checked.commit(next.clone());
        next
    }

    /// Derived check state for `key`
    pub fn check_state(&self, key: &str) -> Option<CheckState> {
        find_node(&self.forest, key).map(|node| check_state(node, self.checked.current()))
    }

    /// Visible rows: depth-first, children only below expanded nodes
    pub fn rows(&self) -> Vec<TreeRow> {
        let mut rows = Vec::new();
        self.flatten(&self.forest, 0, &mut rows);
        rows
    }

    fn flatten(&self, nodes: &[TreeNode], depth: usize, rows: &mut Vec<TreeRow>) {
        for node in nodes {
            let expanded = node.has_children() && self.expanded.current().contains(&node.key);
            rows.push(TreeRow {
                key: node.key.clone(),
                title: node.title.clone(),
                depth,
                check_state: check_state(node, self.checked.current()),
                expanded,
                selected: self.selected.current().contains(&node.key),
                has_children: node.has_children(),
                disabled: node.disabled,
                leaf: node.renders_as_leaf(),
                descendant_count: collect_descendant_keys(node).len(),
            });

            if expanded {
                self.flatten(&node.children, depth + 1, rows);
            }
        }
    }
}
