//! Tree Event Port
//!
//! The callback surface of the tree view. Every interaction that changes (or
//! would change) state produces exactly one event, delivered synchronously
//! from the interaction handler.

use serde::Serialize;

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::KeySet;

/// Event emitted by a tree interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TreeEvent {
    /// A node with children was expanded or collapsed
    Expanded {
        expanded_keys: KeySet,
        node: TreeNode,
    },

    /// A checkbox was toggled
    Checked {
        checked_keys: KeySet,
        checked: bool,
        node: TreeNode,
    },

    /// A row was clicked
    Selected {
        selected_keys: KeySet,
        selected: bool,
        node: TreeNode,
    },

    /// A node was deleted (payload is the node before removal)
    Deleted { node: TreeNode },
}

impl TreeEvent {
    /// The node the interaction targeted
    pub fn node(&self) -> &TreeNode {
        match self {
            TreeEvent::Expanded { node, .. }
            | TreeEvent::Checked { node, .. }
            | TreeEvent::Selected { node, .. }
            | TreeEvent::Deleted { node } => node,
        }
    }

    /// Short name used in logs and JSON output
    pub fn kind(&self) -> &'static str {
        match self {
            TreeEvent::Expanded { .. } => "expanded",
            TreeEvent::Checked { .. } => "checked",
            TreeEvent::Selected { .. } => "selected",
            TreeEvent::Deleted { .. } => "deleted",
        }
    }
}

/// Trait for receiving tree events
///
/// Implementations can be:
/// - closures: `|event: &TreeEvent| { ... }`
/// - `Vec<TreeEvent>`: collects events (handy in tests)
/// - `JsonEventSink`: NDJSON event stream for scripting
/// - `NoopEventSink`: discards everything
pub trait TreeEventSink {
    /// Handle a tree event
    fn on_event(&mut self, event: &TreeEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl TreeEventSink for NoopEventSink {
    fn on_event(&mut self, _event: &TreeEvent) {
        // Do nothing
    }
}

impl TreeEventSink for Vec<TreeEvent> {
    fn on_event(&mut self, event: &TreeEvent) {
        self.push(event.clone());
    }
}

impl<F> TreeEventSink for F
where
    F: FnMut(&TreeEvent),
{
    fn on_event(&mut self, event: &TreeEvent) {
        self(event)
    }
}
