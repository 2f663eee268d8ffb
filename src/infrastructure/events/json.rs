//! JSON Event Sink
//!
//! Outputs tree events as NDJSON for automation consumption.

use std::io::{self, Write};

use crate::domain::entities::TreeNode;
use crate::domain::ports::{TreeEvent, TreeEventSink};

/// Event sink that writes one JSON object per tree event
pub struct JsonEventSink {
    command: &'static str,
    writer: Box<dyn Write>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Box::new(writer),
        }
    }

    fn write_event(&mut self, event: serde_json::Value) {
        let _ = writeln!(self.writer, "{}", event);
        let _ = self.writer.flush();
    }
}

fn node_json(node: &TreeNode) -> serde_json::Value {
    serde_json::json!({
        "key": node.key,
        "title": node.title,
    })
}

impl TreeEventSink for JsonEventSink {
    fn on_event(&mut self, event: &TreeEvent) {
        let json = match event {
            TreeEvent::Expanded {
                expanded_keys,
                node,
            } => {
                serde_json::json!({
                    "event": "expanded",
                    "command": self.command,
                    "node": node_json(node),
                    "expanded_keys": expanded_keys,
                })
            }

            TreeEvent::Checked {
                checked_keys,
                checked,
                node,
            } => {
                serde_json::json!({
                    "event": "checked",
                    "command": self.command,
                    "node": node_json(node),
                    "checked": checked,
                    "checked_keys": checked_keys,
                })
            }

            TreeEvent::Selected {
                selected_keys,
                selected,
                node,
            } => {
                serde_json::json!({
                    "event": "selected",
                    "command": self.command,
                    "node": node_json(node),
                    "selected": selected,
                    "selected_keys": selected_keys,
                })
            }

            TreeEvent::Deleted { node } => {
                serde_json::json!({
                    "event": "deleted",
                    "command": self.command,
                    "node": node_json(node),
                    "descendants": crate::domain::services::collect_descendant_keys(node),
                })
            }
        };

        self.write_event(json);
    }
}
