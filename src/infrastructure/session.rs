//! Session state persisted between `apply` runs
//!
//! The three key sets are stored as a small JSON document. On load they seed
//! the view's defaults; after the run the resulting sets are written back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::{TreeProps, TreeView};
use crate::domain::value_objects::KeySet;
use crate::error::{PermtreeError, PermtreeResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    #[serde(default)]
    pub expanded_keys: KeySet,
    #[serde(default)]
    pub checked_keys: KeySet,
    #[serde(default)]
    pub selected_keys: KeySet,
}

impl SessionState {
    /// Load state; a missing file yields the empty state
    pub fn load(path: &Path) -> PermtreeResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| PermtreeError::InvalidPayload {
            file: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn save(&self, path: &Path) -> PermtreeResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Snapshot the current key sets of a view
    pub fn capture(view: &TreeView) -> Self {
        Self {
            expanded_keys: view.expanded_keys().clone(),
            checked_keys: view.checked_keys().clone(),
            selected_keys: view.selected_keys().clone(),
        }
    }

    /// Use the stored sets as defaults for a new view.
    ///
    /// Stored expansion replaces expand-all, otherwise every run would
    /// re-expand the whole tree.
    pub fn seed(self, props: TreeProps) -> TreeProps {
        props
            .with_default_expand_all(false)
            .with_default_expanded_keys(self.expanded_keys)
            .with_default_checked_keys(self.checked_keys)
            .with_default_selected_keys(self.selected_keys)
    }
}
