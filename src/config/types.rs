//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::TreeProps;
use crate::domain::entities::TreeNode;
use crate::error::PermtreeResult;

use super::loader::{self, ConfigWarning};

/// Tree behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Check nodes independently instead of cascading
    #[serde(default)]
    pub check_strictly: bool,

    /// Allow more than one selected path
    #[serde(default)]
    pub multiple: bool,

    #[serde(default = "default_true")]
    pub default_expand_all: bool,

    #[serde(default = "default_true")]
    pub checkable: bool,

    #[serde(default = "default_true")]
    pub selectable: bool,

    #[serde(default = "default_true")]
    pub deletable: bool,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            check_strictly: false,
            multiple: false,
            default_expand_all: true,
            checkable: true,
            selectable: true,
            deletable: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Plain ASCII icons instead of Unicode
    #[serde(default)]
    pub ascii: bool,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tree: TreeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> PermtreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must load; discovered files are tried in order and
    /// environment overrides are applied last.
    pub fn discover(
        explicit: Option<&Path>,
        cwd: &Path,
    ) -> PermtreeResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, cwd)
    }

    /// Apply environment variable overrides (PERMTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self, |name| std::env::var(name).ok())
    }

    /// Tree properties for `forest` with every axis owned by the view
    pub fn tree_props(&self, forest: Vec<TreeNode>) -> TreeProps {
        TreeProps::new(forest)
            .with_checkable(self.tree.checkable)
            .with_selectable(self.tree.selectable)
            .with_deletable(self.tree.deletable)
            .with_check_strictly(self.tree.check_strictly)
            .with_multiple(self.tree.multiple)
            .with_default_expand_all(self.tree.default_expand_all)
    }
}
