//! Configuration module for permtree
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (PERMTREE_*)
//! 3. `--config <path>`, or `./.permtree.toml`, or the user config
//!    (`<config dir>/permtree/config.toml`), first one found
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, TreeConfig};
