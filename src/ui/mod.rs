//! Terminal UI for the permtree binary.
//!
//! - `theme` - color and icon tokens
//! - `terminal` - capability detection
//! - `context` - resolved color/unicode settings for one run
//! - `json` - NDJSON command events
//! - `widgets` - the interactive tree menu

pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
pub mod theme;
pub mod widgets;
