//! Tree Menu Widget
//!
//! Cursor-driven terminal front end for a `TreeView`.
//!
//! # Module Structure
//!
//! - `menu` - TreeMenu cursor state and key-level actions
//! - `render` - Row, status bar and help text rendering
//! - `input` - Keyboard mapping and the interactive loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::TreeMenu;
pub use render::{render_rows, RenderOptions};
