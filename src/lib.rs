//! permtree - hierarchical permission trees for admin consoles
//!
//! A tree engine with cascading check state, ancestor-including selection,
//! expand-all and cascade delete, plus the menu editor and staff permission
//! consumers that drive it from admin backend payloads.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    MenuEditor, StaffPermissions, StateAxis, TitleStyle, TreeAction, TreeProps, TreeRow, TreeView,
};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Menu, MenuType, Staff, TreeNode};
pub use domain::ports::{NoopEventSink, TreeEvent, TreeEventSink};
pub use domain::value_objects::{CheckMode, CheckState, KeySet, SelectMode};
pub use error::{PermtreeError, PermtreeResult};
