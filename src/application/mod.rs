//! Application Layer
//!
//! Stateful components built on the pure domain services.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Owns interaction state (which axes are owned vs controlled)
//! - Does NOT touch the file system or terminal
//!
//! ## Components
//!
//! - `TreeView` - The tree component: expand, check, select, delete
//! - `MenuEditor` - Menu management on top of `TreeView`
//! - `StaffPermissions` - Strict permission checkboxes for one staff member

pub mod menus;
pub mod tree_view;

pub use menus::{
    all_menu_ids, find_menus_by_ids, menus_to_tree, parent_menu_options, MenuEditor,
    StaffPermissions, TitleStyle,
};
pub use tree_view::{StateAxis, TreeAction, TreeFeatures, TreeProps, TreeRow, TreeView};
