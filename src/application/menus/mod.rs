//! Menu and staff consumers of the tree view
//!
//! - `convert` - backend menu lists to tree nodes and back
//! - `MenuEditor` - the menu management page: select, delete, add
//! - `StaffPermissions` - the staff permission editor: strict checkboxes
//!   driven by the staff's menu list

mod convert;
mod editor;
mod staff_permissions;

pub use convert::{
    all_menu_ids, find_menus_by_ids, menu_to_node, menus_to_tree, parent_menu_options, TitleStyle,
    MAX_PARENT_LEVEL,
};
pub use editor::MenuEditor;
pub use staff_permissions::StaffPermissions;
