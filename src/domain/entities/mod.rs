//! Domain Entities
//!
//! Core domain objects: the tree node and the admin-console payloads that
//! are converted into trees.

mod menu;
mod staff;
mod tree_node;

pub use menu::{Menu, MenuForm, MenuParent, MenuStatus, MenuType};
pub use staff::{Staff, StaffForm};
pub use tree_node::{validate_forest, TreeNode};
