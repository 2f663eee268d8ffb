//! Menu entity
//!
//! Menus are the permission units of the admin console. The backend returns
//! them as a nested list which is converted into a tree for editing and for
//! staff permission assignment.

use serde::{Deserialize, Serialize};

use crate::error::{PermtreeError, PermtreeResult};

/// Kind of menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MenuType {
    /// A navigable page; requires a path
    #[default]
    Menu,
    /// A grouping folder
    Directory,
}

impl std::fmt::Display for MenuType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuType::Menu => write!(f, "MENU"),
            MenuType::Directory => write!(f, "DIRECTORY"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum MenuStatus {
    #[default]
    Enabled,
    Disabled,
}

/// A menu as returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(rename = "type", default)]
    pub menu_type: MenuType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub sort: i32,
    #[serde(default)]
    pub status: MenuStatus,
    #[serde(default)]
    pub level: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Menu>,
}

impl Menu {
    pub fn new(id: impl Into<String>, name: impl Into<String>, menu_type: MenuType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: String::new(),
            menu_type,
            icon: None,
            sort: 0,
            status: MenuStatus::Enabled,
            level: 0,
            children: Vec::new(),
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_children(mut self, children: Vec<Menu>) -> Self {
        self.children = children;
        self
    }

    /// Copy of this menu without its children
    pub fn shallow(&self) -> Self {
        Self {
            children: Vec::new(),
            ..self.clone()
        }
    }
}

/// Candidate parent for a new menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuParent {
    pub id: String,
    pub name: String,
    pub level: u32,
}

/// Data entered when creating a menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuForm {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(rename = "type", default)]
    pub menu_type: MenuType,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub sort: i32,
    #[serde(default)]
    pub parent: Option<MenuParent>,
    #[serde(default)]
    pub status: MenuStatus,
    #[serde(default)]
    pub level: u32,
}

impl MenuForm {
    pub fn new(name: impl Into<String>, menu_type: MenuType) -> Self {
        Self {
            name: name.into(),
            icon: String::new(),
            menu_type,
            path: String::new(),
            sort: 0,
            parent: None,
            status: MenuStatus::Enabled,
            level: 0,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_parent(mut self, parent: MenuParent) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Validate the form and derive its level from the parent.
    ///
    /// Top-level menus sit at level 0; a child sits one below its parent.
    pub fn validate(mut self) -> PermtreeResult<Self> {
        if self.name.trim().is_empty() {
            return Err(PermtreeError::InvalidForm {
                form: "menu",
                message: "name is required".to_string(),
            });
        }
        if self.menu_type == MenuType::Menu && self.path.trim().is_empty() {
            return Err(PermtreeError::InvalidForm {
                form: "menu",
                message: "a MENU entry requires a path".to_string(),
            });
        }

        self.level = match &self.parent {
            Some(parent) => parent.level.saturating_add(1),
            None => 0,
        };
        Ok(self)
    }
}
