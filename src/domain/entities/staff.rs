//! Staff entity - a user together with the menus they may access

use serde::{Deserialize, Serialize};

use super::Menu;
use crate::error::{PermtreeError, PermtreeResult};

/// A staff record as listed by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub menus: Vec<Menu>,
}

impl Staff {
    pub fn to_form(&self) -> StaffForm {
        StaffForm {
            id: Some(self.id.clone()),
            user_id: self.user_id.clone(),
            menus: self.menus.clone(),
        }
    }
}

/// Data edited when creating or updating a staff record
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffForm {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    #[serde(default)]
    pub menus: Vec<Menu>,
}

impl StaffForm {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            id: None,
            user_id: user_id.into(),
            menus: Vec::new(),
        }
    }

    pub fn validate(&self) -> PermtreeResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(PermtreeError::InvalidForm {
                form: "staff",
                message: "a user must be chosen".to_string(),
            });
        }
        if self.menus.is_empty() {
            return Err(PermtreeError::InvalidForm {
                form: "staff",
                message: "at least one menu permission is required".to_string(),
            });
        }
        Ok(())
    }
}
