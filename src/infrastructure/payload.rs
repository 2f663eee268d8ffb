//! Admin backend payloads
//!
//! Menus arrive as a JSON array of nested menus, staff as a single JSON
//! object. Trees built from menus are validated before they reach the
//! engine, so duplicate or empty keys fail here with a clear error.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::application::{menus_to_tree, TitleStyle};
use crate::domain::entities::{validate_forest, Menu, Staff, TreeNode};
use crate::error::{PermtreeError, PermtreeResult};

fn read_json<T: DeserializeOwned>(path: &Path) -> PermtreeResult<T> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| PermtreeError::InvalidPayload {
        file: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a menu list
pub fn load_menus(path: &Path) -> PermtreeResult<Vec<Menu>> {
    let menus: Vec<Menu> = read_json(path)?;
    debug!(file = %path.display(), roots = menus.len(), "menus loaded");
    Ok(menus)
}

/// Load a menu list whose ids form a valid forest
pub fn load_valid_menus(path: &Path) -> PermtreeResult<Vec<Menu>> {
    let menus = load_menus(path)?;
    validate_forest(&menus_to_tree(&menus, TitleStyle::NameOnly))?;
    Ok(menus)
}

/// Load a staff record
pub fn load_staff(path: &Path) -> PermtreeResult<Staff> {
    let staff: Staff = read_json(path)?;
    debug!(file = %path.display(), user = %staff.user_id, menus = staff.menus.len(), "staff loaded");
    Ok(staff)
}

/// Load a menu list and convert it into a validated forest
pub fn load_forest(path: &Path, style: TitleStyle) -> PermtreeResult<Vec<TreeNode>> {
    let forest = menus_to_tree(&load_menus(path)?, style);
    validate_forest(&forest)?;
    Ok(forest)
}
