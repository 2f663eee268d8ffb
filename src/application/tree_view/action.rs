//! Tree interactions

use std::fmt;
use std::str::FromStr;

use crate::error::PermtreeError;

/// A user interaction addressed to one node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeAction {
    /// Chevron clicked
    ToggleExpand(String),
    /// Checkbox clicked
    ToggleCheck(String),
    /// Row clicked
    Select(String),
    /// Delete affordance clicked
    Delete(String),
}

impl TreeAction {
    pub fn key(&self) -> &str {
        match self {
            TreeAction::ToggleExpand(key)
            | TreeAction::ToggleCheck(key)
            | TreeAction::Select(key)
            | TreeAction::Delete(key) => key,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TreeAction::ToggleExpand(_) => "expand",
            TreeAction::ToggleCheck(_) => "check",
            TreeAction::Select(_) => "select",
            TreeAction::Delete(_) => "delete",
        }
    }
}

impl fmt::Display for TreeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.key())
    }
}

/// Parses `kind:key`. The key may itself contain colons.
impl FromStr for TreeAction {
    type Err = PermtreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PermtreeError::InvalidAction {
            input: s.to_string(),
        };

        let (kind, key) = s.split_once(':').ok_or_else(invalid)?;
        if key.is_empty() {
            return Err(invalid());
        }
        let key = key.to_string();

        match kind.trim().to_lowercase().as_str() {
            "expand" | "e" => Ok(TreeAction::ToggleExpand(key)),
            "check" | "c" => Ok(TreeAction::ToggleCheck(key)),
            "select" | "s" => Ok(TreeAction::Select(key)),
            "delete" | "d" => Ok(TreeAction::Delete(key)),
            _ => Err(invalid()),
        }
    }
}
