use std::path::Path;

use crossterm::style::Stylize;
use permtree::PermtreeError;

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::theme::{colors, icon, icons, icons_ascii};

/// Stable machine-readable code for JSON error events
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<PermtreeError>() {
        Some(PermtreeError::DuplicateKey { .. }) => "DUPLICATE_KEY",
        Some(PermtreeError::EmptyKey { .. }) => "EMPTY_KEY",
        Some(PermtreeError::UnknownKey { .. }) => "UNKNOWN_KEY",
        Some(PermtreeError::InvalidPayload { .. }) => "INVALID_PAYLOAD",
        Some(PermtreeError::InvalidForm { .. }) => "INVALID_FORM",
        Some(PermtreeError::InvalidAction { .. }) => "INVALID_ACTION",
        Some(PermtreeError::InvalidConfig { .. }) => "INVALID_CONFIG",
        Some(PermtreeError::Io(_)) => "IO",
        Some(PermtreeError::Json(_)) => "JSON",
        None => "ERROR",
    }
}

fn error_help(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<PermtreeError>()? {
        PermtreeError::DuplicateKey { key, .. } => Some(format!(
            "Every menu id must be unique; rename one of the '{}' entries.",
            key
        )),
        PermtreeError::EmptyKey { .. } => Some("Give every menu a non-empty id.".to_string()),
        PermtreeError::InvalidPayload { file, .. } => Some(format!(
            "Check that {} is a JSON export from the admin backend.",
            display_name(file)
        )),
        PermtreeError::InvalidConfig { .. } => {
            Some("Valid sections are [tree] and [output].".to_string())
        }
        _ => None,
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let mark = icon(unicode, icons::ERROR, icons_ascii::ERROR);
    let header = if color {
        format!("{} {}", mark.with(colors::ERROR), format!("{:#}", err).bold())
    } else {
        format!("{} {:#}", mark, err)
    };

    match error_help(err) {
        Some(help) => format!("{}\n  {}\n", header, help),
        None => format!("{}\n", header),
    }
}

pub fn print_error(err: &anyhow::Error, json: bool, color: bool, unicode: bool) {
    if json {
        let mut event = ErrorEvent::new("permtree", error_code(err), format!("{:#}", err));
        if let Some(help) = error_help(err) {
            event = event.with_help(help);
        }
        let _ = emit_event(&event);
        return;
    }

    eprint!("{}", format_error(err, color, unicode));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_duplicate_key_includes_help() {
        let err = anyhow::Error::new(PermtreeError::DuplicateKey {
            key: "7".to_string(),
            first_title: "Users".to_string(),
            second_title: "Roles".to_string(),
        });

        let out = format_error(&err, false, false);

        assert!(out.starts_with("[FAIL] duplicate node key '7'"));
        assert!(out.contains("rename one of the '7' entries"));
    }

    #[test]
    fn test_format_plain_error_has_no_help() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(format_error(&err, false, true), format!("{} boom\n", icons::ERROR));
    }

    #[test]
    fn test_error_code_sees_through_context() {
        let err = anyhow::Error::new(PermtreeError::InvalidPayload {
            file: PathBuf::from("/tmp/menus.json"),
            message: "expected value".to_string(),
        })
        .context("failed to load menus");

        assert_eq!(error_code(&err), "INVALID_PAYLOAD");
        assert!(error_help(&err).unwrap().contains("menus.json"));
    }
}
