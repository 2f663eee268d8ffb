//! Output Rendering
//!
//! Plain-text summaries shared by the commands. Tree rows themselves are
//! drawn by the terminal widget.

use std::fmt::Write;

use crate::application::TreeView;
use crate::domain::entities::Menu;
use crate::domain::ports::TreeEvent;
use crate::domain::value_objects::KeySet;

/// Icons for output rendering
struct Icons {
    expand: &'static str,
    check: &'static str,
    select: &'static str,
    trash: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            expand: "▼",
            check: "✓",
            select: "→",
            trash: "🗑",
        }
    }

    fn ascii() -> Self {
        Self {
            expand: "[v]",
            check: "[x]",
            select: "->",
            trash: "[DEL]",
        }
    }

    fn pick(unicode: bool) -> Self {
        if unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

fn format_keys(keys: &KeySet) -> String {
    if keys.is_empty() {
        "(none)".to_string()
    } else {
        keys.iter().collect::<Vec<_>>().join(", ")
    }
}

/// One line describing a callback event
pub fn render_event(event: &TreeEvent, unicode: bool) -> String {
    let icons = Icons::pick(unicode);
    let node = event.node();
    match event {
        TreeEvent::Expanded { expanded_keys, .. } => format!(
            "{} {} ({})  expanded: {}",
            icons.expand,
            node.title,
            node.key,
            format_keys(expanded_keys)
        ),
        TreeEvent::Checked {
            checked_keys,
            checked,
            ..
        } => format!(
            "{} {} {} ({})  checked: {}",
            icons.check,
            if *checked { "check" } else { "uncheck" },
            node.title,
            node.key,
            format_keys(checked_keys)
        ),
        TreeEvent::Selected {
            selected_keys,
            selected,
            ..
        } => format!(
            "{} {} {} ({})  selected: {}",
            icons.select,
            if *selected { "select" } else { "deselect" },
            node.title,
            node.key,
            format_keys(selected_keys)
        ),
        TreeEvent::Deleted { .. } => {
            format!("{} delete {} ({})", icons.trash, node.title, node.key)
        }
    }
}

/// The three key sets of a view, one per line
pub fn render_key_sets(view: &TreeView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "expanded: {}", format_keys(view.expanded_keys()));
    let _ = writeln!(out, "checked:  {}", format_keys(view.checked_keys()));
    let _ = writeln!(out, "selected: {}", format_keys(view.selected_keys()));
    out
}

/// A flattened staff menu list
pub fn render_staff_menus(user_id: &str, menus: &[Menu]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Staff {} has {} menu(s):", user_id, menus.len());
    for menu in menus {
        if menu.path.is_empty() {
            let _ = writeln!(out, "  {} {} ({})", menu.id, menu.name, menu.menu_type);
        } else {
            let _ = writeln!(
                out,
                "  {} {} ({}) {}",
                menu.id, menu.name, menu.menu_type, menu.path
            );
        }
    }
    out
}
