//! Terminal rendering functions for tree menu.
//!
//! Everything renders to plain strings; ANSI styling is only added when
//! `RenderOptions::color` is set.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use permtree::application::TreeFeatures;
use permtree::{CheckState, TreeRow};

use crate::ui::theme::{colors, icon, icons, icons_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub unicode: bool,
    pub color: bool,
    /// Draw checkboxes
    pub checkable: bool,
}

fn blank(width_of: &str) -> String {
    " ".repeat(width_of.width() + 1)
}

/// Render a single tree row.
///
/// `cursor` is `None` when no cursor column is drawn at all.
pub fn render_tree_row(row: &TreeRow, cursor: Option<bool>, options: RenderOptions) -> String {
    let unicode = options.unicode;
    let mut line = String::new();

    if let Some(is_active) = cursor {
        let marker = icon(unicode, icons::CURSOR, icons_ascii::CURSOR);
        if is_active {
            line.push_str(marker);
            line.push(' ');
        } else {
            line.push_str(&blank(marker));
        }
    }

    line.push_str(&"  ".repeat(row.depth));

    // Expansion icon (only for nodes with children)
    let expand = icon(unicode, icons::EXPAND, icons_ascii::EXPAND);
    if row.has_children {
        let chevron = if row.expanded {
            expand
        } else {
            icon(unicode, icons::COLLAPSE, icons_ascii::COLLAPSE)
        };
        line.push_str(chevron);
        line.push(' ');
    } else {
        line.push_str(&blank(expand));
    }

    if options.checkable {
        let checkbox = match row.check_state {
            CheckState::Checked => icon(unicode, icons::CHECKED, icons_ascii::CHECKED),
            CheckState::Unchecked => icon(unicode, icons::UNCHECKED, icons_ascii::UNCHECKED),
            CheckState::Indeterminate => icon(unicode, icons::PARTIAL, icons_ascii::PARTIAL),
        };
        if options.color && row.check_state != CheckState::Unchecked {
            line.push_str(&checkbox.with(colors::SUCCESS).to_string());
        } else {
            line.push_str(checkbox);
        }
        line.push(' ');
    }

    if row.selected {
        line.push_str(icon(unicode, icons::SELECTED, icons_ascii::SELECTED));
        line.push(' ');
    }

    let mut label = row.title.clone();
    if row.has_children && !row.expanded {
        label.push_str(&format!(" (+{})", row.descendant_count));
    }
    if row.disabled {
        label.push(' ');
        label.push_str(icon(unicode, icons::DISABLED, icons_ascii::DISABLED));
    }

    if !options.color {
        line.push_str(&label);
    } else if row.disabled {
        line.push_str(&label.with(colors::DIM).to_string());
    } else if row.selected {
        line.push_str(&label.with(colors::INFO).bold().to_string());
    } else {
        line.push_str(&label);
    }

    line
}

/// Render rows, one per line
pub fn render_rows(rows: &[TreeRow], cursor: Option<usize>, options: RenderOptions) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        out.push_str(&render_tree_row(row, cursor.map(|c| c == i), options));
        out.push('\n');
    }
    out
}

fn legend_entry(icon: &str, label: &str) -> String {
    let entry = format!("{} = {}", icon, label);
    let pad = 18usize.saturating_sub(entry.width());
    format!("{}{}", entry, " ".repeat(pad))
}

/// Render the status bar showing check and selection counts
pub fn render_status_bar(
    checked: usize,
    selected: usize,
    total: usize,
    options: RenderOptions,
) -> String {
    let unicode = options.unicode;
    let mut status = format!("Checked: {}/{}    Selected: {}", checked, total, selected);

    if options.checkable {
        let legend = [
            legend_entry(icon(unicode, icons::CHECKED, icons_ascii::CHECKED), "checked"),
            legend_entry(icon(unicode, icons::PARTIAL, icons_ascii::PARTIAL), "partial"),
            legend_entry(icon(unicode, icons::UNCHECKED, icons_ascii::UNCHECKED), "unchecked"),
        ];
        status.push_str("\n\n");
        status.push_str(legend.concat().trim_end());
    }
    status
}

/// Render the help bar showing keyboard shortcuts for enabled features
pub fn render_help_bar(features: TreeFeatures) -> String {
    let mut keys = Vec::new();
    if features.checkable {
        keys.push("[Space] Check");
        keys.push("[a] All");
        keys.push("[n] None");
    }
    if features.selectable {
        keys.push("[Enter] Select");
    }
    if features.deletable {
        keys.push("[d] Delete");
    }
    keys.push("[q] Quit");

    format!(
        "{}\n(Use ↑↓ to navigate, →← to expand/collapse)",
        keys.join("    ")
    )
}
