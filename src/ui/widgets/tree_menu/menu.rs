//! TreeMenu state management and action handling.

use permtree::{TreeAction, TreeEvent, TreeRow, TreeView};

use super::render::{render_help_bar, render_rows, render_status_bar, RenderOptions};

/// Key-level action, translated into tree interactions on the row under the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Expand the current node
    Expand,
    /// Collapse the current node, or jump to its parent
    Collapse,
    /// Toggle the checkbox
    ToggleCheck,
    /// Select the row
    Select,
    /// Delete the node and its subtree
    Delete,
    /// Check every enabled node
    CheckAll,
    /// Clear every checkbox
    CheckNone,
    /// Leave the menu
    Quit,
}

/// Interactive tree menu
pub struct TreeMenu {
    view: TreeView,
    /// Current cursor position in the visible rows
    cursor: usize,
    /// Cached visible rows for rendering
    rows: Vec<TreeRow>,
    /// Every event emitted so far
    events: Vec<TreeEvent>,
}

impl TreeMenu {
    pub fn new(view: TreeView) -> Self {
        let mut menu = Self {
            view,
            cursor: 0,
            rows: Vec::new(),
            events: Vec::new(),
        };
        menu.rebuild_rows();
        menu
    }

    fn rebuild_rows(&mut self) {
        self.rows = self.view.rows();
        if !self.rows.is_empty() && self.cursor >= self.rows.len() {
            self.cursor = self.rows.len() - 1;
        }
    }

    pub fn view(&self) -> &TreeView {
        &self.view
    }

    #[cfg(test)]
    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn events(&self) -> &[TreeEvent] {
        &self.events
    }

    #[cfg(test)]
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn current(&self) -> Option<&TreeRow> {
        self.rows.get(self.cursor)
    }

    fn interact(&mut self, action: impl FnOnce(String) -> TreeAction) {
        let Some(key) = self.current().map(|row| row.key.clone()) else {
            return;
        };
        self.view.handle_action(&action(key), &mut self.events);
        self.rebuild_rows();
    }

    /// Handle a menu action. Returns true when the menu should close.
    pub fn handle_action(&mut self, action: MenuAction) -> bool {
        match action {
            MenuAction::Up => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                }
            }
            MenuAction::Down => {
                if self.cursor + 1 < self.rows.len() {
                    self.cursor += 1;
                }
            }
            MenuAction::Expand => {
                if self.current().is_some_and(|row| row.has_children && !row.expanded) {
                    self.interact(TreeAction::ToggleExpand);
                }
            }
            MenuAction::Collapse => {
                let Some((expanded, depth)) = self.current().map(|row| (row.expanded, row.depth))
                else {
                    return false;
                };
                if expanded {
                    self.interact(TreeAction::ToggleExpand);
                } else if let Some(parent) = self.rows[..self.cursor]
                    .iter()
                    .rposition(|candidate| candidate.depth + 1 == depth)
                {
                    self.cursor = parent;
                }
            }
            MenuAction::ToggleCheck => self.interact(TreeAction::ToggleCheck),
            MenuAction::Select => self.interact(TreeAction::Select),
            MenuAction::Delete => self.interact(TreeAction::Delete),
            MenuAction::CheckAll => {
                if self.view.features().checkable {
                    self.view.check_all();
                    self.rebuild_rows();
                }
            }
            MenuAction::CheckNone => {
                if self.view.features().checkable {
                    self.view.check_none();
                    self.rebuild_rows();
                }
            }
            MenuAction::Quit => return true,
        }
        false
    }

    /// Render the visible rows with the cursor marker
    pub fn render(&self, options: RenderOptions) -> String {
        render_rows(&self.rows, Some(self.cursor), options)
    }

    pub fn render_status_bar(&self, options: RenderOptions) -> String {
        let total = permtree::domain::services::count_nodes(self.view.tree_data());
        render_status_bar(
            self.view.checked_keys().len(),
            self.view.selected_keys().len(),
            total,
            options,
        )
    }

    pub fn render_help_bar(&self) -> String {
        render_help_bar(self.view.features())
    }
}
