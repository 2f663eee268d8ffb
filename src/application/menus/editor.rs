//! Menu management page

use std::time::{SystemTime, UNIX_EPOCH};

use tracing::info;

use crate::application::tree_view::{TreeAction, TreeProps, TreeView};
use crate::domain::entities::{Menu, MenuForm, MenuParent, TreeNode};
use crate::domain::ports::{TreeEvent, TreeEventSink};
use crate::domain::services::{find_node, insert_child, node_depth};
use crate::error::{PermtreeError, PermtreeResult};

use super::convert::{menus_to_tree, parent_menu_options, TitleStyle, MAX_PARENT_LEVEL};

/// Editable menu tree: selectable, deletable, fully expanded, state owned by the view
#[derive(Debug, Clone)]
pub struct MenuEditor {
    view: TreeView,
    last_key: u128,
}

impl MenuEditor {
    pub fn new(menus: &[Menu]) -> Self {
        Self::from_forest(menus_to_tree(menus, TitleStyle::WithType))
    }

    pub fn from_forest(forest: Vec<TreeNode>) -> Self {
        let props = TreeProps::new(forest)
            .with_selectable(true)
            .with_deletable(true)
            .with_default_expand_all(true);
        Self {
            view: TreeView::new(props),
            last_key: 0,
        }
    }

    pub fn view(&self) -> &TreeView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TreeView {
        &mut self.view
    }

    pub fn parent_options(&self) -> Vec<MenuParent> {
        parent_menu_options(self.view.tree_data())
    }

    /// Add a validated menu under its parent, or as a new root.
    ///
    /// Returns the inserted node. The parent must exist in the tree and sit
    /// no deeper than `MAX_PARENT_LEVEL`.
    pub fn add_menu(&mut self, form: MenuForm) -> PermtreeResult<TreeNode> {
        let form = form.validate()?;
        let parent_key = form.parent.as_ref().map(|parent| parent.id.as_str());
        if let Some(parent_key) = parent_key {
            let depth = node_depth(self.view.tree_data(), parent_key).ok_or_else(|| {
                PermtreeError::UnknownKey {
                    key: parent_key.to_string(),
                }
            })?;
            let level = depth + 1;
            if level > MAX_PARENT_LEVEL as usize {
                return Err(PermtreeError::InvalidForm {
                    form: "menu",
                    message: format!(
                        "'{}' is at level {} and cannot hold sub-menus (deepest parent level is {})",
                        parent_key, level, MAX_PARENT_LEVEL
                    ),
                });
            }
        }

        let key = self.generate_key();
        let node = TreeNode::new(key, TitleStyle::WithType.title(&form.name, form.menu_type));
        let forest = insert_child(self.view.tree_data(), parent_key, node.clone());
        self.view.set_tree_data(forest);

        info!(key = %node.key, parent = ?parent_key, level = form.level, "menu added");
        Ok(node)
    }

    /// Remove a menu and everything below it
    pub fn delete(&mut self, key: &str, sink: &mut dyn TreeEventSink) -> Option<TreeEvent> {
        let event = self
            .view
            .handle_action(&TreeAction::Delete(key.to_string()), sink);
        if event.is_some() {
            info!(key, "menu deleted");
        }
        event
    }

    pub fn select(&mut self, key: &str, sink: &mut dyn TreeEventSink) -> Option<TreeEvent> {
        self.view
            .handle_action(&TreeAction::Select(key.to_string()), sink)
    }

    // Millisecond timestamp, bumped until unused
    fn generate_key(&mut self) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let mut candidate = now.max(self.last_key + 1);
        while find_node(self.view.tree_data(), &candidate.to_string()).is_some() {
            candidate += 1;
        }
        self.last_key = candidate;
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{MenuStatus, MenuType};
    use crate::domain::services::count_nodes;

    fn editor() -> MenuEditor {
        MenuEditor::new(&[
            Menu::new("1", "System", MenuType::Directory).with_children(vec![
                Menu::new("11", "Users", MenuType::Menu).with_path("/users"),
                Menu::new("12", "Roles", MenuType::Menu).with_path("/roles"),
            ]),
            Menu::new("2", "Monitor", MenuType::Menu).with_path("/monitor"),
        ])
    }

    fn parent(editor: &MenuEditor, id: &str) -> MenuParent {
        editor
            .parent_options()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn starts_fully_expanded() {
        let editor = editor();
        assert!(editor.view().expanded_keys().contains("1"));
        assert_eq!(editor.view().rows().len(), 4);
    }

    #[test]
    fn add_menu_under_parent() {
        let mut editor = editor();
        let system = parent(&editor, "1");

        let node = editor
            .add_menu(MenuForm::new("Audit", MenuType::Menu).with_path("/audit").with_parent(system))
            .unwrap();

        assert_eq!(node.title, "Audit (MENU)");
        let system = find_node(editor.view().tree_data(), "1").unwrap();
        assert_eq!(system.children.last().unwrap().key, node.key);
    }

    #[test]
    fn add_menu_at_top_level() {
        let mut editor = editor();

        let node = editor
            .add_menu(MenuForm::new("Reports", MenuType::Directory))
            .unwrap();

        let roots = editor.view().tree_data();
        assert_eq!(roots.len(), 3);
        assert_eq!(roots[2], node);
    }

    #[test]
    fn generated_keys_are_unique() {
        let mut editor = editor();
        let a = editor.add_menu(MenuForm::new("A", MenuType::Directory)).unwrap();
        let b = editor.add_menu(MenuForm::new("B", MenuType::Directory)).unwrap();

        assert_ne!(a.key, b.key);
        assert_eq!(count_nodes(editor.view().tree_data()), 6);
    }

    #[test]
    fn add_menu_rejects_invalid_form() {
        let mut editor = editor();
        let err = editor
            .add_menu(MenuForm::new("No path", MenuType::Menu))
            .unwrap_err();
        assert!(err.to_string().contains("requires a path"));
    }

    #[test]
    fn add_menu_rejects_missing_parent() {
        let mut editor = editor();
        let ghost = MenuParent {
            id: "404".to_string(),
            name: "Ghost".to_string(),
            level: 1,
        };

        let err = editor
            .add_menu(MenuForm::new("Child", MenuType::Directory).with_parent(ghost))
            .unwrap_err();

        assert!(matches!(err, PermtreeError::UnknownKey { key } if key == "404"));
        assert_eq!(count_nodes(editor.view().tree_data()), 4);
    }

    #[test]
    fn add_menu_rejects_parent_below_level_two() {
        let mut editor = editor();
        let users = parent(&editor, "11");
        assert_eq!(users.level, 2);

        let tab = editor
            .add_menu(MenuForm::new("Tab", MenuType::Directory).with_parent(users))
            .unwrap();
        let too_deep = MenuParent {
            id: tab.key.clone(),
            name: tab.title.clone(),
            level: 3,
        };

        let err = editor
            .add_menu(MenuForm::new("Deeper", MenuType::Directory).with_parent(too_deep))
            .unwrap_err();

        assert!(matches!(err, PermtreeError::InvalidForm { .. }));
        assert!(err.to_string().contains("cannot hold sub-menus"));
        assert_eq!(count_nodes(editor.view().tree_data()), 5);
    }

    #[test]
    fn delete_cascades_and_clears_selection() {
        let mut editor = editor();
        let mut events: Vec<TreeEvent> = Vec::new();
        editor.select("11", &mut events);
        assert!(editor.view().selected_keys().contains("11"));

        let event = editor.delete("1", &mut events).unwrap();

        assert_eq!(event.node().key, "1");
        assert_eq!(count_nodes(editor.view().tree_data()), 1);
        assert!(editor.view().selected_keys().is_empty());
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn form_status_defaults_to_enabled() {
        let form = MenuForm::new("Audit", MenuType::Directory);
        assert_eq!(form.status, MenuStatus::Enabled);
    }
}
