//! Conversions between backend menus and tree nodes

use crate::domain::entities::{Menu, MenuParent, TreeNode};
use crate::domain::value_objects::KeySet;

/// Deepest level (counted from 1) that may still receive child menus
pub const MAX_PARENT_LEVEL: u32 = 2;

/// How a menu is labelled in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleStyle {
    /// `"{name} ({TYPE})"`, used by the menu editor
    #[default]
    WithType,
    /// `"{name}"`, used by the staff permission tree
    NameOnly,
}

impl TitleStyle {
    pub fn title(self, name: &str, menu_type: impl std::fmt::Display) -> String {
        match self {
            TitleStyle::WithType => format!("{} ({})", name, menu_type),
            TitleStyle::NameOnly => name.to_string(),
        }
    }
}

pub fn menu_to_node(menu: &Menu, style: TitleStyle) -> TreeNode {
    TreeNode::new(menu.id.clone(), style.title(&menu.name, menu.menu_type))
        .with_children(menus_to_tree(&menu.children, style))
}

/// Convert a nested menu list into a forest, keyed by menu id
pub fn menus_to_tree(menus: &[Menu], style: TitleStyle) -> Vec<TreeNode> {
    menus.iter().map(|menu| menu_to_node(menu, style)).collect()
}

/// Every menu id, depth-first, nested children included
pub fn all_menu_ids(menus: &[Menu]) -> Vec<String> {
    let mut ids = Vec::new();
    collect_ids(menus, &mut ids);
    ids
}

fn collect_ids(menus: &[Menu], ids: &mut Vec<String>) {
    for menu in menus {
        ids.push(menu.id.clone());
        collect_ids(&menu.children, ids);
    }
}

/// Menus whose id is in `ids`, flattened depth-first and stripped of children
pub fn find_menus_by_ids(menus: &[Menu], ids: &KeySet) -> Vec<Menu> {
    let mut found = Vec::new();
    collect_matching(menus, ids, &mut found);
    found
}

fn collect_matching(menus: &[Menu], ids: &KeySet, found: &mut Vec<Menu>) {
    for menu in menus {
        if ids.contains(&menu.id) {
            found.push(menu.shallow());
        }
        collect_matching(&menu.children, ids, found);
    }
}

/// Nodes that may parent a new menu: levels 1 and 2, depth-first
pub fn parent_menu_options(forest: &[TreeNode]) -> Vec<MenuParent> {
    let mut options = Vec::new();
    collect_parents(forest, 1, &mut options);
    options
}

fn collect_parents(nodes: &[TreeNode], level: u32, options: &mut Vec<MenuParent>) {
    if level > MAX_PARENT_LEVEL {
        return;
    }
    for node in nodes {
        if node.key.is_empty() {
            continue;
        }
        options.push(MenuParent {
            id: node.key.clone(),
            name: node.title.clone(),
            level,
        });
        collect_parents(&node.children, level + 1, options);
    }
}
