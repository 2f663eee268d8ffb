//! Tree view properties

use crate::domain::entities::TreeNode;
use crate::domain::value_objects::{CheckMode, KeySet, SelectMode};

/// Construction-time configuration of a tree view
///
/// For each of the three key-set axes, setting `*_keys` makes the caller the
/// owner of that axis (controlled); leaving it `None` lets the view own it,
/// seeded once from the matching `default_*_keys`.
#[derive(Debug, Clone)]
pub struct TreeProps {
    pub tree_data: Vec<TreeNode>,
    pub checkable: bool,
    pub selectable: bool,
    pub deletable: bool,
    pub check_strictly: bool,
    pub multiple: bool,
    pub default_expand_all: bool,
    pub default_expanded_keys: KeySet,
    pub default_checked_keys: KeySet,
    pub default_selected_keys: KeySet,
    pub expanded_keys: Option<KeySet>,
    pub checked_keys: Option<KeySet>,
    pub selected_keys: Option<KeySet>,
}

impl Default for TreeProps {
    fn default() -> Self {
        Self {
            tree_data: Vec::new(),
            checkable: false,
            selectable: true,
            deletable: false,
            check_strictly: false,
            multiple: false,
            default_expand_all: false,
            default_expanded_keys: KeySet::new(),
            default_checked_keys: KeySet::new(),
            default_selected_keys: KeySet::new(),
            expanded_keys: None,
            checked_keys: None,
            selected_keys: None,
        }
    }
}

impl TreeProps {
    pub fn new(tree_data: Vec<TreeNode>) -> Self {
        Self {
            tree_data,
            ..Self::default()
        }
    }

    pub fn with_checkable(mut self, checkable: bool) -> Self {
        self.checkable = checkable;
        self
    }

    pub fn with_selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn with_deletable(mut self, deletable: bool) -> Self {
        self.deletable = deletable;
        self
    }

    pub fn with_check_strictly(mut self, check_strictly: bool) -> Self {
        self.check_strictly = check_strictly;
        self
    }

    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn with_default_expand_all(mut self, expand_all: bool) -> Self {
        self.default_expand_all = expand_all;
        self
    }

    pub fn with_default_expanded_keys(mut self, keys: KeySet) -> Self {
        self.default_expanded_keys = keys;
        self
    }

    pub fn with_default_checked_keys(mut self, keys: KeySet) -> Self {
        self.default_checked_keys = keys;
        self
    }

    pub fn with_default_selected_keys(mut self, keys: KeySet) -> Self {
        self.default_selected_keys = keys;
        self
    }

    /// Take control of the expanded axis
    pub fn with_expanded_keys(mut self, keys: KeySet) -> Self {
        self.expanded_keys = Some(keys);
        self
    }

    /// Take control of the checked axis
    pub fn with_checked_keys(mut self, keys: KeySet) -> Self {
        self.checked_keys = Some(keys);
        self
    }

    /// Take control of the selected axis
    pub fn with_selected_keys(mut self, keys: KeySet) -> Self {
        self.selected_keys = Some(keys);
        self
    }

    pub fn check_mode(&self) -> CheckMode {
        CheckMode::from_strict(self.check_strictly)
    }

    pub fn select_mode(&self) -> SelectMode {
        SelectMode::from_multiple(self.multiple)
    }
}
