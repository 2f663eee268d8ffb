//! Staff permission editor
//!
//! The checked axis is controlled by the staff's menu list: every check event
//! rebuilds the list from the available menus and feeds the ids back.

use tracing::debug;

use crate::application::tree_view::{TreeAction, TreeProps, TreeView};
use crate::domain::entities::{Menu, StaffForm};
use crate::domain::ports::{TreeEvent, TreeEventSink};
use crate::domain::value_objects::KeySet;
use crate::error::PermtreeResult;

use super::convert::{all_menu_ids, find_menus_by_ids, menus_to_tree, TitleStyle};

#[derive(Debug, Clone)]
pub struct StaffPermissions {
    available: Vec<Menu>,
    form: StaffForm,
    view: TreeView,
}

impl StaffPermissions {
    pub fn new(available: Vec<Menu>, form: StaffForm) -> Self {
        let checked = granted_ids(&form.menus);
        let props = TreeProps::new(menus_to_tree(&available, TitleStyle::NameOnly))
            .with_checkable(true)
            .with_check_strictly(true)
            .with_default_expand_all(true)
            .with_checked_keys(checked);
        Self {
            available,
            form,
            view: TreeView::new(props),
        }
    }

    pub fn view(&self) -> &TreeView {
        &self.view
    }

    pub fn form(&self) -> &StaffForm {
        &self.form
    }

    pub fn into_form(self) -> StaffForm {
        self.form
    }

    /// Menus currently granted, flattened
    pub fn menus(&self) -> &[Menu] {
        &self.form.menus
    }

    /// Toggle one menu permission
    pub fn toggle(&mut self, key: &str, sink: &mut dyn TreeEventSink) -> Option<TreeEvent> {
        let event = self
            .view
            .handle_action(&TreeAction::ToggleCheck(key.to_string()), sink)?;

        if let TreeEvent::Checked { checked_keys, .. } = &event {
            self.form.menus = find_menus_by_ids(&self.available, checked_keys);
            self.view.sync_checked_keys(granted_ids(&self.form.menus));
            debug!(
                user = %self.form.user_id,
                granted = self.form.menus.len(),
                "staff permissions updated"
            );
        }
        Some(event)
    }

    pub fn validate(&self) -> PermtreeResult<()> {
        self.form.validate()
    }
}

fn granted_ids(menus: &[Menu]) -> KeySet {
    all_menu_ids(menus).into_iter().collect()
}
