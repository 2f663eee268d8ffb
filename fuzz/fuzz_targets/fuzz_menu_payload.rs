#![no_main]

use libfuzzer_sys::fuzz_target;
use permtree::application::menus_to_tree;
use permtree::domain::entities::validate_forest;
use permtree::{Menu, TitleStyle, TreeProps, TreeView};

fuzz_target!(|data: &[u8]| {
    // Arbitrary menu payloads must either be rejected or render
    let Ok(menus) = serde_json::from_slice::<Vec<Menu>>(data) else {
        return;
    };
    let forest = menus_to_tree(&menus, TitleStyle::WithType);
    if validate_forest(&forest).is_err() {
        return;
    }
    let view = TreeView::new(TreeProps::new(forest).with_default_expand_all(true));
    let _ = view.rows();
});
