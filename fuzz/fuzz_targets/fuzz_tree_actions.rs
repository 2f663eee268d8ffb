#![no_main]

use libfuzzer_sys::fuzz_target;
use permtree::domain::services::is_consistent;
use permtree::{NoopEventSink, TreeAction, TreeNode, TreeProps, TreeView};

fn forest() -> Vec<TreeNode> {
    vec![
        TreeNode::new("1", "System").with_children(vec![
            TreeNode::new("1-1", "Users").with_children(vec![
                TreeNode::new("1-1-1", "Create"),
                TreeNode::new("1-1-2", "Remove").with_disabled(),
            ]),
            TreeNode::new("1-2", "Roles"),
        ]),
        TreeNode::new("2", "Monitor").with_child(TreeNode::new("2-1", "Logs")),
    ]
}

fuzz_target!(|data: &[u8]| {
    let Ok(script) = std::str::from_utf8(data) else {
        return;
    };

    let mut view = TreeView::new(TreeProps::new(forest()).with_checkable(true));

    for action in script.lines().filter_map(|line| line.parse::<TreeAction>().ok()) {
        view.handle_action(&action, &mut NoopEventSink);
        // Cascade mode keeps parents in line with their children
        assert!(is_consistent(view.tree_data(), view.checked_keys()));
    }
});
