//! Property tests for the tree view component.

use proptest::prelude::*;
use proptest::sample::Index;

use permtree::domain::services::{find_node, is_consistent, subtree_keys};
use permtree::{KeySet, NoopEventSink, TreeAction, TreeEvent, TreeProps, TreeView};

use crate::strategies::{bind, forest, keys_of, kinds, pick};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Deleting a node removes it from the forest and removes its
    /// whole subtree from every key set.
    #[test]
    fn property_cascade_delete_is_complete(
        forest in forest(),
        script in kinds(),
        victim in any::<Index>(),
        multiple in any::<bool>()
    ) {
        let props = TreeProps::new(forest.clone())
            .with_checkable(true)
            .with_deletable(true)
            .with_multiple(multiple)
            .with_default_expand_all(true);
        let mut view = TreeView::new(props);
        let mut events: Vec<TreeEvent> = Vec::new();

        for (kind, index) in &script {
            view.handle_action(&bind(&forest, *kind, index), &mut events);
        }

        let key = pick(&forest, &victim);
        let removed = subtree_keys(find_node(&forest, &key).unwrap());
        let event = view.handle_action(&TreeAction::Delete(key.clone()), &mut events);

        prop_assert!(matches!(event, Some(TreeEvent::Deleted { .. })), "expected Deleted event");
        prop_assert!(find_node(view.tree_data(), &key).is_none());
        for set in [view.expanded_keys(), view.checked_keys(), view.selected_keys()] {
            prop_assert_eq!(set.intersection_count(&removed), 0, "{} still holds part of {}", set, removed);
        }
    }

    /// PROPERTY: A controlled checked set is never changed by the view,
    /// while check events still report the would-be set.
    #[test]
    fn property_controlled_checked_is_not_mutated(
        forest in forest(),
        mask in prop::collection::vec(any::<bool>(), 1..64),
        script in kinds()
    ) {
        let supplied: KeySet = keys_of(&forest)
            .into_iter()
            .zip(mask.iter().cycle())
            .filter(|(_, on)| **on)
            .map(|(key, _)| key)
            .collect();
        let props = TreeProps::new(forest.clone())
            .with_checkable(true)
            .with_checked_keys(supplied.clone());
        let mut view = TreeView::new(props);

        for (kind, index) in &script {
            let event = view.handle_action(&bind(&forest, *kind, index), &mut NoopEventSink);
            prop_assert_eq!(view.checked_keys(), &supplied);
            if let Some(TreeEvent::Checked { checked_keys, node, .. }) = event {
                // The reported set always differs in the toggled node's state
                prop_assert_ne!(checked_keys.contains(&node.key), supplied.contains(&node.key));
            }
        }
    }

    /// PROPERTY: Cascade toggles through the view keep every parent
    /// consistent with its children, disabled children included, and a
    /// disabled node never reports or changes a check.
    #[test]
    fn property_view_cascade_counts_disabled_children(
        forest in forest(),
        picks in prop::collection::vec(any::<Index>(), 1..16)
    ) {
        let props = TreeProps::new(forest.clone()).with_checkable(true);
        let mut view = TreeView::new(props);

        for index in &picks {
            let key = pick(&forest, index);
            let disabled = find_node(&forest, &key).unwrap().disabled;
            let before = view.checked_keys().clone();

            let event = view.handle_action(&TreeAction::ToggleCheck(key.clone()), &mut NoopEventSink);

            if disabled {
                prop_assert!(event.is_none(), "disabled {} reported {:?}", key, event);
                prop_assert_eq!(view.checked_keys(), &before);
            } else {
                prop_assert!(matches!(event, Some(TreeEvent::Checked { .. })), "expected Checked event");
            }
            prop_assert!(
                is_consistent(&forest, view.checked_keys()),
                "inconsistent after toggling {}: {}",
                key,
                view.checked_keys()
            );
        }
    }
}
