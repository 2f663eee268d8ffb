//! Property tests for check propagation.

use proptest::prelude::*;
use proptest::sample::Index;

use permtree::domain::services::{
    check_state, collect_descendant_keys, find_node, is_consistent, subtree_keys, toggle_check,
    visit,
};
use permtree::{CheckMode, CheckState, KeySet, TreeNode};

use crate::strategies::{forest, keys_of, pick};

/// Subset of the forest's keys chosen by a bit mask
fn subset(forest: &[TreeNode], mask: &[bool]) -> KeySet {
    keys_of(forest)
        .into_iter()
        .zip(mask.iter().cycle())
        .filter(|(_, on)| **on)
        .map(|(key, _)| key)
        .collect()
}

/// Checked set reached by cascade toggles from empty
fn cascade_state(forest: &[TreeNode], picks: &[Index]) -> KeySet {
    let mut checked = KeySet::new();
    for index in picks {
        let key = pick(forest, index);
        if let Some(node) = find_node(forest, &key) {
            checked = toggle_check(forest, &checked, node, CheckMode::Cascade);
        }
    }
    checked
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After every cascade toggle, an internal node is checked
    /// exactly when all of its children are.
    #[test]
    fn property_cascade_keeps_parents_consistent(
        forest in forest(),
        picks in prop::collection::vec(any::<Index>(), 1..16)
    ) {
        let mut checked = KeySet::new();
        for index in &picks {
            let key = pick(&forest, index);
            let node = find_node(&forest, &key).unwrap();
            checked = toggle_check(&forest, &checked, node, CheckMode::Cascade);
            prop_assert!(
                is_consistent(&forest, &checked),
                "inconsistent after toggling {}: {}",
                key,
                checked
            );
        }
    }

    /// PROPERTY: A strict toggle changes the checked set by exactly the toggled key.
    #[test]
    fn property_strict_toggle_changes_one_key(
        forest in forest(),
        mask in prop::collection::vec(any::<bool>(), 1..64),
        index in any::<Index>()
    ) {
        let checked = subset(&forest, &mask);
        let key = pick(&forest, &index);
        let node = find_node(&forest, &key).unwrap();

        let next = toggle_check(&forest, &checked, node, CheckMode::Strict);
        let changed = next.difference(&checked).union(&checked.difference(&next));

        prop_assert_eq!(changed.to_vec(), vec![key]);
    }

    /// PROPERTY: A node is indeterminate iff it is unchecked and some, but
    /// not all, of its descendants are checked.
    #[test]
    fn property_indeterminate_matches_descendant_counts(
        forest in forest(),
        mask in prop::collection::vec(any::<bool>(), 1..64)
    ) {
        let checked = subset(&forest, &mask);
        let mut mismatches = Vec::new();

        visit(&forest, &mut |node, _| {
            let descendants = collect_descendant_keys(node);
            let hits = descendants.intersection_count(&checked);
            let expected = !checked.contains(&node.key) && hits > 0 && hits < descendants.len();
            let actual = check_state(node, &checked) == CheckState::Indeterminate;
            if expected != actual {
                mismatches.push(node.key.clone());
            }
        });

        prop_assert!(mismatches.is_empty(), "wrong state for {:?} with {}", mismatches, checked);
    }

    /// PROPERTY: Toggling a node twice restores the checked set, in strict
    /// mode always and in cascade mode whenever the node's subtree is uniform.
    #[test]
    fn property_double_toggle_is_identity(
        forest in forest(),
        picks in prop::collection::vec(any::<Index>(), 0..12),
        index in any::<Index>(),
        strict in any::<bool>()
    ) {
        let checked = cascade_state(&forest, &picks);

        // Leaves are always uniform, so there is at least one candidate
        let mut candidates = Vec::new();
        visit(&forest, &mut |node, _| {
            let hits = subtree_keys(node).intersection_count(&checked);
            if hits == 0 || hits == subtree_keys(node).len() {
                candidates.push(node.key.clone());
            }
        });
        let key = &candidates[index.index(candidates.len())];
        let node = find_node(&forest, key).unwrap();
        let mode = CheckMode::from_strict(strict);

        let once = toggle_check(&forest, &checked, node, mode);
        let twice = toggle_check(&forest, &once, node, mode);

        prop_assert_eq!(twice, checked);
    }
}
