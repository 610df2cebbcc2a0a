//! Property tests for navigator transitions and `locate`.

use proptest::prelude::*;

use treeselect::tree::depth_first;
use treeselect::{locate, NavigatorState};

use super::strategies::{forest, level_at, walk};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: walking `locate`'s path from the root reaches a level holding the node.
    #[test]
    fn property_locate_reaches_node(tree in forest()) {
        for (_, node) in depth_first(&tree) {
            let located = locate(&tree, &node.value).expect("every value is locatable");
            let level = level_at(&tree, located.path.iter().map(|p| p.id));

            prop_assert_eq!(level, located.level.as_slice());
            prop_assert!(level.iter().any(|n| n.id == node.id));
        }
    }

    /// PROPERTY: descending into a node with children and ascending restores the state.
    #[test]
    fn property_descend_then_ascend_round_trips(
        tree in forest(),
        steps in proptest::collection::vec(any::<usize>(), 0..6),
        pick in any::<usize>(),
    ) {
        let state = walk(&tree, &steps);
        let branches: Vec<_> = state
            .current_level
            .iter()
            .filter(|n| n.has_children())
            .cloned()
            .collect();
        if branches.is_empty() {
            return Ok(());
        }

        let node = &branches[pick % branches.len()];
        let back = state.clone().descend(node).ascend_one(&tree);
        prop_assert_eq!(back, state);
    }

    /// PROPERTY: the current level always matches the path walked from the root.
    #[test]
    fn property_level_matches_path(
        tree in forest(),
        steps in proptest::collection::vec(any::<usize>(), 0..6),
    ) {
        let state = walk(&tree, &steps);
        let level = level_at(&tree, state.path.iter().map(|p| p.id));
        prop_assert_eq!(level, state.current_level.as_slice());
    }

    /// PROPERTY: jumping to the last breadcrumb, or past it, is a no-op.
    #[test]
    fn property_ascend_to_last_is_noop(
        tree in forest(),
        steps in proptest::collection::vec(any::<usize>(), 0..6),
        extra in 0usize..4,
    ) {
        let state = walk(&tree, &steps);
        let index = state.path.len().saturating_sub(1) + extra;
        prop_assert_eq!(state.clone().ascend_to(&tree, index), state);
    }

    /// PROPERTY: `ascend_to(i)` keeps exactly the first `i + 1` breadcrumbs.
    #[test]
    fn property_ascend_to_keeps_prefix(
        tree in forest(),
        steps in proptest::collection::vec(any::<usize>(), 1..6),
        pick in any::<usize>(),
    ) {
        let state = walk(&tree, &steps);
        if state.path.len() < 2 {
            return Ok(());
        }

        let index = pick % (state.path.len() - 1);
        let jumped = state.clone().ascend_to(&tree, index);

        prop_assert_eq!(&jumped.path[..], &state.path[..=index]);
        let level = level_at(&tree, jumped.path.iter().map(|p| p.id));
        prop_assert_eq!(level, jumped.current_level.as_slice());
    }

    /// PROPERTY: a missing value never locates and syncs to the root.
    #[test]
    fn property_missing_value_syncs_to_root(tree in forest()) {
        prop_assert!(locate(&tree, "not-a-value").is_none());
        prop_assert_eq!(
            NavigatorState::sync_to(&tree, "not-a-value"),
            NavigatorState::reset(&tree)
        );
    }
}
