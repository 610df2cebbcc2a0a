//! Property tests for global search.

use std::collections::HashMap;

use proptest::prelude::*;

use treeselect::tree::{depth_first, TreeNode};
use treeselect::{project, search, NavigatorState};

use super::strategies::{forest, walk};

fn parents(tree: &[TreeNode]) -> HashMap<u64, u64> {
    depth_first(tree)
        .flat_map(|(_, node)| node.children.iter().map(move |c| (c.id, node.id)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the empty query matches nothing.
    #[test]
    fn property_empty_query_is_empty(tree in forest()) {
        prop_assert!(search(&tree, "").is_empty());
    }

    /// PROPERTY: a node is returned iff its label contains the query, in pre-order.
    #[test]
    fn property_search_is_complete_and_ordered(
        tree in forest(),
        query in "[A-Za-z]{1,2}",
    ) {
        let needle = query.to_lowercase();
        let expected: Vec<u64> = depth_first(&tree)
            .map(|(_, n)| n)
            .filter(|n| n.label.to_lowercase().contains(&needle))
            .map(|n| n.id)
            .collect();
        let actual: Vec<u64> = search(&tree, &query).iter().map(|m| m.node.id).collect();

        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: every match names its real immediate parent.
    #[test]
    fn property_match_parent_is_immediate(tree in forest(), query in "[a-z]") {
        let parent_of = parents(&tree);
        for m in search(&tree, &query) {
            prop_assert_eq!(m.parent.map(|p| p.id), parent_of.get(&m.node.id).copied());
        }
    }

    /// PROPERTY: searching ignores where the navigator is.
    #[test]
    fn property_search_view_ignores_position(
        tree in forest(),
        steps in proptest::collection::vec(any::<usize>(), 0..6),
        query in "[a-z]",
    ) {
        let deep = walk(&tree, &steps);
        let at_root = project(&NavigatorState::reset(&tree), &query, &tree);
        let nested = project(&deep, &query, &tree);

        prop_assert_eq!(at_root.items, nested.items);
        prop_assert_eq!(nested.breadcrumbs, deep.path);
    }
}
