//! Property tests for selection and the session lifecycle.

use proptest::prelude::*;

use treeselect::tree::depth_first;
use treeselect::{RecordingSink, Session};

use super::strategies::forest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: choosing a node reads back as its pair; clearing reads back empty.
    #[test]
    fn property_choose_then_clear(tree in forest(), pick in any::<usize>()) {
        let nodes: Vec<_> = depth_first(&tree).map(|(_, n)| n.clone()).collect();
        if nodes.is_empty() {
            return Ok(());
        }
        let node = &nodes[pick % nodes.len()];

        let mut session = Session::with_sink(tree.clone(), RecordingSink::default());
        session.open();
        session.choose(node);

        prop_assert!(!session.is_open());
        prop_assert_eq!(&session.selection().value, &node.value);
        prop_assert_eq!(&session.selection().label, &node.label);

        session.clear();
        prop_assert_eq!(session.selection().value.as_str(), "");
        prop_assert_eq!(session.selection().label.as_str(), "");
        prop_assert_eq!(session.sink().changes.len(), 2);
    }

    /// PROPERTY: reopening on a selection shows the level that holds it.
    #[test]
    fn property_open_positions_on_selection(tree in forest(), pick in any::<usize>()) {
        let nodes: Vec<_> = depth_first(&tree).map(|(_, n)| n.clone()).collect();
        if nodes.is_empty() {
            return Ok(());
        }
        let node = &nodes[pick % nodes.len()];

        let mut session = Session::new(tree.clone()).with_value(node.value.clone());
        session.open();

        let view = session.view();
        prop_assert!(view.items.iter().any(|item| item.node().id == node.id));
    }
}
