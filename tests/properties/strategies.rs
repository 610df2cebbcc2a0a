//! Tree generators shared by the property tests.

use proptest::prelude::*;

use treeselect::{NavigatorState, TreeNode};

#[derive(Debug, Clone)]
struct Shape {
    label: String,
    children: Vec<Shape>,
}

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z ]{0,9}").unwrap()
}

fn shape() -> impl Strategy<Value = Shape> {
    let leaf = label().prop_map(|label| Shape {
        label,
        children: Vec::new(),
    });
    leaf.prop_recursive(3, 32, 4, |inner| {
        (label(), proptest::collection::vec(inner, 0..4))
            .prop_map(|(label, children)| Shape { label, children })
    })
}

fn build(shape: Shape, next_id: &mut u64) -> TreeNode {
    let id = *next_id;
    *next_id += 1;
    let children = shape
        .children
        .into_iter()
        .map(|child| build(child, next_id))
        .collect();
    TreeNode::new(id, shape.label, format!("v{id}")).with_children(children)
}

/// A forest with unique ids and unique values (`v<id>`).
pub fn forest() -> impl Strategy<Value = Vec<TreeNode>> {
    proptest::collection::vec(shape(), 0..5).prop_map(|shapes| {
        let mut next_id = 1;
        shapes
            .into_iter()
            .map(|s| build(s, &mut next_id))
            .collect()
    })
}

/// Follow `steps` from the root, descending wherever the picked node has
/// children.
pub fn walk(tree: &[TreeNode], steps: &[usize]) -> NavigatorState {
    let mut state = NavigatorState::reset(tree);
    for step in steps {
        if state.current_level.is_empty() {
            break;
        }
        let node = state.current_level[step % state.current_level.len()].clone();
        state = state.descend(&node);
    }
    state
}

/// Resolve `path` ids from the root, the way a user would click through.
pub fn level_at<'a>(tree: &'a [TreeNode], ids: impl IntoIterator<Item = u64>) -> &'a [TreeNode] {
    let mut level = tree;
    for id in ids {
        let node = level
            .iter()
            .find(|n| n.id == id)
            .expect("path id must exist in its level");
        level = &node.children;
    }
    level
}
