//! TreeNode data structure and identity helpers.

use serde::{Deserialize, Serialize};

/// A category in the tree.
///
/// `id` and `value` are expected to be unique across the whole tree, not just
/// among siblings. Lookups by value take the first depth-first match when that
/// is violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Identity, unique across the tree
    pub id: u64,
    /// Display label, also what search matches against
    pub label: String,
    /// Externally visible selected value
    pub value: String,
    /// Child nodes (empty for leaf nodes)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// One ancestor on the route from the root to the current level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathItem {
    pub id: u64,
    pub label: String,
}

/// The immediate parent of a search match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentInfo {
    pub id: u64,
    pub label: String,
    pub value: String,
}

impl TreeNode {
    /// Create a leaf node
    pub fn new(id: u64, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Append a child, builder style
    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    /// Builder-style replacement of all children
    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    /// Check if this is a leaf node
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Whether descending into this node would show anything
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    pub fn path_item(&self) -> PathItem {
        PathItem {
            id: self.id,
            label: self.label.clone(),
        }
    }

    pub fn parent_info(&self) -> ParentInfo {
        ParentInfo {
            id: self.id,
            label: self.label.clone(),
            value: self.value.clone(),
        }
    }
}

/// Pre-order iterator over a forest, yielding `(depth, node)`.
pub struct DepthFirst<'a> {
    stack: Vec<(usize, &'a TreeNode)>,
}

impl<'a> Iterator for DepthFirst<'a> {
    type Item = (usize, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

/// Walk every node of `roots` depth-first, pre-order, in array order.
pub fn depth_first(roots: &[TreeNode]) -> DepthFirst<'_> {
    DepthFirst {
        stack: roots.iter().rev().map(|n| (0, n)).collect(),
    }
}

/// First node (depth-first) whose value equals `value`.
pub fn find_by_value<'a>(roots: &'a [TreeNode], value: &str) -> Option<&'a TreeNode> {
    depth_first(roots).map(|(_, n)| n).find(|n| n.value == value)
}

/// Label of the first node carrying `value`
pub fn find_label<'a>(roots: &'a [TreeNode], value: &str) -> Option<&'a str> {
    find_by_value(roots, value).map(|n| n.label.as_str())
}

/// Total number of nodes in the forest
pub fn node_count(roots: &[TreeNode]) -> usize {
    depth_first(roots).count()
}
