//! NDJSON event types for `--json` output.
//!
//! Every line carries an `event` tag. A command emits `start`, its data
//! events, then `complete` (or `error`).

use serde::Serialize;

use treeselect::tree::{ParentInfo, PathItem, TreeNode};
use treeselect::SearchMatch;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// One global search hit.
#[derive(Debug, Clone, Serialize)]
pub struct MatchEvent<'a> {
    pub event: &'static str,
    pub id: u64,
    pub value: &'a str,
    pub label: &'a str,
    pub parent: Option<&'a ParentInfo>,
}

impl<'a> From<&'a SearchMatch> for MatchEvent<'a> {
    fn from(m: &'a SearchMatch) -> Self {
        Self {
            event: "match",
            id: m.node.id,
            value: &m.node.value,
            label: &m.node.label,
            parent: m.parent.as_ref(),
        }
    }
}

/// Where a value lives in the tree.
#[derive(Debug, Clone, Serialize)]
pub struct LocatedEvent<'a> {
    pub event: &'static str,
    pub value: &'a str,
    pub label: &'a str,
    pub path: &'a [PathItem],
    pub siblings: Vec<PathItem>,
}

impl<'a> LocatedEvent<'a> {
    pub fn new(node: &'a TreeNode, path: &'a [PathItem], level: &[TreeNode]) -> Self {
        Self {
            event: "located",
            value: &node.value,
            label: &node.label,
            path,
            siblings: level.iter().map(TreeNode::path_item).collect(),
        }
    }
}

/// One node of a `tree` listing, in depth-first order.
#[derive(Debug, Clone, Serialize)]
pub struct NodeEvent<'a> {
    pub event: &'static str,
    pub id: u64,
    pub value: &'a str,
    pub label: &'a str,
    pub depth: usize,
    pub leaf: bool,
}

impl<'a> NodeEvent<'a> {
    pub fn new(depth: usize, node: &'a TreeNode) -> Self {
        Self {
            event: "node",
            id: node.id,
            value: &node.value,
            label: &node.label,
            depth,
            leaf: node.is_leaf(),
        }
    }
}

/// The committed selection changed. Empty strings mean it was cleared.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionChangedEvent<'a> {
    pub event: &'static str,
    pub value: &'a str,
    pub label: &'a str,
}

impl<'a> SelectionChangedEvent<'a> {
    pub fn new(value: &'a str, label: &'a str) -> Self {
        Self {
            event: "selection_changed",
            value,
            label,
        }
    }
}

/// Event emitted when a command completes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Event emitted when an error occurs.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub code: &'a str,
    pub message: String,
}

impl<'a> ErrorEvent<'a> {
    pub fn new(command: &'a str, code: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "error",
            command,
            code,
            message: message.into(),
        }
    }
}
