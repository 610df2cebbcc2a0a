//! Selection state and change notification.
//!
//! The committed `(value, label)` pair is independent of where the navigator
//! is. Empty strings in both fields mean nothing is selected.

use serde::Serialize;

use crate::tree::{find_label, TreeNode};

/// Receiver for selection changes
///
/// Implementations can be:
/// - a closure `FnMut(&str, &str)` supplied by the host
/// - `NoopSink`: silent operation
/// - `RecordingSink`: keeps every change, for tests and scripted hosts
/// - the CLI's NDJSON sink, writing `selection_changed` events
pub trait SelectionSink {
    /// Called with the new value and label, `("", "")` when cleared
    fn on_change(&mut self, value: &str, label: &str);
}

impl<F> SelectionSink for F
where
    F: FnMut(&str, &str),
{
    fn on_change(&mut self, value: &str, label: &str) {
        self(value, label)
    }
}

/// No-op sink for silent operation
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl SelectionSink for NoopSink {
    fn on_change(&mut self, _value: &str, _label: &str) {}
}

/// Sink that records every change in order
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub changes: Vec<(String, String)>,
}

impl SelectionSink for RecordingSink {
    fn on_change(&mut self, value: &str, label: &str) {
        self.changes.push((value.to_string(), label.to_string()));
    }
}

/// The committed selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub value: String,
    pub label: String,
}

impl Selection {
    /// Nothing selected
    pub fn empty() -> Self {
        Self::default()
    }

    /// Adopt an externally supplied value, resolving its label from `root`.
    ///
    /// Unknown values are kept with an empty label. Does not notify.
    pub fn from_value(root: &[TreeNode], value: impl Into<String>) -> Self {
        let value = value.into();
        let label = find_label(root, &value).unwrap_or_default().to_string();
        Self { value, label }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Commit `node` and notify the sink.
    ///
    /// Any node is accepted, including search results whose ancestry differs
    /// from the live navigator path.
    pub fn select(&mut self, node: &TreeNode, sink: &mut dyn SelectionSink) {
        self.value = node.value.clone();
        self.label = node.label.clone();
        sink.on_change(&self.value, &self.label);
    }

    /// Reset to nothing selected and notify the sink with `("", "")`.
    pub fn clear(&mut self, sink: &mut dyn SelectionSink) {
        self.value.clear();
        self.label.clear();
        sink.on_change("", "");
    }

    /// Re-resolve the label against a (possibly new) tree.
    ///
    /// Keeps the current label when the value is no longer present.
    pub fn refresh_label(&mut self, root: &[TreeNode]) {
        if self.value.is_empty() {
            return;
        }
        if let Some(label) = find_label(root, &self.value) {
            self.label = label.to_string();
        }
    }
}
