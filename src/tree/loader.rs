//! Tree loading from JSON or TOML files.
//!
//! JSON files hold a bare array of nodes. TOML files hold `[[nodes]]` tables
//! with nested `[[nodes.children]]`. Integrity problems (duplicate ids or
//! values) are reported as warnings and never fail the load.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{TreeSelectError, TreeSelectResult};

use super::node::{depth_first, TreeNode};

/// Non-fatal tree integrity warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeWarning {
    /// Two nodes share an id
    DuplicateId {
        id: u64,
        first_label: String,
        label: String,
    },
    /// Two nodes share a value; lookups resolve to the first one
    DuplicateValue {
        value: String,
        first_label: String,
        label: String,
    },
}

impl fmt::Display for TreeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeWarning::DuplicateId {
                id,
                first_label,
                label,
            } => write!(
                f,
                "duplicate id {} on '{}' (first used by '{}')",
                id, label, first_label
            ),
            TreeWarning::DuplicateValue {
                value,
                first_label,
                label,
            } => write!(
                f,
                "duplicate value '{}' on '{}' (lookups resolve to '{}')",
                value, label, first_label
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TomlTree {
    #[serde(default)]
    nodes: Vec<TreeNode>,
}

/// Load a tree from disk, choosing the parser by file extension.
pub fn load_tree(path: &Path) -> TreeSelectResult<(Vec<TreeNode>, Vec<TreeWarning>)> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let invalid = |message: String| TreeSelectError::InvalidTree {
        file: path.to_path_buf(),
        message,
    };

    let roots = match ext.as_deref() {
        Some("json") => {
            parse_json(&fs::read_to_string(path)?).map_err(|e| invalid(e.to_string()))?
        }
        Some("toml") => {
            parse_toml(&fs::read_to_string(path)?).map_err(|e| invalid(e.to_string()))?
        }
        _ => {
            return Err(TreeSelectError::UnsupportedFormat {
                file: path.to_path_buf(),
            })
        }
    };

    let warnings = check_integrity(&roots);
    debug!(
        path = %path.display(),
        roots = roots.len(),
        warnings = warnings.len(),
        "loaded tree"
    );
    Ok((roots, warnings))
}

/// Parse a JSON array of nodes
pub fn parse_json(content: &str) -> Result<Vec<TreeNode>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse a TOML document with a top-level `nodes` array
pub fn parse_toml(content: &str) -> Result<Vec<TreeNode>, toml::de::Error> {
    let tree: TomlTree = toml::from_str(content)?;
    Ok(tree.nodes)
}

/// Report ids and values that appear more than once.
pub fn check_integrity(roots: &[TreeNode]) -> Vec<TreeWarning> {
    let mut ids: HashMap<u64, &str> = HashMap::new();
    let mut values: HashMap<&str, &str> = HashMap::new();
    let mut warnings = Vec::new();

    for (_, node) in depth_first(roots) {
        if let Some(first) = ids.get(&node.id) {
            warnings.push(TreeWarning::DuplicateId {
                id: node.id,
                first_label: first.to_string(),
                label: node.label.clone(),
            });
        } else {
            ids.insert(node.id, &node.label);
        }

        if let Some(first) = values.get(node.value.as_str()) {
            warnings.push(TreeWarning::DuplicateValue {
                value: node.value.clone(),
                first_label: first.to_string(),
                label: node.label.clone(),
            });
        } else {
            values.insert(&node.value, &node.label);
        }
    }

    warnings
}
