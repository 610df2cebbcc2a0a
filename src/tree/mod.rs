//! Tree Model
//!
//! Immutable category tree supplied by the host, plus loaders and the
//! built-in sample data.
//!
//! # Module Structure
//!
//! - `node` - TreeNode, PathItem, ParentInfo and identity helpers
//! - `loader` - JSON/TOML tree files and integrity warnings
//! - `sample` - Built-in product category tree

mod loader;
mod node;
mod sample;

pub use loader::{check_integrity, load_tree, parse_json, parse_toml, TreeWarning};
pub use node::{
    depth_first, find_by_value, find_label, node_count, DepthFirst, ParentInfo,
    PathItem, TreeNode,
};
pub use sample::sample_tree;
