//! Error types for treeselect
//!
//! Core navigation, search and selection never fail. These errors cover the
//! ambient edges: loading trees and config from disk, and the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treeselect operations
pub type TreeSelectResult<T> = Result<T, TreeSelectError>;

/// Main error type for treeselect operations
#[derive(Error, Debug)]
pub enum TreeSelectError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed outside a tree file
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Tree file (JSON or TOML) could not be parsed
    #[error("invalid tree in {file}: {message}")]
    InvalidTree { file: PathBuf, message: String },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Tree file extension is neither `.json` nor `.toml`
    #[error("unsupported tree format for {file} - expected .json or .toml")]
    UnsupportedFormat { file: PathBuf },

    /// No node carries the requested value
    #[error("no node with value '{value}'")]
    NotFound { value: String },

    /// Interactive picker requested without a terminal
    #[error("stdin is not a terminal - interactive picking needs a TTY")]
    NotInteractive,

    /// Picker was dismissed without choosing
    #[error("selection aborted by user")]
    Aborted,
}
