//! Configuration module for treeselect
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREESELECT_*)
//! 3. Explicit `--config` file, else `./treeselect.toml`
//! 4. User config (<config dir>/treeselect/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{discover, ConfigWarning, LoadedConfig, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, OutputConfig, TreeConfig};
