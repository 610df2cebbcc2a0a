//! Picker Widget
//!
//! Terminal front end for a `Session`: cursor handling, key mapping and
//! line rendering of the session's `View`.
//!
//! # Module Structure
//!
//! - `menu` - Picker state and action handling
//! - `render` - Frame rendering to plain lines
//! - `input` - Keyboard mapping and the interactive loop

mod input;
mod menu;
mod render;

pub use input::run_interactive;
pub use menu::{Outcome, Picker};
