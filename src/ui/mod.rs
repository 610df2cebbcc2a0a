//! Terminal presentation: capabilities, theme tokens, line output, NDJSON
//! events and the interactive picker.

pub mod error;
pub mod json;
pub mod output;
pub mod picker;
pub mod terminal;
pub mod theme;
