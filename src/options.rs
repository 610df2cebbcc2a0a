//! Presentation options handed to renderers.

use serde::{Deserialize, Serialize};

/// Text shown around the selector.
///
/// A closed, typed set of settings; renderers read only these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSelectOptions {
    /// Heading above the control
    #[serde(default = "default_title")]
    pub title: String,

    /// Shown in the trigger when nothing is selected
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Hint inside the empty search box
    #[serde(default = "default_search_placeholder")]
    pub search_placeholder: String,

    /// Shown when the displayed list is empty
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

impl Default for TreeSelectOptions {
    fn default() -> Self {
        Self {
            title: default_title(),
            placeholder: default_placeholder(),
            search_placeholder: default_search_placeholder(),
            empty_message: default_empty_message(),
        }
    }
}

impl TreeSelectOptions {
    /// Trigger text for the current selection label
    pub fn trigger_text<'a>(&'a self, label: &'a str) -> &'a str {
        if label.is_empty() {
            &self.placeholder
        } else {
            label
        }
    }
}

fn default_title() -> String {
    "Categories".to_string()
}

fn default_placeholder() -> String {
    "Select a category".to_string()
}

fn default_search_placeholder() -> String {
    "Search...".to_string()
}

fn default_empty_message() -> String {
    "No matching items".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_text_falls_back_to_placeholder() {
        let options = TreeSelectOptions::default();
        assert_eq!(options.trigger_text(""), "Select a category");
        assert_eq!(options.trigger_text("Shoes"), "Shoes");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let options: TreeSelectOptions = toml::from_str(r#"title = "Departments""#).unwrap();
        assert_eq!(options.title, "Departments");
        assert_eq!(options.empty_message, "No matching items");
    }
}
