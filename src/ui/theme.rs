use crossterm::style::{Color, Stylize};

/// Design tokens for the treeselect terminal UI.
///
/// All icons used by renderers are sourced from this module.
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const CURSOR: &str = "❯";
    pub const BRANCH: &str = "›";
    pub const CRUMB: &str = "›";
    pub const SEARCH: &str = "⌕";
    pub const RULE: &str = "─";
}

pub mod icons_ascii {
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const CURSOR: &str = ">";
    pub const BRANCH: &str = ">";
    pub const CRUMB: &str = ">";
    pub const SEARCH: &str = "/";
    pub const RULE: &str = "-";
}

/// Icon set picked once per run from the unicode capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub error: &'static str,
    pub warning: &'static str,
    pub cursor: &'static str,
    pub branch: &'static str,
    pub crumb: &'static str,
    pub search: &'static str,
    pub rule: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                error: icons::ERROR,
                warning: icons::WARNING,
                cursor: icons::CURSOR,
                branch: icons::BRANCH,
                crumb: icons::CRUMB,
                search: icons::SEARCH,
                rule: icons::RULE,
            }
        } else {
            Self {
                error: icons_ascii::ERROR,
                warning: icons_ascii::WARNING,
                cursor: icons_ascii::CURSOR,
                branch: icons_ascii::BRANCH,
                crumb: icons_ascii::CRUMB,
                search: icons_ascii::SEARCH,
                rule: icons_ascii::RULE,
            }
        }
    }
}

/// Wrap `text` in `color` when color output is enabled.
pub fn paint(text: &str, color: Color, enabled: bool) -> String {
    if enabled {
        format!("{}", text.with(color))
    } else {
        text.to_string()
    }
}

/// Bold `text` when color output is enabled.
pub fn strong(text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}", text.bold())
    } else {
        text.to_string()
    }
}
