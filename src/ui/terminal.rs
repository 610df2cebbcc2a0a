use is_terminal::IsTerminal;

use treeselect::config::{ColorMode, OutputConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
}

/// Final rendering choices after config and terminal are reconciled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
    pub unicode: bool,
}

impl OutputStyle {
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }

    pub fn resolve(caps: &TerminalCapabilities, config: &OutputConfig) -> Self {
        let color = match config.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => caps.supports_color,
        };
        Self {
            color,
            unicode: config.unicode && caps.supports_unicode,
        }
    }
}

/// Output stream a style is resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn is_terminal(self) -> bool {
        match self {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }
}

/// Styles for results on stdout and for diagnostics and the picker on stderr.
///
/// Each stream is checked on its own, so `$(treeselect pick)` still draws a
/// colored picker on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    pub stdout: OutputStyle,
    pub stderr: OutputStyle,
}

impl Styles {
    pub fn detect(config: &OutputConfig, json: bool) -> Self {
        Self::resolve(config, json, detect_capabilities)
    }

    fn resolve(
        config: &OutputConfig,
        json: bool,
        detect: impl Fn(Stream) -> TerminalCapabilities,
    ) -> Self {
        // NDJSON on stdout is never styled
        let stdout = if json {
            OutputStyle::plain()
        } else {
            OutputStyle::resolve(&detect(Stream::Stdout), config)
        };
        Self {
            stdout,
            stderr: OutputStyle::resolve(&detect(Stream::Stderr), config),
        }
    }
}

pub fn detect_capabilities(stream: Stream) -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), stream.is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();

    let supports_color = is_tty && !term_is_dumb && !no_color;
    let supports_unicode = !term_is_dumb && unicode_locale(&get_env);

    TerminalCapabilities {
        supports_color,
        supports_unicode,
    }
}

fn unicode_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    match KEYS.iter().find_map(|k| get_env(k)) {
        Some(val) if !val.is_empty() => {
            let v = val.to_lowercase();
            v.contains("utf-8") || v.contains("utf8")
        }
        // No locale set: modern terminals default to UTF-8.
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), is_tty)
    }

    #[test]
    fn detect_respects_no_color() {
        let c = caps(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!c.supports_color);
    }

    #[test]
    fn detect_color_needs_tty() {
        assert!(caps(&[("TERM", "xterm")], true).supports_color);
        assert!(!caps(&[("TERM", "xterm")], false).supports_color);
    }

    #[test]
    fn detect_term_dumb_disables_enhancements() {
        let c = caps(&[("TERM", "dumb")], true);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn detect_non_utf8_locale() {
        let c = caps(&[("LANG", "C"), ("TERM", "xterm")], true);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn style_respects_config_overrides() {
        let c = caps(&[("TERM", "xterm")], false);
        assert!(!c.supports_color);

        let forced = OutputConfig {
            color: ColorMode::Always,
            unicode: false,
        };
        let style = OutputStyle::resolve(&c, &forced);
        assert!(style.color);
        assert!(!style.unicode);

        let auto = OutputStyle::resolve(&c, &OutputConfig::default());
        assert!(!auto.color);
        assert!(auto.unicode);
    }

    #[test]
    fn styles_check_each_stream_separately() {
        let stderr_only = |stream: Stream| caps(&[("TERM", "xterm")], stream == Stream::Stderr);

        let styles = Styles::resolve(&OutputConfig::default(), false, stderr_only);
        assert!(!styles.stdout.color);
        assert!(styles.stderr.color);
    }

    #[test]
    fn styles_keep_json_stdout_plain() {
        let both = |_: Stream| caps(&[("TERM", "xterm")], true);

        let styles = Styles::resolve(&OutputConfig::default(), true, both);
        assert_eq!(styles.stdout, OutputStyle::plain());
        assert!(styles.stderr.color);
    }
}
