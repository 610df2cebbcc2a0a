use treeselect::TreeSelectError;

use crate::ui::json::{emit_event, events::ErrorEvent};
use crate::ui::terminal::OutputStyle;
use crate::ui::theme::{colors, paint, Icons};

/// Stable machine-readable code for `--json` error events
pub fn error_code(err: &anyhow::Error) -> &'static str {
    match err.downcast_ref::<TreeSelectError>() {
        Some(TreeSelectError::Io(_)) => "IO",
        Some(TreeSelectError::Json(_)) | Some(TreeSelectError::InvalidTree { .. }) => {
            "INVALID_TREE"
        }
        Some(TreeSelectError::InvalidConfig { .. }) => "INVALID_CONFIG",
        Some(TreeSelectError::UnsupportedFormat { .. }) => "UNSUPPORTED_FORMAT",
        Some(TreeSelectError::NotFound { .. }) => "NOT_FOUND",
        Some(TreeSelectError::NotInteractive) => "NOT_INTERACTIVE",
        Some(TreeSelectError::Aborted) => "ABORTED",
        None => "ERROR",
    }
}

fn fix_hint(err: &anyhow::Error) -> Option<&'static str> {
    match err.downcast_ref::<TreeSelectError>()? {
        TreeSelectError::UnsupportedFormat { .. } => {
            Some("Rename the file to .json or .toml, or convert it.")
        }
        TreeSelectError::NotFound { .. } => {
            Some("Run 'treeselect search <QUERY>' to find the right value.")
        }
        TreeSelectError::NotInteractive => {
            Some("Use 'treeselect search' or 'treeselect locate' in scripts.")
        }
        _ => None,
    }
}

/// Render an error for humans, with a fix hint when one is known.
pub fn format_error(err: &anyhow::Error, style: OutputStyle) -> String {
    let icons = Icons::new(style.unicode);
    let mut out = format!("{} {:#}\n", paint(icons.error, colors::ERROR, style.color), err);
    if let Some(hint) = fix_hint(err) {
        out.push_str(&format!("  {}\n", paint(hint, colors::DIM, style.color)));
    }
    out
}

/// Report a failed command: an `error` event with `--json`, otherwise a
/// styled message on stderr.
pub fn print_error(err: &anyhow::Error, command: &str, json: bool, style: OutputStyle) {
    if json {
        let _ = emit_event(&ErrorEvent::new(command, error_code(err), format!("{:#}", err)));
        return;
    }

    eprint!("{}", format_error(err, style));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_has_code_and_hint() {
        let err = anyhow::Error::new(TreeSelectError::NotFound {
            value: "desk".to_string(),
        });

        assert_eq!(error_code(&err), "NOT_FOUND");
        let out = format_error(&err, OutputStyle::plain());
        assert_eq!(
            out,
            "[FAIL] no node with value 'desk'\n  Run 'treeselect search <QUERY>' to find the right value.\n"
        );
    }

    #[test]
    fn foreign_errors_use_generic_code() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(error_code(&err), "ERROR");
        assert_eq!(format_error(&err, OutputStyle::plain()), "[FAIL] boom\n");
    }
}
