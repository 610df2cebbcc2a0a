//! JSON output utilities for CLI commands.
//!
//! - Shared event types for consistent NDJSON output (`events`)
//! - Helpers for writing one event per line
//! - `JsonSink`, a selection sink that streams `selection_changed` events

pub mod events;

use serde::Serialize;
use std::io::{self, Write};

use treeselect::SelectionSink;

use events::SelectionChangedEvent;

/// Emit a typed event as NDJSON to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_typed_event(&mut out, event)
}

/// Write a typed event to a custom writer.
pub fn write_typed_event<T: Serialize, W: Write>(out: &mut W, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Selection sink writing `selection_changed` events to `out`.
///
/// Sinks cannot fail, so the first write error is kept and surfaced by
/// [`JsonSink::finish`].
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(self) -> io::Result<W> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.out),
        }
    }
}

impl<W: Write> SelectionSink for JsonSink<W> {
    fn on_change(&mut self, value: &str, label: &str) {
        if self.error.is_some() {
            return;
        }
        let event = SelectionChangedEvent::new(value, label);
        if let Err(err) = write_typed_event(&mut self.out, &event).and_then(|_| self.out.flush()) {
            self.error = Some(err);
        }
    }
}
