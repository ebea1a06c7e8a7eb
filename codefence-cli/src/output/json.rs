//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use codefence_core::DetectionResult;
use std::io::Write;

/// JSON formatter - emits the full detection result with per-section
/// metadata, or `null` when no code was found
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    /// Create a pretty-printing JSON formatter
    pub fn pretty(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
        }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn write_result(&mut self, _input: &str, result: Option<&DetectionResult>) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &result)?;
        } else {
            serde_json::to_writer(&mut self.writer, &result)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
