//! Compact summary output formatter

use super::OutputFormatter;
use anyhow::Result;
use codefence_core::DetectionResult;
use std::io::Write;

/// Summary formatter - one line of per-section counts, e.g. `"2p 15c 8p"`,
/// prefixed with the detected language
pub struct SummaryFormatter<W: Write> {
    writer: W,
}

impl<W: Write> SummaryFormatter<W> {
    /// Create a new summary formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for SummaryFormatter<W> {
    fn write_result(&mut self, _input: &str, result: Option<&DetectionResult>) -> Result<()> {
        match result {
            Some(result) => {
                writeln!(self.writer, "{}: {}", result.language(), result.debug())?;
            }
            None => writeln!(self.writer, "no code detected")?,
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codefence_core::detect;

    fn render(input: &str) -> String {
        let result = detect(input);
        let mut buffer = Vec::new();
        SummaryFormatter::new(&mut buffer)
            .write_result(input, result.as_ref())
            .expect("write to buffer");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn test_summary_line() {
        let input = "context line\nmore context\nx = 1\ny = 2\nz = x + y\nclosing words\nfinal words";
        assert_eq!(render(input), "python: 2p 3c 2p\n");
    }

    #[test]
    fn test_no_code_summary() {
        assert_eq!(render("only prose here\nand here"), "no code detected\n");
    }
}
