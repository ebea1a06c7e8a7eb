//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use codefence_core::DetectionResult;
use std::io::Write;

/// Markdown formatter - wraps detected code sections in fenced blocks
/// tagged with the winning language, leaving prose untouched
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn write_result(&mut self, input: &str, result: Option<&DetectionResult>) -> Result<()> {
        let Some(result) = result else {
            // Nothing detected: echo the message unchanged
            writeln!(self.writer, "{}", input.trim_end_matches('\n'))?;
            self.writer.flush()?;
            return Ok(());
        };

        for section in result.sections() {
            let text = section.text();
            if section.is_code() {
                writeln!(self.writer, "```{}", result.language())?;
                writeln!(self.writer, "{text}")?;
                writeln!(self.writer, "```")?;
            } else if !text.is_empty() {
                writeln!(self.writer, "{text}")?;
            }
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
        MarkdownFormatter::new(&mut buffer)
            .write_result(input, result.as_ref())
            .expect("write to buffer");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn test_code_sections_are_fenced() {
        let input = "please help\nwith this error\ndef f():\n    return 1\nprint(f())\nthanks a lot\nreally appreciated";
        let output = render(input);
        assert!(output.contains("```python\ndef f():\n    return 1\nprint(f())\n```\n"));
        assert!(output.starts_with("please help\nwith this error\n"));
        assert!(output.ends_with("thanks a lot\nreally appreciated\n"));
    }

    #[test]
    fn test_no_code_passes_through() {
        let input = "just words\nnothing else";
        assert_eq!(render(input), "just words\nnothing else\n");
    }
}
