//! Output formatting module

use anyhow::Result;
use codefence_core::DetectionResult;

/// Trait for output formatters
///
/// A formatter receives the original input text alongside the detection
/// outcome so passthrough behavior (no code found) can echo the input.
pub trait OutputFormatter {
    /// Format and write one detection outcome
    fn write_result(&mut self, input: &str, result: Option<&DetectionResult>) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod summary;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use summary::SummaryFormatter;
