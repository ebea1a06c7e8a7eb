//! Data model for detection results
//!
//! A detection run partitions the input into contiguous runs of lines that
//! share one [`Classification`]. Sections are built once per run and never
//! mutated afterward; every accessor that summarizes a section derives its
//! answer from the stored lines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level classification of a run of lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Natural-language prose
    PlainText,
    /// Source code (probable or plausible lines alike)
    Code,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::PlainText => write!(f, "plain text"),
            Classification::Code => write!(f, "code"),
        }
    }
}

/// One contiguous run of lines sharing a classification
///
/// Lines are stored exactly as they appeared in the input (split on `\n`,
/// empty lines preserved). `line_probability` carries one flag per line:
/// `true` when the line met the strict "probably code" bar, `false` when it
/// was only accepted by the weaker continuation test. The flag is meaningful
/// for code sections; plain-text lines always carry `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedSection {
    classification: Classification,
    lines: Vec<String>,
    line_probability: Vec<bool>,
}

impl DetectedSection {
    /// Create a section from parallel line and probability vectors
    ///
    /// Callers must pass vectors of equal length; this is enforced here so
    /// the invariant holds for every section in circulation.
    pub fn new(
        classification: Classification,
        lines: Vec<String>,
        line_probability: Vec<bool>,
    ) -> Self {
        assert_eq!(
            lines.len(),
            line_probability.len(),
            "every line needs exactly one probability flag"
        );
        Self {
            classification,
            lines,
            line_probability,
        }
    }

    /// Create a section holding a single line
    pub(crate) fn single(classification: Classification, line: &str, probable: bool) -> Self {
        Self {
            classification,
            lines: vec![line.to_string()],
            line_probability: vec![probable],
        }
    }

    /// Append one line to the end of the section
    pub(crate) fn push_line(&mut self, line: &str, probable: bool) {
        self.lines.push(line.to_string());
        self.line_probability.push(probable);
    }

    /// Append another section's lines; both must share a classification
    pub(crate) fn append(&mut self, other: DetectedSection) {
        debug_assert_eq!(self.classification, other.classification);
        self.lines.extend(other.lines);
        self.line_probability.extend(other.line_probability);
    }

    /// The section's classification
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Raw lines in input order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Per-line strict-test flags, parallel to [`lines`](Self::lines)
    pub fn line_probability(&self) -> &[bool] {
        &self.line_probability
    }

    /// Number of lines in the section
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether this section was classified as code
    pub fn is_code(&self) -> bool {
        self.classification == Classification::Code
    }

    /// Whether this section was classified as plain text
    pub fn is_plain_text(&self) -> bool {
        self.classification == Classification::PlainText
    }

    /// Number of lines that met the strict bar
    pub fn probable_lines_of_code(&self) -> usize {
        self.line_probability.iter().filter(|p| **p).count()
    }

    /// Section text: lines joined with newlines, with leading and trailing
    /// blank lines trimmed away
    pub fn text(&self) -> String {
        let first = self
            .lines
            .iter()
            .position(|l| !l.trim().is_empty())
            .unwrap_or(self.lines.len());
        let last = self.lines.iter().rposition(|l| !l.trim().is_empty());
        match last {
            Some(last) => self.lines[first..=last].join("\n"),
            None => String::new(),
        }
    }

    /// Compact summary used in test fixtures: line count plus `c` for code
    /// or `p` for plain text, e.g. `"4c"`
    pub fn debug(&self) -> String {
        let tag = match self.classification {
            Classification::Code => "c",
            Classification::PlainText => "p",
        };
        format!("{}{}", self.lines.len(), tag)
    }
}

/// The outcome of a successful detection run
///
/// `language` is the winning profile's identifier and is usable directly as
/// a fence tag (e.g. ```` ```python ````). Concatenating the sections' lines
/// in order reproduces the input's line sequence exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    language: String,
    sections: Vec<DetectedSection>,
}

impl DetectionResult {
    pub(crate) fn new(language: impl Into<String>, sections: Vec<DetectedSection>) -> Self {
        Self {
            language: language.into(),
            sections,
        }
    }

    /// Identifier of the winning language profile
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Detected sections in input order
    pub fn sections(&self) -> &[DetectedSection] {
        &self.sections
    }

    /// Total lines classified as code across all sections
    pub fn lines_of_code(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.is_code())
            .map(|s| s.line_count())
            .sum()
    }

    /// Total code lines that met the strict bar
    pub fn probable_lines_of_code(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.is_code())
            .map(|s| s.probable_lines_of_code())
            .sum()
    }

    /// Space-joined per-section summaries, e.g. `"2p 15c 8p"`
    pub fn debug(&self) -> String {
        self.sections
            .iter()
            .map(|s| s.debug())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
