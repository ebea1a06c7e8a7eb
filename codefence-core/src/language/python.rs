//! Python-specific detection heuristics
//!
//! The strict test fires on strong structural evidence only: statement
//! keywords, definitions, decorators, comments, bracket-only lines, trailing
//! block-opening delimiters, call syntax, assignments, and traceback frames.
//! Keyword matching is boundary-checked explicitly so identifiers that merely
//! contain a keyword ("classroom", "iffy") never count as hits.

use super::{default_plausible, LanguageProfile, Thresholds};
use regex::Regex;
use std::collections::HashSet;

/// Keywords that plausibly open a Python statement
///
/// The pure-operator keywords (`and`, `or`, `not`, `in`, `is`) are left out:
/// they rarely lead a statement and frequently lead English prose.
const STATEMENT_KEYWORDS: &[&str] = &[
    "assert", "async", "await", "break", "class", "continue", "def", "del", "elif", "else",
    "except", "finally", "for", "from", "global", "if", "import", "lambda", "nonlocal", "pass",
    "raise", "return", "try", "while", "with", "yield",
];

/// Characters a wrapped code line commonly ends with: open delimiters,
/// operators, separators, string quotes, digits, and the explicit
/// line-continuation backslash
const CONTINUATION_ENDINGS: &[char] = &[
    '"', '\'', ',', ':', '\\', '(', '[', '{', '+', '-', '*', '/', '%', '=', '<', '>', '|', '&',
    '^', '~',
];

/// Heuristic profile for Python source
#[derive(Debug)]
pub struct PythonProfile {
    thresholds: Thresholds,
    keywords: HashSet<&'static str>,
    strict_patterns: Vec<Regex>,
    triple_quote_open: Regex,
}

impl PythonProfile {
    /// Create a Python profile with the default run-length thresholds
    pub fn new() -> Self {
        Self::with_thresholds(Thresholds::default())
    }

    /// Create a Python profile with custom run-length thresholds
    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        let strict_patterns = [
            // Name definitions: `def name(`, `class Name:`
            r"^\s*(?:def|class)\s+[A-Za-z_]\w*",
            // Decorators
            r"^\s*@[A-Za-z_][\w.]*",
            // Comments
            r"^\s*#",
            // Lines made of nothing but brackets, commas, and whitespace
            r"^[\s()\[\]{},]*[()\[\]{}][\s()\[\]{},]*$",
            // Trailing block-opening delimiter
            r"[:(\[{]\s*$",
            // A call standing alone on its line: `print(x)`, `obj.method(1, 2)`
            r"^\s*[A-Za-z_][\w.]*\(.*\)\s*$",
            // A method call anywhere: `.append(`
            r"\.[A-Za-z_]\w*\(",
            // Assignment to a name, attribute, or subscript; augmented forms
            // included, comparisons excluded
            r#"^\s*[A-Za-z_][\w.\[\]"']*\s*(?:[-+*/%@&|^]|//|\*\*|>>|<<)?=(?:[^=]|$)"#,
            // Traceback header, frame lines, and the terminal exception line
            r"^Traceback \(most recent call last\):",
            r#"^\s*File "[^"]*", line \d+"#,
            r"^[A-Za-z_][\w.]*(?:Error|Exception)\b",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("hard-coded pattern should compile"))
        .collect();

        let triple_quote_open =
            Regex::new(r#"^(?:[A-Za-z_][\w.\[\]]*\s*=\s*)?[rbfuRBFU]{0,2}("""|''')"#)
                .expect("hard-coded pattern should compile");

        Self {
            thresholds,
            keywords: STATEMENT_KEYWORDS.iter().copied().collect(),
            strict_patterns,
            triple_quote_open,
        }
    }

    /// Whether the line opens with a statement keyword at a word boundary
    ///
    /// The leading identifier is extracted and compared against the keyword
    /// set, so a match is only accepted when the keyword is followed by a
    /// non-identifier character or end of line.
    fn starts_with_keyword(&self, line: &str) -> bool {
        let trimmed = line.trim_start();
        let end = trimmed
            .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
            .unwrap_or(trimmed.len());
        !trimmed.is_empty() && self.keywords.contains(&trimmed[..end])
    }
}

impl Default for PythonProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProfile for PythonProfile {
    fn language(&self) -> &'static str {
        "python"
    }

    fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    fn line_is_probably_code(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        self.starts_with_keyword(line)
            || self.strict_patterns.iter().any(|p| p.is_match(line))
    }

    fn line_is_plausibly_code(&self, line: &str) -> bool {
        if default_plausible(line) {
            return true;
        }
        let trimmed = line.trim_end();
        let mut chars = trimmed.chars().rev();
        match chars.next() {
            Some(last) if last.is_ascii_digit() || CONTINUATION_ENDINGS.contains(&last) => {
                // An escaped quote is part of a string literal's content, not
                // an unterminated string spilling onto the next line
                !((last == '"' || last == '\'') && chars.next() == Some('\\'))
            }
            _ => false,
        }
    }

    fn block_is_probably_code(&self, block: &str) -> bool {
        let trimmed = block.trim();
        if trimmed.lines().count() < 2 {
            return false;
        }

        // A standalone literal: opens and closes inside the block
        if let Some(open) = self.triple_quote_open.captures(trimmed) {
            let delimiter = open.get(1).expect("capture group 1 always present");
            if trimmed.ends_with(delimiter.as_str()) && trimmed.len() >= delimiter.end() + 3 {
                return true;
            }
        }

        // The tail of a literal whose opening delimiter was pulled into the
        // preceding code section by the continuation test: the block's last
        // line is nothing but the closing delimiter
        matches!(
            trimmed.lines().last().map(str::trim),
            Some("\"\"\"") | Some("'''")
        )
    }
}
