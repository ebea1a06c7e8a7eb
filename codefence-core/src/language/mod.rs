//! Language profile traits for code detection
//!
//! A profile supplies the per-language heuristics the pipeline runs on every
//! line: a strict high-precision test that opens a code section, a weak
//! continuation test that extends one, and an optional whole-block test for
//! multi-line constructs no single line would reveal (triple-quoted strings
//! being the canonical case).

mod python;

pub use python::PythonProfile;

use crate::error::{Error, Result};
use crate::section::Classification;

/// Minimum run lengths a section must reach to survive merging
///
/// Shorter runs are absorbed into their neighbors. Leading and trailing
/// plain-text sections are exempt; short prose around a paste is normal and
/// must not be swallowed into a fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub(crate) min_code_run: usize,
    pub(crate) min_plain_run: usize,
}

/// Default threshold constants
pub mod defaults {
    /// Minimum consecutive code lines for a code section to stand alone
    pub const MIN_CODE_RUN: usize = 3;

    /// Minimum consecutive plain-text lines for an interior prose section
    pub const MIN_PLAIN_RUN: usize = 2;
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_code_run: defaults::MIN_CODE_RUN,
            min_plain_run: defaults::MIN_PLAIN_RUN,
        }
    }
}

impl Thresholds {
    /// Create a threshold builder
    pub fn builder() -> ThresholdsBuilder {
        ThresholdsBuilder::default()
    }

    /// Minimum code run length
    pub fn min_code_run(&self) -> usize {
        self.min_code_run
    }

    /// Minimum plain-text run length
    pub fn min_plain_run(&self) -> usize {
        self.min_plain_run
    }
}

/// Fluent builder for [`Thresholds`]
#[derive(Debug, Default)]
pub struct ThresholdsBuilder {
    min_code_run: Option<usize>,
    min_plain_run: Option<usize>,
}

impl ThresholdsBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum code run length
    pub fn min_code_run(mut self, lines: usize) -> Self {
        self.min_code_run = Some(lines);
        self
    }

    /// Set the minimum plain-text run length
    pub fn min_plain_run(mut self, lines: usize) -> Self {
        self.min_plain_run = Some(lines);
        self
    }

    /// Build the thresholds, validating both minimums
    pub fn build(self) -> Result<Thresholds> {
        let thresholds = Thresholds {
            min_code_run: self.min_code_run.unwrap_or(defaults::MIN_CODE_RUN),
            min_plain_run: self.min_plain_run.unwrap_or(defaults::MIN_PLAIN_RUN),
        };
        if thresholds.min_code_run == 0 {
            return Err(Error::Configuration(
                "min_code_run must be greater than 0".into(),
            ));
        }
        if thresholds.min_plain_run == 0 {
            return Err(Error::Configuration(
                "min_plain_run must be greater than 0".into(),
            ));
        }
        Ok(thresholds)
    }
}

/// Per-language detection heuristics
///
/// Implementations must be thread-safe; the selector runs one detector per
/// registered profile over the same input.
pub trait LanguageProfile: Send + Sync {
    /// Language identifier, usable directly as a Markdown fence tag
    fn language(&self) -> &'static str;

    /// Run-length minimums the merger applies for this profile
    fn thresholds(&self) -> Thresholds {
        Thresholds::default()
    }

    /// Strict test: does this line alone carry strong syntactic evidence of
    /// code? Must keep a very low false-positive rate, since a hit here is
    /// what opens a code section.
    fn line_is_probably_code(&self, line: &str) -> bool;

    /// Weak test: may this line extend an already-open code section?
    ///
    /// The default accepts blank lines, whitespace-only lines, and lines
    /// indented by at least two spaces. Profiles may widen this.
    fn line_is_plausibly_code(&self, line: &str) -> bool {
        default_plausible(line)
    }

    /// Strict multi-line test over a whole section's text, used by block
    /// promotion. Default: never fires.
    fn block_is_probably_code(&self, _block: &str) -> bool {
        false
    }
}

/// Shared weak-test policy: blank, whitespace-only, or indented lines
pub(crate) fn default_plausible(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with("  ")
}

/// Classify one line given the classification of the line before it
///
/// The strict test is tried first. If it fails and the preceding line was
/// already code, the weak test may extend the run, marked not-probable.
/// Everything else is plain text, which carries no confidence grading.
pub fn classify_line(
    profile: &dyn LanguageProfile,
    previous: Option<Classification>,
    line: &str,
) -> (Classification, bool) {
    if profile.line_is_probably_code(line) {
        (Classification::Code, true)
    } else if previous == Some(Classification::Code) && profile.line_is_plausibly_code(line) {
        (Classification::Code, false)
    } else {
        (Classification::PlainText, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MarkerProfile;

    impl LanguageProfile for MarkerProfile {
        fn language(&self) -> &'static str {
            "marker"
        }

        fn line_is_probably_code(&self, line: &str) -> bool {
            line.contains("code")
        }
    }

    #[test]
    fn test_strict_hit_is_probable() {
        let (classification, probable) = classify_line(&MarkerProfile, None, "some code here");
        assert_eq!(classification, Classification::Code);
        assert!(probable);
    }

    #[test]
    fn test_weak_test_only_extends_code() {
        // Blank line after code continues the run, but only plausibly
        let (classification, probable) =
            classify_line(&MarkerProfile, Some(Classification::Code), "");
        assert_eq!(classification, Classification::Code);
        assert!(!probable);

        // The same blank line after prose stays prose
        let (classification, probable) =
            classify_line(&MarkerProfile, Some(Classification::PlainText), "");
        assert_eq!(classification, Classification::PlainText);
        assert!(probable);
    }

    #[test]
    fn test_first_line_uses_strict_test_only() {
        let (classification, _) = classify_line(&MarkerProfile, None, "    indented");
        assert_eq!(classification, Classification::PlainText);
    }

    #[test]
    fn test_default_plausible_policy() {
        assert!(default_plausible(""));
        assert!(default_plausible("   \t"));
        assert!(default_plausible("  indented by two"));
        assert!(!default_plausible(" one space"));
        assert!(!default_plausible("flush prose"));
    }

    #[test]
    fn test_thresholds_builder_defaults() {
        let t = Thresholds::builder().build().unwrap();
        assert_eq!(t.min_code_run(), defaults::MIN_CODE_RUN);
        assert_eq!(t.min_plain_run(), defaults::MIN_PLAIN_RUN);
    }

    #[test]
    fn test_thresholds_builder_rejects_zero() {
        assert!(Thresholds::builder().min_code_run(0).build().is_err());
        assert!(Thresholds::builder().min_plain_run(0).build().is_err());
    }

    #[test]
    fn test_thresholds_builder_overrides() {
        let t = Thresholds::builder()
            .min_code_run(5)
            .min_plain_run(2)
            .build()
            .unwrap();
        assert_eq!(t.min_code_run(), 5);
        assert_eq!(t.min_plain_run(), 2);
    }
}
