//! Detectors and the language selector
//!
//! [`LanguageDetector`] binds one profile to one input text and memoizes the
//! full pipeline result; [`CodeDetector`] runs every registered profile over
//! the same input and keeps the best answer. The pipeline itself is a pure
//! function of profile and text; the detector's `OnceLock` is an explicit
//! compute-once wrapper around it, needed because the selector consults both
//! line totals of every candidate and must not classify twice.

use std::sync::{Arc, OnceLock};

use crate::builder::build_sections;
use crate::language::{LanguageProfile, PythonProfile};
use crate::merger::merge_sections;
use crate::promoter::promote_blocks;
use crate::section::{DetectedSection, DetectionResult};

/// Run the full detection pipeline for one profile over one text
pub(crate) fn run_pipeline(profile: &dyn LanguageProfile, text: &str) -> Vec<DetectedSection> {
    let sections = build_sections(profile, text);
    let sections = merge_sections(sections, profile.thresholds());
    promote_blocks(profile, sections)
}

/// One language profile applied to one input text, with a memoized result
///
/// Value-like: construct one detector per input. The cache is private to the
/// instance, so independent detectors are freely usable across threads.
pub struct LanguageDetector {
    profile: Arc<dyn LanguageProfile>,
    text: String,
    sections: OnceLock<Vec<DetectedSection>>,
}

impl LanguageDetector {
    /// Bind a profile to an input text
    pub fn new(profile: Arc<dyn LanguageProfile>, text: impl Into<String>) -> Self {
        Self {
            profile,
            text: text.into(),
            sections: OnceLock::new(),
        }
    }

    /// The profile's language identifier
    pub fn language(&self) -> &'static str {
        self.profile.language()
    }

    /// The detected sections, computed on first access and cached
    pub fn sections(&self) -> &[DetectedSection] {
        self.sections
            .get_or_init(|| run_pipeline(self.profile.as_ref(), &self.text))
    }

    /// Total lines classified as code, probable and plausible alike
    pub fn lines_of_code(&self) -> usize {
        self.sections()
            .iter()
            .filter(|s| s.is_code())
            .map(|s| s.line_count())
            .sum()
    }

    /// Code lines that met the strict bar
    pub fn probable_lines_of_code(&self) -> usize {
        self.sections()
            .iter()
            .filter(|s| s.is_code())
            .map(|s| s.probable_lines_of_code())
            .sum()
    }

    /// Space-joined per-section summaries, e.g. `"2p 15c 8p"`
    pub fn debug(&self) -> String {
        self.sections()
            .iter()
            .map(|s| s.debug())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The selector: runs every registered profile and keeps the best result
///
/// Ranking prefers the most probable lines of code, then the most total
/// lines of code. A winner with zero code lines means no code was found.
pub struct CodeDetector {
    profiles: Vec<Arc<dyn LanguageProfile>>,
}

impl CodeDetector {
    /// Create a detector with the default profile registry
    pub fn new() -> Self {
        Self {
            profiles: vec![Arc::new(PythonProfile::new())],
        }
    }

    /// Create a detector over a custom profile registry
    pub fn with_profiles(profiles: Vec<Arc<dyn LanguageProfile>>) -> Self {
        Self { profiles }
    }

    /// Detect code in `text`, returning `None` when no profile found any
    pub fn detect(&self, text: &str) -> Option<DetectionResult> {
        let best = self
            .profiles
            .iter()
            .map(|profile| LanguageDetector::new(Arc::clone(profile), text))
            .max_by_key(|d| (d.probable_lines_of_code(), d.lines_of_code()))?;

        if best.lines_of_code() == 0 {
            tracing::debug!("no code detected");
            return None;
        }
        tracing::debug!(
            language = best.language(),
            lines_of_code = best.lines_of_code(),
            probable = best.probable_lines_of_code(),
            "selected language"
        );
        Some(DetectionResult::new(
            best.language(),
            best.sections().to_vec(),
        ))
    }
}

impl Default for CodeDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect code in `text` using the default profile registry
pub fn detect(text: &str) -> Option<DetectionResult> {
    CodeDetector::new().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Thresholds;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Test profile that counts strict-test invocations, so tests can prove
    /// the per-detector cache computes exactly once
    struct CountingProfile {
        strict_calls: AtomicUsize,
    }

    impl CountingProfile {
        fn new() -> Self {
            Self {
                strict_calls: AtomicUsize::new(0),
            }
        }
    }

    impl LanguageProfile for CountingProfile {
        fn language(&self) -> &'static str {
            "counting"
        }

        fn thresholds(&self) -> Thresholds {
            Thresholds::builder()
                .min_code_run(2)
                .min_plain_run(2)
                .build()
                .expect("valid test thresholds")
        }

        fn line_is_probably_code(&self, line: &str) -> bool {
            self.strict_calls.fetch_add(1, Ordering::SeqCst);
            line.contains("code")
        }
    }

    #[test]
    fn test_sections_are_computed_once_and_cached() {
        let profile = Arc::new(CountingProfile::new());
        let detector = LanguageDetector::new(profile.clone(), "code\ncode\nplain");

        let first = detector.sections().as_ptr();
        let calls_after_first = profile.strict_calls.load(Ordering::SeqCst);
        assert!(calls_after_first > 0);

        // Both totals and a second sections() call reuse the cached list
        let _ = detector.lines_of_code();
        let _ = detector.probable_lines_of_code();
        let second = detector.sections().as_ptr();
        assert_eq!(profile.strict_calls.load(Ordering::SeqCst), calls_after_first);
        assert_eq!(first, second);
    }

    #[test]
    fn test_selector_prefers_more_probable_lines() {
        struct FixedProfile {
            name: &'static str,
            marker: &'static str,
        }
        impl LanguageProfile for FixedProfile {
            fn language(&self) -> &'static str {
                self.name
            }
            fn thresholds(&self) -> Thresholds {
                Thresholds::builder()
                    .min_code_run(1)
                    .min_plain_run(1)
                    .build()
                    .expect("valid test thresholds")
            }
            fn line_is_probably_code(&self, line: &str) -> bool {
                line.contains(self.marker)
            }
        }

        let detector = CodeDetector::with_profiles(vec![
            Arc::new(FixedProfile {
                name: "alpha",
                marker: "alpha",
            }),
            Arc::new(FixedProfile {
                name: "beta",
                marker: "beta",
            }),
        ]);
        let result = detector
            .detect("beta\nbeta\nalpha\nbeta")
            .expect("code present");
        assert_eq!(result.language(), "beta");
    }

    #[test]
    fn test_zero_code_lines_is_a_negative_result() {
        assert!(detect("just chatting\nnothing to see").is_none());
    }

    #[test]
    fn test_empty_input_is_a_negative_result() {
        assert!(detect("").is_none());
    }

    #[test]
    fn test_detect_finds_python() {
        let text = "def add(a, b):\n    return a + b\nprint(add(1, 2))";
        let result = detect(text).expect("code present");
        assert_eq!(result.language(), "python");
        assert_eq!(result.debug(), "3c");
    }
}
