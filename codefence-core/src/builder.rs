//! Section builder: line-by-line classification and grouping
//!
//! Runs the profile's line classifier over every input line in order,
//! grouping consecutive same-classification lines into sections. The split
//! preserves empty lines, so concatenating the produced sections always
//! reproduces the input's line sequence exactly.

use crate::language::{classify_line, LanguageProfile};
use crate::section::DetectedSection;

/// Split the input into classified sections
///
/// The first line is judged by the strict test alone; every later line sees
/// the open section's classification as its "previous" state, which is what
/// lets the weak continuation test extend a code run. Empty input produces
/// an empty section list.
pub fn build_sections(profile: &dyn LanguageProfile, text: &str) -> Vec<DetectedSection> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut sections: Vec<DetectedSection> = Vec::new();
    let mut current: Option<DetectedSection> = None;

    for line in text.split('\n') {
        let previous = current.as_ref().map(|s| s.classification());
        let (classification, probable) = classify_line(profile, previous, line);
        match current.as_mut() {
            Some(section) if section.classification() == classification => {
                section.push_line(line, probable);
            }
            _ => {
                if let Some(finished) = current.take() {
                    sections.push(finished);
                }
                current = Some(DetectedSection::single(classification, line, probable));
            }
        }
    }
    if let Some(finished) = current {
        sections.push(finished);
    }

    migrate_trailing_blanks(sections)
}

/// Move trailing blank lines out of code sections
///
/// A code section's trailing blank lines were only kept there by the weak
/// continuation test; once a following section exists they belong with the
/// prose after the paste. Lines are reassigned, never dropped, so the
/// overall concatenation is unchanged. The final section keeps its blanks.
fn migrate_trailing_blanks(sections: Vec<DetectedSection>) -> Vec<DetectedSection> {
    let mut result: Vec<DetectedSection> = Vec::with_capacity(sections.len());
    let last_index = sections.len().saturating_sub(1);

    let mut iter = sections.into_iter().enumerate();
    while let Some((index, section)) = iter.next() {
        if !section.is_code() || index == last_index {
            result.push(section);
            continue;
        }

        let mut lines: Vec<String> = section.lines().to_vec();
        let mut flags: Vec<bool> = section.line_probability().to_vec();
        let keep = lines
            .iter()
            .rposition(|l| !l.trim().is_empty())
            .map_or(0, |i| i + 1);
        let moved_lines = lines.split_off(keep);
        let moved_flags = flags.split_off(keep);

        if moved_lines.is_empty() {
            result.push(section);
            continue;
        }

        if !lines.is_empty() {
            result.push(DetectedSection::new(section.classification(), lines, flags));
        }

        // Alternation guarantees the next section exists and is plain text;
        // prose never donates blanks of its own, so push it directly.
        if let Some((_, next)) = iter.next() {
            let mut next_lines = moved_lines;
            let mut next_flags = moved_flags;
            next_lines.extend(next.lines().iter().cloned());
            next_flags.extend(next.line_probability().iter().copied());
            result.push(DetectedSection::new(
                next.classification(),
                next_lines,
                next_flags,
            ));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{LanguageProfile, Thresholds};

    /// Test profile: any line containing "code" is strictly code
    struct MarkerProfile;

    impl LanguageProfile for MarkerProfile {
        fn language(&self) -> &'static str {
            "marker"
        }

        fn thresholds(&self) -> Thresholds {
            Thresholds::builder()
                .min_code_run(5)
                .min_plain_run(2)
                .build()
                .expect("valid test thresholds")
        }

        fn line_is_probably_code(&self, line: &str) -> bool {
            line.contains("code")
        }
    }

    fn debug(sections: &[DetectedSection]) -> String {
        sections
            .iter()
            .map(|s| s.debug())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_empty_input_yields_no_sections() {
        assert!(build_sections(&MarkerProfile, "").is_empty());
    }

    #[test]
    fn test_single_line_input() {
        let sections = build_sections(&MarkerProfile, "code here");
        assert_eq!(debug(&sections), "1c");

        let sections = build_sections(&MarkerProfile, "prose here");
        assert_eq!(debug(&sections), "1p");
    }

    #[test]
    fn test_alternating_runs_are_grouped() {
        let sections = build_sections(&MarkerProfile, "one\ntwo\ncode\ncode\nthree");
        assert_eq!(debug(&sections), "2p 2c 1p");
    }

    #[test]
    fn test_blank_line_continues_code_run() {
        let sections = build_sections(&MarkerProfile, "code\ncode\n\ncode\ncode\ncode");
        assert_eq!(debug(&sections), "6c");
        let flags = sections[0].line_probability();
        assert_eq!(flags, &[true, true, false, true, true, true]);
    }

    #[test]
    fn test_indented_line_continues_code_run() {
        let sections = build_sections(&MarkerProfile, "code\n  wrapped line\nplain");
        assert_eq!(debug(&sections), "2c 1p");
        assert!(!sections[0].line_probability()[1]);
    }

    #[test]
    fn test_indentation_does_not_start_a_code_run() {
        let sections = build_sections(&MarkerProfile, "  indented prose\nmore prose");
        assert_eq!(debug(&sections), "2p");
    }

    #[test]
    fn test_trailing_blanks_migrate_to_following_section() {
        let sections = build_sections(&MarkerProfile, "code\ncode\n\n\nplain\nplain");
        assert_eq!(debug(&sections), "2c 4p");
        assert_eq!(sections[1].lines()[0], "");
        assert_eq!(sections[1].lines()[2], "plain");
    }

    #[test]
    fn test_final_code_section_keeps_trailing_blanks() {
        let sections = build_sections(&MarkerProfile, "code\ncode\n");
        assert_eq!(debug(&sections), "3c");
    }

    #[test]
    fn test_migration_preserves_line_sequence() {
        let input = "intro\ncode\ncode\n\nafter\ncode\nend";
        let sections = build_sections(&MarkerProfile, input);
        let all_lines: Vec<&str> = sections
            .iter()
            .flat_map(|s| s.lines().iter().map(String::as_str))
            .collect();
        let expected: Vec<&str> = input.split('\n').collect();
        assert_eq!(all_lines, expected);
    }
}
