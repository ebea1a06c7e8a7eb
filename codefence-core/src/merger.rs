//! Section merger: minimum-run-length smoothing
//!
//! The raw section list from the builder can be noisy: a stray strict hit in
//! the middle of prose, or a short prose interjection inside a paste, both
//! produce sections too short to be trustworthy. The merger eliminates them
//! in four ordered passes:
//!
//! 1. trivial collapse when the whole input cannot hold a code run;
//! 2. left-to-right collapse of maximal runs of individually-short sections;
//! 3. merging of adjacent sections that ended up with one classification;
//! 4. absorption of residual short sections into their neighbors, repeated
//!    to a fixed point.
//!
//! Adjacency-first ordering matters: collapsing short runs before looking at
//! classifications keeps a legitimate long code block from being absorbed
//! into a merge of the short prose sections bracketing it.
//!
//! A leading or trailing plain-text section is never merged or reclassified.
//! Short prose around a paste is the normal case and must survive intact.

use crate::language::Thresholds;
use crate::section::{Classification, DetectedSection};

/// Smooth the section list against the profile's run-length minimums
pub fn merge_sections(
    sections: Vec<DetectedSection>,
    thresholds: Thresholds,
) -> Vec<DetectedSection> {
    if sections.is_empty() {
        return sections;
    }

    let total_lines: usize = sections.iter().map(|s| s.line_count()).sum();
    if total_lines < thresholds.min_code_run {
        tracing::debug!(total_lines, "input too short to hold a code run");
        return vec![collapse_to_plain_text(sections)];
    }

    let sections = collapse_short_runs(sections, thresholds);
    let sections = merge_like_adjacent(sections);
    absorb_residual_short(sections, thresholds)
}

/// Whether a section falls below its classification's run-length minimum
fn is_short(section: &DetectedSection, thresholds: Thresholds) -> bool {
    let minimum = match section.classification() {
        Classification::Code => thresholds.min_code_run,
        Classification::PlainText => thresholds.min_plain_run,
    };
    section.line_count() < minimum
}

/// Whether the section at `index` is exempt from merging
///
/// Protection is positional: the current first and last sections, when they
/// are plain text.
fn is_protected(index: usize, sections: &[DetectedSection]) -> bool {
    (index == 0 || index + 1 == sections.len()) && sections[index].is_plain_text()
}

/// Fold every section into one plain-text section
fn collapse_to_plain_text(sections: Vec<DetectedSection>) -> DetectedSection {
    let mut lines = Vec::new();
    for section in sections {
        lines.extend(section.lines().iter().cloned());
    }
    let flags = vec![true; lines.len()];
    DetectedSection::new(Classification::PlainText, lines, flags)
}

/// Merge a run of sections into one, deciding classification by majority
/// vote of line counts, ties toward code
///
/// Lines pulled into a code section that were not previously strict hits are
/// flagged plausible; plain-text lines always carry `true`.
fn merge_run(run: &[DetectedSection]) -> DetectedSection {
    let code_lines: usize = run
        .iter()
        .filter(|s| s.is_code())
        .map(|s| s.line_count())
        .sum();
    let plain_lines: usize = run
        .iter()
        .filter(|s| s.is_plain_text())
        .map(|s| s.line_count())
        .sum();
    let classification = if code_lines >= plain_lines {
        Classification::Code
    } else {
        Classification::PlainText
    };

    let mut lines = Vec::with_capacity(code_lines + plain_lines);
    let mut flags = Vec::with_capacity(code_lines + plain_lines);
    for section in run {
        lines.extend(section.lines().iter().cloned());
        match classification {
            Classification::Code if section.is_code() => {
                flags.extend(section.line_probability().iter().copied());
            }
            Classification::Code => {
                flags.extend(std::iter::repeat(false).take(section.line_count()));
            }
            Classification::PlainText => {
                flags.extend(std::iter::repeat(true).take(section.line_count()));
            }
        }
    }
    DetectedSection::new(classification, lines, flags)
}

/// Pass 2: collapse each maximal run of consecutive short sections
fn collapse_short_runs(
    sections: Vec<DetectedSection>,
    thresholds: Thresholds,
) -> Vec<DetectedSection> {
    let mut result = Vec::with_capacity(sections.len());
    let mut index = 0;
    while index < sections.len() {
        if is_protected(index, &sections) || !is_short(&sections[index], thresholds) {
            result.push(sections[index].clone());
            index += 1;
            continue;
        }
        let start = index;
        while index < sections.len()
            && !is_protected(index, &sections)
            && is_short(&sections[index], thresholds)
        {
            index += 1;
        }
        result.push(merge_run(&sections[start..index]));
    }
    result
}

/// Pass 3: merge immediately adjacent sections sharing a classification
pub(crate) fn merge_like_adjacent(sections: Vec<DetectedSection>) -> Vec<DetectedSection> {
    let mut result: Vec<DetectedSection> = Vec::with_capacity(sections.len());
    for section in sections {
        match result.last_mut() {
            Some(last) if last.classification() == section.classification() => {
                last.append(section);
            }
            _ => result.push(section),
        }
    }
    result
}

/// Pass 4: absorb remaining short sections into their neighbors
///
/// Each round merges one short unprotected section with its unprotected
/// immediate neighbors, votes on the result, and re-merges like neighbors.
/// A short section whose neighbors are all protected stays as it is;
/// protection outranks the run-length minimum.
fn absorb_residual_short(
    mut sections: Vec<DetectedSection>,
    thresholds: Thresholds,
) -> Vec<DetectedSection> {
    loop {
        let candidate = (0..sections.len()).find(|&i| {
            !is_protected(i, &sections)
                && is_short(&sections[i], thresholds)
                && has_unprotected_neighbor(i, &sections)
        });
        let Some(index) = candidate else {
            return sections;
        };

        let start = if index > 0 && !is_protected(index - 1, &sections) {
            index - 1
        } else {
            index
        };
        let end = if index + 1 < sections.len() && !is_protected(index + 1, &sections) {
            index + 1
        } else {
            index
        };

        let merged = merge_run(&sections[start..=end]);
        tracing::trace!(
            start,
            end,
            classification = %merged.classification(),
            "absorbed short section"
        );
        sections.splice(start..=end, std::iter::once(merged));
        sections = merge_like_adjacent(sections);
    }
}

fn has_unprotected_neighbor(index: usize, sections: &[DetectedSection]) -> bool {
    let before = index > 0 && !is_protected(index - 1, sections);
    let after = index + 1 < sections.len() && !is_protected(index + 1, sections);
    before || after
}
