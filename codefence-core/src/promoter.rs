//! Block promotion: whole-section reclassification
//!
//! Catches multi-line constructs no single line reveals. A triple-quoted
//! string looks like prose line by line; only the joined section text shows
//! the opening and closing delimiters. Promotion is restricted to interior
//! sections so leading and trailing prose can never be pulled into a fence.

use crate::language::LanguageProfile;
use crate::merger::merge_like_adjacent;
use crate::section::{Classification, DetectedSection};

/// Reclassify interior plain-text sections whose joined text passes the
/// profile's multi-line test, then merge the now-adjacent code sections
pub fn promote_blocks(
    profile: &dyn LanguageProfile,
    sections: Vec<DetectedSection>,
) -> Vec<DetectedSection> {
    if sections.len() < 3 {
        return sections;
    }

    let last_index = sections.len() - 1;
    let mut promoted = Vec::with_capacity(sections.len());
    let mut changed = false;
    for (index, section) in sections.into_iter().enumerate() {
        let interior = index != 0 && index != last_index;
        if interior && section.is_plain_text() && profile.block_is_probably_code(&section.text()) {
            tracing::debug!(index, lines = section.line_count(), "promoted block to code");
            let count = section.line_count();
            promoted.push(DetectedSection::new(
                Classification::Code,
                section.lines().to_vec(),
                vec![true; count],
            ));
            changed = true;
        } else {
            promoted.push(section);
        }
    }

    if changed {
        merge_like_adjacent(promoted)
    } else {
        promoted
    }
}
