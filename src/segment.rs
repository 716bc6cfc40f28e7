//! Wrapping-unit segmentation.
//!
//! Splits a single physical line into the smallest units the wrapper will
//! never break apart:
//!
//! - Lines containing whitespace split into **word tokens interleaved with
//!   whitespace runs**. Whitespace runs are kept as their own units so they
//!   participate in width measurement; the wrapper trims them only at line
//!   boundaries.
//! - Lines without whitespace (unsegmented scripts such as CJK) split into
//!   **grapheme clusters**, so multi-codepoint clusters are never broken
//!   mid-character.
//!
//! The granularity policy is fixed, not configurable. A code-point split is
//! available as an explicit degraded fallback for hosts without grapheme
//! tables; it is a coarser segmentation, not an error.

use unicode_segmentation::UnicodeSegmentation;

/// Fallback granularity for lines without whitespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Granularity {
    /// Grapheme clusters (the smallest user-perceived characters).
    #[default]
    Grapheme,
    /// Raw code points. Degraded mode: may split user-perceived characters.
    CodePoint,
}

/// Split a physical line into wrapping units.
///
/// Pure function of its input; see the module docs for the unit policy.
#[must_use]
pub fn segment(line: &str) -> Vec<&str> {
    segment_with(line, Granularity::Grapheme)
}

/// Split a physical line into wrapping units with an explicit fallback
/// granularity for whitespace-free lines.
#[must_use]
pub fn segment_with(line: &str, granularity: Granularity) -> Vec<&str> {
    if line.chars().any(char::is_whitespace) {
        split_keep_whitespace(line)
    } else {
        match granularity {
            Granularity::Grapheme => line.graphemes(true).collect(),
            Granularity::CodePoint => split_code_points(line),
        }
    }
}

/// Split into alternating word and whitespace-run tokens, dropping nothing.
fn split_keep_whitespace(line: &str) -> Vec<&str> {
    let mut units = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (idx, ch) in line.char_indices() {
        let is_ws = ch.is_whitespace();
        match in_whitespace {
            None => in_whitespace = Some(is_ws),
            Some(prev) if prev != is_ws => {
                units.push(&line[start..idx]);
                start = idx;
                in_whitespace = Some(is_ws);
            }
            Some(_) => {}
        }
    }
    if start < line.len() {
        units.push(&line[start..]);
    }
    units
}

/// Split into individual code points (degraded fallback).
fn split_code_points(line: &str) -> Vec<&str> {
    line.char_indices()
        .map(|(idx, ch)| &line[idx..idx + ch.len_utf8()])
        .collect()
}
