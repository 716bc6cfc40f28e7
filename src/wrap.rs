//! Greedy line wrapping against a measured width budget.
//!
//! Input text is split on explicit line breaks into physical lines; each
//! physical line is segmented into wrapping units (see [`crate::segment`])
//! and packed greedily: a unit joins the current line if the candidate still
//! fits the budget, otherwise the line is emitted and the unit starts the
//! next one. A single unit wider than the budget is placed whole on its own
//! line; overflow is accepted silently rather than truncating or splitting.
//!
//! The computation is pure and total over all string inputs, including the
//! empty string, whitespace-only lines, and overlong single units.

use crate::measure::TextMeasure;
use crate::segment::{Granularity, segment_with};

/// Wrap `text` into lines no wider than `max_width`, as measured by
/// `measure`.
///
/// Guarantees:
/// - every physical input line maps to at least one output line;
/// - a blank physical line maps to exactly one empty output line;
/// - units are never split or dropped, so joining a wrapped line's units
///   reproduces the physical line's content up to edge whitespace.
#[must_use]
pub fn wrap_lines(text: &str, max_width: f32, measure: &dyn TextMeasure) -> Vec<String> {
    wrap_lines_with(text, max_width, measure, Granularity::Grapheme)
}

/// [`wrap_lines`] with an explicit segmentation fallback granularity.
#[must_use]
pub fn wrap_lines_with(
    text: &str,
    max_width: f32,
    measure: &dyn TextMeasure,
    granularity: Granularity,
) -> Vec<String> {
    let mut wrapped = Vec::new();

    for raw in text.split('\n') {
        // Tolerate CRLF input; the CR carries no width.
        let line = raw.strip_suffix('\r').unwrap_or(raw);

        if line.trim().is_empty() {
            wrapped.push(String::new());
            continue;
        }

        wrap_physical_line(line, max_width, measure, granularity, &mut wrapped);
    }

    wrapped
}

/// Pack one non-blank physical line into `out`.
fn wrap_physical_line(
    line: &str,
    max_width: f32,
    measure: &dyn TextMeasure,
    granularity: Granularity,
    out: &mut Vec<String>,
) {
    // Whitespace trimming at wrap boundaries only applies when the units
    // are word/whitespace tokens; grapheme runs carry no edge whitespace.
    let whitespace_delimited = line.chars().any(char::is_whitespace);

    let mut acc = String::new();
    for unit in segment_with(line, granularity) {
        let mut candidate = acc.clone();
        candidate.push_str(unit);

        // A lone overlong unit still lands: never drop or force-split.
        if measure.width(&candidate) <= max_width || acc.is_empty() {
            acc = candidate;
        } else {
            out.push(finish_line(acc, whitespace_delimited));
            acc = if whitespace_delimited {
                unit.trim_start().to_string()
            } else {
                unit.to_string()
            };
        }
    }

    if !acc.is_empty() {
        out.push(acc);
    }
}

fn finish_line(line: String, whitespace_delimited: bool) -> String {
    if whitespace_delimited {
        line.trim_end().to_string()
    } else {
        line
    }
}
