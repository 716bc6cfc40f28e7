//! Property-based tests for segmentation and line wrapping.
//!
//! Uses proptest to verify invariants that must hold across all valid inputs.

use proptest::prelude::*;
use textplate::measure::{FixedAdvance, TextMeasure};
use textplate::segment::segment;
use textplate::wrap::wrap_lines;

// ============================================================================
// Strategies
// ============================================================================

/// Generate arbitrary UTF-8 strings (proptest default).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,100}"
}

/// Generate word-like text: ASCII words joined by single spaces and newlines.
fn word_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::collection::vec("[a-z]{1,12}", 0..8).prop_map(|words| words.join(" ")),
        1..6,
    )
    .prop_map(|lines| lines.join("\n"))
}

/// Generate whitespace-free CJK runs.
fn cjk_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['中', '文', '日', '本', '語', '한', '국']),
        0..50,
    )
    .prop_map(|chars| chars.into_iter().collect::<String>())
}

/// Width budgets, including degenerate ones.
fn budget() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0), 1.0f32..500.0, Just(10_000.0)]
}

// ============================================================================
// Segmentation properties
// ============================================================================

proptest! {
    /// Units are lossless: joining them back produces the original line.
    #[test]
    fn segment_join_is_lossless(s in utf8_string()) {
        for line in s.split('\n') {
            let joined: String = segment(line).concat();
            prop_assert_eq!(&joined, line, "units should reproduce the line");
        }
    }

    /// No unit is empty, and no unit mixes whitespace with non-whitespace.
    #[test]
    fn segment_units_are_uniform(s in utf8_string()) {
        for line in s.split('\n') {
            for unit in segment(line) {
                prop_assert!(!unit.is_empty());
                let ws = unit.chars().filter(|c| c.is_whitespace()).count();
                prop_assert!(
                    ws == 0 || ws == unit.chars().count(),
                    "unit {unit:?} mixes whitespace and text"
                );
            }
        }
    }
}

// ============================================================================
// Wrapping properties
// ============================================================================

proptest! {
    /// Wrapping only adds breaks: output count >= physical line count.
    #[test]
    fn wrap_never_merges_lines(s in utf8_string(), w in budget()) {
        let measure = FixedAdvance::new(10.0);
        let wrapped = wrap_lines(&s, w, &measure);
        prop_assert!(wrapped.len() >= s.split('\n').count());
    }

    /// Pure function: identical arguments yield identical output.
    #[test]
    fn wrap_is_idempotent(s in utf8_string(), w in budget()) {
        let measure = FixedAdvance::new(10.0);
        let first = wrap_lines(&s, w, &measure);
        let second = wrap_lines(&s, w, &measure);
        prop_assert_eq!(first, second);
    }

    /// A whitespace-only physical line maps to exactly one empty output line.
    #[test]
    fn blank_lines_map_to_one_empty_line(pad in "[ \\t]{0,10}", w in budget()) {
        let measure = FixedAdvance::new(10.0);
        let text = format!("a\n{pad}\nb");
        let wrapped = wrap_lines(&text, w, &measure);
        let blanks = wrapped.iter().filter(|l| l.is_empty()).count();
        prop_assert_eq!(blanks, 1);
    }

    /// Non-whitespace content is never dropped by wrapping.
    #[test]
    fn wrap_preserves_visible_content(s in word_text(), w in budget()) {
        let measure = FixedAdvance::new(10.0);
        let wrapped = wrap_lines(&s, w, &measure);

        let visible = |t: &str| t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        prop_assert_eq!(visible(&wrapped.concat()), visible(&s));
    }

    /// Every wrapped line fits the budget unless it is a single indivisible
    /// unit, in which case it contains no whitespace.
    #[test]
    fn overlong_lines_are_single_units(s in word_text(), w in budget()) {
        let measure = FixedAdvance::new(10.0);
        for line in wrap_lines(&s, w, &measure) {
            if measure.width(&line) > w {
                prop_assert!(
                    !line.chars().any(char::is_whitespace),
                    "overlong line {line:?} should be one unbreakable unit"
                );
            }
        }
    }

    /// Widening the budget never increases the number of wrapped lines.
    #[test]
    fn wrap_is_monotone_in_width(s in word_text(), w in 1.0f32..300.0, extra in 0.0f32..300.0) {
        let measure = FixedAdvance::new(10.0);
        let narrow = wrap_lines(&s, w, &measure);
        let wide = wrap_lines(&s, w + extra, &measure);
        prop_assert!(
            wide.len() <= narrow.len(),
            "widening {w} by {extra} grew {} -> {} lines",
            narrow.len(),
            wide.len()
        );
    }

    /// CJK runs wrap on grapheme boundaries and preserve every cluster.
    #[test]
    fn cjk_wrap_preserves_clusters(s in cjk_string(), w in budget()) {
        let measure = FixedAdvance::new(10.0);
        let wrapped = wrap_lines(&s, w, &measure);
        if s.is_empty() {
            prop_assert_eq!(wrapped, vec![String::new()]);
        } else {
            prop_assert_eq!(wrapped.concat(), s);
        }
    }
}
