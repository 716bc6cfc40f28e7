//! Fuzz target for line wrapping.
//!
//! Tests that wrap_lines is total over arbitrary strings and width budgets:
//! no panics, and the physical line count is never reduced.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textplate::measure::FixedAdvance;
use textplate::wrap::wrap_lines;

fuzz_target!(|input: (String, f32)| {
    let (text, raw_width) = input;
    // Widths can be anything the host hands us, including NaN and negatives.
    let measure = FixedAdvance::new(7.0);
    let wrapped = wrap_lines(&text, raw_width, &measure);

    assert!(
        wrapped.len() >= text.split('\n').count(),
        "wrapping must never merge physical lines"
    );
});
