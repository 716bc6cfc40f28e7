//! Fuzz target for color parsing.
//!
//! Tests that Rgba::parse handles arbitrary strings without panicking.

#![no_main]

use libfuzzer_sys::fuzz_target;
use textplate::color::Rgba;

fuzz_target!(|data: &str| {
    // Should never panic: invalid input is an Err, not a crash
    let _ = Rgba::parse(data);
    let _ = Rgba::from_hex(data);

    if !data.starts_with('#') {
        let with_hash = format!("#{data}");
        let _ = Rgba::from_hex(&with_hash);
    }
});
