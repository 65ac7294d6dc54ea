#![no_main]

use libfuzzer_sys::fuzz_target;
use treepick::ui::primitives::text::{display_width, truncate_to_width};

fuzz_target!(|input: (&str, u8)| {
    let (text, max) = input;
    let max = usize::from(max);
    let out = truncate_to_width(text, max, "…");
    assert!(display_width(&out) <= max, "{:?} -> {:?}", text, out);
});
