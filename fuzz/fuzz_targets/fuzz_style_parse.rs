#![no_main]

use libfuzzer_sys::fuzz_target;
use treepick::Style;

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = std::str::from_utf8(data) {
        // A parsed style must survive Display -> parse unchanged
        if let Ok(style) = spec.parse::<Style>() {
            let again: Style = style.to_string().parse().expect("display output parses");
            assert_eq!(style, again);
        }
    }
});
