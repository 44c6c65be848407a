#![no_main]

use libfuzzer_sys::fuzz_target;
use rejestr::{ConvertOptions, RawRecord};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Arbitrary JSON as a request body — errors are fine, panics are bugs.
        if let Ok(value) = serde_json::from_str(s) {
            if let Some(raw) = RawRecord::from_value(value) {
                let _ = rejestr::optima::convert(&raw, ConvertOptions::default());
                let _ = rejestr::optima::convert(&raw, ConvertOptions::strict());
            }
        }
    }
});
