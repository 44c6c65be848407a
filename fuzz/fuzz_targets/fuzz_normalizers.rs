#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Every normalizer must be total over arbitrary text.
        let value = serde_json::Value::String(s.to_string());
        let _ = rejestr::parse_date(&value);
        let _ = rejestr::parse_amount(&value);
        let _ = rejestr::clean_nip(s);
        let _ = rejestr::normalize_currency(s);
        let _ = rejestr::escape_text(s);
    }
});
