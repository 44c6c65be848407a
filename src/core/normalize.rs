//! Per-attribute value normalizers.
//!
//! Every function here is total over the raw JSON values the resolver hands
//! out: the `parse_*` variants report unusable input with `None` (strict mode
//! turns that into an error), the `normalize_*` variants substitute the
//! documented default instead. Lenient conversion must never fail over a typo
//! in a spreadsheet cell.

use chrono::{Local, NaiveDate, TimeDelta};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde_json::Value;
use std::str::FromStr;

use super::currencies;

/// Ceiling applied to net, VAT and gross before output.
pub const MAX_AMOUNT: Decimal = dec!(999999.99);

/// Floor substituted for a non-positive net amount.
pub const NET_FLOOR: Decimal = dec!(1.00);

/// Fallback currency of the destination register.
pub const DEFAULT_CURRENCY: &str = "PLN";

/// Placeholder NIP when the input carries no digits at all.
pub const PLACEHOLDER_NIP: &str = "0000000000";

/// Highest spreadsheet serial treated as a pre-leap-bug date (1900-02-27 in
/// the historical mapping); serials above it get the -1 day correction.
const SERIAL_LEAP_BUG_CUTOFF: f64 = 59.0;

/// Spreadsheet serial day numbers count from this epoch.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap()
}

/// Coerce a scalar JSON value to trimmed text. Blank strings, nulls and
/// non-scalars yield `None`.
pub fn coerce_string(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Interpret a value as a calendar date.
///
/// Accepts ISO `YYYY-MM-DD` strings (length 10, two dashes, strict parse)
/// and spreadsheet serial day numbers (numeric values or numeric strings,
/// counted from 1899-12-30 with the historical -1 correction for serials
/// above 59). Returns `None` for anything else.
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    match value {
        Value::String(s) => {
            if s.len() == 10 && s.matches('-').count() == 2 {
                return NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
            }
            s.trim().parse::<f64>().ok().and_then(serial_to_date)
        }
        Value::Number(n) => n.as_f64().and_then(serial_to_date),
        _ => None,
    }
}

/// Lenient date normalization: unusable or empty input becomes the current
/// date, silently. The output always formats as `YYYY-MM-DD`.
pub fn normalize_date(value: &Value) -> NaiveDate {
    parse_date(value).unwrap_or_else(|| Local::now().date_naive())
}

/// Convert a spreadsheet serial day number to a date.
///
/// The 1900 leap-year bug is reproduced on purpose: serials above 59 are
/// shifted back one day, so 59 and 60 collide on 1900-02-27, exactly as the
/// historical importer resolved them. Fractional days truncate.
fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let corrected = if serial > SERIAL_LEAP_BUG_CUTOFF {
        serial - 1.0
    } else {
        serial
    };
    let days = TimeDelta::try_days(corrected.trunc() as i64)?;
    serial_epoch().checked_add_signed(days)
}

/// Interpret a value as a decimal amount. Strings may use a decimal comma
/// and surrounding whitespace; scientific notation is accepted where the
/// plain form fails. Returns `None` for unusable input.
pub fn parse_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string())
            .or_else(|_| Decimal::from_scientific(&n.to_string()))
            .ok(),
        Value::String(s) => {
            let cleaned = s.trim().replace(',', ".");
            if cleaned.is_empty() {
                return None;
            }
            Decimal::from_str(&cleaned)
                .or_else(|_| Decimal::from_scientific(&cleaned))
                .ok()
        }
        _ => None,
    }
}

/// Lenient amount normalization with a caller-specified default.
pub fn normalize_amount(value: &Value, default: Decimal) -> Decimal {
    parse_amount(value).unwrap_or(default)
}

/// Apply the register's amount invariants, in the historical order:
/// net floored to 1.00 when non-positive, VAT floored to 0.00 when negative,
/// gross recomputed as net + VAT when non-positive, then every amount capped
/// at 999999.99.
///
/// Net and VAT are capped before the gross fallback so the sum stays inside
/// `Decimal`'s range; `Add` panics past it.
pub fn clamp_amounts(
    net: Decimal,
    vat: Decimal,
    gross: Decimal,
) -> (Decimal, Decimal, Decimal) {
    let net = if net <= Decimal::ZERO { NET_FLOOR } else { net.min(MAX_AMOUNT) };
    let vat = if vat < Decimal::ZERO { Decimal::ZERO } else { vat.min(MAX_AMOUNT) };
    let gross = if gross <= Decimal::ZERO { net + vat } else { gross };
    (net, vat, gross.min(MAX_AMOUNT))
}

/// Format an amount with exactly two decimal digits, rounding half away
/// from zero.
pub fn format_amount(amount: Decimal) -> String {
    let s = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string();
    match s.find('.') {
        Some(dot) => {
            let decimals = s.len() - dot - 1;
            if decimals < 2 {
                format!("{s}{}", "0".repeat(2 - decimals))
            } else {
                s
            }
        }
        None => format!("{s}.00"),
    }
}

/// Strip a NIP down to its digit sequence.
///
/// Labels, dashes and spaces all disappear (`"NIP 123-456-78-90"` →
/// `"1234567890"`); input without any digit yields the all-zero placeholder.
/// No checksum is applied — the destination system validates on import.
/// Cleaning an already-clean NIP is a no-op.
pub fn clean_nip(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        PLACEHOLDER_NIP.to_string()
    } else {
        digits
    }
}

/// Normalize a currency designation to a 3-letter ISO 4217 code.
///
/// Recognized codes pass through uppercased; symbol and local-name aliases
/// map to their code; everything else (including blank input) becomes PLN.
pub fn normalize_currency(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return DEFAULT_CURRENCY.to_string();
    }
    let upper = trimmed.to_uppercase();
    if currencies::is_known_currency_code(&upper) {
        return upper;
    }
    currencies::currency_for_alias(&trimmed.to_lowercase())
        .unwrap_or(DEFAULT_CURRENCY)
        .to_string()
}

/// Escape text for embedding in an XML element body.
///
/// All five metacharacters are replaced (`& < > " '`), so the result is safe
/// both as element text and inside the CDATA wrappers the register template
/// uses — escaped text can never contain a `]]>` sequence. Empty input stays
/// empty.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // --- Dates ---

    #[test]
    fn iso_date_passes_through() {
        assert_eq!(parse_date(&json!("2025-05-21")), Some(date(2025, 5, 21)));
        assert_eq!(normalize_date(&json!("2025-05-21")).to_string(), "2025-05-21");
    }

    #[test]
    fn iso_shaped_but_invalid_is_rejected() {
        assert_eq!(parse_date(&json!("2025-13-45")), None);
        assert_eq!(parse_date(&json!("2025-0a-21")), None);
    }

    #[test]
    fn serial_above_cutoff_gets_leap_bug_correction() {
        // 45807 - 1 days from 1899-12-30.
        assert_eq!(parse_date(&json!(45807)), Some(date(2025, 5, 29)));
        assert_eq!(parse_date(&json!("45807")), Some(date(2025, 5, 29)));
        assert_eq!(parse_date(&json!(45807.0)), Some(date(2025, 5, 29)));
    }

    #[test]
    fn serial_at_or_below_cutoff_is_uncorrected() {
        assert_eq!(parse_date(&json!(1)), Some(date(1899, 12, 31)));
        assert_eq!(parse_date(&json!(59)), Some(date(1900, 2, 27)));
        // The reproduced bug: 59 and 60 collide.
        assert_eq!(parse_date(&json!(60)), Some(date(1900, 2, 27)));
    }

    #[test]
    fn garbage_date_defaults_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(normalize_date(&json!("soon")), today);
        assert_eq!(normalize_date(&json!("")), today);
        assert_eq!(normalize_date(&Value::Null), today);
        assert_eq!(normalize_date(&json!(true)), today);
    }

    #[test]
    fn absurd_serial_defaults_to_today() {
        let today = Local::now().date_naive();
        assert_eq!(normalize_date(&json!(1e18)), today);
        assert_eq!(normalize_date(&json!(-1e18)), today);
    }

    // --- Amounts ---

    #[test]
    fn decimal_comma_is_accepted() {
        assert_eq!(parse_amount(&json!("1234,56")), Some(dec!(1234.56)));
        assert_eq!(parse_amount(&json!("  230.00 ")), Some(dec!(230.00)));
        assert_eq!(parse_amount(&json!(1000)), Some(dec!(1000)));
    }

    #[test]
    fn unparseable_amount_uses_default() {
        assert_eq!(normalize_amount(&json!("n/a"), dec!(1.00)), dec!(1.00));
        assert_eq!(normalize_amount(&json!(""), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(normalize_amount(&json!("1,234,56"), dec!(0.5)), dec!(0.5));
    }

    #[test]
    fn clamp_floors_and_caps() {
        assert_eq!(
            clamp_amounts(dec!(-5), dec!(-1), dec!(0)),
            (dec!(1.00), dec!(0.00), dec!(1.00))
        );
        assert_eq!(
            clamp_amounts(dec!(0), dec!(0.23), dec!(-10)),
            (dec!(1.00), dec!(0.23), dec!(1.23))
        );
        assert_eq!(
            clamp_amounts(dec!(5000000), dec!(1150000), dec!(6150000)),
            (MAX_AMOUNT, MAX_AMOUNT, MAX_AMOUNT)
        );
    }

    #[test]
    fn clamp_keeps_valid_amounts() {
        assert_eq!(
            clamp_amounts(dec!(1000.00), dec!(230.00), dec!(1230.00)),
            (dec!(1000.00), dec!(230.00), dec!(1230.00))
        );
    }

    #[test]
    fn clamp_is_total_over_decimal_range() {
        // The gross fallback must not overflow on range-limit operands.
        assert_eq!(
            clamp_amounts(Decimal::MAX, dec!(1.00), dec!(-5)),
            (MAX_AMOUNT, dec!(1.00), MAX_AMOUNT)
        );
        assert_eq!(
            clamp_amounts(Decimal::MAX, Decimal::MAX, Decimal::MIN),
            (MAX_AMOUNT, MAX_AMOUNT, MAX_AMOUNT)
        );
        assert_eq!(
            clamp_amounts(Decimal::MIN, Decimal::MIN, Decimal::MIN),
            (dec!(1.00), dec!(0.00), dec!(1.00))
        );
    }

    #[test]
    fn amounts_format_with_two_decimals() {
        assert_eq!(format_amount(dec!(1000)), "1000.00");
        assert_eq!(format_amount(dec!(1000.5)), "1000.50");
        assert_eq!(format_amount(dec!(230.00)), "230.00");
        assert_eq!(format_amount(dec!(0.005)), "0.01");
        assert_eq!(format_amount(MAX_AMOUNT), "999999.99");
    }

    // --- NIP ---

    #[test]
    fn nip_keeps_digits_only() {
        assert_eq!(clean_nip("NIP 123-456-78-90"), "1234567890");
        assert_eq!(clean_nip("PL 5260305006"), "5260305006");
    }

    #[test]
    fn nip_without_digits_becomes_placeholder() {
        assert_eq!(clean_nip("brak danych"), PLACEHOLDER_NIP);
        assert_eq!(clean_nip(""), PLACEHOLDER_NIP);
    }

    #[test]
    fn nip_cleaning_is_idempotent() {
        let once = clean_nip("NIP 123-456-78-90");
        assert_eq!(clean_nip(&once), once);
    }

    // --- Currency ---

    #[test]
    fn currency_symbol_maps_to_code() {
        assert_eq!(normalize_currency("zł"), "PLN");
        assert_eq!(normalize_currency("€"), "EUR");
    }

    #[test]
    fn known_code_passes_through_uppercased() {
        assert_eq!(normalize_currency("eur"), "EUR");
        assert_eq!(normalize_currency(" PLN "), "PLN");
    }

    #[test]
    fn unknown_currency_defaults_to_pln() {
        assert_eq!(normalize_currency("doubloons"), "PLN");
        assert_eq!(normalize_currency(""), "PLN");
    }

    // --- Escaping ---

    #[test]
    fn metacharacters_are_entity_escaped() {
        assert_eq!(
            escape_text(r#"Firma "A&B" <Sp. z o.o.>"#),
            "Firma &quot;A&amp;B&quot; &lt;Sp. z o.o.&gt;"
        );
        assert_eq!(escape_text("O'Brien"), "O&apos;Brien");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn escaped_text_cannot_close_cdata() {
        assert!(!escape_text("evil ]]> payload").contains("]]>"));
    }
}
