//! ISO 4217 currency code lookup.
//!
//! The converter passes through any recognized ISO 4217 code and maps the
//! symbol/alias spellings that show up in spreadsheet exports to their
//! canonical code. Everything else falls back to PLN, the register's default.

/// Check whether `code` is a known ISO 4217 currency code (uppercase).
pub fn is_known_currency_code(code: &str) -> bool {
    CURRENCY_CODES.binary_search(&code).is_ok()
}

/// Map a symbol or local-name spelling to its ISO 4217 code.
///
/// Lookup is against the lowercased input; returns `None` when the spelling
/// is not one of the known aliases.
pub fn currency_for_alias(alias: &str) -> Option<&'static str> {
    CURRENCY_ALIASES
        .iter()
        .find(|(a, _)| *a == alias)
        .map(|(_, code)| *code)
}

/// Currency codes seen in purchase registers imported here.
/// Sorted for binary search.
static CURRENCY_CODES: &[&str] = &[
    "AUD", // Australian Dollar
    "BGN", // Bulgarian Lev
    "CAD", // Canadian Dollar
    "CHF", // Swiss Franc
    "CNY", // Chinese Yuan
    "CZK", // Czech Koruna
    "DKK", // Danish Krone
    "EUR", // Euro
    "GBP", // Pound Sterling
    "HUF", // Hungarian Forint
    "JPY", // Japanese Yen
    "NOK", // Norwegian Krone
    "PLN", // Polish Zloty
    "RON", // Romanian Leu
    "SEK", // Swedish Krona
    "TRY", // Turkish Lira
    "UAH", // Ukrainian Hryvnia
    "USD", // US Dollar
];

/// Symbol and local-name aliases, lowercased.
static CURRENCY_ALIASES: &[(&str, &str)] = &[
    ("zł", "PLN"),
    ("zl", "PLN"),
    ("złoty", "PLN"),
    ("zloty", "PLN"),
    ("€", "EUR"),
    ("eur", "EUR"),
    ("euro", "EUR"),
    ("$", "USD"),
    ("usd", "USD"),
    ("£", "GBP"),
    ("gbp", "GBP"),
];
