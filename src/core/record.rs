//! The normalized purchase-register record and its builder.
//!
//! [`InvoiceRecord::from_raw`] runs the whole resolve-then-normalize
//! pipeline: every logical attribute is looked up through its alias chain,
//! pushed through its normalizer and stored in output form. Text fields are
//! kept XML-escaped from this point on, so downstream assembly never has to
//! reason about metacharacters again.

use chrono::{Days, Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

use super::error::RejestrError;
use super::fields::Field;
use super::normalize::{self, MAX_AMOUNT, clamp_amounts, clean_nip, coerce_string, escape_text};
use super::resolve::RawRecord;

/// Placeholder for a missing invoice number or seller name.
pub const DEFAULT_TEXT: &str = "BRAK";

/// Country substituted when the input names none.
pub const DEFAULT_COUNTRY: &str = "Polska";

/// VAT rate (percent) substituted when the input names none.
pub const DEFAULT_VAT_RATE: i64 = 23;

/// Net amount substituted when the input carries none.
pub const DEFAULT_NET_AMOUNT: Decimal = dec!(1.00);

/// VAT amount substituted when the input carries none.
pub const DEFAULT_VAT_AMOUNT: Decimal = dec!(0.23);

/// Days added to the issue date when no due date is supplied.
pub const DUE_DATE_OFFSET_DAYS: u64 = 7;

/// Conversion policy switches.
///
/// The default is the lenient policy: absent or malformed values are
/// silently replaced by documented defaults and a conversion never fails on
/// data content. Strict mode turns those substitutions into errors so data
/// entry mistakes surface instead of producing plausible-looking output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Reject missing required fields and unparseable dates, amounts and
    /// rates instead of substituting defaults.
    pub strict: bool,
}

impl ConvertOptions {
    /// The strict policy.
    pub fn strict() -> Self {
        Self { strict: true }
    }
}

/// Payment-method labels accepted by the destination register.
///
/// The import routine takes a closed label set; anything outside it is
/// rejected downstream, which is why unrecognized input maps to the most
/// common label instead of passing through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaymentMethod {
    #[default]
    Transfer,
    Cash,
    Card,
}

impl PaymentMethod {
    /// The exact label the destination system expects.
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Transfer => "przelew",
            PaymentMethod::Cash => "gotówka",
            PaymentMethod::Card => "karta",
        }
    }

    /// Map free-text input onto the vocabulary, case-insensitively.
    /// Transfer-like terms, unrecognized terms and blank input all resolve
    /// to [`PaymentMethod::Transfer`].
    pub fn from_input(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "gotówka" | "gotowka" | "cash" => PaymentMethod::Cash,
            "karta" | "card" => PaymentMethod::Card,
            _ => PaymentMethod::Transfer,
        }
    }
}

/// One fully normalized purchase-register entry.
///
/// Free-text fields are stored XML-escaped; the tax ID is digits-only;
/// amounts have already been floored and capped per the register's rules.
/// An instance lives for one conversion and is discarded with the response.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceRecord {
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub purchase_date: NaiveDate,
    pub receipt_date: NaiveDate,
    pub due_date: NaiveDate,
    pub seller_tax_id: String,
    pub seller_name: String,
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub vat_rate: i64,
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub gross_amount: Decimal,
    pub currency: String,
    pub payment_method: PaymentMethod,
}

impl InvoiceRecord {
    /// Build a normalized record from raw input.
    ///
    /// Resolution order and defaults:
    /// - purchase and receipt dates fall back to the issue date, the due
    ///   date to the issue date plus [`DUE_DATE_OFFSET_DAYS`], and the
    ///   issue date itself to the current date;
    /// - the gross amount falls back to net + VAT;
    /// - text placeholders are `"BRAK"` for the invoice number and seller
    ///   name, `"Polska"` for the country and empty for address parts.
    ///
    /// Under [`ConvertOptions::strict`] a missing required field or a
    /// present-but-unparseable date, amount or rate is an error; vocabulary
    /// fields (currency, payment method) still map unrecognized input to
    /// their default, as the destination accepts nothing else anyway.
    pub fn from_raw(raw: &RawRecord, options: ConvertOptions) -> Result<Self, RejestrError> {
        if options.strict {
            let missing = raw.missing_required();
            if !missing.is_empty() {
                return Err(RejestrError::Input(format!(
                    "missing required fields: {}",
                    missing.join(", ")
                )));
            }
        }

        let invoice_number = resolve_text(raw, Field::InvoiceNumber, options, DEFAULT_TEXT)?;
        let seller_name = resolve_text(raw, Field::SellerName, options, DEFAULT_TEXT)?;
        let street = resolve_text(raw, Field::Street, options, "")?;
        let city = resolve_text(raw, Field::City, options, "")?;
        let postal_code = resolve_text(raw, Field::PostalCode, options, "")?;
        let country = resolve_text(raw, Field::Country, options, DEFAULT_COUNTRY)?;
        let tax_id_raw = resolve_text(raw, Field::SellerTaxId, options, "")?;
        let currency_raw = resolve_text(raw, Field::Currency, options, "")?;
        let payment_raw = resolve_text(raw, Field::PaymentMethod, options, "")?;

        let issue_date = resolve_date(raw, Field::IssueDate, options, || {
            Local::now().date_naive()
        })?;
        let purchase_date = resolve_date(raw, Field::PurchaseDate, options, || issue_date)?;
        let receipt_date = resolve_date(raw, Field::ReceiptDate, options, || issue_date)?;
        let due_date = resolve_date(raw, Field::DueDate, options, || {
            issue_date
                .checked_add_days(Days::new(DUE_DATE_OFFSET_DAYS))
                .unwrap_or(issue_date)
        })?;

        let vat_rate = resolve_vat_rate(raw, options)?;
        let net_amount = resolve_amount(raw, Field::NetAmount, options, || DEFAULT_NET_AMOUNT)?;
        let vat_amount = resolve_amount(raw, Field::VatAmount, options, || DEFAULT_VAT_AMOUNT)?;
        let gross_amount = resolve_amount(raw, Field::GrossAmount, options, || {
            // Parsed amounts span Decimal's whole range, where `+` panics.
            // Overflowing operands share a sign, so saturating by sign lands
            // in the same floor-or-cap branch the exact sum would.
            let saturated = if net_amount > Decimal::ZERO { MAX_AMOUNT } else { Decimal::ZERO };
            net_amount.checked_add(vat_amount).unwrap_or(saturated)
        })?;
        let (net_amount, vat_amount, gross_amount) =
            clamp_amounts(net_amount, vat_amount, gross_amount);

        Ok(InvoiceRecord {
            invoice_number: escape_text(&invoice_number),
            issue_date,
            purchase_date,
            receipt_date,
            due_date,
            seller_tax_id: clean_nip(&tax_id_raw),
            seller_name: escape_text(&seller_name),
            street: escape_text(&street),
            city: escape_text(&city),
            postal_code: escape_text(&postal_code),
            country: escape_text(&country),
            vat_rate,
            net_amount,
            vat_amount,
            gross_amount,
            currency: normalize::normalize_currency(&currency_raw),
            payment_method: PaymentMethod::from_input(&payment_raw),
        })
    }
}

fn resolve_text(
    raw: &RawRecord,
    field: Field,
    options: ConvertOptions,
    default: &str,
) -> Result<String, RejestrError> {
    match raw.get(field) {
        Some(value) => match coerce_string(value) {
            Some(text) => Ok(text),
            None if options.strict => Err(RejestrError::Field {
                field: field.canonical(),
                message: format!("not a textual value: {value}"),
            }),
            None => Ok(default.to_string()),
        },
        None => Ok(default.to_string()),
    }
}

fn resolve_date<F>(
    raw: &RawRecord,
    field: Field,
    options: ConvertOptions,
    default: F,
) -> Result<NaiveDate, RejestrError>
where
    F: FnOnce() -> NaiveDate,
{
    match raw.get(field) {
        Some(value) => match normalize::parse_date(value) {
            Some(date) => Ok(date),
            None if options.strict => Err(RejestrError::Field {
                field: field.canonical(),
                message: format!("not a date or serial day number: {value}"),
            }),
            None => Ok(Local::now().date_naive()),
        },
        None => Ok(default()),
    }
}

fn resolve_amount<F>(
    raw: &RawRecord,
    field: Field,
    options: ConvertOptions,
    default: F,
) -> Result<Decimal, RejestrError>
where
    F: FnOnce() -> Decimal,
{
    match raw.get(field) {
        Some(value) => match normalize::parse_amount(value) {
            Some(amount) => Ok(amount),
            None if options.strict => Err(RejestrError::Field {
                field: field.canonical(),
                message: format!("not an amount: {value}"),
            }),
            None => Ok(default()),
        },
        None => Ok(default()),
    }
}

fn resolve_vat_rate(raw: &RawRecord, options: ConvertOptions) -> Result<i64, RejestrError> {
    match raw.get(Field::VatRate) {
        Some(value) => match normalize::parse_amount(value) {
            // Fractional rates truncate, as the register carries whole
            // percentages only.
            Some(rate) => Ok(rate.trunc().to_i64().unwrap_or(DEFAULT_VAT_RATE)),
            None if options.strict => Err(RejestrError::Field {
                field: Field::VatRate.canonical(),
                message: format!("not a rate: {value}"),
            }),
            None => Ok(DEFAULT_VAT_RATE),
        },
        None => Ok(DEFAULT_VAT_RATE),
    }
}
