//! Identifier generation for one register document.

use uuid::Uuid;

/// The five identifiers embedded in one register document.
///
/// A fresh, independent set is generated per conversion; the values carry
/// no meaning across requests. Each identifier stands for one referent and
/// is repeated in every slot naming that referent — the party identifier
/// appears for the subject, the payer and the payment's subject alike, so
/// the import routine links them to a single contractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentIds {
    /// `ID_ZRODLA` — the source document.
    pub source: String,
    /// `PODMIOT_ID`, `PLATNIK_ID`, `PLATNOSC_PODMIOT_ID` — the contractor.
    pub party: String,
    /// `KATEGORIA_ID` and its line and payment slots — the bookkeeping
    /// category.
    pub category: String,
    /// `FORMA_PLATNOSCI_ID` and its payment slot — the payment form.
    pub payment_form: String,
    /// `ID_ZRODLA_PLAT` — the payment record.
    pub payment: String,
}

impl DocumentIds {
    /// Generate a fresh identifier set in the uppercase UUID form the
    /// import routine expects.
    pub fn generate() -> Self {
        Self {
            source: fresh_id(),
            party: fresh_id(),
            category: fresh_id(),
            payment_form: fresh_id(),
            payment: fresh_id(),
        }
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}
