//! Logical invoice fields and their input key aliases.
//!
//! Callers have submitted records under four naming conventions over the
//! years: English attribute names, Polish attribute names, single spreadsheet
//! column letters, and stringified column indices. Every logical field keeps
//! an ordered alias list so one shared lookup resolves all of them; anything
//! still unresolved falls back to the field's documented default.
//!
//! Column 8 of the historical sheet layout is an unused filler column, so the
//! letter convention runs A–Q over 17 fields while indices run "0"–"17".

/// One logical invoice attribute of a conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    InvoiceNumber,
    IssueDate,
    PurchaseDate,
    ReceiptDate,
    DueDate,
    SellerTaxId,
    SellerName,
    Street,
    City,
    PostalCode,
    Country,
    VatRate,
    NetAmount,
    VatAmount,
    GrossAmount,
    Currency,
    PaymentMethod,
}

impl Field {
    /// Every logical field, in spreadsheet column order.
    pub const ALL: [Field; 17] = [
        Field::InvoiceNumber,
        Field::IssueDate,
        Field::PurchaseDate,
        Field::ReceiptDate,
        Field::DueDate,
        Field::SellerTaxId,
        Field::SellerName,
        Field::Street,
        Field::City,
        Field::PostalCode,
        Field::Country,
        Field::VatRate,
        Field::NetAmount,
        Field::VatAmount,
        Field::GrossAmount,
        Field::Currency,
        Field::PaymentMethod,
    ];

    /// Fields a well-formed submission is expected to carry. Their absence is
    /// reported back to the caller (and rejected outright in strict mode).
    pub const REQUIRED: [Field; 7] = [
        Field::InvoiceNumber,
        Field::IssueDate,
        Field::SellerTaxId,
        Field::SellerName,
        Field::NetAmount,
        Field::VatAmount,
        Field::GrossAmount,
    ];

    /// Canonical (English) name, used in responses and error messages.
    pub fn canonical(&self) -> &'static str {
        self.aliases()[0]
    }

    /// Accepted input keys, highest priority first:
    /// English name, Polish name, column letter, column index.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Field::InvoiceNumber => &["invoiceNumber", "numer_faktury", "A", "0"],
            Field::IssueDate => &["issueDate", "data_wystawienia", "B", "1"],
            Field::PurchaseDate => &["purchaseDate", "data_zakupu", "C", "2"],
            Field::ReceiptDate => &["receiptDate", "data_wplywu", "D", "3"],
            Field::DueDate => &["dueDate", "termin_platnosci", "E", "4"],
            Field::SellerTaxId => &["sellerTaxId", "nip_sprzedawcy", "F", "5"],
            Field::SellerName => &["sellerName", "nazwa_sprzedawcy", "G", "6"],
            Field::Street => &["street", "ulica", "H", "7"],
            Field::City => &["city", "miasto", "I", "9"],
            Field::PostalCode => &["postalCode", "kod_pocztowy", "J", "10"],
            Field::Country => &["country", "kraj", "K", "11"],
            Field::VatRate => &["vatRate", "stawka_vat", "L", "12"],
            Field::NetAmount => &["netAmount", "netto", "M", "13"],
            Field::VatAmount => &["vatAmount", "vat", "N", "14"],
            Field::GrossAmount => &["grossAmount", "brutto", "O", "15"],
            Field::Currency => &["currency", "waluta", "P", "16"],
            Field::PaymentMethod => &["paymentMethod", "forma_platnosci", "Q", "17"],
        }
    }
}
