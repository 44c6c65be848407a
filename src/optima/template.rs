//! The fixed register-entry template.
//!
//! One document carries exactly one `REJESTR_ZAKUPU_VAT` entry with exactly
//! one line item and one payment. Every element not filled from the record
//! is a literal the import routine requires verbatim; none of it derives
//! from input. Free-text slots that may hold arbitrary characters are
//! CDATA-wrapped; the record's text is already entity-escaped, so bodies
//! pass through the writer without re-escaping.

use super::xml_utils::{XmlResult, XmlWriter};
use super::{CATEGORY_CODE, DATABASE_ID, OPTIMA_NS, REGISTER_NAME, SCHEMA_VERSION};
use crate::core::{InvoiceRecord, RejestrError};
use crate::optima::DocumentIds;

/// Render one purchase-register entry as a complete offline-import
/// document, declaration included.
pub fn to_optima_xml(record: &InvoiceRecord, ids: &DocumentIds) -> XmlResult {
    let mut w = XmlWriter::new()?;

    w.start_element_with_attrs("ROOT", &[("xmlns", OPTIMA_NS)])?;
    w.start_element("REJESTRY_ZAKUPU_VAT")?;
    w.text_element("WERSJA", SCHEMA_VERSION)?;
    w.text_element("BAZA_ZRD_ID", DATABASE_ID)?;
    w.text_element("BAZA_DOC_ID", DATABASE_ID)?;
    w.start_element("REJESTR_ZAKUPU_VAT")?;

    // Document header and dates
    w.text_element("ID_ZRODLA", &ids.source)?;
    w.text_element("MODUL", "Rejestr Vat")?;
    w.text_element("TYP", "Rejestr zakupu")?;
    w.text_element("REJESTR", REGISTER_NAME)?;
    w.text_element("DATA_WYSTAWIENIA", &record.issue_date.to_string())?;
    w.text_element("DATA_ZAKUPU", &record.purchase_date.to_string())?;
    w.text_element("DATA_WPLYWU", &record.receipt_date.to_string())?;
    w.text_element("TERMIN", &record.due_date.to_string())?;
    w.text_element("DATA_DATAOBOWIAZKUPODATKOWEGO", &record.purchase_date.to_string())?;
    w.text_element("DATA_DATAPRAWAODLICZENIA", &record.purchase_date.to_string())?;
    w.cdata_element("NUMER", &record.invoice_number)?;
    w.text_element("KOREKTA", "Nie")?;
    w.empty_element("KOREKTA_NUMER")?;
    w.text_element("WEWNETRZNA", "Nie")?;
    w.text_element("METODA_KASOWA", "Nie")?;
    w.text_element("FISKALNA", "Nie")?;
    w.text_element("DETALICZNA", "Nie")?;
    w.text_element("EKSPORT", "nie")?;
    w.text_element("FINALNY", "Nie")?;
    w.text_element("PODATNIK_CZYNNY", "Tak")?;
    w.escaped_text_element("IDENTYFIKATOR_KSIEGOWY", &accounting_identifier(record))?;

    // Contractor data, repeated in the payer role below
    w.text_element("TYP_PODMIOTU", "kontrahent")?;
    w.cdata_element("PODMIOT", &record.seller_name)?;
    w.text_element("PODMIOT_ID", &ids.party)?;
    w.text_element("PODMIOT_NIP", &record.seller_tax_id)?;
    w.cdata_element("NAZWA1", &record.seller_name)?;
    w.empty_element("NAZWA2")?;
    w.empty_element("NAZWA3")?;
    w.empty_element("NIP_KRAJ")?;
    w.text_element("NIP", &record.seller_tax_id)?;
    w.escaped_text_element("KRAJ", &record.country)?;
    w.text_element("WOJEWODZTWO", "mazowieckie")?;
    w.empty_element("POWIAT")?;
    w.empty_element("GMINA")?;
    w.cdata_element("ULICA", &record.street)?;
    w.empty_element("NR_DOMU")?;
    w.empty_element("NR_LOKALU")?;
    w.cdata_element("MIASTO", &record.city)?;
    w.escaped_text_element("KOD_POCZTOWY", &record.postal_code)?;
    w.escaped_text_element("POCZTA", &record.city)?;
    w.empty_element("DODATKOWE")?;
    w.empty_element("PESEL")?;
    w.text_element("ROLNIK", "Nie")?;
    w.text_element("TYP_PLATNIKA", "kontrahent")?;
    w.escaped_text_element("PLATNIK", &record.seller_name)?;
    w.text_element("PLATNIK_ID", &ids.party)?;
    w.text_element("PLATNIK_NIP", &record.seller_tax_id)?;

    // Category, payment form, VAT declaration period
    w.text_element("KATEGORIA", CATEGORY_CODE)?;
    w.text_element("KATEGORIA_ID", &ids.category)?;
    w.empty_element("OPIS")?;
    w.text_element("FORMA_PLATNOSCI", record.payment_method.label())?;
    w.text_element("FORMA_PLATNOSCI_ID", &ids.payment_form)?;
    w.text_element("DEKLARACJA_VAT7", &record.issue_date.format("%Y-%m").to_string())?;
    w.text_element("DEKLARACJA_VATUE", "Nie")?;

    // Currency, quoted 1:1 against the NBP table
    w.text_element("WALUTA", &record.currency)?;
    w.text_element("KURS_WALUTY", "NBP")?;
    w.text_element("NOTOWANIE_WALUTY_ILE", "1")?;
    w.text_element("NOTOWANIE_WALUTY_ZA_ILE", "1")?;
    w.text_element("DATA_KURSU", &record.purchase_date.to_string())?;
    w.text_element("KURS_DO_KSIEGOWANIA", "Nie")?;
    w.text_element("KURS_WALUTY_2", "NBP")?;
    w.text_element("NOTOWANIE_WALUTY_ILE_2", "1")?;
    w.text_element("NOTOWANIE_WALUTY_ZA_ILE_2", "1")?;
    w.text_element("DATA_KURSU_2", &record.purchase_date.to_string())?;
    w.text_element("PLATNOSC_VAT_W_PLN", "Nie")?;
    w.text_element("AKCYZA_NA_WEGIEL", "0")?;
    w.text_element("AKCYZA_NA_WEGIEL_KOLUMNA_KPR", "nie księgować")?;
    w.text_element("JPK_FA", "Nie")?;
    w.text_element("MPP", "Nie")?;
    w.empty_element("NR_KSEF")?;
    w.empty_element("DODATKOWY_OPIS")?;

    write_line_item(&mut w, record, ids)?;
    w.empty_element("KWOTY_DODATKOWE")?;
    write_payment(&mut w, record, ids)?;
    w.empty_element("KODY_JPK")?;
    w.empty_element("ATRYBUTY")?;

    w.end_element("REJESTR_ZAKUPU_VAT")?;
    w.end_element("REJESTRY_ZAKUPU_VAT")?;
    w.end_element("ROOT")?;
    w.into_string()
}

/// The bookkeeping identifier: register name plus the invoice number with
/// `/` flattened to `_`, since `/` separates identifier segments.
fn accounting_identifier(record: &InvoiceRecord) -> String {
    format!("{REGISTER_NAME}/{}", record.invoice_number.replace('/', "_"))
}

fn write_line_item(
    w: &mut XmlWriter,
    record: &InvoiceRecord,
    ids: &DocumentIds,
) -> Result<(), RejestrError> {
    w.start_element("POZYCJE")?;
    w.start_element("POZYCJA")?;
    w.text_element("LP", "1")?;
    w.text_element("KATEGORIA_POS", CATEGORY_CODE)?;
    w.text_element("KATEGORIA_ID_POS", &ids.category)?;
    w.text_element("STAWKA_VAT", &record.vat_rate.to_string())?;
    w.text_element("STATUS_VAT", "opodatkowana")?;
    w.amount_element("NETTO", record.net_amount)?;
    w.amount_element("VAT", record.vat_amount)?;
    w.amount_element("NETTO_SYS", record.net_amount)?;
    w.amount_element("VAT_SYS", record.vat_amount)?;
    w.amount_element("NETTO_SYS2", record.net_amount)?;
    w.amount_element("VAT_SYS2", record.vat_amount)?;
    w.text_element("RODZAJ_ZAKUPU", "usługi")?;
    w.text_element("ODLICZENIA_VAT", "tak")?;
    w.text_element("KOLUMNA_KPR", "Inne")?;
    w.text_element("KOLUMNA_RYCZALT", "3.00")?;
    w.empty_element("OPIS_POZ")?;
    w.end_element("POZYCJA")?;
    w.end_element("POZYCJE")?;
    Ok(())
}

fn write_payment(
    w: &mut XmlWriter,
    record: &InvoiceRecord,
    ids: &DocumentIds,
) -> Result<(), RejestrError> {
    w.start_element("PLATNOSCI")?;
    w.start_element("PLATNOSC")?;
    w.text_element("ID_ZRODLA_PLAT", &ids.payment)?;
    w.text_element("TERMIN_PLAT", &record.due_date.to_string())?;
    w.text_element("FORMA_PLATNOSCI_PLAT", record.payment_method.label())?;
    w.text_element("FORMA_PLATNOSCI_ID_PLAT", &ids.payment_form)?;
    w.amount_element("KWOTA_PLAT", record.gross_amount)?;
    w.text_element("WALUTA_PLAT", &record.currency)?;
    w.text_element("KURS_WALUTY_PLAT", "NBP")?;
    w.text_element("NOTOWANIE_WALUTY_ILE_PLAT", "1")?;
    w.text_element("NOTOWANIE_WALUTY_ZA_ILE_PLAT", "1")?;
    w.amount_element("KWOTA_PLN_PLAT", record.gross_amount)?;
    w.text_element("KIERUNEK", "rozchód")?;
    w.text_element("PODLEGA_ROZLICZENIU", "tak")?;
    w.empty_element("KONTO")?;
    w.text_element("NIE_NALICZAJ_ODSETEK", "Nie")?;
    w.text_element("PRZELEW_SEPA", "Nie")?;
    w.text_element("DATA_KURSU_PLAT", &record.purchase_date.to_string())?;
    w.text_element("WALUTA_DOK", &record.currency)?;
    w.text_element("PLATNOSC_TYP_PODMIOTU", "kontrahent")?;
    w.escaped_text_element("PLATNOSC_PODMIOT", &record.seller_name)?;
    w.text_element("PLATNOSC_PODMIOT_ID", &ids.party)?;
    w.text_element("PLATNOSC_PODMIOT_NIP", &record.seller_tax_id)?;
    w.text_element("PLAT_KATEGORIA", CATEGORY_CODE)?;
    w.text_element("PLAT_KATEGORIA_ID", &ids.category)?;
    w.escaped_text_element("PLAT_ELIXIR_O1", &payment_title(record))?;
    w.empty_element("PLAT_ELIXIR_O2")?;
    w.empty_element("PLAT_ELIXIR_O3")?;
    w.empty_element("PLAT_ELIXIR_O4")?;
    w.text_element("PLAT_FA_Z_PA", "Nie")?;
    w.text_element("PLAT_VAN_FA_Z_PA", "Nie")?;
    w.text_element("PLAT_SPLIT_PAYMENT", "Nie")?;
    w.amount_element("PLAT_SPLIT_KWOTA_VAT", record.vat_amount)?;
    w.text_element("PLAT_SPLIT_NIP", &record.seller_tax_id)?;
    w.escaped_text_element("PLAT_SPLIT_NR_DOKUMENTU", &record.invoice_number)?;
    w.end_element("PLATNOSC")?;
    w.end_element("PLATNOSCI")?;
    Ok(())
}

/// Transfer title carried through to the bank order.
fn payment_title(record: &InvoiceRecord) -> String {
    format!("Zapłata za {}", record.invoice_number)
}
