use rejestr::{ConvertOptions, InvoiceRecord, RawRecord};
use serde_json::json;

fn main() {
    // The same malformed row under both conversion policies.
    let raw = RawRecord::from_value(json!({
        "invoiceNumber": "FV/9/2025",
        "issueDate": "soon",
        "sellerTaxId": "NIP 123-456-78-90",
        "sellerName": "Firma Krzak",
        "netAmount": "sto",
        "vatAmount": "23,00",
        "grossAmount": "123,00",
    }))
    .expect("row is a JSON object");

    let lenient = InvoiceRecord::from_raw(&raw, ConvertOptions::default())
        .expect("lenient conversion never fails on content");
    println!(
        "lenient: issue date {}, net {}",
        lenient.issue_date, lenient.net_amount
    );

    match InvoiceRecord::from_raw(&raw, ConvertOptions::strict()) {
        Ok(_) => println!("strict: accepted"),
        Err(err) => println!("strict: {err}"),
    }
}
