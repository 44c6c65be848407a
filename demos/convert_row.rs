use rejestr::optima;
use rejestr::{ConvertOptions, RawRecord};
use serde_json::json;

fn main() {
    // One row as the spreadsheet automation posts it: column-index keys,
    // a serial issue date and decimal-comma amounts.
    let raw = RawRecord::from_value(json!({
        "0": "FV/2025/05/117",
        "1": 45807,
        "5": "NIP 526-030-50-06",
        "6": "Hurtownia Papiernicza \"Omega\" Sp. z o.o.",
        "7": "ul. Składowa 12",
        "9": "Łódź",
        "10": "90-127",
        "13": "3540,65",
        "14": "814,35",
        "15": "4355,00",
        "16": "zł",
        "17": "przelew",
    }))
    .expect("row is a JSON object");

    let conversion =
        optima::convert(&raw, ConvertOptions::default()).expect("conversion should succeed");

    println!("{}", conversion.xml);
    eprintln!("source document id: {}", conversion.ids.source);
    if !conversion.missing_fields.is_empty() {
        eprintln!("defaulted fields: {:?}", conversion.missing_fields);
    }
}
