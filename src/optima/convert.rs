//! One-call conversion from raw input to the import document.

use crate::core::{ConvertOptions, InvoiceRecord, RawRecord, RejestrError};

use super::ids::DocumentIds;
use super::template::to_optima_xml;

/// Outcome of one conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The complete import document.
    pub xml: String,
    /// The normalized record the document was rendered from.
    pub record: InvoiceRecord,
    /// Identifiers embedded in the document.
    pub ids: DocumentIds,
    /// Required fields the input did not usably supply. Lenient
    /// conversions report them here instead of failing.
    pub missing_fields: Vec<&'static str>,
}

/// Convert one raw record with freshly generated identifiers.
pub fn convert(raw: &RawRecord, options: ConvertOptions) -> Result<Conversion, RejestrError> {
    convert_with_ids(raw, options, DocumentIds::generate())
}

/// Convert one raw record embedding the supplied identifiers, for callers
/// that need reproducible documents.
pub fn convert_with_ids(
    raw: &RawRecord,
    options: ConvertOptions,
    ids: DocumentIds,
) -> Result<Conversion, RejestrError> {
    let missing_fields = raw.missing_required();
    let record = InvoiceRecord::from_raw(raw, options)?;
    let xml = to_optima_xml(&record, &ids)?;
    Ok(Conversion {
        xml,
        record,
        ids,
        missing_fields,
    })
}
