//! Comarch Optima purchase-register XML generation.
//!
//! Renders the offline-import document the destination accounting system
//! consumes: one `REJESTRY_ZAKUPU_VAT` batch holding one purchase-register
//! entry with one line item and one payment.
//!
//! # Example
//!
//! ```
//! use rejestr::{ConvertOptions, RawRecord};
//! use rejestr::optima;
//!
//! let conversion = optima::convert(&RawRecord::sample(), ConvertOptions::default()).unwrap();
//! assert!(conversion.xml.contains("<REJESTR>ZAKUP</REJESTR>"));
//! ```

mod convert;
mod ids;
mod template;
pub(crate) mod xml_utils;

pub use convert::{Conversion, convert, convert_with_ids};
pub use ids::DocumentIds;
pub use template::to_optima_xml;

/// Namespace of the offline-import document.
pub const OPTIMA_NS: &str = "http://www.comarch.pl/cdn/optima/offline";

/// Schema version of the register document.
pub const SCHEMA_VERSION: &str = "2.00";

/// Source and destination database tag expected by the importer.
pub const DATABASE_ID: &str = "KSIEG";

/// Register name for incoming purchase documents.
pub const REGISTER_NAME: &str = "ZAKUP";

/// Bookkeeping category assigned to every imported entry.
pub const CATEGORY_CODE: &str = "402-07-01";
