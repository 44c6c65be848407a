//! # rejestr
//!
//! Converts tabular invoice records into the purchase-VAT-register XML
//! consumed by the Comarch Optima offline import.
//!
//! Input rows arrive as flat JSON mappings under any of four historical
//! key conventions (stringified column indices, spreadsheet column letters,
//! English names, Polish names). Values are normalized per attribute
//! (spreadsheet serial dates, decimal commas, NIP labels, currency symbols,
//! payment wordings) and rendered into the fixed register template. All
//! monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use rejestr::{ConvertOptions, InvoiceRecord, RawRecord};
//! use rust_decimal_macros::dec;
//! use serde_json::json;
//!
//! let raw = RawRecord::from_value(json!({
//!     "invoiceNumber": "FV/44/2025",
//!     "issueDate": "2025-05-21",
//!     "sellerTaxId": "NIP 123-456-78-90",
//!     "sellerName": "Firma Testowa",
//!     "netAmount": "1000,00",
//!     "vatAmount": "230,00",
//!     "grossAmount": "1230,00",
//! }))
//! .unwrap();
//!
//! let record = InvoiceRecord::from_raw(&raw, ConvertOptions::default()).unwrap();
//! assert_eq!(record.seller_tax_id, "1234567890");
//! assert_eq!(record.gross_amount, dec!(1230.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Record model, field aliases, normalizers |
//! | `optima` | Register XML template and document identifiers |
//! | `server` | Axum HTTP conversion API |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "optima")]
pub mod optima;

#[cfg(feature = "server")]
pub mod server;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
