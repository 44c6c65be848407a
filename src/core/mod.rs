//! Core record model, field resolution, and value normalizers.
//!
//! This module provides the foundational types for the purchase-register
//! conversion: raw-input lookup across the historical key conventions,
//! per-attribute normalization, and the resulting [`InvoiceRecord`].

pub mod currencies;
mod error;
mod fields;
mod normalize;
mod record;
mod resolve;

pub use currencies::is_known_currency_code;
pub use error::*;
pub use fields::*;
pub use normalize::*;
pub use record::*;
pub use resolve::*;
