//! JSON response envelopes.
//!
//! Every endpoint answers with one of these two shapes so the upstream
//! automation can branch on `success` alone.

use chrono::Local;
use serde::Serialize;
use serde_json::Value;

/// Body of a successful conversion response.
#[derive(Debug, Serialize)]
pub struct ConvertSuccess {
    pub success: bool,
    pub message: String,
    pub xml_content: String,
    /// Keys the request actually carried, as received.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processed_fields: Option<Vec<String>>,
    /// Required fields the input did not usably supply (lenient mode
    /// substituted defaults for them).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missing_fields: Option<Vec<&'static str>>,
    pub timestamp: String,
}

/// Body of a failed conversion response.
#[derive(Debug, Serialize)]
pub struct ConvertFailure {
    pub success: bool,
    pub error: String,
    /// Debug rendering of the underlying error. Only attached to internal
    /// failures; this API faces the in-house automation, not the public.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
    /// Echo of the submitted record, attached to internal failures for
    /// post-mortem reproduction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received_data: Option<Value>,
    pub timestamp: String,
}

impl ConvertFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            trace: None,
            received_data: None,
            timestamp: timestamp(),
        }
    }
}

/// Response timestamp in RFC 3339 local time.
pub fn timestamp() -> String {
    Local::now().to_rfc3339()
}
