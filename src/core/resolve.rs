//! Raw input records and alias resolution.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use super::fields::Field;

/// The caller-supplied flat mapping, exactly as received in the request body.
///
/// Keys may follow any of the supported conventions (see [`Field::aliases`]);
/// values are whatever the upstream automation produced — strings, numbers,
/// nulls, or empty strings for blank cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Wrap an already-parsed JSON object.
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Accept a JSON value if it is an object; anything else is unusable.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// True when the caller sent no keys at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The keys as received, for echoing back to the caller.
    pub fn keys(&self) -> Vec<String> {
        self.0.keys().cloned().collect()
    }

    /// Resolve a logical field: the first alias whose value is present,
    /// non-null and (for strings) non-blank wins.
    pub fn get(&self, field: Field) -> Option<&Value> {
        field
            .aliases()
            .iter()
            .filter_map(|alias| self.0.get(*alias))
            .find(|value| is_usable(value))
    }

    /// Whether any alias of `field` carries a usable value.
    pub fn contains(&self, field: Field) -> bool {
        self.get(field).is_some()
    }

    /// Canonical names of required fields with no usable value.
    pub fn missing_required(&self) -> Vec<&'static str> {
        Field::REQUIRED
            .iter()
            .filter(|field| !self.contains(**field))
            .map(|field| field.canonical())
            .collect()
    }

    /// The built-in sample row served by the `/test` endpoint: numeric keys,
    /// a NIP with a label prefix, quotes in the seller name, a currency
    /// symbol and a cash payment — one exercise of every normalizer.
    pub fn sample() -> Self {
        let value = json!({
            "0": "TEST/123/2025",
            "1": "2025-05-21",
            "2": "2025-05-21",
            "3": "2025-05-21",
            "4": "2025-06-04",
            "5": "NIP 123-456-78-90",
            "6": "Test Firma \"Sp. z o.o.\"",
            "7": "ul. Testowa 1",
            "8": "",
            "9": "Warszawa",
            "10": "00-001",
            "11": "Polska",
            "12": "23",
            "13": "1000.00",
            "14": "230.00",
            "15": "1230.00",
            "16": "zł",
            "17": "gotówka",
        });
        Self::from_value(value).expect("sample payload is an object")
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// A value counts as present when it is not null and not a blank string.
fn is_usable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        _ => true,
    }
}
