//! Sigparse core library for device uplink payload decoding.
//!
//! This crate implements the decode step a sensor platform runs on every
//! device transmission: the incoming record sequence is scanned for the raw
//! `"data"` entry, its hexadecimal payload is decoded against a declarative
//! byte schema (layout/schema/reader/parser), and the derived readings are
//! appended to the sequence as new records. Decoding is byte-oriented and
//! side-effect free; the only output besides the returned records is a
//! fire-and-forget log line on failure.
//!
//! Invariants:
//! - Decoding is all-or-nothing: either every schema field is emitted or the
//!   whole sequence is replaced by a single `parse_error` record.
//! - A sequence without a `"data"` record passes through unchanged.
//! - Derived records carry the source record's `time` and grouping key.
//!
//! # Examples
//! ```
//! use serde_json::json;
//! use sigparse_core::{Record, decode};
//!
//! let records = vec![Record::new("data", json!("0109611395"))];
//! let decoded = decode(records);
//! assert_eq!(decoded.len(), 4);
//! assert_eq!(decoded[1].variable, "counter");
//! assert_eq!(decoded[2].value, json!(24.01));
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

mod decode;
mod payload;

pub use decode::{
    DATA_VARIABLE, DecodeError, PARSE_ERROR_VARIABLE, decode, decode_payload, decode_with,
    select_schema,
};
pub use payload::error::PayloadError;
pub use payload::parser::{Reading, parse_readings};
pub use payload::schema::{
    COUNTER_SCHEMA, FieldKind, FieldSpec, Grouping, LOCATION_SCHEMA, Schema, VERSION_SCHEMA,
};

/// Single variable/value record exchanged with the host platform.
///
/// `value` and `time` are platform-opaque: the raw payload arrives as a hex
/// string, derived readings are numbers, and timestamps pass through in
/// whatever form the platform supplied them. Optional fields are omitted
/// from serialized output when absent.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use sigparse_core::Record;
///
/// let record = Record::new("data", json!("0109611395"));
/// assert_eq!(record.variable, "data");
/// assert!(record.unit.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Variable name (e.g., "data", "temperature").
    pub variable: String,
    /// Raw or derived value; the platform leaves its type open.
    pub value: Value,
    /// Unit attached to derived readings (e.g., "°C").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Decoded coordinates, set only on `location` records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
    /// Legacy grouping key copied onto derived records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serie: Option<String>,
    /// Grouping key copied onto derived records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Timestamp of the transmission, copied verbatim onto derived records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<Value>,
}

impl Record {
    /// Build a record carrying only a variable name and a value.
    ///
    /// # Examples
    /// ```
    /// use serde_json::json;
    /// use sigparse_core::Record;
    ///
    /// let record = Record::new("counter", json!(1));
    /// assert_eq!(record.value, json!(1));
    /// assert!(record.time.is_none());
    /// ```
    pub fn new(variable: impl Into<String>, value: Value) -> Self {
        Self {
            variable: variable.into(),
            value,
            unit: None,
            location: None,
            serie: None,
            group: None,
            time: None,
        }
    }
}

/// Decoded geolocation attached to a `location` record.
///
/// # Examples
/// ```
/// use sigparse_core::Coordinates;
///
/// let coords = Coordinates { lat: 35.848694, lng: -78.82303 };
/// assert!(coords.lng < 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_omits_optional_fields_when_none() {
        let record = Record::new("data", json!("0109611395"));

        let value = serde_json::to_value(&record).expect("record json");
        assert_eq!(value, json!({ "variable": "data", "value": "0109611395" }));
    }

    #[test]
    fn record_deserializes_without_optional_fields() {
        let record: Record =
            serde_json::from_value(json!({ "variable": "data", "value": "0109611395" }))
                .expect("record from json");
        assert_eq!(record.variable, "data");
        assert!(record.serie.is_none());
        assert!(record.time.is_none());
    }

    #[test]
    fn location_serializes_as_lat_lng() {
        let mut record = Record::new("location", json!("35.848694, -78.82303"));
        record.location = Some(Coordinates {
            lat: 35.848694,
            lng: -78.82303,
        });

        let value = serde_json::to_value(&record).expect("record json");
        assert_eq!(value["location"], json!({ "lat": 35.848694, "lng": -78.82303 }));
    }
}
