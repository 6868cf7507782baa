use log::error;
use serde_json::Value;
use thiserror::Error;

use crate::Record;
use crate::payload::error::PayloadError;
use crate::payload::layout;
use crate::payload::parse_readings;
use crate::payload::parser::Reading;
use crate::payload::schema::{COUNTER_SCHEMA, Grouping, LOCATION_SCHEMA, Schema};

/// Variable name carrying the raw hexadecimal payload.
pub const DATA_VARIABLE: &str = "data";
/// Variable name of the replacement record emitted on decode failure.
pub const PARSE_ERROR_VARIABLE: &str = "parse_error";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("no schema matches payload length {len}")]
    UnknownLayout { len: usize },
}

/// Decode the first `"data"` record, selecting the schema by payload length.
///
/// Both 5-byte layouts share a length, so auto-selection resolves 5 bytes to
/// the counter schema; use [`decode_with`] to decode the version layout.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use sigparse_core::{Record, decode};
///
/// let decoded = decode(vec![Record::new("data", json!("0109611395"))]);
/// assert_eq!(decoded[3].variable, "humidity");
/// assert_eq!(decoded[3].value, json!(50.13));
/// ```
pub fn decode(records: Vec<Record>) -> Vec<Record> {
    apply(records, None)
}

/// Decode the first `"data"` record against an explicit schema.
pub fn decode_with(schema: &Schema, records: Vec<Record>) -> Vec<Record> {
    apply(records, Some(schema))
}

/// Schema used by [`decode`] for a payload of `len` bytes.
pub fn select_schema(len: usize) -> Option<&'static Schema> {
    match len {
        layout::READINGS_LEN => Some(&COUNTER_SCHEMA),
        layout::LOCATION_LEN => Some(&LOCATION_SCHEMA),
        _ => None,
    }
}

/// Decode a raw hex payload without record plumbing.
pub fn decode_payload(schema: &Schema, hex_payload: &str) -> Result<Vec<Reading>, PayloadError> {
    let bytes = hex::decode(hex_payload)?;
    parse_readings(schema, &bytes)
}

fn apply(mut records: Vec<Record>, schema: Option<&Schema>) -> Vec<Record> {
    let Some(raw) = records.iter().find(|r| r.variable == DATA_VARIABLE) else {
        return records;
    };

    match derive_records(raw, schema) {
        Ok(derived) => {
            records.extend(derived);
            records
        }
        Err(err) => {
            error!("payload decode failed: {err}");
            vec![Record::new(PARSE_ERROR_VARIABLE, Value::from(err.to_string()))]
        }
    }
}

fn derive_records(raw: &Record, schema: Option<&Schema>) -> Result<Vec<Record>, DecodeError> {
    let hex_payload = raw.value.as_str().ok_or(PayloadError::NonStringPayload)?;
    let bytes = hex::decode(hex_payload).map_err(PayloadError::from)?;
    let schema = match schema {
        Some(schema) => schema,
        None => select_schema(bytes.len()).ok_or(DecodeError::UnknownLayout { len: bytes.len() })?,
    };
    let readings = parse_readings(schema, &bytes)?;
    Ok(readings
        .into_iter()
        .map(|reading| to_record(reading, raw, schema.grouping))
        .collect())
}

fn to_record(reading: Reading, source: &Record, grouping: Grouping) -> Record {
    let (serie, group) = match grouping {
        Grouping::Serie => (source.serie.clone(), None),
        Grouping::GroupOrSerie => (
            None,
            source.group.clone().or_else(|| source.serie.clone()),
        ),
    };
    Record {
        variable: reading.variable.to_string(),
        value: reading.value,
        unit: reading.unit.map(str::to_string),
        location: reading.coordinates,
        serie,
        group,
        time: source.time.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode, decode_payload, select_schema};
    use crate::payload::schema::{COUNTER_SCHEMA, LOCATION_SCHEMA, VERSION_SCHEMA};
    use crate::Record;
    use serde_json::json;

    #[test]
    fn decode_without_data_record_is_identity() {
        let records = vec![
            Record::new("temperature", json!(21.5)),
            Record::new("battery", json!(92)),
        ];

        let decoded = decode(records.clone());
        assert_eq!(decoded, records);
    }

    #[test]
    fn decode_empty_sequence_is_identity() {
        assert_eq!(decode(Vec::new()), Vec::new());
    }

    #[test]
    fn decode_replaces_sequence_on_bad_hex() {
        let records = vec![
            Record::new("battery", json!(92)),
            Record::new("data", json!("01zz611395")),
        ];

        let decoded = decode(records);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].variable, "parse_error");
        assert!(decoded[0].value.as_str().unwrap().contains("invalid hex"));
    }

    #[test]
    fn decode_rejects_non_string_payload() {
        let decoded = decode(vec![Record::new("data", json!(42))]);
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].variable, "parse_error");
        assert_eq!(decoded[0].value, json!("payload value is not a hex string"));
    }

    #[test]
    fn decode_rejects_unmatched_length() {
        let decoded = decode(vec![Record::new("data", json!("01096113950A"))]);
        assert_eq!(decoded.len(), 1);
        assert_eq!(
            decoded[0].value,
            json!("no schema matches payload length 6")
        );
    }

    #[test]
    fn decode_uses_first_data_record_only() {
        let mut first = Record::new("data", json!("0109611395"));
        first.serie = Some("first".to_string());
        let mut second = Record::new("data", json!("7F00000000"));
        second.serie = Some("second".to_string());

        let decoded = decode(vec![first, second]);
        assert_eq!(decoded.len(), 5);
        assert_eq!(decoded[2].variable, "counter");
        assert_eq!(decoded[2].value, json!(1));
        assert_eq!(decoded[2].serie.as_deref(), Some("first"));
    }

    #[test]
    fn select_schema_by_length() {
        assert_eq!(select_schema(5).unwrap().name, COUNTER_SCHEMA.name);
        assert_eq!(select_schema(11).unwrap().name, LOCATION_SCHEMA.name);
        assert!(select_schema(4).is_none());
    }

    #[test]
    fn decode_payload_returns_readings() {
        let readings = decode_payload(&VERSION_SCHEMA, "0109611395").unwrap();
        assert_eq!(readings[0].variable, "protocol_version");
        assert_eq!(readings[1].value, json!(24.01));
    }

    #[test]
    fn decode_payload_propagates_hex_errors() {
        let err = decode_payload(&VERSION_SCHEMA, "010961139").unwrap_err();
        assert!(err.to_string().contains("invalid hex"));
    }
}
