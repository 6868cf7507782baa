use serde_json::Value;

use super::error::PayloadError;
use super::layout;
use super::reader::PayloadReader;
use super::schema::{FieldKind, Schema};
use crate::Coordinates;

/// Decoded schema field, before it is turned into a platform record.
#[derive(Debug, Clone, PartialEq)]
pub struct Reading {
    pub variable: &'static str,
    pub value: Value,
    pub unit: Option<&'static str>,
    pub coordinates: Option<Coordinates>,
}

/// Decode every field of `schema` out of `payload`, in declaration order.
///
/// Fails as a unit: a payload shorter than the schema span yields an error
/// and no readings.
pub fn parse_readings(schema: &Schema, payload: &[u8]) -> Result<Vec<Reading>, PayloadError> {
    let reader = PayloadReader::new(payload);
    reader.require_len(schema.min_len)?;

    let mut readings = Vec::with_capacity(schema.fields.len());
    for field in schema.fields {
        let reading = match &field.kind {
            FieldKind::Int8 { offset } => Reading {
                variable: field.variable,
                value: Value::from(reader.read_i8(*offset)?),
                unit: None,
                coordinates: None,
            },
            FieldKind::Scaled16 {
                range,
                signed,
                unit,
            } => {
                let raw = if *signed {
                    f64::from(reader.read_i16_be(range.clone())?)
                } else {
                    f64::from(reader.read_u16_be(range.clone())?)
                };
                Reading {
                    variable: field.variable,
                    value: Value::from(raw / layout::CENTI_DIVISOR),
                    unit: Some(*unit),
                    coordinates: None,
                }
            }
            FieldKind::Coordinates {
                lat_sign,
                lat_raw,
                lng_sign,
                lng_raw,
            } => {
                let lat = coordinate(&reader, *lat_sign, lat_raw.clone())?;
                let lng = coordinate(&reader, *lng_sign, lng_raw.clone())?;
                Reading {
                    variable: field.variable,
                    value: Value::from(format!("{lat}, {lng}")),
                    unit: None,
                    coordinates: Some(Coordinates { lat, lng }),
                }
            }
        };
        readings.push(reading);
    }
    Ok(readings)
}

/// Indicator byte selects the sign: zero is positive, anything else negative.
fn coordinate(
    reader: &PayloadReader<'_>,
    sign_offset: usize,
    raw_range: std::ops::Range<usize>,
) -> Result<f64, PayloadError> {
    let indicator = reader.read_u8(sign_offset)?;
    let raw = reader.read_u16_be(raw_range)?;
    let magnitude = f64::from(raw) * layout::COORD_MULTIPLIER / layout::COORD_DIVISOR;
    Ok(if indicator == 0 { magnitude } else { -magnitude })
}
