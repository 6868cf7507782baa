use super::layout;

/// Grouping key carried onto derived records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// Copy the source record's `serie` verbatim.
    Serie,
    /// Emit `group`, preferring the source's `group` over its `serie`.
    GroupOrSerie,
}

/// How one schema field is read out of the payload bytes.
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Signed 8-bit integer, unscaled.
    Int8 { offset: usize },
    /// Big-endian 16-bit integer divided by 100, with a unit.
    Scaled16 {
        range: std::ops::Range<usize>,
        signed: bool,
        unit: &'static str,
    },
    /// Sign-indicator byte plus big-endian raw magnitude per coordinate.
    ///
    /// The latitude and longitude magnitudes sit one byte past their
    /// indicators; the literal offsets come from `layout` and are not
    /// derived from each other.
    Coordinates {
        lat_sign: usize,
        lat_raw: std::ops::Range<usize>,
        lng_sign: usize,
        lng_raw: std::ops::Range<usize>,
    },
}

/// One field of a payload schema.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub variable: &'static str,
    pub kind: FieldKind,
}

/// Fixed byte layout for one payload variant.
///
/// Schemas are compile-time constants; decoding never mutates them. Fields
/// are emitted in declaration order.
#[derive(Debug, Clone)]
pub struct Schema {
    pub name: &'static str,
    pub min_len: usize,
    pub grouping: Grouping,
    pub fields: &'static [FieldSpec],
}

/// 5-byte layout: protocol version, temperature, humidity.
pub static VERSION_SCHEMA: Schema = Schema {
    name: "version",
    min_len: layout::READINGS_LEN,
    grouping: Grouping::Serie,
    fields: &[
        FieldSpec {
            variable: "protocol_version",
            kind: FieldKind::Int8 {
                offset: layout::VERSION_OFFSET,
            },
        },
        FieldSpec {
            variable: "temperature",
            kind: FieldKind::Scaled16 {
                range: layout::TEMPERATURE_RANGE,
                signed: true,
                unit: "°C",
            },
        },
        FieldSpec {
            variable: "humidity",
            kind: FieldKind::Scaled16 {
                range: layout::HUMIDITY_RANGE,
                signed: false,
                unit: "%",
            },
        },
    ],
};

/// 5-byte layout: message counter, temperature, humidity.
pub static COUNTER_SCHEMA: Schema = Schema {
    name: "counter",
    min_len: layout::READINGS_LEN,
    grouping: Grouping::Serie,
    fields: &[
        FieldSpec {
            variable: "counter",
            kind: FieldKind::Int8 {
                offset: layout::COUNTER_OFFSET,
            },
        },
        FieldSpec {
            variable: "temperature",
            kind: FieldKind::Scaled16 {
                range: layout::TEMPERATURE_RANGE,
                signed: true,
                unit: "°C",
            },
        },
        FieldSpec {
            variable: "humidity",
            kind: FieldKind::Scaled16 {
                range: layout::HUMIDITY_RANGE,
                signed: false,
                unit: "%",
            },
        },
    ],
};

/// 11-byte layout: counter, temperature, humidity, geolocation.
pub static LOCATION_SCHEMA: Schema = Schema {
    name: "location",
    min_len: layout::LOCATION_LEN,
    grouping: Grouping::GroupOrSerie,
    fields: &[
        FieldSpec {
            variable: "counter",
            kind: FieldKind::Int8 {
                offset: layout::COUNTER_OFFSET,
            },
        },
        FieldSpec {
            variable: "temperature",
            kind: FieldKind::Scaled16 {
                range: layout::TEMPERATURE_RANGE,
                signed: true,
                unit: "°C",
            },
        },
        FieldSpec {
            variable: "humidity",
            kind: FieldKind::Scaled16 {
                range: layout::HUMIDITY_RANGE,
                signed: false,
                unit: "%",
            },
        },
        FieldSpec {
            variable: "location",
            kind: FieldKind::Coordinates {
                lat_sign: layout::LAT_SIGN_OFFSET,
                lat_raw: layout::LAT_RAW_RANGE,
                lng_sign: layout::LNG_SIGN_OFFSET,
                lng_raw: layout::LNG_RAW_RANGE,
            },
        },
    ],
};
