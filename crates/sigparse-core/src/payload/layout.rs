pub const VERSION_OFFSET: usize = 0;
pub const COUNTER_OFFSET: usize = 0;
pub const TEMPERATURE_RANGE: std::ops::Range<usize> = 1..3;
pub const HUMIDITY_RANGE: std::ops::Range<usize> = 3..5;

pub const LAT_SIGN_OFFSET: usize = 5;
pub const LAT_RAW_RANGE: std::ops::Range<usize> = 6..8;
pub const LNG_SIGN_OFFSET: usize = 8;
pub const LNG_RAW_RANGE: std::ops::Range<usize> = 9..11;

pub const CENTI_DIVISOR: f64 = 100.0;
pub const COORD_MULTIPLIER: f64 = 10022.0;
pub const COORD_DIVISOR: f64 = 1_000_000.0;

pub const READINGS_LEN: usize = HUMIDITY_RANGE.end;
pub const LOCATION_LEN: usize = LNG_RAW_RANGE.end;
