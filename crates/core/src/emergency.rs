//! Emergency conditions shared by the detector and the phrase tables

/// Condition raised when the text mentions a body temperature at or above
/// [`HIGH_FEVER_THRESHOLD_F`]
pub const FEVER_ABOVE_103: &str = "fever_above_103";

/// Temperature (°F) at which a fever is treated as an emergency
pub const HIGH_FEVER_THRESHOLD_F: f64 = 103.0;

/// Plausible body-temperature range in °F; numbers outside it are not
/// read as temperatures
pub const BODY_TEMPERATURE_RANGE_F: std::ops::RangeInclusive<f64> = 90.0..=115.0;
