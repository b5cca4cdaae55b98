#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single decoded GPS fix (~5 Hz in the record stream).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GpsFix {
    pub frame: u32,
    /// Seconds since the GPS epoch (1980-01-06T00:00:00Z)
    pub gps_timestamp: u32,
    /// Unix timestamp in milliseconds (UTC)
    pub utc_ms: i64,
    pub satellites: i16,
    /// Degrees (WGS84)
    pub latitude: f64,
    /// Degrees (WGS84)
    pub longitude: f64,
    /// Ground speed in m/s
    pub speed_ms: f64,
    /// Heading in degrees [0, 360)
    pub heading_deg: f64,
    /// Altitude above MSL in meters
    pub altitude_m: f64,
    /// Vertical speed in cm/s, kept raw for unit conversion at export time
    pub vertical_speed_cms: i32,
}
