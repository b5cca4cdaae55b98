#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fields extracted from the 28-byte meta header that follows the magic.
///
/// The header is seven little-endian u32 words (flags, reserved, sequence,
/// reserved, car id, timestamp, reserved); only words 5 and 6 carry data we
/// interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MetaHeader {
    pub car_id: u32,
    /// Session start as Unix epoch seconds.
    pub timestamp: u32,
}

/// The 10-byte universal header preceding every record payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RecordHeader {
    /// Per-record checksum. Present in the format but never verified.
    pub crc: u16,
    pub record_type: RecordType,
    pub payload_len: usize,
    /// 30 Hz video-aligned frame counter, reassembled from two u16 halves.
    pub frame: u32,
}

/// The closed set of record types found in an RKD stream.
///
/// Unlisted type codes (e.g. OBD channels on some units) are carried as
/// `Unknown` so they can be counted without being interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RecordType {
    /// `KEY\0VALUE\0` configuration string (type 1)
    Config,
    /// 36-byte GPS fix at ~5 Hz (type 2)
    Position,
    /// ~1 Hz system metric, payload opaque (type 6)
    System,
    /// 12-byte accelerometer sample at 30 Hz (type 7)
    Acceleration,
    /// Timing record, payload discarded (type 8)
    Timing,
    /// 12-byte gyroscope sample at 30 Hz (type 12)
    AngularRate,
    /// End-of-stream marker carrying the session end timestamp (type 0x8001)
    Terminator,
    Unknown(u16),
}

impl RecordType {
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => RecordType::Config,
            2 => RecordType::Position,
            6 => RecordType::System,
            7 => RecordType::Acceleration,
            8 => RecordType::Timing,
            12 => RecordType::AngularRate,
            0x8001 => RecordType::Terminator,
            other => RecordType::Unknown(other),
        }
    }

    pub fn code(self) -> u16 {
        match self {
            RecordType::Config => 1,
            RecordType::Position => 2,
            RecordType::System => 6,
            RecordType::Acceleration => 7,
            RecordType::Timing => 8,
            RecordType::AngularRate => 12,
            RecordType::Terminator => 0x8001,
            RecordType::Unknown(code) => code,
        }
    }

    /// Human-readable name used in session summaries.
    pub fn name(self) -> String {
        match self {
            RecordType::Config => "HEADER".to_string(),
            RecordType::Position => "GPS".to_string(),
            RecordType::System => "PERIODIC".to_string(),
            RecordType::Acceleration => "ACCEL".to_string(),
            RecordType::Timing => "TIMESTAMP".to_string(),
            RecordType::AngularRate => "GYRO".to_string(),
            RecordType::Terminator => "TERMINATOR".to_string(),
            RecordType::Unknown(code) => format!("UNKNOWN(0x{:04x})", code),
        }
    }
}
