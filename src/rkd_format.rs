//! RKD binary container layout
//!
//! An `.rkd` file is:
//!
//! ```text
//! +--------------------+  8 bytes   PNG-style magic signature
//! | 89 52 4B 44        |            0x89 'R' 'K' 'D'
//! | 0D 0A 1A 0A        |            CR LF, DOS EOF, LF
//! +--------------------+
//! | meta header        |  28 bytes  7 x u32 LE: flags, reserved, seq,
//! |                    |            reserved, car_id, timestamp, reserved
//! +--------------------+
//! | record stream      |  repeated: 10-byte record header + payload
//! |   crc        u16   |
//! |   type       u16   |
//! |   payload    u16   |  payload length in bytes
//! |   frame_lo   u16   |  frame = (frame_hi << 16) | frame_lo
//! |   frame_hi   u16   |
//! +--------------------+
//! | trailing crc       |  2 bytes   documented as unverified
//! +--------------------+
//! ```
//!
//! All integers are little-endian. Record payload layouts:
//!
//! - type 1 (HEADER): null-terminated `KEY\0VALUE\0` ASCII pair
//! - type 2 (GPS), 36 bytes: subtype u32, GPS-epoch seconds u32,
//!   satellites i16, padding i16, then six i32 fields: latitude (1e-7 deg),
//!   longitude (1e-7 deg), speed (cm/s), heading (1e-5 deg), altitude (mm),
//!   vertical speed (cm/s)
//! - types 7 (ACCEL) / 12 (GYRO), 12 bytes: three i32 axes
//!   (milli-g, raw gyro counts)
//! - type 0x8001 (TERMINATOR), 12 bytes: end timestamp u32 + two
//!   unexplained u32 fields

/// 8-byte magic signature at the start of every RKD file.
pub const RKD_MAGIC: [u8; 8] = [0x89, b'R', b'K', b'D', b'\r', b'\n', 0x1a, b'\n'];

/// Size of the meta header following the magic (7 x u32).
pub const META_HEADER_SIZE: usize = 28;

/// Size of the universal record header.
pub const RECORD_HEADER_SIZE: usize = 10;

/// Size of the trailing file checksum, reserved but never verified.
pub const TRAILING_CRC_SIZE: usize = 2;

/// Payload size of a complete GPS record.
pub const GPS_PAYLOAD_SIZE: usize = 36;

/// Payload size of a complete accelerometer or gyroscope record.
pub const IMU_PAYLOAD_SIZE: usize = 12;
