use crate::conversion::{
    convert_accel, convert_altitude, convert_coordinate, convert_gyro, convert_heading,
    convert_speed, gps_to_utc_ms,
};
use crate::error::Result;
use crate::parser::stream::RkdDataStream;
use crate::rkd_format::{
    GPS_PAYLOAD_SIZE, IMU_PAYLOAD_SIZE, META_HEADER_SIZE, RECORD_HEADER_SIZE, RKD_MAGIC,
    TRAILING_CRC_SIZE,
};
use crate::types::{GpsFix, ImuFrame, RecordHeader, RecordType, RkdSession};
use std::collections::BTreeMap;

/// Walks the record stream and accumulates decoded samples.
///
/// Accelerometer and gyroscope records are keyed by frame number while
/// decoding and merged into one ordered sequence afterwards; the maps live
/// only for the duration of the decode call.
pub(crate) struct RecordDecoder {
    accel_by_frame: BTreeMap<u32, [f64; 3]>,
    gyro_by_frame: BTreeMap<u32, [f64; 3]>,
}

impl RecordDecoder {
    pub(crate) fn new() -> Self {
        Self {
            accel_by_frame: BTreeMap::new(),
            gyro_by_frame: BTreeMap::new(),
        }
    }

    /// Decode the record stream between the meta header and the trailing
    /// checksum, populating `session`.
    ///
    /// A payload that would overrun the checksum boundary ends the stream:
    /// the same silent-truncation policy covers corrupt files and
    /// intentionally truncated samples. Frame numbers are not required to
    /// be monotonic; out-of-order or repeated values are taken as-is.
    pub(crate) fn decode_records(&mut self, data: &[u8], session: &mut RkdSession) {
        let boundary = data.len().saturating_sub(TRAILING_CRC_SIZE);
        let mut stream = RkdDataStream::new(&data[..boundary]);
        stream.set_position(RKD_MAGIC.len() + META_HEADER_SIZE);

        while stream.remaining() >= RECORD_HEADER_SIZE {
            let Ok(header) = read_record_header(&mut stream) else {
                break;
            };
            // Truncation mid-payload is end-of-stream, not an error.
            let Ok(payload) = stream.read_bytes(header.payload_len) else {
                break;
            };

            *session
                .record_counts
                .entry(header.record_type.code())
                .or_insert(0) += 1;

            match header.record_type {
                RecordType::Config => {
                    if let Some((key, value)) = decode_config_payload(payload) {
                        session.config.insert(key, value);
                    }
                }
                RecordType::Position => {
                    // Short GPS payloads are counted but yield no fix
                    if let Some(fix) = decode_gps_payload(payload, header.frame) {
                        session.gps_fixes.push(fix);
                    }
                }
                RecordType::Acceleration => {
                    if let Some(axes) = decode_axes_payload(payload, convert_accel) {
                        self.accel_by_frame.insert(header.frame, axes);
                    }
                }
                RecordType::AngularRate => {
                    if let Some(axes) = decode_axes_payload(payload, convert_gyro) {
                        self.gyro_by_frame.insert(header.frame, axes);
                    }
                }
                RecordType::Terminator => {
                    // Always the last record in a well-formed file
                    session.terminator_timestamp = decode_terminator_payload(payload);
                    break;
                }
                // PERIODIC and TIMESTAMP payloads are opaque; unknown
                // types are counted under their raw code only
                RecordType::System | RecordType::Timing | RecordType::Unknown(_) => {}
            }
        }
    }

    /// Merge the per-sensor maps into one frame-ordered sequence over the
    /// union of frame keys, zero-filling whichever sensor is missing.
    pub(crate) fn into_imu_frames(self) -> Vec<ImuFrame> {
        let mut frames: Vec<u32> = self
            .accel_by_frame
            .keys()
            .chain(self.gyro_by_frame.keys())
            .copied()
            .collect();
        frames.sort_unstable();
        frames.dedup();

        frames
            .into_iter()
            .map(|frame| {
                let accel = self.accel_by_frame.get(&frame).copied().unwrap_or_default();
                let gyro = self.gyro_by_frame.get(&frame).copied().unwrap_or_default();
                ImuFrame {
                    frame,
                    accel_x: accel[0],
                    accel_y: accel[1],
                    accel_z: accel[2],
                    gyro_x: gyro[0],
                    gyro_y: gyro[1],
                    gyro_z: gyro[2],
                }
            })
            .collect()
    }
}

/// Read the 10-byte universal record header and reassemble the frame
/// number from its two u16 halves.
pub fn read_record_header(stream: &mut RkdDataStream) -> Result<RecordHeader> {
    let crc = stream.read_u16()?;
    let type_code = stream.read_u16()?;
    let payload_len = stream.read_u16()? as usize;
    let frame_lo = stream.read_u16()? as u32;
    let frame_hi = stream.read_u16()? as u32;
    Ok(RecordHeader {
        crc,
        record_type: RecordType::from_code(type_code),
        payload_len,
        frame: (frame_hi << 16) | frame_lo,
    })
}

/// Split a `KEY\0VALUE\0` payload into its pair. Trailing nulls are
/// stripped first; a payload without a separator yields nothing.
pub fn decode_config_payload(payload: &[u8]) -> Option<(String, String)> {
    let mut end = payload.len();
    while end > 0 && payload[end - 1] == 0 {
        end -= 1;
    }
    let text = &payload[..end];
    let split = text.iter().position(|&b| b == 0)?;
    let key = String::from_utf8_lossy(&text[..split]).into_owned();
    let value = String::from_utf8_lossy(&text[split + 1..]).into_owned();
    Some((key, value))
}

/// Decode a 36-byte GPS payload. Shorter payloads yield `None`.
pub fn decode_gps_payload(payload: &[u8], frame: u32) -> Option<GpsFix> {
    if payload.len() < GPS_PAYLOAD_SIZE {
        return None;
    }
    let mut s = RkdDataStream::new(payload);
    let _subtype = s.read_u32().ok()?; // fix type, expected 3
    let gps_timestamp = s.read_u32().ok()?;
    let satellites = s.read_i16().ok()?;
    let _padding = s.read_i16().ok()?;
    let lat_raw = s.read_i32().ok()?;
    let lon_raw = s.read_i32().ok()?;
    let speed_raw = s.read_i32().ok()?;
    let heading_raw = s.read_i32().ok()?;
    let alt_raw = s.read_i32().ok()?;
    let vertical_speed_cms = s.read_i32().ok()?;

    Some(GpsFix {
        frame,
        gps_timestamp,
        utc_ms: gps_to_utc_ms(gps_timestamp),
        satellites,
        latitude: convert_coordinate(lat_raw),
        longitude: convert_coordinate(lon_raw),
        speed_ms: convert_speed(speed_raw),
        heading_deg: convert_heading(heading_raw),
        altitude_m: convert_altitude(alt_raw),
        vertical_speed_cms,
    })
}

/// Decode a 12-byte three-axis inertial payload through `convert`.
/// Shorter payloads yield `None`.
pub fn decode_axes_payload(payload: &[u8], convert: fn(i32) -> f64) -> Option<[f64; 3]> {
    if payload.len() < IMU_PAYLOAD_SIZE {
        return None;
    }
    let mut s = RkdDataStream::new(payload);
    let x = s.read_i32().ok()?;
    let y = s.read_i32().ok()?;
    let z = s.read_i32().ok()?;
    Some([convert(x), convert(y), convert(z)])
}

/// Pull the end timestamp out of a terminator payload; the two trailing
/// u32 fields are unexplained and ignored.
pub fn decode_terminator_payload(payload: &[u8]) -> Option<u32> {
    if payload.len() < 4 {
        return None;
    }
    Some(u32::from_le_bytes([
        payload[0], payload[1], payload[2], payload[3],
    ]))
}
