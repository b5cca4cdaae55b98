//! Shared fixture builders: minimal RKD binary images and sessions.

#![allow(dead_code)]

use rkd_parser::conversion::gps_to_utc_ms;
use rkd_parser::rkd_format::{META_HEADER_SIZE, RKD_MAGIC};
use rkd_parser::{GpsFix, ImuFrame, MetaHeader, RkdSession};
use std::path::PathBuf;

pub const TEST_CAR_ID: u32 = 11098;
pub const TEST_TIMESTAMP: u32 = 1_617_532_800;

pub fn meta_header(car_id: u32, timestamp: u32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(META_HEADER_SIZE);
    for word in [0x0014_8000u32, 0, 1, 0, car_id, timestamp, 0] {
        buf.extend_from_slice(&word.to_le_bytes());
    }
    buf
}

pub fn make_record(rtype: u16, payload: &[u8], frame: u32) -> Vec<u8> {
    let frame_lo = (frame & 0xffff) as u16;
    let frame_hi = (frame >> 16) as u16;
    let mut buf = Vec::with_capacity(10 + payload.len());
    buf.extend_from_slice(&0u16.to_le_bytes()); // crc, unverified
    buf.extend_from_slice(&rtype.to_le_bytes());
    buf.extend_from_slice(&(payload.len() as u16).to_le_bytes());
    buf.extend_from_slice(&frame_lo.to_le_bytes());
    buf.extend_from_slice(&frame_hi.to_le_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// Magic + meta header + records + zeroed trailing checksum.
pub fn minimal_rkd(records: &[Vec<u8>]) -> Vec<u8> {
    let mut data = Vec::with_capacity(1024);
    data.extend_from_slice(&RKD_MAGIC);
    data.extend_from_slice(&meta_header(TEST_CAR_ID, TEST_TIMESTAMP));
    for record in records {
        data.extend_from_slice(record);
    }
    data.extend_from_slice(&[0, 0]);
    data
}

#[allow(clippy::too_many_arguments)]
pub fn gps_payload(
    gps_ts: u32,
    sats: i16,
    lat_raw: i32,
    lon_raw: i32,
    speed_raw: i32,
    heading_raw: i32,
    alt_raw: i32,
    vspeed: i32,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(36);
    buf.extend_from_slice(&3u32.to_le_bytes()); // fix type
    buf.extend_from_slice(&gps_ts.to_le_bytes());
    buf.extend_from_slice(&(sats as u16).to_le_bytes());
    buf.extend_from_slice(&0u16.to_le_bytes()); // padding
    for raw in [lat_raw, lon_raw, speed_raw, heading_raw, alt_raw, vspeed] {
        buf.extend_from_slice(&raw.to_le_bytes());
    }
    buf
}

pub fn default_gps_payload() -> Vec<u8> {
    gps_payload(
        1_302_000_000,
        18,
        503_000_000,
        46_500_000,
        1000,
        18_000_000,
        250_000,
        10,
    )
}

pub fn axes_payload(x: i32, y: i32, z: i32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(12);
    for raw in [x, y, z] {
        buf.extend_from_slice(&raw.to_le_bytes());
    }
    buf
}

pub fn terminator_payload(timestamp: u32) -> Vec<u8> {
    let mut buf = timestamp.to_le_bytes().to_vec();
    buf.extend_from_slice(&[0u8; 8]);
    buf
}

/// A hand-built session with `num_gps` fixes six frames apart and
/// `num_imu` inertial frames starting at frame 0, like a short outing.
pub fn make_session(num_gps: usize, num_imu: usize, braking_frame: Option<u32>) -> RkdSession {
    let meta = MetaHeader {
        car_id: TEST_CAR_ID,
        timestamp: TEST_TIMESTAMP,
    };
    let mut session = RkdSession::new(PathBuf::from("test.rkd"), 1000, meta);

    let base_gps_ts = 1_302_000_000u32;
    for i in 0..num_gps {
        let ts = base_gps_ts + i as u32;
        session.gps_fixes.push(GpsFix {
            frame: (i * 6) as u32,
            gps_timestamp: ts,
            utc_ms: gps_to_utc_ms(ts),
            satellites: 18,
            latitude: 50.3 + i as f64 * 0.0001,
            longitude: 4.65 + i as f64 * 0.0001,
            speed_ms: 10.0 + i as f64,
            heading_deg: 90.0 + i as f64 * 10.0,
            altitude_m: 250.0 + i as f64,
            vertical_speed_cms: 5,
        });
    }

    for frame in 0..num_imu as u32 {
        let accel_x = if braking_frame == Some(frame) { -1.0 } else { 1.0 };
        session.imu_frames.push(ImuFrame {
            frame,
            accel_x,
            accel_y: 0.5,
            accel_z: 9.81,
            gyro_x: 0.1,
            gyro_y: 0.2,
            gyro_z: 5.0,
        });
    }

    session
}
