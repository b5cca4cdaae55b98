//! Resampling of GPS fixes onto the inertial frame cadence
//!
//! GPS arrives at ~5 Hz and the IMU at ~30 Hz, both tagged with the same
//! video frame counter. This module walks the inertial sequence and
//! interpolates the bracketing pair of GPS fixes at each frame, producing
//! one synchronized row per in-range inertial frame. Frames outside the
//! GPS frame range are skipped; nothing is extrapolated.

use crate::conversion::{haversine_km, lerp, lerp_angle, GRAVITY_MS2};
use crate::types::RkdSession;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One output sample at the inertial cadence (~30 Hz), with interpolated
/// position and derived channels.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResampledRow {
    /// Derived from frame cadence, not reinterpolated from GPS timestamps
    pub utc_ms: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub speed_ms: f64,
    pub altitude_m: f64,
    pub heading_deg: f64,
    pub satellites: i16,
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
    pub gyro_x: f64,
    pub gyro_y: f64,
    pub gyro_z: f64,
    pub pitch_deg: f64,
    pub bank_deg: f64,
    pub turn_rate_deg_s: f64,
    pub vertical_speed_ftmin: f64,
    pub g_lon: f64,
    pub g_lat: f64,
    pub g_total: f64,
    pub braking: u8,
    pub speed_kmh: f64,
    /// Cumulative great-circle distance over emitted rows, km
    pub distance_km: f64,
}

/// Resample a session onto the inertial time base.
///
/// Returns an empty vector when either the GPS or the IMU sequence is
/// empty; a config-only or terminator-only file is a valid input that
/// simply has nothing to resample.
pub fn resample_session(session: &RkdSession) -> Vec<ResampledRow> {
    let fixes = &session.gps_fixes;
    let imu_frames = &session.imu_frames;
    if fixes.is_empty() || imu_frames.is_empty() {
        return Vec::new();
    }

    let first = &fixes[0];
    let last = &fixes[fixes.len() - 1];
    let first_frame = first.frame;
    let last_frame = last.frame;

    let frame_span = last_frame as i64 - first_frame as i64;
    let ms_per_frame = if frame_span > 0 {
        (last.utc_ms - first.utc_ms) as f64 / frame_span as f64
    } else {
        // Single-fix session: assume the native 30 Hz cadence
        1000.0 / 30.0
    };

    let mut rows = Vec::new();
    let mut gps_idx = 0usize;
    let mut cum_distance_km = 0.0;
    let mut prev_point: Option<(f64, f64)> = None;

    for imu in imu_frames {
        if imu.frame < first_frame || imu.frame > last_frame {
            continue;
        }

        // Advance to the last fix whose frame <= this inertial frame
        while gps_idx < fixes.len() - 1 && fixes[gps_idx + 1].frame <= imu.frame {
            gps_idx += 1;
        }

        let utc_ms =
            (first.utc_ms as f64 + (imu.frame - first_frame) as f64 * ms_per_frame) as i64;

        let g0 = &fixes[gps_idx];
        let (latitude, longitude, speed_ms, altitude_m, heading_deg, vspeed_cms) =
            if gps_idx < fixes.len() - 1 {
                let g1 = &fixes[gps_idx + 1];
                let span = g1.frame as i64 - g0.frame as i64;
                let t = if span > 0 {
                    (imu.frame as i64 - g0.frame as i64) as f64 / span as f64
                } else {
                    0.0
                };
                (
                    lerp(g0.latitude, g1.latitude, t),
                    lerp(g0.longitude, g1.longitude, t),
                    lerp(g0.speed_ms, g1.speed_ms, t),
                    lerp(g0.altitude_m, g1.altitude_m, t),
                    lerp_angle(g0.heading_deg, g1.heading_deg, t),
                    lerp(
                        g0.vertical_speed_cms as f64,
                        g1.vertical_speed_cms as f64,
                        t,
                    ),
                )
            } else {
                (
                    g0.latitude,
                    g0.longitude,
                    g0.speed_ms,
                    g0.altitude_m,
                    g0.heading_deg,
                    g0.vertical_speed_cms as f64,
                )
            };

        let g_lon = imu.accel_x / GRAVITY_MS2;
        let g_lat = -imu.accel_y / GRAVITY_MS2;
        let g_total = (g_lon * g_lon + g_lat * g_lat).sqrt();
        let braking = u8::from(g_lon < -0.05);

        let pitch_deg = imu
            .accel_x
            .atan2((imu.accel_y * imu.accel_y + imu.accel_z * imu.accel_z).sqrt())
            .to_degrees();
        let bank_deg = (-imu.accel_y).atan2(imu.accel_z).to_degrees();

        if let Some((prev_lat, prev_lon)) = prev_point {
            cum_distance_km += haversine_km(prev_lat, prev_lon, latitude, longitude);
        }
        prev_point = Some((latitude, longitude));

        rows.push(ResampledRow {
            utc_ms,
            latitude,
            longitude,
            speed_ms,
            altitude_m,
            heading_deg,
            satellites: g0.satellites,
            accel_x: imu.accel_x,
            accel_y: imu.accel_y,
            accel_z: imu.accel_z,
            gyro_x: imu.gyro_x,
            gyro_y: imu.gyro_y,
            gyro_z: imu.gyro_z,
            pitch_deg,
            bank_deg,
            turn_rate_deg_s: imu.gyro_z,
            vertical_speed_ftmin: vspeed_cms * 1.9685,
            g_lon,
            g_lat,
            g_total,
            braking,
            speed_kmh: speed_ms * 3.6,
            distance_km: cum_distance_km,
        });
    }

    rows
}
