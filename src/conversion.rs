//! Unit conversion and geometry helpers for RKD decoding
//!
//! All divisors are fixed properties of the format. They are applied
//! verbatim so that decoded values (and therefore exported output) stay
//! byte-identical with other implementations of the parser.

/// Standard gravity used by the milli-g accelerometer scaling.
pub const GRAVITY_MS2: f64 = 9.81;

/// GPS epoch (1980-01-06T00:00:00Z) as Unix epoch seconds.
pub const GPS_EPOCH_UNIX_SECONDS: i64 = 315_964_800;

/// GPS-to-UTC leap second offset. Fixed at 18, valid for the date range
/// the format was produced in (2017 through at least 2025); deliberately
/// not computed dynamically.
pub const GPS_LEAP_SECONDS: i64 = 18;

/// Raw gyroscope counts per deg/s. Empirically calibrated; the vendor
/// does not document this field, so treat it as an opaque constant.
const GYRO_RAW_PER_DEG_S: f64 = 28.0;

/// Convert a GPS timestamp (seconds since 1980-01-06) to Unix milliseconds.
pub fn gps_to_utc_ms(gps_seconds: u32) -> i64 {
    (GPS_EPOCH_UNIX_SECONDS + gps_seconds as i64 - GPS_LEAP_SECONDS) * 1000
}

/// Convert a raw latitude/longitude value to degrees.
pub fn convert_coordinate(raw: i32) -> f64 {
    raw as f64 / 1e7
}

/// Convert raw ground speed to m/s.
pub fn convert_speed(raw: i32) -> f64 {
    raw as f64 / 100.0
}

/// Convert raw heading to degrees.
pub fn convert_heading(raw: i32) -> f64 {
    raw as f64 / 100_000.0
}

/// Convert raw altitude to meters.
pub fn convert_altitude(raw: i32) -> f64 {
    raw as f64 / 1000.0
}

/// Convert a raw milli-g accelerometer axis to m/s².
pub fn convert_accel(raw: i32) -> f64 {
    raw as f64 * GRAVITY_MS2 / 1000.0
}

/// Convert a raw gyroscope axis to deg/s.
pub fn convert_gyro(raw: i32) -> f64 {
    raw as f64 / GYRO_RAW_PER_DEG_S
}

/// Great-circle distance in km between two lat/lon points (haversine,
/// Earth radius 6371 km).
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const R: f64 = 6371.0;
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin() * (d_lat / 2.0).sin()
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin()
            * (d_lon / 2.0).sin();
    R * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Linear interpolation between `a` and `b` at parameter `t` in [0, 1].
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Interpolate between two angles in degrees along the shortest arc,
/// wrapping the result into [0, 360).
pub fn lerp_angle(a: f64, b: f64, t: f64) -> f64 {
    let diff = positive_mod(b - a + 180.0, 360.0) - 180.0;
    positive_mod(a + diff * t, 360.0)
}

/// `a mod b` with the result always in [0, b) for positive `b`.
fn positive_mod(a: f64, b: f64) -> f64 {
    let r = a % b;
    if r < 0.0 {
        r + b
    } else {
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_to_utc_ms_at_epoch() {
        // 18 seconds into GPS time is exactly the GPS epoch in UTC
        assert_eq!(
            gps_to_utc_ms(GPS_LEAP_SECONDS as u32),
            GPS_EPOCH_UNIX_SECONDS * 1000
        );
    }

    #[test]
    fn gps_to_utc_ms_positive() {
        assert!(gps_to_utc_ms(1_302_000_000) > 0);
    }

    #[test]
    fn documented_gps_example_values() {
        assert!((convert_coordinate(503_010_636) - 50.3010636).abs() < 1e-9);
        assert!((convert_speed(2409) - 24.09).abs() < 1e-9);
        assert!((convert_heading(3_188_000) - 31.88).abs() < 1e-9);
        assert!((convert_altitude(256_600) - 256.6).abs() < 1e-9);
    }

    #[test]
    fn documented_accel_example_values() {
        assert!((convert_accel(203) - 1.991).abs() < 0.001);
        assert!((convert_accel(-187) - (-1.834)).abs() < 0.001);
        assert!((convert_accel(1031) - 10.114).abs() < 0.001);
    }

    #[test]
    fn documented_gyro_example_values() {
        assert!((convert_gyro(14) - 0.50).abs() < 0.005);
        assert!((convert_gyro(28) - 1.00).abs() < 1e-9);
        assert!((convert_gyro(43) - 1.54).abs() < 0.005);
    }

    #[test]
    fn haversine_same_point_is_zero() {
        assert_eq!(haversine_km(50.0, 4.0, 50.0, 4.0), 0.0);
    }

    #[test]
    fn haversine_is_symmetric() {
        let d1 = haversine_km(50.0, 4.0, 50.3, 4.65);
        let d2 = haversine_km(50.3, 4.65, 50.0, 4.0);
        assert!((d1 - d2).abs() < 1e-12);
    }

    #[test]
    fn haversine_one_degree_latitude() {
        let d = haversine_km(0.0, 0.0, 1.0, 0.0);
        assert!(d > 110.0 && d < 112.0, "expected ~111 km, got {}", d);
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(3.0, 7.0, 0.0), 3.0);
        assert_eq!(lerp(3.0, 7.0, 1.0), 7.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
    }

    #[test]
    fn lerp_angle_no_wrap() {
        assert!((lerp_angle(10.0, 20.0, 0.5) - 15.0).abs() < 0.01);
    }

    #[test]
    fn lerp_angle_takes_short_path_across_north() {
        let r = lerp_angle(350.0, 10.0, 0.5);
        assert!(
            (r - 0.0).abs() < 0.01 || (r - 360.0).abs() < 0.01,
            "expected ~0 or ~360, got {}",
            r
        );
    }

    #[test]
    fn lerp_angle_result_in_range() {
        for a in [0.0, 90.0, 179.0, 359.0] {
            for b in [1.0, 181.0, 270.0, 355.0] {
                for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
                    let r = lerp_angle(a, b, t);
                    assert!((0.0..360.0).contains(&r), "{} out of range", r);
                }
            }
        }
    }
}
