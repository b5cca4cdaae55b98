//! Human-readable session summaries

use crate::types::{RecordType, RkdSession};
use chrono::DateTime;

/// Print a summary of a parsed session to stdout: file metadata, config
/// table, record histogram, GPS ranges, and IMU sanity figures.
pub fn print_session_info(session: &RkdSession) {
    let sep = "═".repeat(60);
    let file_name = session
        .file_path
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| session.file_path.display().to_string());

    println!();
    println!("{}", sep);
    println!("  RKD Session: {}", file_name);
    println!("{}", sep);
    println!("  File size:      {} bytes", format_count(session.file_size));
    println!("  Car ID:         {}", session.meta.car_id);

    if session.meta.timestamp != 0 {
        let dt = DateTime::from_timestamp(session.meta.timestamp as i64, 0).unwrap_or_default();
        println!(
            "  Session start:  {}",
            dt.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    println!();
    println!("  Configuration:");
    let mut keys: Vec<&String> = session.config.keys().collect();
    keys.sort();
    for key in keys {
        println!("    {}: {}", key, session.config[key]);
    }

    println!();
    println!("  Record counts:");
    for (&code, &count) in &session.record_counts {
        let name = RecordType::from_code(code).name();
        println!(
            "    {:<12} (type {:5}): {}",
            name,
            code,
            format_count(count as usize)
        );
    }

    if session.has_gps_data() {
        let dur = session.duration_seconds();
        let max_speed = session.max_speed_kmh();
        let dist = session.total_distance_km();

        println!();
        println!("  GPS data:");
        println!("    Fixes:        {}", format_count(session.gps_fixes.len()));
        println!("    Duration:     {:.0}s ({:.1} min)", dur, dur / 60.0);
        println!(
            "    Max speed:    {:.1} km/h ({:.1} mph)",
            max_speed,
            max_speed / 1.609344
        );
        println!(
            "    Distance:     {:.2} km ({:.2} mi)",
            dist,
            dist / 1.609344
        );

        let lat = min_max(session.gps_fixes.iter().map(|f| f.latitude));
        let lon = min_max(session.gps_fixes.iter().map(|f| f.longitude));
        let alt = min_max(session.gps_fixes.iter().map(|f| f.altitude_m));
        let sats = min_max(session.gps_fixes.iter().map(|f| f.satellites as f64));
        println!("    Lat range:    {:.7} – {:.7}", lat.0, lat.1);
        println!("    Lon range:    {:.7} – {:.7}", lon.0, lon.1);
        println!("    Alt range:    {:.1} – {:.1} m", alt.0, alt.1);
        println!("    Satellites:   {} – {}", sats.0 as i64, sats.1 as i64);
    }

    if session.has_imu_data() {
        println!();
        println!("  IMU data:");
        println!(
            "    Frames:       {}",
            format_count(session.imu_frames.len())
        );
        println!(
            "    Accel Z (mean): {:.2} m/s² (expect ~9.81)",
            session.mean_accel_z()
        );
    }

    println!("{}", sep);
    println!();
}

fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

/// Format an integer with thousands separators.
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::format_count;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
