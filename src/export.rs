//! Export of parsed RKD sessions
//!
//! Two formats are produced: a 30 Hz "Telemetry Overlay" CSV resampled
//! onto the inertial cadence, and a GPX 1.1 track at the native GPS rate.
//! Column names, order, and per-column precision of the CSV are fixed;
//! any change breaks compatibility with downstream overlay tools.

use crate::error::Result;
#[cfg(feature = "csv")]
use crate::error::RkdError;
use crate::types::RkdSession;
use chrono::DateTime;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "csv")]
use crate::resample::resample_session;

/// Export options for controlling output formats
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    pub csv: bool,
    pub gpx: bool,
    pub output_dir: Option<PathBuf>,
}

/// The 24 fixed CSV columns, in output order.
#[cfg(feature = "csv")]
pub const CSV_COLUMNS: [&str; 24] = [
    "utc (ms)",
    "lat (deg)",
    "lon (deg)",
    "speed (m/s)",
    "alt (m)",
    "heading (deg)",
    "satellites",
    "gps fix",
    "accel x (m/s²)",
    "accel y (m/s²)",
    "accel z (m/s²)",
    "gyro x (deg/s)",
    "gyro y (deg/s)",
    "gyro z (deg/s)",
    "pitch angle (deg)",
    "bank (deg)",
    "turn rate (deg/s)",
    "vertical speed (ft/min)",
    "g_lon",
    "g_lat",
    "g_total",
    "braking",
    "speed (km/h)",
    "distance (km)",
];

/// Compute the output path for an export next to the input file (or under
/// `output_dir` when set), replacing the extension.
pub fn compute_export_path(
    session: &RkdSession,
    output_dir: Option<&Path>,
    extension: &str,
) -> PathBuf {
    let stem = session
        .file_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session".to_string());
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| session.file_path.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(format!("{}.{}", stem, extension))
}

/// Write the resampled session to CSV at the inertial cadence (~30 Hz).
///
/// A session without GPS fixes or without inertial frames is reported as
/// a warning and skipped; partial files are valid inputs. Returns the
/// number of data rows written.
#[cfg(feature = "csv")]
pub fn export_to_csv(session: &RkdSession, output_path: &Path) -> Result<usize> {
    if !session.has_imu_data() || !session.has_gps_data() {
        eprintln!(
            "  Warning: No data to export for {}",
            session.file_path.display()
        );
        return Ok(0);
    }

    let rows = resample_session(session);

    let file = File::create(output_path)?;
    // CRLF row endings to stay byte-identical with the reference exporter
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    writer
        .write_record(CSV_COLUMNS)
        .map_err(|e| RkdError::Export(e.to_string()))?;

    for row in &rows {
        writer
            .write_record(&[
                format!("{}", row.utc_ms),
                format!("{:.7}", row.latitude),
                format!("{:.7}", row.longitude),
                format!("{:.2}", row.speed_ms),
                format!("{:.1}", row.altitude_m),
                format!("{:.2}", row.heading_deg),
                format!("{}", row.satellites),
                "3".to_string(),
                format!("{:.3}", row.accel_x),
                format!("{:.3}", row.accel_y),
                format!("{:.3}", row.accel_z),
                format!("{:.3}", row.gyro_x),
                format!("{:.3}", row.gyro_y),
                format!("{:.3}", row.gyro_z),
                format!("{:.2}", row.pitch_deg),
                format!("{:.2}", row.bank_deg),
                format!("{:.2}", row.turn_rate_deg_s),
                format!("{:.1}", row.vertical_speed_ftmin),
                format!("{:.3}", row.g_lon),
                format!("{:.3}", row.g_lat),
                format!("{:.3}", row.g_total),
                format!("{}", row.braking),
                format!("{:.1}", row.speed_kmh),
                format!("{:.4}", row.distance_km),
            ])
            .map_err(|e| RkdError::Export(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| RkdError::Export(e.to_string()))?;
    Ok(rows.len())
}

/// Write the GPS track to GPX 1.1 at the native fix rate (~5 Hz).
/// Returns the number of trackpoints written.
pub fn export_to_gpx(session: &RkdSession, output_path: &Path) -> Result<usize> {
    if !session.has_gps_data() {
        eprintln!(
            "  Warning: No GPS data to export for {}",
            session.file_path.display()
        );
        return Ok(0);
    }

    let file = File::create(output_path)?;
    let mut w = BufWriter::new(file);

    let name = session
        .file_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session".to_string());
    let start = DateTime::from_timestamp(session.meta.timestamp as i64, 0)
        .unwrap_or_default()
        .format("%Y-%m-%dT%H:%M:%SZ");

    writeln!(w, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(w, "<gpx version=\"1.1\" creator=\"rkd_parser\"")?;
    writeln!(w, "     xmlns=\"http://www.topografix.com/GPX/1/1\"")?;
    writeln!(
        w,
        "     xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\""
    )?;
    writeln!(
        w,
        "     xsi:schemaLocation=\"http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd\">"
    )?;
    writeln!(w, "  <metadata>")?;
    writeln!(w, "    <name>{}</name>", xml_escape(&name))?;
    writeln!(
        w,
        "    <desc>Race-Keeper telemetry — Car ID {}</desc>",
        session.meta.car_id
    )?;
    writeln!(w, "    <time>{}</time>", start)?;
    writeln!(w, "  </metadata>")?;
    writeln!(w, "  <trk>")?;
    writeln!(w, "    <name>{}</name>", xml_escape(&name))?;
    writeln!(w, "    <trkseg>")?;

    for fix in &session.gps_fixes {
        let time = DateTime::from_timestamp_millis(fix.utc_ms)
            .unwrap_or_default()
            .format("%Y-%m-%dT%H:%M:%S%.3fZ");
        writeln!(
            w,
            "      <trkpt lat=\"{:.7}\" lon=\"{:.7}\">",
            fix.latitude, fix.longitude
        )?;
        writeln!(w, "        <ele>{:.1}</ele>", fix.altitude_m)?;
        writeln!(w, "        <time>{}</time>", time)?;
        writeln!(w, "        <sat>{}</sat>", fix.satellites)?;
        writeln!(w, "        <speed>{:.2}</speed>", fix.speed_ms)?;
        writeln!(w, "      </trkpt>")?;
    }

    writeln!(w, "    </trkseg>")?;
    writeln!(w, "  </trk>")?;
    writeln!(w, "</gpx>")?;
    w.flush()?;

    Ok(session.gps_fixes.len())
}

/// Escape XML metacharacters in text content.
pub fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
