//! RKD Parser Library
//!
//! A Rust library for parsing Race-Keeper (.rkd) binary telemetry files
//! as produced by "Instant Video" track-day recording systems, with
//! exporters for resampled 30 Hz CSV and GPX 1.1 tracks.
//!
//! # Features
//!
//! - **`csv`** (default): Enable CSV export functionality
//! - **`cli`** (default): Build the command-line interface binary
//! - **`serde`**: Enable serialization/deserialization of types
//!
//! # Quick Start
//!
//! Parse a file and inspect the decoded session:
//! ```rust,no_run
//! use rkd_parser::parse_rkd_file;
//! use std::path::Path;
//!
//! let session = parse_rkd_file(Path::new("outing.rkd")).unwrap();
//! println!("Car {}: {} GPS fixes, {} IMU frames",
//!     session.meta.car_id,
//!     session.gps_fixes.len(),
//!     session.imu_frames.len());
//! ```
//!
//! Export to CSV resampled onto the 30 Hz inertial cadence:
//! ```rust,no_run
//! use rkd_parser::{export_to_csv, parse_rkd_file};
//! use std::path::Path;
//!
//! let session = parse_rkd_file(Path::new("outing.rkd")).unwrap();
//! let rows = export_to_csv(&session, Path::new("outing.csv")).unwrap();
//! println!("Wrote {} rows", rows);
//! ```
//!
//! # Public API
//!
//! ## Parsing
//! - [`parse_rkd_file`] - Parse an RKD file from disk
//! - [`parse_rkd_bytes`] - Parse RKD data from memory
//!
//! ## Data Types
//! - [`RkdSession`] - Complete decoded session
//! - [`GpsFix`] / [`ImuFrame`] - Per-sample telemetry values
//! - [`RecordType`] - The closed set of record types in the stream
//!
//! ## Resampling and Export
//! - [`resample_session`] - Merge GPS and IMU streams onto one time base
//! - [`export_to_csv`] - Write the resampled 24-column CSV
//! - [`export_to_gpx`] - Write the GPS track as GPX 1.1
//! - [`write_sample_rkd`] - Produce a truncated sample file
//!
//! ## Reporting
//! - [`print_session_info`] - Human-readable session summary

pub mod conversion;
pub mod error;
pub mod export;
pub mod parser;
pub mod resample;
pub mod rkd_format;
pub mod sample;
pub mod summary;
pub mod types;

pub use conversion::*;
pub use error::{Result, RkdError};
pub use export::*;
pub use parser::*;
pub use resample::*;
pub use sample::*;
pub use summary::*;
pub use types::*;
