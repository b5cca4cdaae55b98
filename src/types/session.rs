use crate::conversion::haversine_km;
use crate::types::{GpsFix, ImuFrame, MetaHeader};
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything decoded from a single RKD file.
///
/// Built once by the decoder and never mutated afterwards; the resampler
/// and exporters only borrow it.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RkdSession {
    pub file_path: PathBuf,
    pub file_size: usize,
    pub meta: MetaHeader,

    /// Key/value configuration table from HEADER records. Keys are not
    /// guaranteed unique across a file; last write wins.
    pub config: HashMap<String, String>,
    /// GPS fixes in arrival order (~5 Hz)
    pub gps_fixes: Vec<GpsFix>,
    /// Merged inertial frames in ascending frame order (~30 Hz)
    pub imu_frames: Vec<ImuFrame>,
    /// Histogram of record counts keyed by raw type code
    pub record_counts: BTreeMap<u16, u32>,

    /// End timestamp from the terminator record, if one was seen
    pub terminator_timestamp: Option<u32>,
}

impl RkdSession {
    pub fn new(file_path: PathBuf, file_size: usize, meta: MetaHeader) -> Self {
        Self {
            file_path,
            file_size,
            meta,
            config: HashMap::new(),
            gps_fixes: Vec::new(),
            imu_frames: Vec::new(),
            record_counts: BTreeMap::new(),
            terminator_timestamp: None,
        }
    }

    /// Session duration in seconds, derived from the GPS timestamp range.
    pub fn duration_seconds(&self) -> f64 {
        match (self.gps_fixes.first(), self.gps_fixes.last()) {
            (Some(first), Some(last)) if self.gps_fixes.len() >= 2 => {
                last.gps_timestamp.saturating_sub(first.gps_timestamp) as f64
            }
            _ => 0.0,
        }
    }

    /// Maximum ground speed in km/h.
    pub fn max_speed_kmh(&self) -> f64 {
        self.gps_fixes
            .iter()
            .map(|f| f.speed_ms)
            .fold(0.0, f64::max)
            * 3.6
    }

    /// Total distance in km along the raw GPS track.
    pub fn total_distance_km(&self) -> f64 {
        self.gps_fixes
            .windows(2)
            .map(|pair| {
                haversine_km(
                    pair[0].latitude,
                    pair[0].longitude,
                    pair[1].latitude,
                    pair[1].longitude,
                )
            })
            .sum()
    }

    pub fn has_gps_data(&self) -> bool {
        !self.gps_fixes.is_empty()
    }

    pub fn has_imu_data(&self) -> bool {
        !self.imu_frames.is_empty()
    }

    /// Mean Z-axis acceleration in m/s². Hovers around 9.81 on a full
    /// session, which makes it a useful decode sanity check.
    pub fn mean_accel_z(&self) -> f64 {
        if self.imu_frames.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.imu_frames.iter().map(|f| f.accel_z).sum();
        sum / self.imu_frames.len() as f64
    }
}
