#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A merged accelerometer + gyroscope measurement at one video frame.
///
/// Accelerometer and gyroscope records arrive independently; a frame seen
/// by only one sensor gets zeros for the other's axes.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImuFrame {
    pub frame: u32,
    /// m/s²
    pub accel_x: f64,
    pub accel_y: f64,
    pub accel_z: f64,
    /// deg/s
    pub gyro_x: f64,
    pub gyro_y: f64,
    pub gyro_z: f64,
}
