//! Polar to Cartesian conversion for raw readings.
//!
//! The sensor's zero angle is re-based onto the robot's forward axis by
//! adding 90° before conversion:
//!
//! ```text
//! θ = (angle + 90°) in radians
//! x = distance * cos(θ)
//! y = distance * sin(θ)
//! ```
//!
//! Bearings computed downstream assume exactly this offset and rotation
//! direction.

use crate::core::types::{Point2D, RawSample};

/// Offset added to every sensor angle before conversion (degrees).
pub const SENSOR_ANGLE_OFFSET_DEG: f32 = 90.0;

/// Scan converter for polar-Cartesian transformations.
pub struct ScanConverter;

impl ScanConverter {
    /// Convert a sensor angle (degrees) and distance (mm) to a point.
    #[inline]
    pub fn polar_to_point(angle_deg: f32, distance_mm: f32) -> Point2D {
        let theta = (angle_deg + SENSOR_ANGLE_OFFSET_DEG).to_radians();
        let (sin_t, cos_t) = theta.sin_cos();
        Point2D::new(distance_mm * cos_t, distance_mm * sin_t)
    }

    /// Convert a raw reading to a point. Quality is not consulted.
    #[inline]
    pub fn to_point(sample: &RawSample) -> Point2D {
        Self::polar_to_point(sample.angle_deg, sample.distance_mm)
    }
}
