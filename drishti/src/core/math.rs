//! Angle helpers for the detection pipeline.
//!
//! The sensor reports angles in degrees and objects are reported with
//! bearings in degrees, so everything here works in degrees.

use super::types::Point2D;

/// Normalize an angle in degrees to [0, 360).
///
/// # Example
/// ```
/// use drishti::core::math::normalize_degrees;
///
/// assert_eq!(normalize_degrees(-90.0), 270.0);
/// assert_eq!(normalize_degrees(360.0), 0.0);
/// assert_eq!(normalize_degrees(725.0), 5.0);
/// ```
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if a >= 360.0 { 0.0 } else { a }
}

/// Bearing from the origin to `point`, in degrees within [0, 360).
///
/// Measured counter-clockwise from +X, so a point on +Y has bearing 90°.
/// A point just below +X whose bearing rounds to 360° in `f32` wraps to 0°.
///
/// # Example
/// ```
/// use drishti::core::math::bearing_degrees;
/// use drishti::Point2D;
///
/// assert!((bearing_degrees(&Point2D::new(0.0, 1000.0)) - 90.0).abs() < 1e-4);
/// assert!((bearing_degrees(&Point2D::new(0.0, -1.0)) - 270.0).abs() < 1e-4);
/// ```
#[inline]
pub fn bearing_degrees(point: &Point2D) -> f32 {
    let angle = point.y.atan2(point.x).to_degrees();
    if angle < 0.0 {
        normalize_degrees(angle + 360.0)
    } else {
        angle
    }
}
