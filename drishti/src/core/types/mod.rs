//! Core data types for object detection.
//!
//! Sensor-side types:
//! - [`RawSample`]: One angular reading (quality, angle in degrees, distance in mm)
//! - [`Scan`]: One rotation's worth of raw samples
//!
//! Cartesian types:
//! - [`Point2D`]: 2D point in millimeters
//! - [`SampledFrame`]: Filtered, decimated point set derived from a scan

mod frame;
mod point;
mod scan;

pub use frame::SampledFrame;
pub use point::Point2D;
pub use scan::{RawSample, Scan};
