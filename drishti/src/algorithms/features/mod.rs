//! Object features derived from clusters.
//!
//! Each retained cluster reduces to a [`DetectedObject`]: centroid, diameter
//! and bearing from the sensor origin. No shape classification is done.

mod extractor;

pub use extractor::{DetectedObject, ObjectExtractor};
