//! Detection engine layer.
//!
//! Wires sampling, clustering and feature extraction into one pure
//! per-frame transform.
//!
//! # Contents
//!
//! - [`ObjectDetector`]: scan in, [`Detection`] out
//! - [`detect_objects`]: free-function form for one-off calls

mod detector;

pub use detector::{Detection, DetectionStats, ObjectDetector, detect_objects};
