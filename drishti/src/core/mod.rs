//! Core foundation layer.
//!
//! This is the bottom layer of the detection stack with no internal dependencies.
//! All other layers depend on core.
//!
//! # Contents
//!
//! - [`types`]: Core data types (raw samples, scans, points, sampled frames)
//! - [`math`]: Angle helpers (degree normalization, bearings)

pub mod math;
pub mod types;
