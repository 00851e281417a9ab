//! Drishti - Object detection from single 2D LiDAR scans
//!
//! Turns one rotation of range-sensor readings into a list of discrete
//! objects, each described by a center, a size and a bearing.
//!
//! # Architecture
//!
//! The crate is organized into 5 logical layers:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                      bin/                           │  ← Executables
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  io/ , config/                      │  ← Infrastructure
//! │        (scan logs, detection records, TOML)         │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                    engine/                          │  ← Orchestration
//! │                (per-frame detector)                 │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                  algorithms/                        │  ← Core algorithms
//! │           (clustering, feature extraction)          │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                   sensors/                          │  ← Sensor processing
//! │                 (preprocessing)                     │
//! └─────────────────────────────────────────────────────┘
//!                          │
//! ┌─────────────────────────────────────────────────────┐
//! │                     core/                           │  ← Foundation
//! │                (types, math)                        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Pipeline
//!
//! 1. **Sampling**: keep every Nth reading, drop dropouts, convert polar
//!    readings to Cartesian millimeters with the sensor's zero angle on +Y
//! 2. **Distances**: exact pairwise distance table for the sampled points
//! 3. **Clustering**: greedy seed-proximity clustering, small clusters dropped
//! 4. **Features**: centroid, diameter and bearing per retained cluster
//!
//! Detection is stateless: every scan is processed from scratch and no
//! object survives from one frame to the next.
//!
//! # Example
//!
//! ```
//! use drishti::{ObjectDetector, RawSample};
//!
//! // A small object straight ahead at 1 m, sampled every 4th reading.
//! let scan: Vec<RawSample> = (0..16)
//!     .map(|i| RawSample::new(12.0, i as f32 * 0.25, 1000.0))
//!     .collect();
//!
//! let detection = ObjectDetector::default().detect(&scan).expect("valid readings");
//! assert_eq!(detection.objects.len(), 1);
//! assert!((detection.objects[0].bearing - 91.5).abs() < 1.0);
//! ```

// ============================================================================
// Layer 1: Core foundation (no internal deps)
// ============================================================================
pub mod core;

// ============================================================================
// Layer 2: Sensor processing (depends on core)
// ============================================================================
pub mod sensors;

// ============================================================================
// Layer 3: Algorithms (depends on core)
// ============================================================================
pub mod algorithms;

// ============================================================================
// Layer 4: Detection engine (depends on core, sensors, algorithms)
// ============================================================================
pub mod config;
pub mod engine;

// ============================================================================
// Layer 5: I/O infrastructure (depends on all layers)
// ============================================================================
pub mod io;

// ============================================================================
// Convenience re-exports (flat namespace for common use)
// ============================================================================

// Core types
pub use crate::core::math;
pub use crate::core::types::{Point2D, RawSample, SampledFrame, Scan};

// Sensors - Preprocessing
pub use sensors::preprocessing::{
    SampleFilter, SamplingConfig, ScanConverter, ScanSampler, StrideDecimator, ValidityFilter,
};

// Algorithms
pub use algorithms::clustering::{
    Cluster, ClusterAssignment, ClusteringConfig, DistanceMatrix, StarClusterer,
};
pub use algorithms::features::{DetectedObject, ObjectExtractor};

// Engine and config
pub use config::{ConfigLoadError, DetectionConfig};
pub use engine::{Detection, DetectionStats, ObjectDetector, detect_objects};

// I/O
pub use io::{DetectionWriter, ReplaySummary, ScanLogError, ScanLogReader, replay};
