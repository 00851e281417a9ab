//! Raw range-sensor scan types.

use serde::{Deserialize, Serialize};

/// A single range-sensor reading.
///
/// Serialized as a `[quality, angle, distance]` triple, the order the
/// sensor driver hands readings over in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f32, f32, f32)", into = "(f32, f32, f32)")]
pub struct RawSample {
    /// Signal quality (0 = dropout)
    pub quality: f32,
    /// Angular position in degrees, sensor convention
    pub angle_deg: f32,
    /// Measured distance in millimeters (0 = dropout)
    pub distance_mm: f32,
}

impl RawSample {
    /// Create a new raw sample.
    #[inline]
    pub fn new(quality: f32, angle_deg: f32, distance_mm: f32) -> Self {
        Self {
            quality,
            angle_deg,
            distance_mm,
        }
    }
}

impl From<(f32, f32, f32)> for RawSample {
    fn from((quality, angle_deg, distance_mm): (f32, f32, f32)) -> Self {
        Self::new(quality, angle_deg, distance_mm)
    }
}

impl From<RawSample> for (f32, f32, f32) {
    fn from(sample: RawSample) -> Self {
        (sample.quality, sample.angle_deg, sample.distance_mm)
    }
}

/// One full rotation of range-sensor readings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scan {
    /// Readings in acquisition order
    pub samples: Vec<RawSample>,
    /// Scan timestamp in milliseconds (if available)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<u64>,
}

impl Scan {
    /// Create a scan from readings without a timestamp.
    pub fn new(samples: Vec<RawSample>) -> Self {
        Self {
            samples,
            timestamp_ms: None,
        }
    }

    /// Attach a timestamp.
    pub fn with_timestamp(mut self, timestamp_ms: u64) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// Number of raw readings.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the scan carries no readings.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl From<Vec<RawSample>> for Scan {
    fn from(samples: Vec<RawSample>) -> Self {
        Self::new(samples)
    }
}
