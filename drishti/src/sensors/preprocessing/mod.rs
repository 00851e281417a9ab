//! Scan sampling (raw readings to Cartesian frame).
//!
//! Provides the filters and converter that turn one rotation of raw
//! readings into a [`SampledFrame`] ready for clustering.
//!
//! # Pipeline
//!
//! ```text
//! Scan → StrideDecimator → ValidityFilter → ScanConverter → SampledFrame
//! ```
//!
//! The stride test runs first and looks at the reading's position in the
//! original scan, so a dropout on a stride boundary is lost rather than
//! replaced by its neighbour.
//!
//! # Example
//!
//! ```
//! use drishti::{RawSample, SamplingConfig, ScanSampler};
//!
//! let sampler = ScanSampler::new(SamplingConfig { stride: 2 });
//! let readings = vec![
//!     RawSample::new(10.0, 0.0, 1000.0),
//!     RawSample::new(10.0, 1.0, 1000.0), // dropped by stride
//!     RawSample::new(0.0, 2.0, 1000.0),  // dropped as dropout
//! ];
//!
//! let frame = sampler.sample(&readings).expect("one valid point");
//! assert_eq!(frame.len(), 1);
//! ```

mod converter;
mod decimator;
mod validity;

pub use converter::{SENSOR_ANGLE_OFFSET_DEG, ScanConverter};
pub use decimator::StrideDecimator;
pub use validity::ValidityFilter;

use serde::{Deserialize, Serialize};

use crate::core::types::{Point2D, RawSample, SampledFrame};

/// Trait for per-reading filters.
///
/// Filters see each reading together with its index in the original scan.
pub trait SampleFilter: Send + Sync {
    /// Whether the reading at `index` should be kept.
    fn accepts(&self, index: usize, sample: &RawSample) -> bool;

    /// Get the name of this filter for diagnostics.
    fn name(&self) -> &'static str;
}

/// Configuration for scan sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingConfig {
    /// Keep every Nth raw reading.
    ///
    /// Default: 4
    pub stride: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            stride: crate::config::defaults::sampling_stride(),
        }
    }
}

/// Scan sampler: decimation, dropout filtering and polar conversion.
#[derive(Debug, Clone)]
pub struct ScanSampler {
    decimator: StrideDecimator,
    validity: ValidityFilter,
}

impl ScanSampler {
    /// Create a new sampler with the given configuration.
    pub fn new(config: SamplingConfig) -> Self {
        Self {
            decimator: StrideDecimator::new(config.stride),
            validity: ValidityFilter::new(),
        }
    }

    /// Lazily yield `(scan_index, point)` for every reading that survives.
    ///
    /// The returned iterator is cheap to clone, so the same pass can be
    /// replayed without re-reading the sensor.
    pub fn points<'a>(
        &'a self,
        samples: &'a [RawSample],
    ) -> impl Iterator<Item = (usize, Point2D)> + Clone + 'a {
        samples
            .iter()
            .enumerate()
            .filter(move |(i, s)| self.decimator.accepts(*i, s))
            .filter(move |(i, s)| self.validity.accepts(*i, s))
            .map(|(i, s)| (i, ScanConverter::to_point(s)))
    }

    /// Sample one scan into a frame.
    ///
    /// Returns `None` when no reading survives; callers should skip the
    /// frame rather than report zero objects.
    pub fn sample(&self, samples: &[RawSample]) -> Option<SampledFrame> {
        let mut frame = SampledFrame::with_capacity(self.decimator.max_output(samples.len()));
        for (index, point) in self.points(samples) {
            frame.push(point, index);
        }

        if frame.is_empty() {
            log::trace!(
                "No valid readings among {} raw samples (stride {})",
                samples.len(),
                self.decimator.stride()
            );
            None
        } else {
            Some(frame)
        }
    }

    /// Names of the filters in application order.
    pub fn filter_names(&self) -> [&'static str; 2] {
        [self.decimator.name(), self.validity.name()]
    }
}

impl Default for ScanSampler {
    fn default() -> Self {
        Self::new(SamplingConfig::default())
    }
}
