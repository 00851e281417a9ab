//! Dropout filter for raw readings.
//!
//! The sensor reports a lost return as zero distance or zero quality.

use crate::core::types::RawSample;

use super::SampleFilter;

/// Rejects readings that denote sensor dropout.
///
/// Filters out:
/// - Distances ≤ 0
/// - Qualities ≤ 0
/// - NaN in either field
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidityFilter;

impl ValidityFilter {
    /// Create a new validity filter.
    pub fn new() -> Self {
        Self
    }

    /// Check if a reading carries a real return.
    #[inline]
    pub fn is_valid(&self, sample: &RawSample) -> bool {
        sample.distance_mm > 0.0 && sample.quality > 0.0
    }
}

impl SampleFilter for ValidityFilter {
    fn accepts(&self, _index: usize, sample: &RawSample) -> bool {
        self.is_valid(sample)
    }

    fn name(&self) -> &'static str {
        "ValidityFilter"
    }
}
