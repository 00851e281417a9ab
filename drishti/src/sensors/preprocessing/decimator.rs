//! Index-stride decimation for raw scans.
//!
//! Keeps every Nth reading by its position in the scan. This bounds the
//! point count fed to the O(n²) clustering stages.

use crate::core::types::RawSample;

use super::SampleFilter;

/// Stride decimator.
///
/// A reading survives when its original scan index is a multiple of the
/// stride. Index 0 always survives. A stride of 0 behaves like 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrideDecimator {
    stride: usize,
}

impl StrideDecimator {
    /// Create a decimator keeping every `stride`-th reading.
    pub fn new(stride: usize) -> Self {
        Self { stride }
    }

    /// Effective stride (never zero).
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride.max(1)
    }

    /// Whether the reading at `index` is kept.
    #[inline]
    pub fn keeps(&self, index: usize) -> bool {
        index % self.stride() == 0
    }

    /// Upper bound on how many readings of an `input_count` scan survive.
    pub fn max_output(&self, input_count: usize) -> usize {
        input_count.div_ceil(self.stride())
    }
}

impl SampleFilter for StrideDecimator {
    fn accepts(&self, index: usize, _sample: &RawSample) -> bool {
        self.keeps(index)
    }

    fn name(&self) -> &'static str {
        "StrideDecimator"
    }
}
