//! Sampled Cartesian frame.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Filtered, decimated Cartesian point set derived from one scan.
///
/// Index order is the order the readings survived sampling in. Clustering
/// seeds are picked in this order, so it must never be re-sorted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampledFrame {
    points: Vec<Point2D>,
    /// Index in the originating scan for each point
    source_indices: Vec<usize>,
}

impl SampledFrame {
    /// Create an empty frame with room for `capacity` points.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            source_indices: Vec::with_capacity(capacity),
        }
    }

    /// Build a frame from bare points. Source indices are the point positions.
    pub fn from_points(points: Vec<Point2D>) -> Self {
        let source_indices = (0..points.len()).collect();
        Self {
            points,
            source_indices,
        }
    }

    /// Append a point that came from raw reading `source_index`.
    #[inline]
    pub fn push(&mut self, point: Point2D, source_index: usize) {
        self.points.push(point);
        self.source_indices.push(source_index);
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the frame holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at frame index `i`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&Point2D> {
        self.points.get(i)
    }

    /// All points in frame order.
    #[inline]
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Raw-scan index of every point, parallel to [`points`](Self::points).
    #[inline]
    pub fn source_indices(&self) -> &[usize] {
        &self.source_indices
    }

    /// Iterate over points in frame order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2D> {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for SampledFrame {
    type Output = Point2D;

    fn index(&self, i: usize) -> &Point2D {
        &self.points[i]
    }
}

impl FromIterator<(usize, Point2D)> for SampledFrame {
    fn from_iter<I: IntoIterator<Item = (usize, Point2D)>>(iter: I) -> Self {
        let mut frame = SampledFrame::default();
        for (source_index, point) in iter {
            frame.push(point, source_index);
        }
        frame
    }
}
