//! Pairwise distance table for a sampled frame.

use crate::core::types::{Point2D, SampledFrame};

/// Dense symmetric table of Euclidean distances between frame points.
///
/// Stored row-major as `n * n` values. `D[i][j] == D[j][i]` and
/// `D[i][i] == 0` hold by construction: each unordered pair is evaluated
/// once and mirrored.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f32>,
}

impl DistanceMatrix {
    /// Build the table for every point of a frame.
    pub fn from_frame(frame: &SampledFrame) -> Self {
        Self::from_points(frame.points())
    }

    /// Build the table for a slice of points.
    pub fn from_points(points: &[Point2D]) -> Self {
        let n = points.len();
        let mut data = vec![0.0f32; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }

        Self { n, data }
    }

    /// Number of points the table covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the table is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between frame points `i` and `j`.
    ///
    /// # Panics
    /// If either index is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f32 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of range for {}", self.n);
        self.data[i * self.n + j]
    }

    /// Distances from point `i` to every point, in frame order.
    #[inline]
    pub fn row(&self, i: usize) -> &[f32] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Largest distance between any two of `indices` (0 for fewer than two).
    pub fn max_among(&self, indices: &[usize]) -> f32 {
        let mut max = 0.0f32;
        for (k, &i) in indices.iter().enumerate() {
            let row = self.row(i);
            for &j in &indices[k + 1..] {
                max = max.max(row[j]);
            }
        }
        max
    }
}

impl std::ops::Index<(usize, usize)> for DistanceMatrix {
    type Output = f32;

    fn index(&self, (i, j): (usize, usize)) -> &f32 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of range for {}", self.n);
        &self.data[i * self.n + j]
    }
}
