//! Spatial clustering of sampled frames.
//!
//! - [`DistanceMatrix`]: exact pairwise distance table (O(n²) time and space)
//! - [`StarClusterer`]: greedy seed-proximity clustering over that table
//!
//! # Example
//!
//! ```
//! use drishti::algorithms::clustering::{DistanceMatrix, StarClusterer};
//! use drishti::Point2D;
//!
//! let points = vec![
//!     Point2D::new(0.0, 0.0),
//!     Point2D::new(40.0, 0.0),
//!     Point2D::new(0.0, 40.0),
//!     Point2D::new(3000.0, 0.0),
//! ];
//! let matrix = DistanceMatrix::from_points(&points);
//! let result = StarClusterer::default().cluster(&matrix);
//!
//! assert_eq!(result.clusters.len(), 1);
//! assert_eq!(result.clusters[0].indices(), &[0, 1, 2]);
//! assert_eq!(result.discarded, 1);
//! ```

mod distance;
mod star;

pub use distance::DistanceMatrix;
pub use star::{ClusterAssignment, StarClusterer};

use serde::{Deserialize, Serialize};

use crate::config::defaults;

/// Configuration for clustering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Seed-to-point distance below which a point joins the seed's cluster (mm).
    ///
    /// Default: 200.0
    pub threshold_mm: f32,

    /// Minimum cluster size reported as an object.
    ///
    /// Default: 3
    pub min_points: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            threshold_mm: defaults::cluster_threshold_mm(),
            min_points: defaults::min_points_for_object(),
        }
    }
}

/// A group of frame indices clustered around a seed.
///
/// Never empty; the first index is the seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct Cluster {
    indices: Vec<usize>,
}

impl TryFrom<Vec<usize>> for Cluster {
    type Error = &'static str;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        if indices.is_empty() {
            return Err("cluster must have at least one index");
        }
        Ok(Self { indices })
    }
}

impl From<Cluster> for Vec<usize> {
    fn from(cluster: Cluster) -> Self {
        cluster.indices
    }
}

impl Cluster {
    pub(crate) fn new(indices: Vec<usize>) -> Self {
        debug_assert!(!indices.is_empty());
        Self { indices }
    }

    /// Seed index.
    #[inline]
    pub fn seed(&self) -> usize {
        self.indices[0]
    }

    /// Member indices, seed first, then in frame order.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always false for clusters built by [`StarClusterer`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Whether frame index `i` belongs to this cluster.
    pub fn contains(&self, i: usize) -> bool {
        self.indices.contains(&i)
    }
}
