//! Cluster to object reduction.

use serde::{Deserialize, Serialize};

use crate::algorithms::clustering::{Cluster, DistanceMatrix};
use crate::core::math::bearing_degrees;
use crate::core::types::{Point2D, SampledFrame};

/// A physical object detected in one frame.
///
/// Has no identity beyond the frame it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectedObject {
    /// Mean of the member points (mm)
    pub center: Point2D,
    /// Cluster diameter: largest distance between two members (mm)
    pub size: f32,
    /// Angle from the origin to `center`, degrees in [0, 360)
    pub bearing: f32,
}

impl DetectedObject {
    /// Distance from the sensor origin to the object center (mm).
    #[inline]
    pub fn range_mm(&self) -> f32 {
        self.center.norm()
    }
}

/// Reduces clusters to [`DetectedObject`]s.
pub struct ObjectExtractor;

impl ObjectExtractor {
    /// Extract one object from a cluster of `frame`.
    ///
    /// `matrix` must be the distance table built from the same frame.
    pub fn extract(
        cluster: &Cluster,
        frame: &SampledFrame,
        matrix: &DistanceMatrix,
    ) -> DetectedObject {
        let center = Self::centroid(cluster, frame);
        DetectedObject {
            center,
            size: matrix.max_among(cluster.indices()),
            bearing: bearing_degrees(&center),
        }
    }

    /// Extract objects for every cluster, preserving cluster order.
    pub fn extract_all(
        clusters: &[Cluster],
        frame: &SampledFrame,
        matrix: &DistanceMatrix,
    ) -> Vec<DetectedObject> {
        clusters
            .iter()
            .map(|cluster| Self::extract(cluster, frame, matrix))
            .collect()
    }

    /// Arithmetic mean of the cluster's points.
    pub fn centroid(cluster: &Cluster, frame: &SampledFrame) -> Point2D {
        let (sum_x, sum_y) = cluster
            .indices()
            .iter()
            .map(|&i| frame[i])
            .fold((0.0f32, 0.0f32), |(sx, sy), p| (sx + p.x, sy + p.y));
        let n = cluster.len() as f32;
        Point2D::new(sum_x / n, sum_y / n)
    }
}
