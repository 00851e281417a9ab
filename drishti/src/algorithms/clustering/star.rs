//! Seed-proximity ("star") clustering.
//!
//! Each cluster is grown from a single seed: a point joins only if it is
//! within the threshold of that seed. Distances between members are never
//! consulted, so two points near each other but far from the seed end up
//! in different clusters.
//!
//! ```text
//! for seed in frame order, skipping used:
//!     cluster = {seed}
//!     for j in frame order, skipping used:
//!         if D[seed][j] < threshold: cluster += j
//!     keep cluster if |cluster| >= min_points, else drop it (points stay used)
//! ```

use super::{Cluster, ClusteringConfig, DistanceMatrix};

/// Result of one clustering pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterAssignment {
    /// Retained clusters, ordered by seed index.
    pub clusters: Vec<Cluster>,
    /// Clusters dropped for having fewer than `min_points` members.
    pub discarded: usize,
}

/// Greedy seed-proximity clusterer.
#[derive(Debug, Clone)]
pub struct StarClusterer {
    config: ClusteringConfig,
}

impl StarClusterer {
    /// Create a new clusterer with the given configuration.
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Effective minimum cluster size (never zero).
    #[inline]
    pub fn min_points(&self) -> usize {
        self.config.min_points.max(1)
    }

    /// Partition frame indices into clusters.
    ///
    /// A frame with fewer points than `min_points` yields no clusters.
    pub fn cluster(&self, matrix: &DistanceMatrix) -> ClusterAssignment {
        let n = matrix.len();
        let min_points = self.min_points();
        let threshold = self.config.threshold_mm;

        let mut assignment = ClusterAssignment::default();
        if n < min_points {
            return assignment;
        }

        let mut used = vec![false; n];

        for seed in 0..n {
            if used[seed] {
                continue;
            }
            used[seed] = true;

            let mut members = vec![seed];
            for (j, &d) in matrix.row(seed).iter().enumerate() {
                if !used[j] && d < threshold {
                    used[j] = true;
                    members.push(j);
                }
            }

            if members.len() >= min_points {
                assignment.clusters.push(Cluster::new(members));
            } else {
                log::trace!(
                    "Discarding cluster seeded at {} ({} < {} points)",
                    seed,
                    members.len(),
                    min_points
                );
                assignment.discarded += 1;
            }
        }

        assignment
    }
}

impl Default for StarClusterer {
    fn default() -> Self {
        Self::new(ClusteringConfig::default())
    }
}
