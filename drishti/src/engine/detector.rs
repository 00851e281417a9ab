//! Per-frame object detection pipeline.
//!
//! ```text
//! &[RawSample] → ScanSampler → SampledFrame
//!                                 ├→ DistanceMatrix ─┐
//!                                 │                  ├→ StarClusterer → Vec<Cluster>
//!                                 │                  │                      │
//!                                 └──────────────────┴→ ObjectExtractor ←───┘
//!                                                          → Vec<DetectedObject>
//! ```
//!
//! The detector keeps only its configuration. Nothing carries over from one
//! frame to the next, so a detector can be shared across threads and frames
//! can be processed in any order.

use serde::{Deserialize, Serialize};

use crate::algorithms::clustering::{Cluster, DistanceMatrix, StarClusterer};
use crate::algorithms::features::{DetectedObject, ObjectExtractor};
use crate::config::DetectionConfig;
use crate::core::types::{RawSample, SampledFrame, Scan};
use crate::sensors::preprocessing::ScanSampler;

/// Counters describing one detection pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionStats {
    /// Raw readings in the scan.
    pub raw_samples: usize,
    /// Points that survived sampling.
    pub sampled_points: usize,
    /// Clusters grown, including discarded ones.
    pub clusters_formed: usize,
    /// Clusters dropped for being below the minimum size.
    pub clusters_discarded: usize,
    /// Objects emitted.
    pub objects: usize,
}

/// Output of one detection pass.
///
/// `clusters[k]` is the cluster `objects[k]` was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Sampled points of the frame.
    pub frame: SampledFrame,
    /// Retained clusters, as indices into `frame`.
    pub clusters: Vec<Cluster>,
    /// Detected objects, one per cluster.
    pub objects: Vec<DetectedObject>,
    /// Pass counters.
    pub stats: DetectionStats,
}

impl Detection {
    /// Whether no objects were found.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate over objects paired with their clusters.
    pub fn objects_with_clusters(&self) -> impl Iterator<Item = (&DetectedObject, &Cluster)> {
        self.objects.iter().zip(self.clusters.iter())
    }
}

/// Scan-to-objects detector.
#[derive(Debug, Clone)]
pub struct ObjectDetector {
    config: DetectionConfig,
    sampler: ScanSampler,
    clusterer: StarClusterer,
}

impl ObjectDetector {
    /// Create a new detector with the given configuration.
    pub fn new(config: DetectionConfig) -> Self {
        if let Err(e) = config.validate() {
            log::warn!("{}; out-of-range values are clamped", e);
        }
        Self {
            config,
            sampler: ScanSampler::new(config.sampling),
            clusterer: StarClusterer::new(config.clustering),
        }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Detect objects in one scan.
    ///
    /// Returns `None` when no reading survives sampling. Callers should
    /// skip such frames rather than treat them as empty rooms.
    pub fn detect(&self, samples: &[RawSample]) -> Option<Detection> {
        let Some(frame) = self.sampler.sample(samples) else {
            log::debug!("Skipping frame: no valid readings in {} samples", samples.len());
            return None;
        };
        Some(self.detect_frame(frame, samples.len()))
    }

    /// Detect objects in a [`Scan`].
    pub fn detect_scan(&self, scan: &Scan) -> Option<Detection> {
        self.detect(&scan.samples)
    }

    /// Cluster an already-sampled frame and extract its objects.
    ///
    /// `raw_samples` is only recorded in the stats.
    pub fn detect_frame(&self, frame: SampledFrame, raw_samples: usize) -> Detection {
        let mut stats = DetectionStats {
            raw_samples,
            sampled_points: frame.len(),
            ..Default::default()
        };

        if frame.len() < self.clusterer.min_points() {
            log::debug!(
                "Frame has {} points, below minimum of {}; no objects",
                frame.len(),
                self.clusterer.min_points()
            );
            return Detection {
                frame,
                clusters: Vec::new(),
                objects: Vec::new(),
                stats,
            };
        }

        let matrix = DistanceMatrix::from_frame(&frame);
        let assignment = self.clusterer.cluster(&matrix);
        let objects = ObjectExtractor::extract_all(&assignment.clusters, &frame, &matrix);

        stats.clusters_formed = assignment.clusters.len() + assignment.discarded;
        stats.clusters_discarded = assignment.discarded;
        stats.objects = objects.len();

        log::debug!(
            "Frame: {} raw → {} points → {} clusters ({} discarded) → {} objects",
            stats.raw_samples,
            stats.sampled_points,
            stats.clusters_formed,
            stats.clusters_discarded,
            stats.objects
        );

        Detection {
            frame,
            clusters: assignment.clusters,
            objects,
            stats,
        }
    }
}

impl Default for ObjectDetector {
    fn default() -> Self {
        Self::new(DetectionConfig::default())
    }
}

/// Run the full pipeline once with `config`.
pub fn detect_objects(samples: &[RawSample], config: &DetectionConfig) -> Option<Detection> {
    ObjectDetector::new(*config).detect(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::clustering::ClusteringConfig;
    use crate::sensors::preprocessing::SamplingConfig;
    use approx::assert_relative_eq;

    /// Readings at `angle` ± small spread, all `distance` away, placed at
    /// every `stride`-th index so the default sampler keeps them.
    fn blob(angle: f32, distance: f32, count: usize) -> Vec<RawSample> {
        let mut samples = Vec::new();
        for k in 0..count {
            samples.push(RawSample::new(10.0, angle + k as f32 * 0.5, distance));
            for _ in 1..4 {
                samples.push(RawSample::new(0.0, 0.0, 0.0));
            }
        }
        samples
    }

    #[test]
    fn test_single_blob() {
        let scan = blob(0.0, 1000.0, 5);
        let detection = ObjectDetector::default().detect(&scan).unwrap();

        assert_eq!(detection.frame.len(), 5);
        assert_eq!(detection.objects.len(), 1);
        assert_eq!(detection.clusters[0].len(), 5);

        let object = detection.objects[0];
        assert!(object.bearing > 90.0 && object.bearing < 92.0);
        assert!(object.size > 0.0 && object.size < 50.0);
        assert_relative_eq!(object.range_mm(), 1000.0, epsilon = 1.0);
    }

    #[test]
    fn test_two_blobs_in_seed_order() {
        let mut scan = blob(180.0, 800.0, 4);
        scan.extend(blob(0.0, 1200.0, 4));
        let detection = ObjectDetector::default().detect(&scan).unwrap();

        assert_eq!(detection.objects.len(), 2);
        // Sensor 180° → θ = 270° → bearing 270°
        assert!(detection.objects[0].bearing > 269.0 && detection.objects[0].bearing < 272.0);
        assert!(detection.objects[1].bearing > 89.0 && detection.objects[1].bearing < 92.0);
        assert_eq!(detection.stats.objects, 2);
        assert_eq!(detection.stats.clusters_discarded, 0);
    }

    #[test]
    fn test_no_valid_readings_is_none() {
        let scan = vec![RawSample::new(0.0, 0.0, 0.0); 32];
        assert!(ObjectDetector::default().detect(&scan).is_none());
    }

    #[test]
    fn test_too_few_points_is_empty_not_none() {
        let scan = blob(0.0, 1000.0, 2);
        let detection = ObjectDetector::default().detect(&scan).unwrap();

        assert_eq!(detection.frame.len(), 2);
        assert!(detection.is_empty());
        assert_eq!(detection.stats.clusters_formed, 0);
    }

    #[test]
    fn test_stats_count_discarded() {
        // One 3-point blob and one lone point far away.
        let mut scan = blob(0.0, 1000.0, 3);
        scan.extend(blob(180.0, 3000.0, 1));
        let detection = ObjectDetector::default().detect(&scan).unwrap();

        assert_eq!(
            detection.stats,
            DetectionStats {
                raw_samples: 16,
                sampled_points: 4,
                clusters_formed: 2,
                clusters_discarded: 1,
                objects: 1,
            }
        );
    }

    #[test]
    fn test_detect_frame_directly() {
        let frame = SampledFrame::from_points(vec![
            crate::Point2D::new(1000.0, 0.0),
            crate::Point2D::new(1010.0, 0.0),
            crate::Point2D::new(1000.0, 10.0),
        ]);
        let detection = ObjectDetector::default().detect_frame(frame, 3);

        assert_eq!(detection.objects.len(), 1);
        assert_relative_eq!(detection.objects[0].size, 200.0_f32.sqrt(), epsilon = 1e-3);
    }

    #[test]
    fn test_objects_pair_with_clusters() {
        let mut scan = blob(90.0, 700.0, 3);
        scan.extend(blob(270.0, 700.0, 3));
        let detection = ObjectDetector::default().detect(&scan).unwrap();

        for (object, cluster) in detection.objects_with_clusters() {
            let members: Vec<_> = cluster.indices().iter().map(|&i| detection.frame[i]).collect();
            let n = members.len() as f32;
            let cx = members.iter().map(|p| p.x).sum::<f32>() / n;
            assert_relative_eq!(object.center.x, cx, epsilon = 1e-2);
        }
    }

    #[test]
    fn test_custom_config() {
        let config = DetectionConfig {
            sampling: SamplingConfig { stride: 1 },
            clustering: ClusteringConfig {
                threshold_mm: 50.0,
                min_points: 2,
            },
        };
        let scan = vec![
            RawSample::new(5.0, 0.0, 1000.0),
            RawSample::new(5.0, 1.0, 1000.0),
            RawSample::new(5.0, 90.0, 1000.0),
        ];

        let detection = detect_objects(&scan, &config).unwrap();
        assert_eq!(detection.frame.len(), 3);
        assert_eq!(detection.objects.len(), 1);
        assert_eq!(detection.clusters[0].indices(), &[0, 1]);
    }

    #[test]
    fn test_repeated_calls_identical() {
        let mut scan = blob(45.0, 900.0, 6);
        scan.extend(blob(200.0, 1500.0, 4));
        let detector = ObjectDetector::default();

        let first = detector.detect(&scan).unwrap();
        let second = detector.detect(&scan).unwrap();
        assert_eq!(first, second);
    }
}
