//! End-to-end tests for the scan-to-objects pipeline.
//!
//! These exercise the public API only: raw readings in, objects out.

use approx::assert_relative_eq;
use drishti::{
    ClusteringConfig, DetectionConfig, DistanceMatrix, ObjectDetector, Point2D, RawSample,
    SampledFrame, SamplingConfig, ScanSampler, StarClusterer, detect_objects,
};

/// Config that keeps every reading, so tests can place points exactly.
fn every_reading(threshold_mm: f32, min_points: usize) -> DetectionConfig {
    DetectionConfig {
        sampling: SamplingConfig { stride: 1 },
        clustering: ClusteringConfig {
            threshold_mm,
            min_points,
        },
    }
}

/// Reading that lands exactly on `point` after the +90° re-basing.
fn reading_at(x: f32, y: f32) -> RawSample {
    let distance = x.hypot(y);
    let angle = y.atan2(x).to_degrees() - 90.0;
    RawSample::new(10.0, angle, distance)
}

/// Simulated room: a few round objects on top of sparse wall returns.
fn room_scan(n: usize) -> Vec<RawSample> {
    (0..n)
        .map(|i| {
            let angle = i as f32 * 360.0 / n as f32;
            let distance = if (40.0..50.0).contains(&angle) {
                600.0
            } else if (200.0..215.0).contains(&angle) {
                1100.0
            } else if i % 7 == 0 {
                0.0
            } else {
                2500.0 + 400.0 * (angle.to_radians() * 3.0).sin()
            };
            RawSample::new(if distance > 0.0 { 20.0 } else { 0.0 }, angle, distance)
        })
        .collect()
}

#[test]
fn test_transform_of_zero_angle_reading() {
    let scan = vec![RawSample::new(1.0, 0.0, 1000.0)];
    let frame = ScanSampler::default().sample(&scan).unwrap();

    assert_relative_eq!(frame[0].x, 0.0, epsilon = 1e-3);
    assert_relative_eq!(frame[0].y, 1000.0, epsilon = 1e-3);

    let detection = detect_objects(&scan, &every_reading(200.0, 1)).unwrap();
    assert_eq!(detection.objects.len(), 1);
    assert_relative_eq!(detection.objects[0].bearing, 90.0, epsilon = 1e-3);
    assert_eq!(detection.objects[0].size, 0.0);
}

#[test]
fn test_star_clustering_does_not_chain() {
    // A-B = 150, B-C = 150, A-C = 300 with threshold 200.
    let scan = vec![
        reading_at(0.0, 1000.0),
        reading_at(150.0, 1000.0),
        reading_at(300.0, 1000.0),
    ];
    let detection = detect_objects(&scan, &every_reading(200.0, 1)).unwrap();

    let clusters: Vec<Vec<usize>> = detection
        .clusters
        .iter()
        .map(|c| c.indices().to_vec())
        .collect();
    assert_eq!(clusters, vec![vec![0, 1], vec![2]]);
}

#[test]
fn test_star_clustering_with_minimum_size() {
    // Same chain with the default minimum: {A, B} and {C} are both too small.
    let scan = vec![
        reading_at(0.0, 1000.0),
        reading_at(150.0, 1000.0),
        reading_at(300.0, 1000.0),
    ];
    let detection = detect_objects(&scan, &every_reading(200.0, 3)).unwrap();

    assert!(detection.objects.is_empty());
    assert_eq!(detection.stats.clusters_discarded, 2);
}

#[test]
fn test_pair_below_minimum_yields_no_objects() {
    let scan = vec![reading_at(0.0, 800.0), reading_at(20.0, 800.0)];
    let detection = detect_objects(&scan, &every_reading(200.0, 3)).unwrap();

    assert_eq!(detection.frame.len(), 2);
    assert!(detection.objects.is_empty());
}

#[test]
fn test_all_dropouts_is_absent_not_error() {
    let scan: Vec<RawSample> = (0..100)
        .map(|i| RawSample::new(0.0, i as f32 * 3.6, 0.0))
        .collect();
    assert!(ObjectDetector::default().detect(&scan).is_none());
    assert!(ObjectDetector::default().detect(&[]).is_none());
}

#[test]
fn test_room_scan_invariants() {
    let scan = room_scan(720);
    let config = DetectionConfig::default();
    let detection = detect_objects(&scan, &config).unwrap();

    assert!(!detection.objects.is_empty());
    for (object, cluster) in detection.objects_with_clusters() {
        assert!(cluster.len() >= config.clustering.min_points);
        assert!((0.0..360.0).contains(&object.bearing));
        assert!(object.size >= 0.0);
    }

    let matrix = DistanceMatrix::from_frame(&detection.frame);
    for i in 0..matrix.len() {
        assert_eq!(matrix.get(i, i), 0.0);
        for j in 0..matrix.len() {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
        }
    }
}

#[test]
fn test_room_scan_finds_near_objects() {
    let detection = ObjectDetector::default().detect(&room_scan(720)).unwrap();

    // Sensor 40°-50° → bearing 130°-140°, 600 mm away.
    let near = detection
        .objects
        .iter()
        .find(|o| o.bearing > 128.0 && o.bearing < 142.0 && o.range_mm() < 1000.0)
        .expect("object at sensor 45°");
    assert!(near.range_mm() < 650.0);
    assert!(near.size < 100.0);

    // Sensor 200°-215° → bearing 290°-305°, 1100 mm away.
    assert!(
        detection
            .objects
            .iter()
            .any(|o| o.bearing > 288.0 && o.bearing < 307.0 && o.range_mm() < 1150.0)
    );
}

#[test]
fn test_deterministic_output() {
    let scan = room_scan(1000);
    let detector = ObjectDetector::default();

    let first = detector.detect(&scan).unwrap();
    let second = detector.detect(&scan).unwrap();
    let third = detect_objects(&scan, &DetectionConfig::default()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, third);
    for (a, b) in first.objects.iter().zip(&third.objects) {
        assert_eq!(a.center.x.to_bits(), b.center.x.to_bits());
        assert_eq!(a.bearing.to_bits(), b.bearing.to_bits());
    }
}

#[test]
fn test_stages_compose_like_detector() {
    let scan = room_scan(360);
    let config = DetectionConfig::default();

    let frame = ScanSampler::new(config.sampling).sample(&scan).unwrap();
    let matrix = DistanceMatrix::from_frame(&frame);
    let assignment = StarClusterer::new(config.clustering).cluster(&matrix);

    let detection = ObjectDetector::new(config).detect(&scan).unwrap();
    assert_eq!(detection.frame, frame);
    assert_eq!(detection.clusters, assignment.clusters);
}

#[test]
fn test_frames_are_independent() {
    let detector = ObjectDetector::default();
    let room = room_scan(720);
    let lone_blob: Vec<RawSample> = (0..12)
        .map(|i| RawSample::new(9.0, 10.0 + i as f32 * 0.2, 900.0))
        .collect();

    let before = detector.detect(&room).unwrap();
    let blob = detector.detect(&lone_blob).unwrap();
    let after = detector.detect(&room).unwrap();

    assert_eq!(blob.objects.len(), 1);
    assert_eq!(before, after);
}

#[test]
fn test_detect_frame_from_points() {
    let frame = SampledFrame::from_points(vec![
        Point2D::new(-1000.0, 0.0),
        Point2D::new(-1000.0, 50.0),
        Point2D::new(-1050.0, 0.0),
        Point2D::new(0.0, 3000.0),
    ]);
    let detection = ObjectDetector::default().detect_frame(frame, 4);

    assert_eq!(detection.objects.len(), 1);
    let object = detection.objects[0];
    assert_relative_eq!(object.center.x, -3050.0 / 3.0, epsilon = 1e-2);
    assert_relative_eq!(object.size, 50.0 * 2.0_f32.sqrt(), epsilon = 1e-3);
    assert!(object.bearing > 177.0 && object.bearing < 180.0);
}
