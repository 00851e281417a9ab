//! JSON-lines writer for detection results.
//!
//! One line per processed frame, for whatever renders or consumes the
//! objects downstream.

use std::io::Write;

use serde::Serialize;

use crate::algorithms::clustering::Cluster;
use crate::algorithms::features::DetectedObject;
use crate::core::types::SampledFrame;
use crate::engine::{Detection, DetectionStats};

use super::scan_log::Result;

#[derive(Serialize)]
struct FrameRecord<'a> {
    scan_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    timestamp_ms: Option<u64>,
    objects: &'a [DetectedObject],
    stats: &'a DetectionStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<&'a SampledFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clusters: Option<&'a [Cluster]>,
}

/// Writes one JSON object per detection.
pub struct DetectionWriter<W: Write> {
    writer: W,
    include_points: bool,
    frames_written: usize,
}

impl<W: Write> DetectionWriter<W> {
    /// Create a writer emitting objects and stats only.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            include_points: false,
            frames_written: 0,
        }
    }

    /// Also emit the sampled points and cluster memberships.
    pub fn with_points(mut self, include_points: bool) -> Self {
        self.include_points = include_points;
        self
    }

    /// Write one detection.
    pub fn write(
        &mut self,
        scan_index: usize,
        timestamp_ms: Option<u64>,
        detection: &Detection,
    ) -> Result<()> {
        let record = FrameRecord {
            scan_index,
            timestamp_ms,
            objects: &detection.objects,
            stats: &detection.stats,
            frame: self.include_points.then_some(&detection.frame),
            clusters: self.include_points.then_some(detection.clusters.as_slice()),
        };
        serde_json::to_writer(&mut self.writer, &record)?;
        self.writer.write_all(b"\n")?;
        self.frames_written += 1;
        Ok(())
    }

    /// Number of frames written.
    pub fn frames_written(&self) -> usize {
        self.frames_written
    }

    /// Flush and return the inner writer.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
