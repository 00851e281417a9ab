//! Scan log replay: reader → detector → writer.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::engine::ObjectDetector;

use super::detection_writer::DetectionWriter;
use super::scan_log::{Result, ScanLogReader};

/// Totals for one replay run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Scans taken from the log.
    pub scans_read: usize,
    /// Scans that produced a detection record.
    pub frames_written: usize,
    /// Scans with no surviving readings.
    pub skipped: usize,
    /// Objects across all written frames.
    pub objects: usize,
}

/// Run every scan in `reader` through `detector`, writing one record per
/// non-empty frame.
///
/// `max_scans` of 0 reads the whole log. Otherwise reading stops after
/// `max_scans` scans, and nothing past them is read or decoded.
pub fn replay<R: BufRead, W: Write>(
    detector: &ObjectDetector,
    reader: &mut ScanLogReader<R>,
    writer: &mut DetectionWriter<W>,
    max_scans: usize,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    while max_scans == 0 || summary.scans_read < max_scans {
        let Some(scan) = reader.next_scan()? else {
            break;
        };
        let scan_index = summary.scans_read;
        summary.scans_read += 1;

        match detector.detect_scan(&scan) {
            Some(detection) => {
                summary.objects += detection.objects.len();
                writer.write(scan_index, scan.timestamp_ms, &detection)?;
                summary.frames_written += 1;
            }
            None => {
                log::debug!("Scan {}: no valid readings, skipped", scan_index);
                summary.skipped += 1;
            }
        }
    }

    Ok(summary)
}
