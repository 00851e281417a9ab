//! I/O layer.
//!
//! Recorded scans in, detection records out. Live sensor transport is
//! handled elsewhere.
//!
//! # Contents
//!
//! - [`scan_log`]: JSON-lines scan log reader
//! - [`detection_writer`]: JSON-lines detection writer
//! - [`replay`]: log → detector → writer loop

pub mod detection_writer;
pub mod replay;
pub mod scan_log;

pub use detection_writer::DetectionWriter;
pub use replay::{ReplaySummary, replay};
pub use scan_log::{ScanLogError, ScanLogReader};
