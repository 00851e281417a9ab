//! JSON-lines scan log reader.
//!
//! A scan log holds one [`Scan`] per line:
//!
//! ```text
//! {"timestamp_ms": 1200, "samples": [[15, 0.0, 812.0], [15, 0.9, 815.5], ...]}
//! {"timestamp_ms": 1300, "samples": [[0, 0.0, 0.0], [14, 0.9, 816.0], ...]}
//! ```
//!
//! Blank lines are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::core::types::Scan;

/// Scan log errors
#[derive(Debug, Error)]
pub enum ScanLogError {
    /// Failed to read or write the underlying stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A log line is not a valid scan
    #[error("Decode error on line {line}: {message}")]
    Decode { line: usize, message: String },

    /// Failed to serialize an output record
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScanLogError>;

/// Sequential reader over a scan log.
///
/// # Example
///
/// ```ignore
/// use drishti::io::ScanLogReader;
///
/// let mut reader = ScanLogReader::open("session.jsonl")?;
/// while let Some(scan) = reader.next_scan()? {
///     println!("{} readings", scan.len());
/// }
/// ```
pub struct ScanLogReader<R> {
    reader: R,
    line: String,
    line_number: usize,
    scans_read: usize,
}

impl ScanLogReader<BufReader<File>> {
    /// Open a scan log file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        log::debug!("Opened scan log {}", path.as_ref().display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> ScanLogReader<R> {
    /// Wrap any buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            scans_read: 0,
        }
    }

    /// Read the next scan, or `None` at end of log.
    pub fn next_scan(&mut self) -> Result<Option<Scan>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let trimmed = self.line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let scan = serde_json::from_str(trimmed).map_err(|e| ScanLogError::Decode {
                line: self.line_number,
                message: e.to_string(),
            })?;
            self.scans_read += 1;
            return Ok(Some(scan));
        }
    }

    /// Number of scans returned so far.
    pub fn scans_read(&self) -> usize {
        self.scans_read
    }
}

impl<R: BufRead> Iterator for ScanLogReader<R> {
    type Item = Result<Scan>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_scan().transpose()
    }
}
