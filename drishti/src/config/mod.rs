//! Detector configuration loading.
//!
//! Loads all configuration from a single TOML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti::config::DetectionConfig;
//!
//! // Load from default path (drishti.toml), or built-in defaults if absent
//! let config = DetectionConfig::load_default()?;
//!
//! let detector = ObjectDetector::new(config);
//! ```
//!
//! ## Example TOML
//!
//! ```toml
//! [sampling]
//! stride = 4            # keep every 4th raw reading
//!
//! [clustering]
//! threshold_mm = 200.0  # seed-to-point join distance
//! min_points = 3        # smallest cluster reported as an object
//! ```

pub(crate) mod defaults;
mod detection;
mod error;

pub use detection::DetectionConfig;
pub use error::ConfigLoadError;
