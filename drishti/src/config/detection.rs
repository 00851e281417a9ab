//! Top-level DetectionConfig.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::algorithms::clustering::ClusteringConfig;
use crate::sensors::preprocessing::SamplingConfig;

use super::defaults;
use super::error::ConfigLoadError;

/// Full detector configuration loaded from TOML
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct DetectionConfig {
    /// Scan sampling settings
    #[serde(default)]
    pub sampling: SamplingConfig,

    /// Clustering settings
    #[serde(default)]
    pub clustering: ClusteringConfig,
}

impl DetectionConfig {
    /// Load and validate configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        log::debug!("Loaded detection config from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (drishti.toml), falling back to defaults
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(defaults::config_path());
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate from a TOML string
    pub fn from_toml(contents: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, ConfigLoadError> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.sampling.stride == 0 {
            return Err(ConfigLoadError::Invalid(
                "sampling.stride must be at least 1".to_string(),
            ));
        }
        let threshold = self.clustering.threshold_mm;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "clustering.threshold_mm must be positive and finite, got {threshold}"
            )));
        }
        if self.clustering.min_points == 0 {
            return Err(ConfigLoadError::Invalid(
                "clustering.min_points must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
