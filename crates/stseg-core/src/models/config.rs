//! Configuration structures for the segmentation pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, StsegError};

/// Main configuration for the stseg pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StsegConfig {
    /// Segmenter configuration.
    pub segmenter: SegmenterConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

impl Default for StsegConfig {
    fn default() -> Self {
        Self {
            segmenter: SegmenterConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

/// Segmenter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Parse boundary date tokens into calendar dates.
    pub parse_dates: bool,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self { parse_dates: true }
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// File extension of eligible input files.
    pub input_extension: String,

    /// Suffix appended to the input stem for output file names.
    pub output_suffix: String,

    /// Subdirectory of the input directory used for outputs when no output
    /// directory is given.
    pub output_subdir: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input_extension: "txt".to_string(),
            output_suffix: "_structured".to_string(),
            output_subdir: "structured".to_string(),
        }
    }
}

impl StsegConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| StsegError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| StsegError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StsegConfig::default();
        assert!(config.segmenter.parse_dates);
        assert_eq!(config.batch.input_extension, "txt");
        assert_eq!(config.batch.output_suffix, "_structured");
        assert_eq!(config.batch.output_subdir, "structured");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: StsegConfig =
            serde_json::from_str(r#"{"segmenter": {"parse_dates": false}}"#).unwrap();
        assert!(!config.segmenter.parse_dates);
        assert_eq!(config.batch.input_extension, "txt");
    }
}
