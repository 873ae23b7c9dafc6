//! Configuration structures for the processing pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the finstat pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FinstatConfig {
    /// Destination areas and report location.
    pub paths: PathsConfig,

    /// Log destinations.
    pub logging: LoggingConfig,

    /// File name classification rules.
    pub classification: ClassificationRules,

    /// Session gate configuration.
    pub session: SessionConfig,

    /// Report upload configuration.
    pub upload: UploadConfig,
}

/// Filesystem locations written by a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Area receiving documents that passed classification.
    pub valid_dir: PathBuf,

    /// Area receiving documents that failed classification.
    pub invalid_dir: PathBuf,

    /// Statistics report file (overwritten on every run).
    pub report_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            valid_dir: PathBuf::from("data/valid"),
            invalid_dir: PathBuf::from("data/invalid"),
            report_file: PathBuf::from("statistics.txt"),
        }
    }
}

/// Log file destinations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Receives INFO and WARN events.
    pub info_log: PathBuf,

    /// Receives ERROR events.
    pub error_log: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            info_log: PathBuf::from("logs/info.log"),
            error_log: PathBuf::from("logs/error.log"),
        }
    }
}

/// Rules applied to file names by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationRules {
    /// Required document extension, including the dot.
    pub extension: String,

    /// Literal tag every valid file name must contain.
    pub year_tag: String,
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self {
            extension: ".txt".to_string(),
            year_tag: "2024".to_string(),
        }
    }
}

/// Session gate configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lifetime of a freshly issued session, in seconds.
    pub ttl_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { ttl_secs: 60 }
    }
}

/// Remote upload of the finished report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Object storage endpoint (bucket URL). Upload is skipped when unset.
    pub endpoint: Option<String>,

    /// Object key the report is stored under.
    pub object_key: String,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            object_key: "statistics.txt".to_string(),
        }
    }
}

impl FinstatConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let json = r#"{ "paths": { "valid_dir": "/srv/valid" } }"#;
        let config: FinstatConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.paths.valid_dir, PathBuf::from("/srv/valid"));
        assert_eq!(config.paths.invalid_dir, PathBuf::from("data/invalid"));
        assert_eq!(config.classification, ClassificationRules::default());
        assert_eq!(config.session.ttl_secs, 60);
        assert!(config.upload.endpoint.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = FinstatConfig::default();
        config.classification.year_tag = "2025".to_string();
        config.save(&path).unwrap();

        let loaded = FinstatConfig::from_file(&path).unwrap();
        assert_eq!(loaded.classification.year_tag, "2025");
    }
}
