//! CLI subcommands.

pub mod classify;
pub mod config;
pub mod run;

use std::path::{Path, PathBuf};

use finstat_core::FinstatConfig;

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("finstat")
        .join("config.json")
}

/// Configuration file to use: the explicit path, else the default one.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load the configuration once for the whole process.
///
/// An explicit path must exist. Without one, the default file is used if
/// present, otherwise built-in defaults.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<FinstatConfig> {
    if let Some(path) = explicit {
        return FinstatConfig::from_file(Path::new(path))
            .map_err(|e| anyhow::anyhow!("Failed to load config {}: {}", path, e));
    }

    let path = default_config_path();
    if path.exists() {
        Ok(FinstatConfig::from_file(&path)?)
    } else {
        Ok(FinstatConfig::default())
    }
}
