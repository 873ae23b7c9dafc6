//! Config command - manage configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use finstat_core::FinstatConfig;

use super::config_path;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "paths.valid_dir")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs, explicit: Option<&str>) -> anyhow::Result<()> {
    let path = config_path(explicit);

    match args.command {
        ConfigCommand::Show => show_config(&path),
        ConfigCommand::Init(init_args) => init_config(init_args, path),
        ConfigCommand::Get { key } => get_config(&path, &key),
        ConfigCommand::Set { key, value } => set_config(&path, &key, &value),
        ConfigCommand::Path => show_path(&path),
    }
}

fn load_or_default(path: &Path) -> anyhow::Result<FinstatConfig> {
    if path.exists() {
        Ok(FinstatConfig::from_file(path)?)
    } else {
        Ok(FinstatConfig::default())
    }
}

fn show_config(path: &Path) -> anyhow::Result<()> {
    if !path.exists() {
        println!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }

    let config = load_or_default(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs, path: PathBuf) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or(path);

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    FinstatConfig::default().save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

/// Look up a dotted key in the JSON form of the configuration.
fn lookup<'a>(json: &'a serde_json::Value, key: &str) -> anyhow::Result<&'a serde_json::Value> {
    key.split('.').try_fold(json, |current, part| {
        current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })
}

fn get_config(path: &Path, key: &str) -> anyhow::Result<()> {
    let json = serde_json::to_value(load_or_default(path)?)?;
    println!("{}", serde_json::to_string_pretty(lookup(&json, key)?)?);

    Ok(())
}

/// Set a dotted key, validating the result against the config schema.
fn apply_setting(config: &FinstatConfig, key: &str, value: &str) -> anyhow::Result<FinstatConfig> {
    let mut json = serde_json::to_value(config)?;

    let (parent_key, field) = match key.rsplit_once('.') {
        Some((parent, field)) => (Some(parent), field),
        None => (None, key),
    };

    let mut current = &mut json;
    if let Some(parent_key) = parent_key {
        for part in parent_key.split('.') {
            current = current
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    let obj = current
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Cannot set value at non-object path"))?;
    let existing = obj
        .get(field)
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    // string fields keep the raw text, so "2025" stays a year tag
    let parsed_value = match existing {
        serde_json::Value::String(_) => serde_json::Value::String(value.to_string()),
        _ => serde_json::from_str(value)
            .unwrap_or_else(|_| serde_json::Value::String(value.to_string())),
    };
    obj.insert(field.to_string(), parsed_value);

    Ok(serde_json::from_value(json)?)
}

fn set_config(path: &Path, key: &str, value: &str) -> anyhow::Result<()> {
    let config = apply_setting(&load_or_default(path)?, key, value)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;

    println!("{} Set {} = {}", style("✓").green(), key, value);

    Ok(())
}

fn show_path(path: &Path) -> anyhow::Result<()> {
    println!("Configuration file: {}", path.display());

    if path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'finstat config init' to create a configuration file.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let json = serde_json::to_value(FinstatConfig::default()).unwrap();

        assert_eq!(
            lookup(&json, "classification.year_tag").unwrap(),
            &serde_json::Value::String("2024".to_string())
        );
        assert!(lookup(&json, "paths.nope").is_err());
    }

    #[test]
    fn test_apply_setting() {
        let config = FinstatConfig::default();

        let updated = apply_setting(&config, "paths.valid_dir", "/srv/valid").unwrap();
        assert_eq!(updated.paths.valid_dir, PathBuf::from("/srv/valid"));

        let updated = apply_setting(&config, "session.ttl_secs", "300").unwrap();
        assert_eq!(updated.session.ttl_secs, 300);

        let updated = apply_setting(&config, "upload.endpoint", "https://bucket.example.com").unwrap();
        assert_eq!(updated.upload.endpoint.as_deref(), Some("https://bucket.example.com"));

        let updated = apply_setting(&config, "classification.year_tag", "2025").unwrap();
        assert_eq!(updated.classification.year_tag, "2025");
    }

    #[test]
    fn test_apply_setting_rejects_bad_values() {
        let config = FinstatConfig::default();

        assert!(apply_setting(&config, "session.ttl_secs", "soon").is_err());
        assert!(apply_setting(&config, "paths.unknown", "x").is_err());
        assert!(apply_setting(&config, "missing.key", "x").is_err());
    }
}
