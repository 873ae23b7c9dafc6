//! Tracing setup: console output plus the two log files.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::filter::{filter_fn, EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use finstat_core::models::config::LoggingConfig;

/// Install the global subscriber.
///
/// The console level follows the `-v` count unless `RUST_LOG` is set. When
/// `files` is given, INFO and WARN events are appended to the info log and
/// ERROR events to the error log.
pub fn init(verbose: u8, files: Option<&LoggingConfig>) -> anyhow::Result<()> {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        );

    let (info_layer, error_layer) = match files {
        Some(config) => {
            let info = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(open_log(&config.info_log)?))
                .with_filter(filter_fn(|meta| {
                    let level = *meta.level();
                    level == Level::INFO || level == Level::WARN
                }));

            let error = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(open_log(&config.error_log)?))
                .with_filter(LevelFilter::ERROR);

            (Some(info), Some(error))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console)
        .with(info_layer)
        .with(error_layer)
        .try_init()?;

    Ok(())
}

fn open_log(path: &Path) -> anyhow::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open log file {}: {}", path.display(), e))
}
