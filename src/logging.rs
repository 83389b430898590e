//! File logging.
//!
//! The TUI owns the terminal, so log records go to a rotating file under the
//! data directory instead of stderr. `RUST_LOG` overrides the configured level.
//! Ephemeral sessions install the logger without a writer.

use std::path::PathBuf;

use anyhow::{Context, Result};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use crate::config::{ConfigPaths, LoggingConfig};

/// Start the global logger. Keep the handle alive until exit so buffered
/// records are flushed.
///
/// Without `paths` the logger is installed but writes nothing, so a session
/// leaves no files behind.
pub fn init_logging(config: &LoggingConfig, paths: Option<&ConfigPaths>) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(&config.level)
        .with_context(|| format!("Invalid log level: {}", config.level))?;

    let Some(paths) = paths else {
        return logger.do_not_log().start().context("Failed to start logger");
    };

    let log_path = config.path.clone().unwrap_or_else(|| paths.logs_dir.join("web-explorer.log"));
    let directory = log_path.parent().map(PathBuf::from).unwrap_or_else(|| paths.logs_dir.clone());
    let basename =
        log_path.file_stem().and_then(|s| s.to_str()).unwrap_or("web-explorer").to_string();

    let handle = logger
        .log_to_file(FileSpec::default().directory(directory).basename(basename))
        .rotate(
            Criterion::Size(config.rotate_size),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.rotate_keep),
        )
        .start()
        .context("Failed to start file logger")?;
    Ok(handle)
}
