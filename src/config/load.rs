use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use super::types::AppConfig;

const APP_DIR_NAME: &str = "web-explorer";
const CONFIG_FILENAME: &str = "config.toml";

/// Resolved locations for config, data and logs
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub data_dir: PathBuf,
    pub logs_dir: PathBuf,
}

#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub paths: ConfigPaths,
    pub config_exists: bool,
}

/// Load `config.toml` and resolve paths.
///
/// Data directory precedence: `data_dir_override`, then `[storage] data_dir`,
/// then the platform data directory. A missing config file yields defaults.
pub fn load_config(
    config_override: Option<PathBuf>,
    data_dir_override: Option<PathBuf>,
) -> Result<LoadedConfig, ConfigError> {
    let config_file = match config_override {
        Some(path) => path,
        None => default_config_dir()?.join(CONFIG_FILENAME),
    };
    let (config, config_exists) = read_config(&config_file)?;

    let data_dir = match data_dir_override.or_else(|| config.storage.data_dir.clone()) {
        Some(dir) => dir,
        None => default_data_dir()?,
    };
    let logs_dir = data_dir.join("logs");

    Ok(LoadedConfig {
        config,
        paths: ConfigPaths { config_file, data_dir, logs_dir },
        config_exists,
    })
}

fn read_config(path: &Path) -> Result<(AppConfig, bool), ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok((toml::from_str(&contents)?, true)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok((AppConfig::default(), false)),
        Err(err) => Err(ConfigError::Io(err)),
    }
}

fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::MissingHome)?;
    Ok(base.join(APP_DIR_NAME))
}

fn default_data_dir() -> Result<PathBuf, ConfigError> {
    let base = dirs::data_dir().ok_or(ConfigError::MissingHome)?;
    Ok(base.join(APP_DIR_NAME))
}
