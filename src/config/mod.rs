//! Application configuration loaded from `config.toml`.
//!
//! Default location: `<platform config dir>/web-explorer/config.toml`.
//! Every section is optional.

pub mod error;
pub mod load;
pub mod types;

pub use error::ConfigError;
pub use load::{ConfigPaths, LoadedConfig, load_config};
pub use types::{AppConfig, LoggingConfig, StorageConfig, UiConfig};
