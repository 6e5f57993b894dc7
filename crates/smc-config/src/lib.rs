//! Configuration management.

mod settings;

pub use settings::{AnalysisSettings, AppConfig, AppSettings, LoggingConfig};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Load configuration from file and environment.
///
/// Environment variables use the `SMC` prefix with `__` between sections,
/// e.g. `SMC__ANALYSIS__SWING_LENGTH=7`.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(true))
        .add_source(
            Environment::with_prefix("SMC")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

/// Load configuration if the file exists, otherwise fall back to defaults
/// layered with the environment.
pub fn load_config_or_default(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("SMC")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}
