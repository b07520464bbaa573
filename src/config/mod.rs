//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STRATML_INSIGHT` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment yields a usable configuration.
//!
//! # Example
//!
//! ```no_run
//! use stratml_insight::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Exports go to {}", config.export.output_dir.display());
//! ```

mod error;
mod export;
mod logging;
mod viewer;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use viewer::ViewerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Export and chart output locations
    #[serde(default)]
    pub export: ExportConfig,

    /// Viewer behaviour
    #[serde(default)]
    pub viewer: ViewerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STRATML_INSIGHT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STRATML_INSIGHT__LOGGING__FORMAT=json` -> `logging.format = "json"`
    /// - `STRATML_INSIGHT__VIEWER__AUTO_PROCESS_FIRST=false` -> `viewer.auto_process_first = false`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STRATML_INSIGHT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an empty output directory, an unknown
    /// log format or a zero file size limit.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.export.validate()?;
        self.viewer.validate()?;
        Ok(())
    }
}
