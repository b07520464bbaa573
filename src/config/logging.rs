//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: `pretty` or `json`
    #[serde(default = "default_format")]
    pub format: String,
}

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LoggingConfig {
    /// Parsed output format
    pub fn log_format(&self) -> Result<LogFormat, ValidationError> {
        match self.format.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(ValidationError::UnknownLogFormat(self.format.clone())),
        }
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        self.log_format()?;
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info,stratml_insight=debug".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = LoggingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_format().unwrap(), LogFormat::Pretty);
    }

    #[test]
    fn test_format_is_case_insensitive() {
        let config = LoggingConfig {
            format: "JSON".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(config.log_format().unwrap(), LogFormat::Json);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let config = LoggingConfig {
            format: "xml".to_string(),
            ..LoggingConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::UnknownLogFormat("xml".to_string()))
        );
    }
}
