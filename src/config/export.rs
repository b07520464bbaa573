//! Export configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;

/// Where exports and chart descriptions are written
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory for CSV, JSON and HTML exports
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Directory for rendered chart descriptions
    #[serde(default = "default_charts_dir")]
    pub charts_dir: PathBuf,
}

impl ExportConfig {
    /// Validate export configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.output_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.output_dir"));
        }
        if self.charts_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("export.charts_dir"));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            charts_dir: default_charts_dir(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

fn default_charts_dir() -> PathBuf {
    PathBuf::from("exports/charts")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_output_dir_rejected() {
        let config = ExportConfig {
            output_dir: PathBuf::new(),
            ..ExportConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("export.output_dir"))
        );
    }
}
