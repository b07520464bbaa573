//! Viewer behaviour configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Ten mebibytes.
const DEFAULT_MAX_FILE_BYTES: u64 = 10 * 1024 * 1024;

/// Viewer behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    /// Process the first successfully parsed file of each batch
    #[serde(default = "default_true")]
    pub auto_process_first: bool,

    /// Render chart descriptions after processing
    #[serde(default = "default_true")]
    pub show_charts: bool,

    /// Files larger than this are rejected before parsing
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,
}

impl ViewerConfig {
    /// Validate viewer configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_file_bytes == 0 {
            return Err(ValidationError::InvalidFileSizeLimit);
        }
        Ok(())
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            auto_process_first: true,
            show_charts: true,
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_file_bytes() -> u64 {
    DEFAULT_MAX_FILE_BYTES
}
