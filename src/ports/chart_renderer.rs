//! Chart Renderer Port - Drawing declarative chart descriptions.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::dashboard::ChartDescription;

/// Port for the charting collaborator.
///
/// Rendering is fire-and-forget: callers spawn it off the request path, log
/// failures and carry on, and never inspect the rendered output.
#[async_trait]
pub trait ChartRenderer: Send + Sync {
    /// Render `chart` into the surface identified by `target`.
    async fn render(&self, target: &str, chart: &ChartDescription) -> Result<(), ChartError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("Chart target unavailable: {0}")]
    TargetUnavailable(String),

    #[error("Chart rendering failed: {0}")]
    RenderFailed(String),
}
