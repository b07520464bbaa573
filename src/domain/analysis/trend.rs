//! Trend Analysis - Direction of a performance series.

use serde::{Deserialize, Serialize};

const STRONG_CHANGE: f64 = 5.0;
const MODERATE_CHANGE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    StrongUpward,
    ModerateUpward,
    Stable,
    ModerateDownward,
    StrongDownward,
}

impl TrendDirection {
    /// Classifies an average change per step.
    pub fn from_average_change(average_change: f64) -> Self {
        if average_change > STRONG_CHANGE {
            TrendDirection::StrongUpward
        } else if average_change > MODERATE_CHANGE {
            TrendDirection::ModerateUpward
        } else if average_change < -STRONG_CHANGE {
            TrendDirection::StrongDownward
        } else if average_change < -MODERATE_CHANGE {
            TrendDirection::ModerateDownward
        } else {
            TrendDirection::Stable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::StrongUpward => "Strong upward",
            TrendDirection::ModerateUpward => "Moderate upward",
            TrendDirection::Stable => "Stable",
            TrendDirection::ModerateDownward => "Moderate downward",
            TrendDirection::StrongDownward => "Strong downward",
        }
    }
}

/// Result of analysing a series. Too few points is a result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrendAnalysis {
    Computed {
        direction: TrendDirection,
        average_change: f64,
    },
    InsufficientData {
        points: usize,
    },
}

impl TrendAnalysis {
    pub fn direction(&self) -> Option<TrendDirection> {
        match self {
            TrendAnalysis::Computed { direction, .. } => Some(*direction),
            TrendAnalysis::InsufficientData { .. } => None,
        }
    }

    /// Notification text, e.g. "Trend: Strong upward".
    pub fn message(&self) -> String {
        match self {
            TrendAnalysis::Computed { direction, .. } => format!("Trend: {}", direction.label()),
            TrendAnalysis::InsufficientData { .. } => {
                "Insufficient data for trend analysis".to_string()
            }
        }
    }
}

/// Average change between the first and last point per step, classified.
///
/// Only the endpoints matter; intermediate points do not affect the result.
pub fn analyze_trend(performances: &[f64]) -> TrendAnalysis {
    match performances {
        [first, .., last] => {
            let steps = (performances.len() - 1) as f64;
            let average_change = (last - first) / steps;
            TrendAnalysis::Computed {
                direction: TrendDirection::from_average_change(average_change),
                average_change,
            }
        }
        _ => TrendAnalysis::InsufficientData {
            points: performances.len(),
        },
    }
}
