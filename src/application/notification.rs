//! User-facing notifications, one per notable outcome.

use serde::{Deserialize, Serialize};

use crate::domain::analysis::TrendAnalysis;
use crate::domain::foundation::ErrorCode;

use super::ViewerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
            code: None,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
            code: None,
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
            code: Some(code.to_string()),
        }
    }
}

/// Trend results are informational, including "not enough data".
impl From<&TrendAnalysis> for Notification {
    fn from(trend: &TrendAnalysis) -> Self {
        Notification::info(trend.message())
    }
}

impl From<&ViewerError> for Notification {
    fn from(err: &ViewerError) -> Self {
        Notification::error(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_notification_carries_code() {
        let n = Notification::from(&ViewerError::NoDocumentsLoaded);
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.code.as_deref(), Some("NO_DOCUMENTS_LOADED"));
        assert_eq!(n.message, "No document loaded");
    }

    #[test]
    fn trend_notifications_are_informational() {
        let n = Notification::from(&TrendAnalysis::InsufficientData { points: 1 });
        assert_eq!(n.level, NotificationLevel::Info);
        assert_eq!(n.message, "Insufficient data for trend analysis");
        assert!(n.code.is_none());
    }

    #[test]
    fn success_serializes_without_code() {
        let json = serde_json::to_value(Notification::success("Loaded a.xml")).unwrap();
        assert_eq!(json["level"], "success");
        assert!(json.get("code").is_none());
    }
}
