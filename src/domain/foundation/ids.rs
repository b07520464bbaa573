//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Unique identifier for a document held by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(Uuid);

impl DocumentId {
    /// Creates a new random DocumentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of an objective: goal index plus objective index within that goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveKey {
    pub goal: usize,
    pub objective: usize,
}

impl ObjectiveKey {
    pub fn new(goal: usize, objective: usize) -> Self {
        Self { goal, objective }
    }

    /// Key of the `index`-th indicator under this objective.
    pub fn indicator(&self, index: usize) -> IndicatorKey {
        IndicatorKey::new(self.goal, self.objective, index)
    }

    /// Anchor used by the table of contents.
    pub fn anchor(&self) -> String {
        format!("obj-{}-{}", self.goal, self.objective)
    }
}

/// Composite key identifying an indicator inside one document.
///
/// All three indices are 0-based document positions, so the key is unique
/// within a document and stable across reloads of the same content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct IndicatorKey {
    pub goal: usize,
    pub objective: usize,
    pub indicator: usize,
}

const INDICATOR_PREFIX: &str = "indicator-";

impl IndicatorKey {
    pub fn new(goal: usize, objective: usize, indicator: usize) -> Self {
        Self {
            goal,
            objective,
            indicator,
        }
    }

    /// The objective this indicator belongs to.
    pub fn objective_key(&self) -> ObjectiveKey {
        ObjectiveKey::new(self.goal, self.objective)
    }

    /// Anchor used by the view layer, e.g. `indicator-0-1-2`.
    pub fn anchor(&self) -> String {
        format!("{}{}", INDICATOR_PREFIX, self.suffix())
    }

    /// Bare `g-o-i` form used inside file names.
    pub fn suffix(&self) -> String {
        format!("{}-{}-{}", self.goal, self.objective, self.indicator)
    }
}

impl fmt::Display for IndicatorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.anchor())
    }
}

impl FromStr for IndicatorKey {
    type Err = ValidationError;

    /// Accepts both `indicator-0-1-2` and `0-1-2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("indicator key"));
        }

        let body = trimmed.strip_prefix(INDICATOR_PREFIX).unwrap_or(trimmed);
        let parts = body
            .split('-')
            .map(|part| part.parse::<usize>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ValidationError::invalid_format("indicator key", e.to_string()))?;

        match parts.as_slice() {
            [goal, objective, indicator] => Ok(Self::new(*goal, *objective, *indicator)),
            _ => Err(ValidationError::invalid_format(
                "indicator key",
                format!("expected three indices, got {}", parts.len()),
            )),
        }
    }
}

impl From<IndicatorKey> for String {
    fn from(key: IndicatorKey) -> Self {
        key.anchor()
    }
}

impl TryFrom<String> for IndicatorKey {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
