//! Plan data model.
//!
//! Every type here is built once per successful extraction and never mutated
//! afterwards; reloading a document rebuilds the whole tree.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{IndicatorKey, ObjectiveKey};

/// Name used when the plan carries no `Name` element.
pub const DEFAULT_PLAN_NAME: &str = "Strategic Plan";

/// Version used when the plan root carries no `Version` attribute.
pub const DEFAULT_VERSION: &str = "1.0";

/// Indicator type used when the `Type` attribute is absent.
pub const DEFAULT_INDICATOR_TYPE: &str = "Quantitative";

/// Root planning document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDocument {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub version: String,
    pub organization: String,
    pub submitter: String,
    pub publication_date: String,
    pub vision: Option<Statement>,
    pub mission: Option<Statement>,
    pub values: Vec<CoreValue>,
    pub goals: Vec<Goal>,
    pub stakeholders: Vec<Stakeholder>,
}

impl PlanDocument {
    /// Iterates every indicator in document order.
    pub fn indicators(&self) -> impl Iterator<Item = &Indicator> {
        self.goals
            .iter()
            .flat_map(|goal| goal.objectives.iter())
            .flat_map(|objective| objective.indicators.iter())
    }

    /// Looks up an indicator by its composite key.
    pub fn indicator(&self, key: IndicatorKey) -> Option<&Indicator> {
        self.goals
            .get(key.goal)?
            .objectives
            .get(key.objective)?
            .indicators
            .get(key.indicator)
    }
}

/// Vision or mission block; only the description is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub description: String,
}

/// Entry of the plan's core values list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreValue {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// 0-based document position.
    pub index: usize,
    pub name: String,
    pub description: String,
    pub objectives: Vec<Objective>,
}

impl Goal {
    pub fn anchor(&self) -> String {
        format!("goal-{}", self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    /// Goal index plus the 0-based position within that goal.
    pub key: ObjectiveKey,
    pub name: String,
    pub description: String,
    pub indicators: Vec<Indicator>,
}

impl Objective {
    pub fn index(&self) -> usize {
        self.key.objective
    }
}

/// Where an indicator's measurements came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementSource {
    /// Repeated `PerformanceMeasurement` children.
    Series,
    /// A single target/actual pair carried directly by the indicator.
    Direct,
    /// Neither produced a usable measurement.
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicator {
    pub key: IndicatorKey,
    pub name: String,
    pub description: String,
    pub indicator_type: String,
    pub unit: Option<String>,
    pub measurements: Vec<Measurement>,
    pub source: MeasurementSource,
    /// Measurement blocks dropped for a missing or non-numeric value.
    pub skipped_measurements: usize,
}

impl Indicator {
    pub fn has_measurements(&self) -> bool {
        !self.measurements.is_empty()
    }

    /// Name for display; unnamed indicators fall back to their position.
    pub fn display_name(&self) -> String {
        if self.name.is_empty() {
            format!(
                "Indicator {}.{}.{}",
                self.key.goal + 1,
                self.key.objective + 1,
                self.key.indicator + 1
            )
        } else {
            self.name.clone()
        }
    }
}

/// One observed data point. Only built when both values parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measurement {
    /// Data label for charts and exports: date, else period, else `Period N`.
    pub label: String,
    /// Display heading: date, else period, else `Measurement N`.
    pub heading: String,
    /// 1-based position among the indicator's measurement blocks.
    pub position: usize,
    pub target: f64,
    pub actual: f64,
    /// Source text, kept for unit-aware display.
    pub target_text: String,
    pub actual_text: String,
}

/// Coarse role bucket used to pick a stakeholder icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleCategory {
    Manager,
    Executive,
    Analyst,
    Developer,
    Designer,
    Support,
    Person,
}

impl RoleCategory {
    /// Case-insensitive keyword match, first hit wins.
    pub fn from_role(role: Option<&str>) -> Self {
        let Some(role) = role else {
            return RoleCategory::Person;
        };
        let lower = role.to_lowercase();
        if lower.contains("manager") || lower.contains("director") {
            RoleCategory::Manager
        } else if lower.contains("executive") {
            RoleCategory::Executive
        } else if lower.contains("analyst") {
            RoleCategory::Analyst
        } else if lower.contains("developer") {
            RoleCategory::Developer
        } else if lower.contains("designer") {
            RoleCategory::Designer
        } else if lower.contains("support") {
            RoleCategory::Support
        } else {
            RoleCategory::Person
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RoleCategory::Manager => "👔",
            RoleCategory::Executive => "💼",
            RoleCategory::Analyst => "📊",
            RoleCategory::Developer => "💻",
            RoleCategory::Designer => "🎨",
            RoleCategory::Support => "🛠️",
            RoleCategory::Person => "👤",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub name: String,
    pub role: Option<String>,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub initials: String,
}

impl Stakeholder {
    /// First letter of each space-separated word, at most two, uppercased.
    /// `?` when the name is empty.
    pub fn initials_for(name: &str) -> String {
        if name.is_empty() {
            return "?".to_string();
        }
        let letters: String = name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect();
        letters.to_uppercase()
    }

    pub fn role_category(&self) -> RoleCategory {
        RoleCategory::from_role(self.role.as_deref())
    }
}

/// Running document-wide counts taken during extraction.
///
/// Each goal, objective and indicator bumps its counter exactly once,
/// whether or not it produced usable measurements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTally {
    pub total_goals: usize,
    pub total_objectives: usize,
    pub total_indicators: usize,
}
