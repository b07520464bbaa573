//! Extraction Layer - walks an element tree into a [`PlanDocument`].

use tracing::debug;

use crate::domain::foundation::{IndicatorKey, ObjectiveKey};
use crate::domain::markup::{all_of, attr, text_of, Element, ElementTree};

use super::{
    parse_number, CoreValue, ExtractionError, Goal, Indicator, Measurement, MeasurementSource,
    Objective, PlanDocument, PlanTally, Stakeholder, Statement, DEFAULT_INDICATOR_TYPE,
    DEFAULT_PLAN_NAME, DEFAULT_VERSION,
};

/// Recognized plan root elements, in lookup priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    StrategicPlan,
    PerformancePlan,
    PerformanceReport,
}

impl RootKind {
    pub const ALL: [RootKind; 3] = [
        RootKind::StrategicPlan,
        RootKind::PerformancePlan,
        RootKind::PerformanceReport,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            RootKind::StrategicPlan => "StrategicPlan",
            RootKind::PerformancePlan => "PerformancePlan",
            RootKind::PerformanceReport => "PerformanceReport",
        }
    }

    /// Finds the plan root; the first kind present anywhere in the tree wins.
    pub fn locate(tree: &ElementTree) -> Option<(RootKind, &Element)> {
        Self::ALL
            .iter()
            .find_map(|kind| tree.find(kind.tag()).map(|element| (*kind, element)))
    }
}

/// Output of one extraction pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub root_kind: RootKind,
    pub plan: PlanDocument,
    pub tally: PlanTally,
}

/// Stateless extractor for plan documents.
pub struct PlanExtractor;

impl PlanExtractor {
    /// Extracts the full plan model.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::NoPlanContent` when none of the recognized
    /// root elements is present.
    pub fn extract(tree: &ElementTree) -> Result<Extraction, ExtractionError> {
        let (root_kind, root) = RootKind::locate(tree).ok_or_else(|| {
            ExtractionError::NoPlanContent {
                expected: RootKind::ALL
                    .iter()
                    .map(|kind| kind.tag())
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })?;

        let mut tally = PlanTally::default();
        let goals = Self::goals(root, &mut tally);

        let plan = PlanDocument {
            name: non_empty(text_of(root, "Name")).unwrap_or_else(|| DEFAULT_PLAN_NAME.to_string()),
            description: text_of(root, "Description"),
            start_date: text_of(root, "StartDate"),
            end_date: text_of(root, "EndDate"),
            version: attr(root, "Version")
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            organization: non_empty(text_of(root, "Organization"))
                .unwrap_or_else(|| text_of(root, "OrganizationName")),
            submitter: text_of(root, "Submitter"),
            publication_date: text_of(root, "PublicationDate"),
            vision: Self::statement(root, "VisionStatement"),
            mission: Self::statement(root, "MissionStatement"),
            values: Self::values(root),
            goals,
            stakeholders: Self::stakeholders(root),
        };

        debug!(
            root = root_kind.tag(),
            goals = tally.total_goals,
            objectives = tally.total_objectives,
            indicators = tally.total_indicators,
            "Extracted plan"
        );

        Ok(Extraction {
            root_kind,
            plan,
            tally,
        })
    }

    fn statement(root: &Element, tag: &str) -> Option<Statement> {
        root.first_descendant(tag).map(|block| Statement {
            description: text_of(block, "Description"),
        })
    }

    fn values(root: &Element) -> Vec<CoreValue> {
        all_of(root, "Value")
            .into_iter()
            .map(|value| CoreValue {
                name: text_of(value, "Name"),
                description: text_of(value, "Description"),
            })
            .collect()
    }

    fn goals(root: &Element, tally: &mut PlanTally) -> Vec<Goal> {
        all_of(root, "Goal")
            .into_iter()
            .enumerate()
            .map(|(goal_index, goal)| {
                tally.total_goals += 1;
                Goal {
                    index: goal_index,
                    name: text_of(goal, "Name"),
                    description: text_of(goal, "Description"),
                    objectives: Self::objectives(goal, goal_index, tally),
                }
            })
            .collect()
    }

    fn objectives(goal: &Element, goal_index: usize, tally: &mut PlanTally) -> Vec<Objective> {
        all_of(goal, "Objective")
            .into_iter()
            .enumerate()
            .map(|(objective_index, objective)| {
                tally.total_objectives += 1;
                let key = ObjectiveKey::new(goal_index, objective_index);
                Objective {
                    key,
                    name: text_of(objective, "Name"),
                    description: text_of(objective, "Description"),
                    indicators: Self::indicators(objective, key, tally),
                }
            })
            .collect()
    }

    fn indicators(objective: &Element, key: ObjectiveKey, tally: &mut PlanTally) -> Vec<Indicator> {
        all_of(objective, "PerformanceIndicator")
            .into_iter()
            .enumerate()
            .map(|(index, indicator)| {
                tally.total_indicators += 1;
                Self::indicator(indicator, key.indicator(index))
            })
            .collect()
    }

    fn indicator(element: &Element, key: IndicatorKey) -> Indicator {
        let blocks = all_of(element, "PerformanceMeasurement");

        let (measurements, source, skipped) = if blocks.is_empty() {
            match Self::direct_measurement(element) {
                Some(measurement) => (vec![measurement], MeasurementSource::Direct, 0),
                None => (Vec::new(), MeasurementSource::None, 0),
            }
        } else {
            let measurements: Vec<Measurement> = blocks
                .iter()
                .enumerate()
                .filter_map(|(index, block)| Self::series_measurement(block, index + 1))
                .collect();
            let skipped = blocks.len() - measurements.len();
            if skipped > 0 {
                debug!(indicator = %key, skipped, "Dropped incomplete measurements");
            }
            let source = if measurements.is_empty() {
                MeasurementSource::None
            } else {
                MeasurementSource::Series
            };
            (measurements, source, skipped)
        };

        Indicator {
            key,
            name: text_of(element, "Name"),
            description: text_of(element, "Description"),
            indicator_type: attr(element, "Type")
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_INDICATOR_TYPE.to_string()),
            unit: non_empty(text_of(element, "UnitOfMeasurement")),
            measurements,
            source,
            skipped_measurements: skipped,
        }
    }

    /// Builds a measurement from a `PerformanceMeasurement` block.
    ///
    /// `position` is the block's 1-based document position, counted before
    /// any incomplete siblings are dropped.
    fn series_measurement(block: &Element, position: usize) -> Option<Measurement> {
        let (target, actual, target_text, actual_text) = Self::value_pair(block)?;

        let date = text_of(block, "MeasurementDate");
        let period = text_of(block, "ReportingPeriod");
        let explicit = non_empty(date).or_else(|| non_empty(period));

        Some(Measurement {
            label: explicit
                .clone()
                .unwrap_or_else(|| format!("Period {}", position)),
            heading: explicit.unwrap_or_else(|| format!("Measurement {}", position)),
            position,
            target,
            actual,
            target_text,
            actual_text,
        })
    }

    /// Single measurement from target/actual values carried by the indicator.
    fn direct_measurement(indicator: &Element) -> Option<Measurement> {
        let (target, actual, target_text, actual_text) = Self::value_pair(indicator)?;
        Some(Measurement {
            label: "Current".to_string(),
            heading: "Current".to_string(),
            position: 1,
            target,
            actual,
            target_text,
            actual_text,
        })
    }

    fn value_pair(element: &Element) -> Option<(f64, f64, String, String)> {
        let target_text = text_of(element, "TargetValue");
        let actual_text = text_of(element, "ActualValue");
        let target = parse_number(&target_text)?;
        let actual = parse_number(&actual_text)?;
        Some((target, actual, target_text, actual_text))
    }

    fn stakeholders(root: &Element) -> Vec<Stakeholder> {
        all_of(root, "Stakeholder")
            .into_iter()
            .map(|stakeholder| {
                let name = text_of(stakeholder, "Name");
                let role = non_empty(text_of(stakeholder, "Role"))
                    .or_else(|| non_empty_attr(stakeholder, "Role"))
                    .or_else(|| non_empty_attr(stakeholder, "RoleType"));
                Stakeholder {
                    initials: Stakeholder::initials_for(&name),
                    name,
                    role,
                    email: text_of(stakeholder, "EmailAddress"),
                    phone: text_of(stakeholder, "PhoneNumber"),
                    organization: text_of(stakeholder, "OrganizationName"),
                }
            })
            .collect()
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn non_empty_attr(element: &Element, name: &str) -> Option<String> {
    attr(element, name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "extraction_test.rs"]
mod extraction_test;
