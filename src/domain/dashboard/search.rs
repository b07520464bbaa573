//! Case-insensitive search over a plan view.

use serde::{Deserialize, Serialize};

use super::toc::{
    DOCUMENT_INFO_ANCHOR, MISSION_ANCHOR, STAKEHOLDERS_ANCHOR, VALUES_ANCHOR, VISION_ANCHOR,
};
use super::{GoalView, IndicatorView, ObjectiveView, PlanView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Section,
    Objective,
    Indicator,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub anchor: String,
    pub kind: SectionKind,
}

/// Sections whose text contains `query`, ignoring case, in page order.
///
/// A section matches on any text it contains, so a goal matches when one of
/// its indicators does. An empty query filters nothing and returns every
/// section.
pub fn search(view: &PlanView, query: &str) -> Vec<SearchHit> {
    let needle = query.trim().to_lowercase();
    let matches = |text: String| needle.is_empty() || text.to_lowercase().contains(&needle);

    let mut hits = Vec::new();
    let mut push = |anchor: &str, kind: SectionKind, text: String| {
        if matches(text) {
            hits.push(SearchHit {
                anchor: anchor.to_string(),
                kind,
            });
        }
    };

    let info = &view.info;
    push(
        DOCUMENT_INFO_ANCHOR,
        SectionKind::Section,
        join([
            info.name.as_str(),
            info.description.as_str(),
            info.organization.as_str(),
            info.start_date.as_str(),
            info.end_date.as_str(),
            info.version.as_str(),
            info.publication_date.as_str(),
        ]),
    );
    if let Some(vision) = &view.vision {
        push(VISION_ANCHOR, SectionKind::Section, vision.clone());
    }
    if let Some(mission) = &view.mission {
        push(MISSION_ANCHOR, SectionKind::Section, mission.clone());
    }
    if !view.values.is_empty() {
        let text = view
            .values
            .iter()
            .map(|v| join([v.name.as_str(), v.description.as_str()]))
            .collect::<Vec<_>>()
            .join(" ");
        push(VALUES_ANCHOR, SectionKind::Section, text);
    }

    for goal in &view.goals {
        push(&goal.anchor, SectionKind::Section, goal_text(goal));
        for objective in &goal.objectives {
            push(&objective.anchor, SectionKind::Objective, objective_text(objective));
            for indicator in &objective.indicators {
                push(&indicator.id.anchor(), SectionKind::Indicator, indicator_text(indicator));
            }
        }
    }

    if !view.stakeholders.is_empty() {
        let text = view
            .stakeholders
            .iter()
            .map(|s| {
                join([
                    s.name.as_str(),
                    s.role.as_deref().unwrap_or_default(),
                    s.organization.as_str(),
                    s.email.as_str(),
                    s.phone.as_str(),
                ])
            })
            .collect::<Vec<_>>()
            .join(" ");
        push(STAKEHOLDERS_ANCHOR, SectionKind::Section, text);
    }

    hits
}

fn join<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn goal_text(goal: &GoalView) -> String {
    let mut text = join([goal.name.as_str(), goal.description.as_str()]);
    for objective in &goal.objectives {
        text.push(' ');
        text.push_str(&objective_text(objective));
    }
    text
}

fn objective_text(objective: &ObjectiveView) -> String {
    let mut text = join([objective.name.as_str(), objective.description.as_str()]);
    for indicator in &objective.indicators {
        text.push(' ');
        text.push_str(&indicator_text(indicator));
    }
    text
}

fn indicator_text(indicator: &IndicatorView) -> String {
    let mut text = join([
        indicator.name.as_str(),
        indicator.description.as_str(),
        indicator.indicator_type.as_str(),
        indicator.unit.as_deref().unwrap_or_default(),
    ]);
    for m in &indicator.measurements {
        text.push(' ');
        text.push_str(&m.heading);
    }
    text
}
