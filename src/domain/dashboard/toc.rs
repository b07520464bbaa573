//! Table of contents for a plan view.

use serde::{Deserialize, Serialize};

use super::PlanView;

pub const DOCUMENT_INFO_ANCHOR: &str = "document-info";
pub const VISION_ANCHOR: &str = "vision";
pub const MISSION_ANCHOR: &str = "mission";
pub const VALUES_ANCHOR: &str = "values";
pub const STAKEHOLDERS_ANCHOR: &str = "stakeholders";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    pub anchor: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TocEntry>,
}

impl TocEntry {
    fn new(anchor: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
            title: title.into(),
            children: Vec::new(),
        }
    }
}

/// Entries in page order. Sections without content get no entry.
pub fn build_table_of_contents(view: &PlanView) -> Vec<TocEntry> {
    let mut entries = vec![TocEntry::new(DOCUMENT_INFO_ANCHOR, view.info.name.clone())];

    if view.vision.is_some() {
        entries.push(TocEntry::new(VISION_ANCHOR, "Vision Statement"));
    }
    if view.mission.is_some() {
        entries.push(TocEntry::new(MISSION_ANCHOR, "Mission Statement"));
    }
    if !view.values.is_empty() {
        entries.push(TocEntry::new(VALUES_ANCHOR, "Core Values"));
    }

    for goal in &view.goals {
        let mut entry = TocEntry::new(
            goal.anchor.clone(),
            format!("Goal {}: {}", goal.number, goal.name),
        );
        entry.children = goal
            .objectives
            .iter()
            .map(|o| TocEntry::new(o.anchor.clone(), format!("Objective {}: {}", o.number, o.name)))
            .collect();
        entries.push(entry);
    }

    if !view.stakeholders.is_empty() {
        entries.push(TocEntry::new(STAKEHOLDERS_ANCHOR, "Stakeholders"));
    }

    entries
}
