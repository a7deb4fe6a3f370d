//! Week model

use super::ChecklistItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Journey phase a week belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Understand the problem and its context
    Understand,
    /// Analyze opportunities and risks
    Analyze,
    /// Ideate solution directions
    Ideate,
    /// Design strategic options
    Design,
    /// Decide on a strategy
    Decide,
    /// Defend the chosen strategy
    Defend,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Understand => "understand",
            Self::Analyze => "analyze",
            Self::Ideate => "ideate",
            Self::Design => "design",
            Self::Decide => "decide",
            Self::Defend => "defend",
        };
        write!(f, "{as_str}")
    }
}

/// How a week connects to the running business case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInfo {
    /// Current case stage (e.g., "Stage 1: Research & Analysis")
    pub stage: String,
    /// Expected student output for this stage
    pub output: String,
    /// Weekly goal, quoted in displays
    pub goal: String,
}

/// A submission deadline attached to a week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDate {
    /// Badge label (e.g., "Due")
    pub label: String,
    /// Human-readable date (e.g., "Wednesday 25 Feb")
    pub date: String,
}

/// Supplementary material attached to a week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Resource label
    pub label: String,
    /// Optional link
    #[serde(default)]
    pub href: Option<String>,
}

/// One week of the curriculum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// Week id (e.g., "w1"), unique across the curriculum
    pub id: String,

    /// Phase this week belongs to
    pub phase: Phase,

    /// Display label for the phase (may differ from the phase key, e.g.,
    /// "Analyze / Position")
    pub phase_label: String,

    /// Display label for the week (e.g., "Week 1")
    pub week_label: String,

    /// Date range text (e.g., "09/02 – 13/02")
    pub dates: String,

    /// Week title
    pub title: String,

    /// Week subtitle
    pub subtitle: String,

    /// Self-check questions for the week
    #[serde(default)]
    pub self_check: Vec<String>,

    /// Supplementary resources
    #[serde(default)]
    pub resources: Vec<Resource>,

    /// Business case connection for this week
    pub stage: StageInfo,

    /// Submission deadline, when this week has one
    #[serde(default)]
    pub due: Option<DueDate>,

    /// Ordered checklist for the week
    pub checklist: Vec<ChecklistItem>,
}

impl Week {
    /// Iterate over the required items of this week, in declared order
    pub fn required_items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.checklist.iter().filter(|item| item.required)
    }

    /// Look up a checklist item of this week by id
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&ChecklistItem> {
        self.checklist.iter().find(|item| item.id == item_id)
    }
}
