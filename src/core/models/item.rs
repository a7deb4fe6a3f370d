//! Checklist item model

use serde::{Deserialize, Serialize};

/// Evidence-capture settings for a checklist item
///
/// Presence of this block on an item means the item asks for an evidence
/// link (typically a URL proving the work was done).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSpec {
    /// Hint shown when prompting for the evidence link
    #[serde(default)]
    pub placeholder: Option<String>,
}

/// Fallback prompt when an evidence block carries no placeholder
const DEFAULT_EVIDENCE_PLACEHOLDER: &str = "Paste link";

fn default_required() -> bool {
    true
}

/// A single actionable entry in a week's checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Item id, unique across the whole curriculum (e.g., "`w1_case_summary`")
    pub id: String,

    /// Human-readable task description
    pub label: String,

    /// Whether the item counts toward completion totals (defaults to true)
    #[serde(default = "default_required")]
    pub required: bool,

    /// Estimated effort (e.g., "15m", "1h")
    #[serde(default)]
    pub eta: Option<String>,

    /// Ids of items that must be completed before this one can be checked.
    /// Referenced items are always declared earlier in curriculum order.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Evidence-capture settings; `None` when the item takes no evidence
    #[serde(default)]
    pub evidence: Option<EvidenceSpec>,
}

impl ChecklistItem {
    /// Whether this item asks for an evidence link
    #[must_use]
    pub const fn captures_evidence(&self) -> bool {
        self.evidence.is_some()
    }

    /// The prompt to show when asking for evidence
    #[must_use]
    pub fn evidence_placeholder(&self) -> &str {
        self.evidence
            .as_ref()
            .and_then(|spec| spec.placeholder.as_deref())
            .unwrap_or(DEFAULT_EVIDENCE_PLACEHOLDER)
    }

    /// Whether this item has prerequisites at all
    #[must_use]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}
