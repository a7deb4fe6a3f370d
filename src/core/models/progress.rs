//! Progress state model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Self-reported readiness level for a week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Not ready yet
    Low,
    /// Getting there
    Medium,
    /// Ready
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let as_str = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        write!(f, "{as_str}")
    }
}

impl FromStr for Confidence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Unknown confidence level: {s}")),
        }
    }
}

/// The user's progress through the curriculum
///
/// This is the single mutable, persisted value of the system. All four maps
/// are keyed by curriculum ids (item ids for `checked`/`evidence`, week ids
/// for `reflections`/`confidence`); the curriculum itself is never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressState {
    /// Completion flag per checklist item id
    #[serde(default)]
    pub checked: HashMap<String, bool>,

    /// Evidence link text per checklist item id
    #[serde(default)]
    pub evidence: HashMap<String, String>,

    /// Reflection text per week id
    #[serde(default)]
    pub reflections: HashMap<String, String>,

    /// Confidence level per week id
    #[serde(default)]
    pub confidence: HashMap<String, Confidence>,

    /// When the state last changed
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

impl ProgressState {
    /// Create a fresh empty state with no timestamp
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an item is currently marked complete
    #[must_use]
    pub fn is_checked(&self, item_id: &str) -> bool {
        self.checked.get(item_id).copied().unwrap_or(false)
    }

    /// Set the completion flag for an item and bump the timestamp.
    ///
    /// Performs no prerequisite gating; callers check `engine::is_blocked`
    /// before completing an item.
    pub fn set_checked(&mut self, item_id: &str, value: bool) {
        self.checked.insert(item_id.to_string(), value);
        self.touch();
    }

    /// Set the evidence text for an item and bump the timestamp
    pub fn set_evidence(&mut self, item_id: &str, text: &str) {
        self.evidence.insert(item_id.to_string(), text.to_string());
        self.touch();
    }

    /// Set the reflection text for a week and bump the timestamp
    pub fn set_reflection(&mut self, week_id: &str, text: &str) {
        self.reflections
            .insert(week_id.to_string(), text.to_string());
        self.touch();
    }

    /// Set the confidence level for a week and bump the timestamp
    pub fn set_confidence(&mut self, week_id: &str, level: Confidence) {
        self.confidence.insert(week_id.to_string(), level);
        self.touch();
    }

    /// Whether all four maps are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
            && self.evidence.is_empty()
            && self.reflections.is_empty()
            && self.confidence.is_empty()
    }

    /// Record that the state changed now
    pub fn touch(&mut self) {
        self.last_updated = Some(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = ProgressState::new();

        assert!(state.is_empty());
        assert!(state.last_updated.is_none());
        assert!(!state.is_checked("w1_a"));
    }

    #[test]
    fn set_checked_stores_value_and_timestamp() {
        let mut state = ProgressState::new();

        state.set_checked("w1_a", true);
        assert!(state.is_checked("w1_a"));
        assert!(state.last_updated.is_some());

        // Unchecking stores an explicit false, matching the persisted shape
        state.set_checked("w1_a", false);
        assert!(!state.is_checked("w1_a"));
        assert_eq!(state.checked.get("w1_a"), Some(&false));
    }

    #[test]
    fn field_setters_touch_timestamp() {
        let mut state = ProgressState::new();

        state.set_evidence("w1_a", "https://example.com/doc");
        assert_eq!(
            state.evidence.get("w1_a").map(String::as_str),
            Some("https://example.com/doc")
        );

        state.set_reflection("w1", "We learned a lot.");
        state.set_confidence("w1", Confidence::Medium);
        assert_eq!(state.confidence.get("w1"), Some(&Confidence::Medium));
        assert!(state.last_updated.is_some());
    }

    #[test]
    fn confidence_parses_case_insensitive() {
        assert_eq!(Confidence::from_str("LOW"), Ok(Confidence::Low));
        assert_eq!(Confidence::from_str("medium"), Ok(Confidence::Medium));
        assert_eq!(Confidence::from_str("High"), Ok(Confidence::High));
        assert!(Confidence::from_str("extreme").is_err());
    }

    #[test]
    fn confidence_serializes_lowercase() {
        let json = serde_json::to_string(&Confidence::High).expect("serialize");
        assert_eq!(json, "\"high\"");
    }
}
