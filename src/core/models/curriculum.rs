//! Curriculum model

use super::{ChecklistItem, Week};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// An assessment component and its weight in the final grade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Component label (e.g., "Stage 1", "Written exam")
    pub label: String,
    /// Short description (e.g., "Analysis")
    pub detail: String,
    /// Weight as a percentage of the final grade
    pub weight: u8,
}

/// The full, ordered week-by-week curriculum
///
/// The curriculum is static, read-only input to every other component.
/// Week order and checklist order within a week are the declaration order
/// and drive all scanning (next action, totals, summary).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Curriculum {
    /// Curriculum name
    pub name: String,

    /// One-line framing shown in overviews
    pub tagline: String,

    /// Assessment weights
    #[serde(default)]
    pub assessments: Vec<Assessment>,

    /// Ordered weeks
    pub weeks: Vec<Week>,
}

impl Curriculum {
    /// Look up a week by id
    #[must_use]
    pub fn week(&self, week_id: &str) -> Option<&Week> {
        self.weeks.iter().find(|week| week.id == week_id)
    }

    /// Look up a checklist item by id across all weeks
    #[must_use]
    pub fn item(&self, item_id: &str) -> Option<&ChecklistItem> {
        self.weeks.iter().find_map(|week| week.item(item_id))
    }

    /// The week a checklist item belongs to
    #[must_use]
    pub fn week_of_item(&self, item_id: &str) -> Option<&Week> {
        self.weeks.iter().find(|week| week.item(item_id).is_some())
    }

    /// Iterate over every checklist item in curriculum order
    pub fn items(&self) -> impl Iterator<Item = &ChecklistItem> {
        self.weeks.iter().flat_map(|week| week.checklist.iter())
    }

    /// Weeks carrying a submission deadline, in curriculum order
    #[must_use]
    pub fn due_weeks(&self) -> Vec<&Week> {
        self.weeks.iter().filter(|week| week.due.is_some()).collect()
    }

    /// Number of weeks
    #[must_use]
    pub const fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Validate the curriculum's structural invariants
    ///
    /// Checks that week ids and item ids are unique, and that every
    /// prerequisite references an item declared *earlier* in curriculum
    /// order (which also guarantees the prerequisite graph is acyclic).
    ///
    /// # Errors
    /// Returns `Err` with one message per violation
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        let mut week_ids = HashSet::new();
        for week in &self.weeks {
            if !week_ids.insert(week.id.as_str()) {
                errors.push(format!("Duplicate week id: '{}'", week.id));
            }
        }

        // Walk items in declaration order; an id only becomes a legal
        // prerequisite target after its own declaration.
        let mut seen: HashSet<&str> = HashSet::new();
        for item in self.items() {
            for prereq in &item.prerequisites {
                if seen.contains(prereq.as_str()) {
                    continue;
                }
                if self.item(prereq).is_some() {
                    errors.push(format!(
                        "Item '{}': prerequisite '{prereq}' is declared later (forward reference)",
                        item.id
                    ));
                } else {
                    errors.push(format!(
                        "Item '{}': prerequisite '{prereq}' not found",
                        item.id
                    ));
                }
            }

            if !seen.insert(item.id.as_str()) {
                errors.push(format!("Duplicate item id: '{}'", item.id));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curriculum_from_toml(toml_str: &str) -> Curriculum {
        toml::from_str(toml_str).expect("parse curriculum")
    }

    fn two_week_toml() -> &'static str {
        r#"
name = "Test Journey"
tagline = "Two weeks of testing."

[[weeks]]
id = "w1"
phase = "understand"
phase_label = "Understand"
week_label = "Week 1"
dates = "01/01 – 05/01"
title = "First"
subtitle = "First week"

[weeks.stage]
stage = "Stage 1"
output = "Output."
goal = "Goal."

[[weeks.checklist]]
id = "w1_a"
label = "Task A."

[[weeks.checklist]]
id = "w1_b"
label = "Task B."
prerequisites = ["w1_a"]

[[weeks]]
id = "w2"
phase = "analyze"
phase_label = "Analyze"
week_label = "Week 2"
dates = "08/01 – 12/01"
title = "Second"
subtitle = "Second week"

[weeks.stage]
stage = "Stage 1"
output = "Output."
goal = "Goal."

[weeks.due]
label = "Due"
date = "Friday 12 Jan"

[[weeks.checklist]]
id = "w2_a"
label = "Task C."
prerequisites = ["w1_b"]
"#
    }

    #[test]
    fn lookups_resolve_across_weeks() {
        let curriculum = curriculum_from_toml(two_week_toml());

        assert_eq!(curriculum.week_count(), 2);
        assert!(curriculum.week("w2").is_some());
        assert!(curriculum.item("w2_a").is_some());
        assert_eq!(
            curriculum.week_of_item("w2_a").map(|w| w.id.as_str()),
            Some("w2")
        );
        assert!(curriculum.item("w9_z").is_none());
    }

    #[test]
    fn due_weeks_in_order() {
        let curriculum = curriculum_from_toml(two_week_toml());
        let due: Vec<&str> = curriculum.due_weeks().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(due, vec!["w2"]);
    }

    #[test]
    fn validate_accepts_backward_references() {
        let curriculum = curriculum_from_toml(two_week_toml());
        assert!(curriculum.validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_prerequisite() {
        let mut curriculum = curriculum_from_toml(two_week_toml());
        curriculum.weeks[1].checklist[0]
            .prerequisites
            .push("w9_missing".to_string());

        let errors = curriculum.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("w9_missing"));
        assert!(errors[0].contains("not found"));
    }

    #[test]
    fn validate_rejects_forward_reference() {
        let mut curriculum = curriculum_from_toml(two_week_toml());
        curriculum.weeks[0].checklist[0]
            .prerequisites
            .push("w2_a".to_string());

        let errors = curriculum.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("forward reference"));
    }

    #[test]
    fn validate_rejects_duplicate_item_id() {
        let mut curriculum = curriculum_from_toml(two_week_toml());
        curriculum.weeks[1].checklist[0].id = "w1_a".to_string();

        let errors = curriculum.validate().unwrap_err();
        assert!(errors.iter().any(|e| e.contains("Duplicate item id")));
    }
}
