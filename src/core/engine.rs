//! Prerequisite gating and progress derivations
//!
//! Pure read-only projections over the curriculum and the checked map:
//! blocking, next-action selection, and completion totals. Scan order is
//! always curriculum declaration order; there is no secondary sort.

use crate::core::models::{ChecklistItem, Curriculum, Week};
use std::collections::HashMap;

/// Completion counts over required items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// Number of required items in scope
    pub total: usize,
    /// Number of required items marked complete
    pub done: usize,
    /// `round(done / total * 100)`; 0 when there are no required items
    pub percent: u8,
}

impl Totals {
    fn from_counts(done: usize, total: usize) -> Self {
        #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = if total == 0 {
            0
        } else {
            ((done as f64 / total as f64) * 100.0).round() as u8
        };
        Self {
            total,
            done,
            percent,
        }
    }

    /// Whether everything in scope is done (vacuously true when empty)
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.done == self.total
    }
}

/// The first actionable step of the journey
#[derive(Debug, Clone, Copy)]
pub struct NextAction<'a> {
    /// Week the item belongs to
    pub week: &'a Week,
    /// The item to do next
    pub item: &'a ChecklistItem,
}

/// Whether an item is blocked by unfinished prerequisites
///
/// An item is blocked iff at least one of its prerequisite ids maps to
/// false (or is absent) in the checked map. Items with no prerequisites
/// are never blocked.
#[must_use]
pub fn is_blocked(item: &ChecklistItem, checked: &HashMap<String, bool>) -> bool {
    item.prerequisites
        .iter()
        .any(|id| !checked.get(id).copied().unwrap_or(false))
}

/// The prerequisite ids of an item that are not yet satisfied
#[must_use]
pub fn unmet_prerequisites<'a>(
    item: &'a ChecklistItem,
    checked: &HashMap<String, bool>,
) -> Vec<&'a str> {
    item.prerequisites
        .iter()
        .filter(|id| !checked.get(id.as_str()).copied().unwrap_or(false))
        .map(String::as_str)
        .collect()
}

/// Find the first required, unchecked, unblocked item in curriculum order
///
/// Returns `None` when nothing actionable remains (everything required is
/// done, or every remaining required item is blocked).
#[must_use]
pub fn find_next_action<'a>(
    curriculum: &'a Curriculum,
    checked: &HashMap<String, bool>,
) -> Option<NextAction<'a>> {
    for week in &curriculum.weeks {
        for item in &week.checklist {
            if !item.required {
                continue;
            }
            if checked.get(&item.id).copied().unwrap_or(false) {
                continue;
            }
            if is_blocked(item, checked) {
                continue;
            }
            return Some(NextAction { week, item });
        }
    }
    None
}

/// Completion totals over all required items of the curriculum
#[must_use]
pub fn compute_totals(curriculum: &Curriculum, checked: &HashMap<String, bool>) -> Totals {
    count_required(
        curriculum.weeks.iter().flat_map(|week| week.required_items()),
        checked,
    )
}

/// Completion totals over the required items of a single week
#[must_use]
pub fn week_totals(week: &Week, checked: &HashMap<String, bool>) -> Totals {
    count_required(week.required_items(), checked)
}

fn count_required<'a>(
    items: impl Iterator<Item = &'a ChecklistItem>,
    checked: &HashMap<String, bool>,
) -> Totals {
    let mut total = 0;
    let mut done = 0;
    for item in items {
        total += 1;
        if checked.get(&item.id).copied().unwrap_or(false) {
            done += 1;
        }
    }
    Totals::from_counts(done, total)
}
