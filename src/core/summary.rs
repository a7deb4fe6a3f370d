//! Progress summary formatter
//!
//! Builds the deterministic, human-readable report that `journey summary`
//! prints, exports, and copies to the clipboard. Pure function of the
//! curriculum and the progress state; no side effects, no I/O.

use crate::core::models::{Curriculum, ProgressState};
use std::fmt::Write;

/// Maximum pending item labels listed per week
const MAX_PENDING_LINES: usize = 3;

/// Maximum evidence links listed per week
const MAX_EVIDENCE_LINES: usize = 5;

/// Build the multi-line progress summary
///
/// Per week: completed/total over required items, up to three pending
/// required labels, up to five non-empty evidence links, the reflection if
/// non-empty, and the confidence level if set.
#[must_use]
pub fn build_summary(curriculum: &Curriculum, state: &ProgressState) -> String {
    let mut lines = String::new();

    let _ = writeln!(lines, "{} — Progress Summary", curriculum.name);
    let last_updated = state
        .last_updated
        .map_or_else(|| "—".to_string(), |ts| ts.to_rfc3339());
    let _ = writeln!(lines, "Last updated: {last_updated}");
    lines.push_str("—\n");

    for week in &curriculum.weeks {
        let required: Vec<_> = week.required_items().collect();
        let done = required
            .iter()
            .filter(|item| state.is_checked(&item.id))
            .count();
        let _ = writeln!(
            lines,
            "{} — {}: {done}/{} completed",
            week.week_label,
            week.title,
            required.len()
        );

        let pending: Vec<_> = required
            .iter()
            .filter(|item| !state.is_checked(&item.id))
            .take(MAX_PENDING_LINES)
            .collect();
        if !pending.is_empty() {
            lines.push_str("  Next to do:\n");
            for item in pending {
                let _ = writeln!(lines, "  - {}", item.label);
            }
        }

        let evidence: Vec<_> = required
            .iter()
            .filter(|item| item.captures_evidence())
            .filter_map(|item| {
                state
                    .evidence
                    .get(&item.id)
                    .map(|link| (item.label.as_str(), link.trim()))
            })
            .filter(|(_, link)| !link.is_empty())
            .take(MAX_EVIDENCE_LINES)
            .collect();
        if !evidence.is_empty() {
            lines.push_str("  Evidence:\n");
            for (label, link) in evidence {
                let _ = writeln!(lines, "  - {label}: {link}");
            }
        }

        if let Some(reflection) = state.reflections.get(&week.id) {
            let reflection = reflection.trim();
            if !reflection.is_empty() {
                lines.push_str("  Reflection:\n");
                let _ = writeln!(lines, "  {reflection}");
            }
        }

        if let Some(confidence) = state.confidence.get(&week.id) {
            let _ = writeln!(lines, "  Confidence: {confidence}");
        }

        lines.push('\n');
    }

    lines
}
