//! Invariant checks over the embedded curriculum data set

use journey_tracker::core::syllabus;
use std::collections::HashSet;

#[test]
fn curriculum_validates() {
    assert!(syllabus::curriculum().validate().is_ok());
}

#[test]
fn item_ids_are_unique_across_the_curriculum() {
    let mut seen = HashSet::new();
    for item in syllabus::curriculum().items() {
        assert!(seen.insert(item.id.as_str()), "duplicate item id: {}", item.id);
    }
}

#[test]
fn prerequisites_only_reference_earlier_items() {
    let mut seen: HashSet<&str> = HashSet::new();
    for item in syllabus::curriculum().items() {
        for prereq in &item.prerequisites {
            assert!(
                seen.contains(prereq.as_str()),
                "item '{}' references '{prereq}' before its declaration",
                item.id
            );
        }
        seen.insert(item.id.as_str());
    }
}

#[test]
fn item_ids_carry_their_week_prefix() {
    for week in &syllabus::curriculum().weeks {
        for item in &week.checklist {
            assert!(
                item.id.starts_with(&format!("{}_", week.id)),
                "item '{}' does not carry the '{}' prefix",
                item.id,
                week.id
            );
        }
    }
}

#[test]
fn quality_gates_close_every_week() {
    // Each week of this curriculum ends on its quality-gate item
    for week in &syllabus::curriculum().weeks {
        let last = week.checklist.last().expect("non-empty checklist");
        assert!(
            last.id.ends_with("_quality_gate"),
            "week '{}' does not end on a quality gate",
            week.id
        );
    }
}

#[test]
fn evidence_items_carry_placeholders() {
    for item in syllabus::curriculum().items() {
        if item.captures_evidence() {
            assert!(
                !item.evidence_placeholder().is_empty(),
                "item '{}' captures evidence without a placeholder",
                item.id
            );
        }
    }
}

#[test]
fn assessment_weights_match_the_published_split() {
    let weights: Vec<u8> = syllabus::curriculum()
        .assessments
        .iter()
        .map(|a| a.weight)
        .collect();
    assert_eq!(weights, vec![15, 15, 40, 25]);
}

#[test]
fn due_weeks_match_the_published_calendar() {
    let due: Vec<&str> = syllabus::curriculum()
        .due_weeks()
        .iter()
        .map(|week| week.id.as_str())
        .collect();
    assert_eq!(due, vec!["w3", "w5", "w6", "w7"]);
}
