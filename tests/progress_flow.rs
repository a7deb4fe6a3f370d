//! End-to-end progress flow over the embedded curriculum
//!
//! Exercises the store, the gating engine, and the summary formatter
//! together, the way the CLI drives them: load, mutate, persist, derive.

use journey_tracker::core::models::Confidence;
use journey_tracker::core::store::ProgressStore;
use journey_tracker::core::{engine, summary, syllabus};
use tempfile::TempDir;

fn temp_store() -> (TempDir, ProgressStore) {
    let dir = TempDir::new().expect("create temp dir");
    let store = ProgressStore::new(dir.path().join("progress.json"));
    (dir, store)
}

#[test]
fn journey_starts_at_the_first_item() {
    let curriculum = syllabus::curriculum();
    let (_dir, store) = temp_store();
    let state = store.load();

    let next = engine::find_next_action(curriculum, &state.checked).expect("next action");
    assert_eq!(next.item.id, "w1_case_summary");
    assert_eq!(next.week.id, "w1");
    assert!(next.item.prerequisites.is_empty());
}

#[test]
fn completing_an_item_unblocks_its_dependent() {
    let curriculum = syllabus::curriculum();
    let (_dir, store) = temp_store();
    let mut state = store.load();

    let dependent = curriculum.item("w1_problem_statement").expect("item");
    assert!(engine::is_blocked(dependent, &state.checked));

    store
        .set_item_checked(&mut state, "w1_case_summary", true)
        .expect("persist check");

    assert!(!engine::is_blocked(dependent, &state.checked));
    let next = engine::find_next_action(curriculum, &state.checked).expect("next action");
    assert_eq!(next.item.id, "w1_problem_statement");

    // The mutation survived the round trip through the slot
    let reloaded = store.load();
    assert!(reloaded.is_checked("w1_case_summary"));
}

#[test]
fn unchecking_reblocks_downstream_items() {
    let curriculum = syllabus::curriculum();
    let (_dir, store) = temp_store();
    let mut state = store.load();

    store
        .set_item_checked(&mut state, "w1_case_summary", true)
        .expect("persist check");
    store
        .set_item_checked(&mut state, "w1_problem_statement", true)
        .expect("persist check");

    // Unchecking is always permitted, even with dependents complete
    store
        .set_item_checked(&mut state, "w1_case_summary", false)
        .expect("persist uncheck");

    let dependent = curriculum.item("w1_problem_statement").expect("item");
    assert!(engine::is_blocked(dependent, &state.checked));
}

#[test]
fn walking_the_whole_chain_reaches_completion() {
    let curriculum = syllabus::curriculum();
    let (_dir, store) = temp_store();
    let mut state = store.load();

    // Repeatedly complete the next action until nothing actionable remains;
    // the curriculum is a single prerequisite chain, so this must visit
    // every required item exactly once.
    let mut steps = 0usize;
    while let Some(next) = engine::find_next_action(curriculum, &state.checked) {
        assert!(!engine::is_blocked(next.item, &state.checked));
        let item_id = next.item.id.clone();
        store
            .set_item_checked(&mut state, &item_id, true)
            .expect("persist check");
        steps += 1;
        assert!(steps <= 100, "next-action loop failed to terminate");
    }

    let totals = engine::compute_totals(curriculum, &state.checked);
    assert_eq!(totals.done, totals.total);
    assert_eq!(totals.done, steps);
    assert_eq!(totals.percent, 100);
}

#[test]
fn evidence_and_reflection_flow_into_the_summary() {
    let curriculum = syllabus::curriculum();
    let (_dir, store) = temp_store();
    let mut state = store.load();

    store
        .set_evidence(&mut state, "w1_case_summary", "https://x")
        .expect("persist evidence");
    store
        .set_reflection(&mut state, "w1", "Strong start, weak assumptions.")
        .expect("persist reflection");
    store
        .set_confidence(&mut state, "w1", Confidence::Medium)
        .expect("persist confidence");

    let text = summary::build_summary(curriculum, &store.load());

    let item = curriculum.item("w1_case_summary").expect("item");
    let evidence_line = text
        .lines()
        .find(|line| line.contains("https://x"))
        .expect("evidence line present");
    assert!(evidence_line.contains(&item.label));

    assert!(text.contains("Strong start, weak assumptions."));
    assert!(text.contains("Confidence: medium"));
}

#[test]
fn reset_returns_the_journey_to_the_start() {
    let curriculum = syllabus::curriculum();
    let (_dir, store) = temp_store();
    let mut state = store.load();

    store
        .set_item_checked(&mut state, "w1_case_summary", true)
        .expect("persist check");
    store
        .set_evidence(&mut state, "w1_case_summary", "https://x")
        .expect("persist evidence");

    let fresh = store.reset().expect("reset");
    assert!(fresh.is_empty());

    let next = engine::find_next_action(curriculum, &fresh.checked).expect("next action");
    assert_eq!(next.item.id, "w1_case_summary");

    let totals = engine::compute_totals(curriculum, &fresh.checked);
    assert_eq!(totals.done, 0);
    assert_eq!(totals.percent, 0);
}
