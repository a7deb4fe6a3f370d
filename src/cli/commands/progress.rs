//! Progress mutation command handlers
//!
//! check / uncheck / done / evidence / reflect / confidence. Every handler
//! validates ids against the curriculum, applies the mutation through the
//! store (which persists immediately), and reports with `✓`/`✗` markers.
//! Prerequisite gating happens here, before the store is touched.

use journey_tracker::config::Config;
use journey_tracker::core::models::{ChecklistItem, Confidence, Week};
use journey_tracker::core::{engine, store::ProgressStore, syllabus};
use logger::{error, info};

/// Look up an item or exit with a `✗` message
fn require_item(item_id: &str) -> &'static ChecklistItem {
    syllabus::curriculum().item(item_id).unwrap_or_else(|| {
        error!("Unknown checklist item requested: {item_id}");
        eprintln!("✗ Unknown checklist item: '{item_id}' (see `journey weeks`)");
        std::process::exit(1);
    })
}

/// Look up a week or exit with a `✗` message
fn require_week(week_id: &str) -> &'static Week {
    syllabus::curriculum().week(week_id).unwrap_or_else(|| {
        error!("Unknown week requested: {week_id}");
        eprintln!("✗ Unknown week id: '{week_id}' (see `journey weeks`)");
        std::process::exit(1);
    })
}

/// Report a failed slot write; the in-memory mutation already happened and
/// the session continues
fn report_save_failure(err: &journey_tracker::core::store::StoreError) {
    error!("Persisting progress failed: {err}");
    eprintln!("✗ Progress could not be saved: {err}");
}

/// Run the check command
pub fn run_check(config: &Config, item_id: &str) {
    let item = require_item(item_id);
    let store = ProgressStore::from_config(config);
    let mut state = store.load();

    if state.is_checked(item_id) {
        println!("✓ Already complete: {}", item.label);
        return;
    }

    if engine::is_blocked(item, &state.checked) {
        let unmet = engine::unmet_prerequisites(item, &state.checked);
        eprintln!("✗ Blocked: finish prerequisites first ({})", unmet.join(", "));
        std::process::exit(1);
    }

    if let Err(err) = store.set_item_checked(&mut state, item_id, true) {
        report_save_failure(&err);
    }
    info!("Item completed: {item_id}");
    println!("✓ Completed: {}", item.label);

    print_next_hint(&state.checked);
}

/// Run the uncheck command
pub fn run_uncheck(config: &Config, item_id: &str) {
    let item = require_item(item_id);
    let store = ProgressStore::from_config(config);
    let mut state = store.load();

    if let Err(err) = store.set_item_checked(&mut state, item_id, false) {
        report_save_failure(&err);
    }
    info!("Item marked incomplete: {item_id}");
    println!("✓ Marked incomplete: {}", item.label);
}

/// Run the done command: complete the current next action
pub fn run_done(config: &Config) {
    let curriculum = syllabus::curriculum();
    let store = ProgressStore::from_config(config);
    let mut state = store.load();

    let Some(next) = engine::find_next_action(curriculum, &state.checked) else {
        let totals = engine::compute_totals(curriculum, &state.checked);
        if totals.is_complete() {
            println!("✓ All required items are complete. Prepare your pitch and defense.");
        } else {
            println!("Nothing left that is currently unblocked.");
        }
        return;
    };

    if let Err(err) = store.set_item_checked(&mut state, &next.item.id, true) {
        report_save_failure(&err);
    }
    info!("Next action completed: {}", next.item.id);
    println!("✓ Completed ({}): {}", next.week.week_label, next.item.label);

    print_next_hint(&state.checked);
}

/// Run the evidence command
pub fn run_evidence(config: &Config, item_id: &str, text: &str) {
    let item = require_item(item_id);
    let store = ProgressStore::from_config(config);
    let mut state = store.load();

    if !item.captures_evidence() {
        println!("ℹ This item does not ask for evidence; storing the link anyway.");
    }

    if let Err(err) = store.set_evidence(&mut state, item_id, text) {
        report_save_failure(&err);
    }
    println!("✓ Evidence recorded for: {}", item.label);
}

/// Run the reflect command
pub fn run_reflect(config: &Config, week_id: &str, text: &str) {
    let week = require_week(week_id);
    let store = ProgressStore::from_config(config);
    let mut state = store.load();

    if let Err(err) = store.set_reflection(&mut state, week_id, text) {
        report_save_failure(&err);
    }
    println!("✓ Reflection saved for {}: {}", week.week_label, week.title);
}

/// Run the confidence command
pub fn run_confidence(config: &Config, week_id: &str, level: Confidence) {
    let week = require_week(week_id);
    let store = ProgressStore::from_config(config);
    let mut state = store.load();

    if let Err(err) = store.set_confidence(&mut state, week_id, level) {
        report_save_failure(&err);
    }
    println!("✓ Confidence for {} set to {level}", week.week_label);
}

/// Show what unlocked after a completion
fn print_next_hint(checked: &std::collections::HashMap<String, bool>) {
    if let Some(next) = engine::find_next_action(syllabus::curriculum(), checked) {
        println!("  Next up: {}", next.item.label);
    }
}
