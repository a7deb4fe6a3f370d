//! Weeks and show command handlers
//!
//! `weeks` prints the roadmap overview; `show` prints one week in full,
//! including checklist gating, evidence, reflection, and self-check prompts.

use journey_tracker::config::Config;
use journey_tracker::core::models::Week;
use journey_tracker::core::{engine, models::ProgressState, store::ProgressStore, syllabus};
use logger::error;

/// Run the weeks overview command
pub fn run_overview(config: &Config) {
    let curriculum = syllabus::curriculum();
    let store = ProgressStore::from_config(config);
    let state = store.load();

    println!("\n=== Weekly roadmap ===\n");
    for week in &curriculum.weeks {
        let totals = engine::week_totals(week, &state.checked);
        let due = week
            .due
            .as_ref()
            .map_or_else(String::new, |d| format!("  [{}: {}]", d.label, d.date));

        println!(
            "{:<4} {:<8} {:<20} {}/{} ({:>3}%)  {}{}",
            week.id,
            week.week_label,
            format!("[{}]", week.phase_label),
            totals.done,
            totals.total,
            totals.percent,
            week.title,
            due
        );
    }
    println!("\nUse `journey show <week>` for a week's checklist.");
}

/// Run the show command for a single week
pub fn run_show(config: &Config, week_id: &str) {
    let curriculum = syllabus::curriculum();
    let Some(week) = curriculum.week(week_id) else {
        error!("Unknown week id requested: {week_id}");
        eprintln!("✗ Unknown week id: '{week_id}' (expected w1..w{})", curriculum.week_count());
        std::process::exit(1);
    };

    let store = ProgressStore::from_config(config);
    let state = store.load();

    print_week(week, &state);
}

/// Render one week's full detail
fn print_week(week: &Week, state: &ProgressState) {
    let totals = engine::week_totals(week, &state.checked);

    println!("\n=== {}: {} ({}) ===", week.week_label, week.title, week.dates);
    println!("{}  [{}]", week.subtitle, week.phase_label);
    if let Some(due) = &week.due {
        println!("{}: {}", due.label, due.date);
    }
    println!(
        "Completed: {}/{} required items ({}%)",
        totals.done, totals.total, totals.percent
    );

    println!("\n--- Business case connection ---");
    println!("Stage:  {}", week.stage.stage);
    println!("Output: {}", week.stage.output);
    println!("Goal:   “{}”", week.stage.goal);

    println!("\n--- Checklist ---");
    for item in &week.checklist {
        let marker = if state.is_checked(&item.id) {
            "[x]"
        } else {
            "[ ]"
        };
        let blocked = engine::is_blocked(item, &state.checked);

        let mut badges = String::new();
        if let Some(eta) = &item.eta {
            badges.push_str(&format!("  ({eta})"));
        }
        if !item.required {
            badges.push_str("  (optional)");
        }
        if blocked {
            badges.push_str("  [blocked]");
        }

        println!("{marker} {:<24} {}{badges}", item.id, item.label);

        if blocked {
            let unmet = engine::unmet_prerequisites(item, &state.checked);
            println!("      Finish prerequisites first: {}", unmet.join(", "));
        }

        if item.captures_evidence() {
            match state.evidence.get(&item.id).map(String::as_str) {
                Some(link) if !link.trim().is_empty() => {
                    println!("      Evidence: {link}");
                }
                _ => println!("      Evidence: ({})", item.evidence_placeholder()),
            }
        }
    }

    println!("\n--- Reflection ---");
    match state.reflections.get(&week.id).map(String::as_str) {
        Some(text) if !text.trim().is_empty() => println!("{text}"),
        _ => println!("(none yet — use `journey reflect {} \"...\"`)", week.id),
    }

    print!("Confidence: ");
    match state.confidence.get(&week.id) {
        Some(level) => println!("{level}"),
        None => println!("(not set)"),
    }

    if !week.self_check.is_empty() {
        println!("\n--- Self-check ---");
        for question in &week.self_check {
            println!("  - {question}");
        }
    }

    if !week.resources.is_empty() {
        println!("\n--- Resources ---");
        for resource in &week.resources {
            match &resource.href {
                Some(href) => println!("  - {}: {href}", resource.label),
                None => println!("  - {}", resource.label),
            }
        }
    }

    println!();
}
