//! Status command handler
//!
//! Renders the dashboard view: overall completion, the next action,
//! upcoming deadlines, and assessment weights.

use journey_tracker::config::Config;
use journey_tracker::core::{engine, store::ProgressStore, syllabus};
use logger::debug;

/// Character width of the progress bar
const BAR_WIDTH: usize = 30;

/// Run the status command
pub fn run(config: &Config) {
    let curriculum = syllabus::curriculum();
    let store = ProgressStore::from_config(config);
    let state = store.load();
    debug!("Loaded progress slot from {}", store.path().display());

    let totals = engine::compute_totals(curriculum, &state.checked);

    println!("\n=== {} ===", curriculum.name);
    println!("{}\n", curriculum.tagline);

    println!(
        "Progress: {}/{} required items ({}%)",
        totals.done, totals.total, totals.percent
    );
    println!("[{}]", render_bar(totals.percent));
    if let Some(ts) = state.last_updated {
        println!("Last updated: {}", ts.to_rfc3339());
    }

    println!("\n--- Next action ---");
    if let Some(next) = engine::find_next_action(curriculum, &state.checked) {
        println!("{}: {}", next.week.week_label, next.week.title);
        println!("  {}", next.item.label);
        println!("  Estimated effort: {}", next.item.eta.as_deref().unwrap_or("—"));
        println!("  Tip: only mark this done if you can show evidence or explain it clearly.");
    } else if totals.is_complete() {
        println!("All required items are complete. Prepare your pitch and defense.");
    } else {
        println!("Nothing left that is currently unblocked.");
    }

    let due_weeks = curriculum.due_weeks();
    if !due_weeks.is_empty() {
        println!("\n--- Upcoming deadlines ---");
        for week in due_weeks {
            if let Some(due) = &week.due {
                println!("  {} — {}: {}", due.date, week.week_label, week.title);
            }
        }
    }

    if !curriculum.assessments.is_empty() {
        println!("\n--- Assessment ---");
        for assessment in &curriculum.assessments {
            println!(
                "  {:>3}%  {} ({})",
                assessment.weight, assessment.label, assessment.detail
            );
        }
    }

    println!();
}

/// Render a fixed-width textual progress bar
fn render_bar(percent: u8) -> String {
    let filled = (usize::from(percent) * BAR_WIDTH) / 100;
    let mut bar = String::with_capacity(BAR_WIDTH);
    for i in 0..BAR_WIDTH {
        bar.push(if i < filled { '#' } else { '-' });
    }
    bar
}
