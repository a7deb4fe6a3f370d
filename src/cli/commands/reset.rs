//! Reset command handler

use journey_tracker::config::Config;
use journey_tracker::core::store::ProgressStore;
use logger::{error, info};
use std::io::{self, Write};

/// Run the reset command, clearing all progress after confirmation
pub fn run(config: &Config, yes: bool) {
    let store = ProgressStore::from_config(config);

    if !yes {
        // Ask for confirmation
        print!("Are you sure you want to clear all journey progress? (y/n): ");
        io::stdout().flush().ok();

        let mut response = String::new();
        io::stdin().read_line(&mut response).ok();

        let confirmed = response.trim().eq_ignore_ascii_case("y")
            || response.trim().eq_ignore_ascii_case("yes");
        if !confirmed {
            println!("✗ Reset cancelled");
            return;
        }
    }

    match store.reset() {
        Ok(_) => {
            info!("Progress reset; slot rewritten at {}", store.path().display());
            println!("✓ Progress reset");
        }
        Err(err) => {
            error!("Progress reset failed: {err}");
            eprintln!("✗ Failed to reset progress: {err}");
            std::process::exit(1);
        }
    }
}
