//! Summary command handler
//!
//! Prints the deterministic progress summary, optionally copying it to the
//! clipboard or exporting it to a file.

use journey_tracker::config::Config;
use journey_tracker::core::{clipboard, store::ProgressStore, summary, syllabus};
use logger::{error, info};
use std::path::{Path, PathBuf};

/// Run the summary command
pub fn run(config: &Config, copy: bool, output: Option<&Path>) {
    let curriculum = syllabus::curriculum();
    let store = ProgressStore::from_config(config);
    let state = store.load();

    let text = summary::build_summary(curriculum, &state);

    if let Some(output) = output {
        let path = resolve_output_path(config, output);
        if let Some(parent) = path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                error!("Failed to create exports directory {}: {err}", parent.display());
                eprintln!("✗ Failed to create {}: {err}", parent.display());
                std::process::exit(1);
            }
        }
        if let Err(err) = std::fs::write(&path, &text) {
            error!("Failed to export summary to {}: {err}", path.display());
            eprintln!("✗ Failed to write {}: {err}", path.display());
            std::process::exit(1);
        }
        info!("Summary exported to: {}", path.display());
        println!("✓ Summary exported: {}", path.display());
    } else {
        print!("{text}");
    }

    if copy && clipboard::copy_text(&text) {
        // Failure stays silent: the copy is best effort
        println!("✓ Copied to clipboard");
    }
}

/// Bare file names land in the configured exports directory; paths with
/// directory components are used as given
fn resolve_output_path(config: &Config, output: &Path) -> PathBuf {
    if output.parent().is_some_and(|p| !p.as_os_str().is_empty()) {
        output.to_path_buf()
    } else {
        PathBuf::from(&config.paths.exports_dir).join(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_exports(dir: &str) -> Config {
        let mut config = Config::from_defaults();
        config.paths.exports_dir = dir.to_string();
        config
    }

    #[test]
    fn bare_file_name_goes_to_exports_dir() {
        let config = config_with_exports("/tmp/exports");
        let path = resolve_output_path(&config, Path::new("summary.txt"));
        assert_eq!(path, PathBuf::from("/tmp/exports/summary.txt"));
    }

    #[test]
    fn explicit_path_is_kept() {
        let config = config_with_exports("/tmp/exports");
        let path = resolve_output_path(&config, Path::new("./reports/summary.txt"));
        assert_eq!(path, PathBuf::from("./reports/summary.txt"));
    }
}
