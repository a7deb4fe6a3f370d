//! Command-line interface entry point for `journey-tracker`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use journey_tracker::config::Config;
use logger::{enable_debug, enable_verbose, info, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // Determine effective runtime log level: CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    // Verbose: enable if CLI flag OR config has verbose=true
    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // Initialize file logging: CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    // Handle subcommands
    match args.command {
        Command::Status => commands::status::run(&config),
        Command::Weeks => commands::weeks::run_overview(&config),
        Command::Show { week_id } => commands::weeks::run_show(&config, &week_id),
        Command::Check { item_id } => commands::progress::run_check(&config, &item_id),
        Command::Uncheck { item_id } => commands::progress::run_uncheck(&config, &item_id),
        Command::Done => commands::progress::run_done(&config),
        Command::Evidence { item_id, text } => {
            commands::progress::run_evidence(&config, &item_id, &text);
        }
        Command::Reflect { week_id, text } => {
            commands::progress::run_reflect(&config, &week_id, &text);
        }
        Command::Confidence { week_id, level } => {
            commands::progress::run_confidence(&config, &week_id, level.into());
        }
        Command::Summary { copy, output } => {
            commands::summary::run(&config, copy, output.as_deref());
        }
        Command::Reset { yes } => commands::reset::run(&config, yes),
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
    }
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        _ => None,
    }
}
