//! Integration tests for the `logger` crate

use logger::{debug, error, info, warn};
use logger::{set_level, set_level_from_str, Level};

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_captures_tagged_messages() {
    use logger::init_file_logging;
    use std::fs;

    let dir = std::env::temp_dir().join("journey_logger_test");
    let _ = fs::create_dir_all(&dir);
    let log_path = dir.join("basic.log");
    let _ = fs::remove_file(&log_path);

    assert!(init_file_logging(&log_path));

    set_level(Level::Debug);
    info!("file info message");
    warn!("file warn message");
    error!("file error message");

    let contents = fs::read_to_string(&log_path).expect("read log file");
    assert!(contents.contains("[INFO] file info message"));
    assert!(contents.contains("[WARN] file warn message"));
    assert!(contents.contains("[ERROR] file error message"));

    let _ = fs::remove_file(&log_path);
}
