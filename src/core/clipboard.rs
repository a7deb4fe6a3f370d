//! Best-effort clipboard access
//!
//! Pipes text into the first available system clipboard utility. Every
//! failure mode (no utility installed, spawn error, broken pipe, nonzero
//! exit) simply yields `false`; callers only report success.

use std::io::Write;
use std::process::{Command, Stdio};

/// Clipboard utilities to try, in order: Wayland, X11, macOS
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
];

/// Copy `text` to the system clipboard
///
/// Returns true if some clipboard utility accepted the text. A `false`
/// return is not an error condition; the copy is fire-and-forget.
#[must_use]
pub fn copy_text(text: &str) -> bool {
    for (program, args) in CLIPBOARD_COMMANDS {
        if pipe_to(program, args, text) {
            logger::debug!("Copied summary to clipboard via {program}");
            return true;
        }
    }
    logger::debug!("No clipboard utility accepted the text");
    false
}

/// Spawn one clipboard utility and feed it `text` on stdin
fn pipe_to(program: &str, args: &[&str], text: &str) -> bool {
    let Ok(mut child) = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
    else {
        return false;
    };

    if let Some(mut stdin) = child.stdin.take() {
        if stdin.write_all(text.as_bytes()).is_err() {
            let _ = child.kill();
            let _ = child.wait();
            return false;
        }
        // Dropping stdin closes the pipe so the utility can exit
    }

    child.wait().is_ok_and(|status| status.success())
}
