//! Centralized warning and status messages for CLI output.

use super::quiet;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed (errors are always shown)
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Print a failed generation with a hint to adjust the requirements
pub fn generation_failed(msg: &str) {
    error(&format!(
        "Error generating password: {msg}. Change parameters and try again."
    ));
}

/// Print clipboard fallback notice
pub fn clipboard_unavailable(err: &str) {
    warn(&format!("Clipboard unavailable ({err}), printing to terminal instead"));
}

/// Print clipboard copied confirmation - suppressed in quiet mode
pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** -COPIED {count} TO CLIPBOARD- ***");
    }
}

pub fn settings_saved(path: &str) {
    if !quiet::enabled() {
        println!("Settings saved \u{2192} {path}");
    }
}

pub fn settings_unreadable(err: &std::io::Error) {
    warn(&format!("Failed to load settings, using defaults: {err}"));
}
