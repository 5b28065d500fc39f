//! Global quiet mode state for CLI.

use std::sync::atomic::{AtomicBool, Ordering};

/// Suppresses warnings, confirmations and the `length:` lines.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn enabled() -> bool {
    QUIET.load(Ordering::Relaxed)
}
