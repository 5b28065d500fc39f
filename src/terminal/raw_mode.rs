//! Raw mode guard for key polling during stress runs.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// Raw mode stays on until this is dropped.
pub struct RawModeGuard(());

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
