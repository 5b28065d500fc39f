//! Terminal output utilities.
//!
//! Box drawing, progress bars, number formatting, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const DIM: &str = "\x1b[90m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Whether stdout is attached to a terminal.
pub fn is_tty() -> bool {
    unsafe { libc::isatty(1) == 1 }
}

/// Proportional bar of `width` cells for `fraction` in 0.0..=1.0.
pub fn bar(fraction: f64, width: usize) -> String {
    let cells = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("{}{DIM}{}{RESET}", "█".repeat(cells), "·".repeat(width - cells))
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Calculate display width accounting for ANSI escape codes.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

/// Print centered text within box width.
pub fn print_centered(text: &str) {
    let padding = BOX_WIDTH.saturating_sub(text.len()) / 2;
    print!(
        "{}{}{}\r\n",
        " ".repeat(padding),
        text,
        " ".repeat(BOX_WIDTH - padding - text.len())
    );
    flush();
}

// ============================================================================
// Progress Bar
// ============================================================================

/// Render a progress bar inside a box (3 lines), stats under the bar.
pub fn progress_bar_box(percent: f32, stats: &str) {
    let inner_width = BOX_WIDTH - 4;
    let bar_width = inner_width.saturating_sub(console_width(stats) + 1);

    print!("\r┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    print!(
        "\r│ {} {}{} │\r\n",
        bar(f64::from(percent) / 100.0, bar_width),
        stats,
        " ".repeat(inner_width.saturating_sub(bar_width + 1 + console_width(stats)))
    );
    print!("\r└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));

    flush();
}
