//! Password output: plain batches and the stress histogram.

use std::collections::BTreeMap;
use std::io::Write;
use std::sync::mpsc::{self, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use rand::Rng;
use tracing::{debug, info};
use zeroize::Zeroize;

use super::PasswordGenerator;
use crate::error::Result;
use crate::terminal::{
    RawModeGuard, bar, box_bottom, box_line, box_top, format_number, print_centered, print_rule,
    progress_bar_box, reset_terminal,
};

/// Write `count` passwords, each followed by its length unless `show_length`
/// is off. Stops at the first constraint failure.
pub fn write_batch<R, W>(
    pw_gen: &PasswordGenerator,
    rng: &mut R,
    count: usize,
    out: &mut W,
    show_length: bool,
) -> Result<()>
where
    R: Rng + ?Sized,
    W: Write,
{
    for _ in 0..count {
        let mut pass = pw_gen.generate(rng)?;
        let length = pass.chars().count();
        pass.push('\n');
        if show_length {
            pass.push_str(&format!("length: {length}\n"));
        }
        let written = out.write_all(pass.as_bytes());
        pass.zeroize();
        written?;
    }
    out.flush()?;
    Ok(())
}

/// Collect `count` passwords newline-separated, for the clipboard.
pub fn collect_batch<R: Rng + ?Sized>(
    pw_gen: &PasswordGenerator,
    rng: &mut R,
    count: usize,
) -> Result<String> {
    let mut passwords = String::new();
    for i in 0..count {
        let mut pass = pw_gen.generate(rng)?;
        if i > 0 {
            passwords.push('\n');
        }
        passwords.push_str(&pass);
        pass.zeroize();
    }
    Ok(passwords)
}

// =============================================================================
// Stress
// =============================================================================

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LengthHistogram {
    pub counts: BTreeMap<usize, usize>,
    pub failures: usize,
    pub runs: usize,
    pub interrupted: bool,
}

impl LengthHistogram {
    pub fn generated(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn mean(&self) -> Option<f64> {
        let n = self.generated();
        if n == 0 {
            return None;
        }
        let total: usize = self.counts.iter().map(|(len, count)| len * count).sum();
        Some(total as f64 / n as f64)
    }
}

/// Generate up to `runs` passwords and tally their lengths. Constraint
/// failures are counted, not fatal. `keep_going` is asked after each run
/// with the number completed; returning false stops early.
pub fn tally<R, F>(
    pw_gen: &PasswordGenerator,
    rng: &mut R,
    runs: usize,
    mut keep_going: F,
) -> LengthHistogram
where
    R: Rng + ?Sized,
    F: FnMut(usize) -> bool,
{
    let mut hist = LengthHistogram::default();

    for n in 0..runs {
        match pw_gen.generate(rng) {
            Ok(mut pass) => {
                *hist.counts.entry(pass.chars().count()).or_insert(0) += 1;
                pass.zeroize();
            }
            Err(e) => {
                hist.failures += 1;
                debug!(error = %e, "stress run failed");
            }
        }
        hist.runs = n + 1;

        if !keep_going(hist.runs) {
            hist.interrupted = hist.runs < runs;
            break;
        }
    }

    hist
}

fn non_blocking_read(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).unwrap_or(false) {
        event::read().ok()
    } else {
        None
    }
}

/// Stress run with a progress bar; Esc or Ctrl+C stops early.
pub fn stress_with_progress<R: Rng + ?Sized>(
    pw_gen: &PasswordGenerator,
    rng: &mut R,
    runs: usize,
    source: &str,
) -> LengthHistogram {
    reset_terminal();

    let (tx, rx) = mpsc::channel::<KeyCode>();
    let (close_tx, close_rx) = mpsc::channel::<()>();

    let raw_guard = RawModeGuard::new().ok();

    let listener = thread::spawn(move || {
        let timeout = Duration::from_millis(10);
        loop {
            if let Ok(_) | Err(TryRecvError::Disconnected) = close_rx.try_recv() {
                break;
            }

            if let Some(Event::Key(key_event)) = non_blocking_read(timeout) {
                let is_ctrl_c = key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL);
                if is_ctrl_c || key_event.code == KeyCode::Esc {
                    let _ = tx.send(KeyCode::Esc);
                    break;
                }
            }
        }
    });

    print_centered("[Esc/Ctrl+C] to interrupt");
    print!("\r\n\r\n\r\n");

    let start = Instant::now();
    let step = (runs / 200).max(1);

    let hist = tally(pw_gen, rng, runs, |done| {
        if matches!(rx.try_recv(), Ok(KeyCode::Esc)) {
            return false;
        }
        if done % step == 0 || done == runs {
            let pct = done as f32 / runs as f32 * 100.0;
            let stats = format!(
                "{} of {} • {:.1}% • {}ms",
                format_number(done),
                format_number(runs),
                pct,
                start.elapsed().as_millis()
            );
            print!("\x1b[3A");
            progress_bar_box(pct, &stats);
        }
        true
    });

    let _ = close_tx.send(());
    let _ = listener.join();
    drop(raw_guard);
    reset_terminal();

    info!(
        runs = hist.runs,
        source,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "stress finished"
    );
    hist
}

/// Print the histogram summary box.
pub fn print_histogram(hist: &LengthHistogram, elapsed: Duration, source: &str) {
    let title = if hist.interrupted { "Interrupted" } else { "Complete" };
    let generated = hist.generated();

    println!();
    box_top(title);
    box_line(&format!(
        "{} run(s) in {}ms • source: {}",
        format_number(hist.runs),
        elapsed.as_millis(),
        source
    ));
    if let Some(mean) = hist.mean() {
        box_line(&format!("mean length {mean:.2}"));
    }
    print_rule();

    let peak = hist.counts.values().copied().max().unwrap_or(0).max(1);
    for (len, count) in &hist.counts {
        let pct = *count as f64 / generated.max(1) as f64 * 100.0;
        box_line(&format!(
            "length {len:>3}  {}  {:>9}  {pct:5.1}%",
            bar(*count as f64 / peak as f64, 30),
            format_number(*count)
        ));
    }
    if hist.failures > 0 {
        print_rule();
        box_line(&format!(
            "{} run(s) failed a constraint check",
            format_number(hist.failures)
        ));
    }
    box_bottom();
    println!();
}
