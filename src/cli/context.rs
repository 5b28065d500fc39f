//! CLI context - bundles settings, flags and the random source.

use std::io::Write;
use std::time::Instant;

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::info;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::entropy::Source;
use crate::error::{Error, Result};
use crate::pass::{PasswordGenerator, output};
use crate::settings::Settings;
use crate::terminal::is_tty;
use crate::wordlist::Wordlist;

/// Application context for one CLI invocation.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Resolve the starting settings and overlay the explicit flags.
    pub fn new(flags: CliFlags) -> Self {
        let base = if flags.default {
            Settings::default()
        } else if flags.saved || Settings::has_saved_file() {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::settings_unreadable(&e);
                Settings::default()
            })
        } else {
            Settings::default()
        };
        Self::with_settings(base, flags)
    }

    pub fn with_settings(settings: Settings, flags: CliFlags) -> Self {
        let mut ctx = Self { settings, flags };
        ctx.apply_flags();
        ctx
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) {
        let flags = &self.flags;
        let settings = &mut self.settings;

        if let Some(ref path) = flags.wordlist {
            settings.wordlist_path = path.display().to_string();
        }
        if let Some(n) = flags.min_length {
            settings.min_length = n;
        }
        if flags.no_max {
            settings.max_length = None;
        } else if flags.max_length.is_some() {
            settings.max_length = flags.max_length;
        }
        if let Some(n) = flags.capitals {
            settings.capitals = n;
        }
        if let Some(n) = flags.specials {
            settings.specials = n;
        }
        if let Some(n) = flags.digits {
            settings.digits = n;
        }
        if let Some(n) = flags.number {
            settings.number_of_passwords = n;
        }
    }

    pub fn run(&mut self) -> Result<()> {
        quiet::set(self.flags.quiet);

        if self.flags.save {
            self.settings.save_to_file()?;
            prompts::settings_saved(&Settings::path());
        }

        let words = Wordlist::load(&self.settings.wordlist_path)?;
        let pw_gen = PasswordGenerator::new(words, self.settings.generator_config())?;
        let mut rng = Source::select(self.flags.seed, self.flags.hw);
        info!(
            source = rng.name(),
            words = pw_gen.wordlist().len(),
            "generator ready"
        );

        if let Some(runs) = self.flags.stress {
            let stdout = std::io::stdout();
            return stress(&pw_gen, &mut rng, runs, &mut stdout.lock());
        }

        let count = self.settings.number_of_passwords.max(1);
        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(ctx) => return copy_to_clipboard(ctx, &pw_gen, &mut rng, count),
                Err(e) => prompts::clipboard_unavailable(&e.to_string()),
            }
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        output::write_batch(&pw_gen, &mut rng, count, &mut out, !quiet::enabled())
    }
}

/// Print one sample password, then run the length histogram.
fn stress<W: Write>(
    pw_gen: &PasswordGenerator,
    rng: &mut Source,
    runs: usize,
    out: &mut W,
) -> Result<()> {
    output::write_batch(pw_gen, rng, 1, out, !quiet::enabled())?;
    out.flush()?;

    let source = rng.name();
    let start = Instant::now();
    let hist = if is_tty() && !quiet::enabled() {
        output::stress_with_progress(pw_gen, rng, runs, source)
    } else {
        output::tally(pw_gen, rng, runs, |_| true)
    };

    output::print_histogram(&hist, start.elapsed(), source);
    Ok(())
}

fn copy_to_clipboard(
    mut ctx: ClipboardContext,
    pw_gen: &PasswordGenerator,
    rng: &mut Source,
    count: usize,
) -> Result<()> {
    let mut passwords = output::collect_batch(pw_gen, rng, count)?;
    let copied = ctx.set_contents(passwords.clone());
    passwords.zeroize();
    copied.map_err(|e| Error::Clipboard(e.to_string()))?;

    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    prompts::clipboard_copied(count);
    Ok(())
}
