use std::process::ExitCode;

mod cli;
mod entropy;
mod error;
mod exits;
mod logging;
mod pass;
mod settings;
mod terminal;
mod wordlist;

fn main() -> ExitCode {
    exits::reset_terminal();
    exits::install_handlers();
    unsafe { libc::prctl(libc::PR_SET_DUMPABLE, 0) };

    cli::run()
}
