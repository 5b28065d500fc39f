mod context;
mod flags;
pub mod prompts;
mod quiet;

use std::process::ExitCode;

use clap::Parser;

use crate::error::Error;
use crate::logging;

pub use context::Context;
pub use flags::CliFlags;

pub fn run() -> ExitCode {
    let flags = CliFlags::parse();
    logging::init(flags.verbose);

    let mut ctx = Context::new(flags);
    match ctx.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Constraint(e)) => {
            prompts::generation_failed(&e.to_string());
            ExitCode::FAILURE
        }
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
