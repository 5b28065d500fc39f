//! Password generation and output.

pub mod charset;
mod config;
mod draft;
mod generate;
pub mod output;

pub use config::GeneratorConfig;
pub use generate::PasswordGenerator;
