//! Error types for wordlist loading and password generation.

use std::path::PathBuf;

use thiserror::Error;

/// The wordlist could not be turned into a usable lookup table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read wordlist {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("wordlist contains no valid five-digit dice entries")]
    Empty,
}

/// A single `generate` call could not satisfy its requirements.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConstraintError {
    #[error(
        "requiring {capitals} capital letters is too many for a maximum length of {max_length} \
         with {lowercase} lowercase letters available"
    )]
    TooManyCapitals {
        capitals: usize,
        max_length: usize,
        lowercase: usize,
    },

    /// Minimum length was consumed entirely by the capital margin, so no
    /// word was drawn to inject into.
    #[error("no words were drawn, cannot place {step}; raise the minimum length")]
    EmptyDraft { step: &'static str },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("clipboard: {0}")]
    Clipboard(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
