//! Generator requirements.

use crate::error::{Error, Result};

/// Length and character-class minimums for one generator.
///
/// `max_length` is only consulted when checking whether the capital
/// requirement can be met; it never truncates the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub min_length: usize,
    pub max_length: Option<usize>,
    pub capitals: usize,
    pub specials: usize,
    pub digits: usize,
}

impl GeneratorConfig {
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            max_length: None,
            capitals: 0,
            specials: 0,
            digits: 0,
        }
    }

    pub fn max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn capitals(mut self, n: usize) -> Self {
        self.capitals = n;
        self
    }

    pub fn specials(mut self, n: usize) -> Self {
        self.specials = n;
        self
    }

    pub fn digits(mut self, n: usize) -> Self {
        self.digits = n;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(Error::InvalidConfig(
                "minimum length must be positive".into(),
            ));
        }
        Ok(())
    }
}
