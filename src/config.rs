//! Game configuration

use crate::error::SolverError;

/// Default number of attempts in a game
pub const DEFAULT_ATTEMPTS: usize = 6;

/// Default word length
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Settings shared by every game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub word_length: usize,
    pub total_attempts: usize,
}

impl SolverConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfig` if either value is zero.
    pub fn new(word_length: usize, total_attempts: usize) -> Result<Self, SolverError> {
        let config = Self {
            word_length,
            total_attempts,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values no game can be played with
    ///
    /// # Errors
    /// Returns `SolverError::InvalidConfig` if either value is zero.
    pub fn validate(&self) -> Result<(), SolverError> {
        if self.word_length == 0 {
            return Err(SolverError::InvalidConfig(
                "word length must be at least 1".to_string(),
            ));
        }
        if self.total_attempts == 0 {
            return Err(SolverError::InvalidConfig(
                "a game needs at least one attempt".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            total_attempts: DEFAULT_ATTEMPTS,
        }
    }
}
