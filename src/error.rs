//! Error types for the solver library

use thiserror::Error;

/// Why a piece of text could not become a [`Word`](crate::core::Word)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must contain at least one letter")]
    Empty,

    #[error("word must contain only ASCII letters")]
    NonAscii,

    #[error("word contains invalid characters")]
    InvalidCharacters,
}

/// The errors the solver can produce
///
/// None of these are fatal: a caller can re-prompt for feedback or report
/// that no consistent word exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A feedback token did not have the shape `<letter><marker>`.
    #[error("malformed feedback token \"{token}\": {reason}")]
    MalformedFeedback { token: String, reason: String },

    /// A feedback record does not match the word length it is applied to.
    #[error("feedback has {found} letters but words have {expected}")]
    FeedbackLengthMismatch { expected: usize, found: usize },

    /// Selection was requested with no remaining candidates.
    #[error("no consistent word found: the candidate set is empty")]
    EmptyCandidateSet,

    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SolverError {
    pub(crate) fn malformed(token: &str, reason: impl Into<String>) -> Self {
        Self::MalformedFeedback {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_feedback_message_names_token() {
        let err = SolverError::malformed("a#", "unknown outcome marker '#'");
        assert_eq!(
            err.to_string(),
            "malformed feedback token \"a#\": unknown outcome marker '#'"
        );
    }

    #[test]
    fn word_error_converts() {
        let err: SolverError = WordError::Empty.into();
        assert!(matches!(err, SolverError::InvalidWord(WordError::Empty)));
    }
}
