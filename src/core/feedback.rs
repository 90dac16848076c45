//! Per-letter feedback for a single guess
//!
//! One round of feedback is written as whitespace-separated tokens, each a
//! letter followed by an outcome marker:
//! - `$` = Correct (letter is at this position)
//! - `?` = Misplaced (letter is in the word, elsewhere)
//! - `!` = Absent (no further occurrence of the letter)
//!
//! For example `a! b$ c?` describes a three-letter guess `abc`.

use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// A single case-normalized ASCII letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter, lower-casing it
    ///
    /// Returns `None` for anything that isn't an ASCII letter.
    #[must_use]
    pub fn new(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self(ch.to_ascii_lowercase() as u8))
    }

    /// Create a letter from a raw byte
    #[must_use]
    pub fn from_byte(byte: u8) -> Option<Self> {
        Self::new(char::from(byte))
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The feedback given for one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The letter occupies this exact position in the target
    Correct,
    /// The letter occurs in the target, but not at this position
    Misplaced,
    /// No occurrence of the letter beyond those marked Correct or Misplaced
    Absent,
}

impl Outcome {
    pub const ALL: [Self; 3] = [Self::Correct, Self::Misplaced, Self::Absent];

    /// The text marker for this outcome
    #[must_use]
    pub const fn marker(self) -> char {
        match self {
            Self::Correct => '$',
            Self::Misplaced => '?',
            Self::Absent => '!',
        }
    }

    /// Look up an outcome by its text marker
    #[must_use]
    pub const fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '$' => Some(Self::Correct),
            '?' => Some(Self::Misplaced),
            '!' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// One letter of a guess together with its outcome
///
/// The position is implied by the component's index in a [`FeedbackRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackComponent {
    pub letter: Letter,
    pub outcome: Outcome,
}

impl FeedbackComponent {
    #[must_use]
    pub const fn new(letter: Letter, outcome: Outcome) -> Self {
        Self { letter, outcome }
    }

    /// Parse a single two-character token such as `a!`
    ///
    /// # Errors
    /// Returns `SolverError::MalformedFeedback` if the token is not exactly a
    /// letter followed by a recognized outcome marker.
    pub fn parse(token: &str) -> Result<Self, SolverError> {
        let mut chars = token.chars();
        let (Some(letter), Some(marker), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SolverError::malformed(
                token,
                "expected a letter followed by an outcome marker",
            ));
        };

        let letter = Letter::new(letter)
            .ok_or_else(|| {
                SolverError::malformed(token, format!("'{letter}' is not a letter"))
            })?;
        let outcome = Outcome::from_marker(marker).ok_or_else(|| {
            SolverError::malformed(token, format!("unknown outcome marker '{marker}'"))
        })?;

        Ok(Self::new(letter, outcome))
    }
}

impl fmt::Display for FeedbackComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.outcome.marker())
    }
}

/// Feedback for one guess: one component per letter position
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeedbackRecord {
    components: Vec<FeedbackComponent>,
}

impl FeedbackRecord {
    #[must_use]
    pub const fn new(components: Vec<FeedbackComponent>) -> Self {
        Self { components }
    }

    /// Parse one round of feedback text
    ///
    /// The parser has no word-length context; use [`parse_feedback`] to also
    /// check the record against the expected length.
    ///
    /// # Errors
    /// Returns `SolverError::MalformedFeedback` if any token is malformed or
    /// the text holds no tokens at all.
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{FeedbackRecord, Outcome};
    ///
    /// let record = FeedbackRecord::parse("b! a$ d?").unwrap();
    /// assert_eq!(record.len(), 3);
    /// assert_eq!(record.guess(), "bad");
    /// assert_eq!(record.get(1).unwrap().outcome, Outcome::Correct);
    /// ```
    pub fn parse(raw_text: &str) -> Result<Self, SolverError> {
        let components = raw_text
            .split_whitespace()
            .map(FeedbackComponent::parse)
            .collect::<Result<Vec<_>, _>>()?;

        if components.is_empty() {
            return Err(SolverError::malformed(raw_text, "no feedback tokens"));
        }

        Ok(Self { components })
    }

    /// Number of letter positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&FeedbackComponent> {
        self.components.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeedbackComponent> {
        self.components.iter()
    }

    /// The guessed word the feedback refers to
    #[must_use]
    pub fn guess(&self) -> String {
        self.components.iter().map(|c| c.letter.as_char()).collect()
    }

    /// Check whether every letter was marked Correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.is_empty()
            && self
                .components
                .iter()
                .all(|c| c.outcome == Outcome::Correct)
    }

    /// Fail unless the record covers exactly `expected` letters
    ///
    /// # Errors
    /// Returns `SolverError::FeedbackLengthMismatch` on a length mismatch.
    pub fn ensure_length(&self, expected: usize) -> Result<(), SolverError> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(SolverError::FeedbackLengthMismatch {
                expected,
                found: self.len(),
            })
        }
    }
}

impl<'a> IntoIterator for &'a FeedbackRecord {
    type Item = &'a FeedbackComponent;
    type IntoIter = std::slice::Iter<'a, FeedbackComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for FeedbackRecord {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FeedbackRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{component}")?;
        }
        Ok(())
    }
}

/// Parse feedback text and check it against the expected word length
///
/// Token errors are reported before length errors.
///
/// # Errors
/// Returns `SolverError::MalformedFeedback` for malformed text and
/// `SolverError::FeedbackLengthMismatch` when the token count differs from
/// `expected_length`.
///
/// # Examples
/// ```
/// use wordle_solver::core::parse_feedback;
/// use wordle_solver::SolverError;
///
/// assert!(parse_feedback("a! b$ c? d! e!", 5).is_ok());
/// assert!(matches!(
///     parse_feedback("a#", 5),
///     Err(SolverError::MalformedFeedback { .. })
/// ));
/// assert!(matches!(
///     parse_feedback("a! b$", 5),
///     Err(SolverError::FeedbackLengthMismatch { expected: 5, found: 2 })
/// ));
/// ```
pub fn parse_feedback(
    raw_text: &str,
    expected_length: usize,
) -> Result<FeedbackRecord, SolverError> {
    let record = FeedbackRecord::parse(raw_text)?;
    record.ensure_length(expected_length)?;
    Ok(record)
}
