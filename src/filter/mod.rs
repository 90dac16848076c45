//! Candidate filtering
//!
//! Single-letter constraint primitives and the feedback filter that composes
//! them, taking letters repeated within a guess into account.

mod primitives;
pub mod resolve;

use crate::lexicon::CandidateSet;

pub use primitives::{Constraint, LengthFilter};
pub use resolve::{FeedbackFilter, LetterTally, reduce};

/// A strategy for narrowing down a candidate set
pub trait CandidateFilter {
    /// Return the subset of `candidates` this filter accepts
    ///
    /// The input is never modified.
    fn filter(&self, candidates: &CandidateSet) -> CandidateSet;
}
