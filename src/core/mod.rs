//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the feedback scorer. Everything here is
//! pure data with no I/O.

mod feedback;
mod score;
mod word;

pub use feedback::{FeedbackComponent, FeedbackRecord, Letter, Outcome, parse_feedback};
pub use score::score_guess;
pub use word::Word;
