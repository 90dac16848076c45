//! Word lists for Wordle solving
//!
//! Provides an embedded default list compiled into the binary and a loader for
//! newline-delimited word files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
