//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use crate::core::Word;
use crate::lexicon::CandidateSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Parse newline-delimited words
///
/// Lines are trimmed and lower-cased; empty lines and lines holding anything
/// other than ASCII letters are skipped.
#[must_use]
pub fn parse_word_list(content: &str) -> CandidateSet {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a file
///
/// Returns the valid words, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<CandidateSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_list(&content);
    debug!(path = %path.display(), words = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to a candidate set
///
/// # Examples
/// ```
/// use wordle_solver::wordlists::loader::words_from_slice;
/// use wordle_solver::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> CandidateSet {
    CandidateSet::from_strs(slice.iter().copied())
}
