//! Letter-frequency selection
//!
//! Scores each candidate by how many candidates share each of its distinct
//! letters, and picks the highest score. Words with repeated letters are not
//! rewarded for the repeats.

use super::WordSelector;
use crate::core::Word;
use crate::error::SolverError;
use crate::lexicon::CandidateSet;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Picks the candidate covering the most common letters
///
/// Ties go to the lexically smallest word, so the choice is deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrequencySelector;

/// Count, for every letter, how many candidates contain it
fn letter_frequencies(candidates: &CandidateSet) -> FxHashMap<u8, usize> {
    let mut counts = FxHashMap::default();
    for word in candidates.iter() {
        let distinct: FxHashSet<u8> = word.chars().iter().copied().collect();
        for letter in distinct {
            *counts.entry(letter).or_insert(0) += 1;
        }
    }
    counts
}

fn coverage_score(word: &Word, frequencies: &FxHashMap<u8, usize>) -> usize {
    let distinct: FxHashSet<u8> = word.chars().iter().copied().collect();
    distinct
        .iter()
        .map(|letter| frequencies.get(letter).copied().unwrap_or(0))
        .sum()
}

impl WordSelector for FrequencySelector {
    fn select<'a>(&self, candidates: &'a CandidateSet) -> Result<&'a Word, SolverError> {
        let frequencies = letter_frequencies(candidates);
        let words: Vec<&'a Word> = candidates.iter().collect();

        words
            .par_iter()
            .map(|&word| (coverage_score(word, &frequencies), word))
            .max_by(|(score_a, word_a), (score_b, word_b)| {
                score_a.cmp(score_b).then_with(|| word_b.cmp(word_a))
            })
            .map(|(_, word)| word)
            .ok_or(SolverError::EmptyCandidateSet)
    }
}
