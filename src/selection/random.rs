//! Uniformly random selection

use super::WordSelector;
use crate::core::Word;
use crate::error::SolverError;
use crate::lexicon::CandidateSet;
use rand::seq::IteratorRandom;

/// Picks any candidate with equal probability
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomSelector;

impl WordSelector for RandomSelector {
    fn select<'a>(&self, candidates: &'a CandidateSet) -> Result<&'a Word, SolverError> {
        candidates
            .iter()
            .choose(&mut rand::rng())
            .ok_or(SolverError::EmptyCandidateSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_selects_member() {
        let words = CandidateSet::from_strs(["a", "b"]);
        let word = RandomSelector.select(&words).unwrap();
        assert!(words.contains(word));
    }

    #[test]
    fn random_single_candidate() {
        let words = CandidateSet::from_strs(["irate"]);
        assert_eq!(RandomSelector.select(&words).unwrap().text(), "irate");
    }

    #[test]
    fn random_eventually_covers_all_members() {
        let words = CandidateSet::from_strs(["a", "b", "c"]);
        let seen: CandidateSet = (0..500)
            .map(|_| RandomSelector.select(&words).unwrap().clone())
            .collect();
        assert_eq!(seen, words);
    }
}
