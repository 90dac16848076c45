//! The set of words still consistent with the feedback seen so far

use crate::core::Word;
use rustc_hash::FxHashSet;

/// A set of unique candidate words
///
/// Filters never mutate a set in place; they return a new subset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: FxHashSet<Word>,
}

impl CandidateSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from raw strings, skipping anything that isn't a valid word
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::lexicon::CandidateSet;
    ///
    /// let set = CandidateSet::from_strs(["dam", "dab", "add", "d4b"]);
    /// assert_eq!(set.len(), 3);
    /// assert!(set.contains_str("dab"));
    /// ```
    pub fn from_strs<'a>(words: impl IntoIterator<Item = &'a str>) -> Self {
        words
            .into_iter()
            .filter_map(|w| Word::new(w).ok())
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Membership test by text, normalizing case
    #[must_use]
    pub fn contains_str(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.words.contains(&w))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// Keep only words matching the predicate, returning a new set
    #[must_use]
    pub fn retain_matching(&self, predicate: impl Fn(&Word) -> bool) -> Self {
        self.words
            .iter()
            .filter(|word| predicate(word))
            .cloned()
            .collect()
    }

    /// Remove a word, returning whether it was present
    pub fn remove(&mut self, word: &Word) -> bool {
        self.words.remove(word)
    }

    /// Words in lexical order
    #[must_use]
    pub fn sorted(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }

    /// Check whether every word of this set is also in `other`
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.words.is_subset(&other.words)
    }
}

impl FromIterator<Word> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

/// Remove one word from a candidate set
///
/// Returns the new set and whether the word was present. Used when a proposed
/// guess is refused and must not be offered again.
///
/// # Examples
/// ```
/// use wordle_solver::core::Word;
/// use wordle_solver::lexicon::{CandidateSet, remove_word};
///
/// let set = CandidateSet::from_strs(["a", "b"]);
/// let (set, was_present) = remove_word(set, &Word::new("c").unwrap());
/// assert!(!was_present);
/// let (set, was_present) = remove_word(set, &Word::new("a").unwrap());
/// assert!(was_present);
/// assert_eq!(set.len(), 1);
/// ```
#[must_use]
pub fn remove_word(mut candidates: CandidateSet, word: &Word) -> (CandidateSet, bool) {
    let was_present = candidates.remove(word);
    (candidates, was_present)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_strs_deduplicates_and_normalizes() {
        let set = CandidateSet::from_strs(["crane", "CRANE", "slate"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains_str("Crane"));
    }

    #[test]
    fn retain_matching_leaves_input_untouched() {
        let set = CandidateSet::from_strs(["ab", "ba", "cc"]);
        let filtered = set.retain_matching(|w| w.has_letter(b'a'));
        assert_eq!(filtered.len(), 2);
        assert_eq!(set.len(), 3);
        assert!(filtered.is_subset(&set));
    }

    #[test]
    fn sorted_is_lexical() {
        let set = CandidateSet::from_strs(["dam", "add", "dab"]);
        let texts: Vec<&str> = set.sorted().into_iter().map(Word::text).collect();
        assert_eq!(texts, ["add", "dab", "dam"]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut set = CandidateSet::from_strs(["a", "b"]);
        assert!(!set.remove(&Word::new("c").unwrap()));
        assert!(set.remove(&Word::new("a").unwrap()));
        assert_eq!(set.len(), 1);
    }
}
