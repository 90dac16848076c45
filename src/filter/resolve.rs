//! Repeated-letter resolution
//!
//! Turns one feedback record into a plan of single-letter constraints.
//!
//! An Absent mark does not always mean "the letter is not in the word". When
//! the same letter also appears in the guess marked Correct or Misplaced, it
//! means "no occurrence beyond those". The plan is therefore built in two
//! passes:
//! 1. Tally Correct and Misplaced marks per letter over the whole record
//! 2. Dispatch each position to a primitive using the full tally

use super::{CandidateFilter, Constraint};
use crate::core::{FeedbackRecord, Letter, Outcome};
use crate::error::SolverError;
use crate::lexicon::CandidateSet;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

/// What one record says about one distinct letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterTally {
    /// Occurrences marked Correct
    pub correct: usize,
    /// Occurrences marked Misplaced
    pub misplaced: usize,
    /// Positions not pinned to this letter by a Correct mark
    pub remaining: Vec<usize>,
}

/// First pass: summarize the record per distinct letter
#[must_use]
pub fn tally(record: &FeedbackRecord) -> FxHashMap<Letter, LetterTally> {
    let mut tallies: FxHashMap<Letter, LetterTally> = FxHashMap::default();

    for component in record {
        let entry = tallies.entry(component.letter).or_default();
        match component.outcome {
            Outcome::Correct => entry.correct += 1,
            Outcome::Misplaced => entry.misplaced += 1,
            Outcome::Absent => {}
        }
    }

    for (letter, entry) in &mut tallies {
        entry.remaining = record
            .iter()
            .enumerate()
            .filter(|(_, c)| !(c.letter == *letter && c.outcome == Outcome::Correct))
            .map(|(position, _)| position)
            .collect();
    }

    trace!(?tallies, "tallied feedback");
    tallies
}

/// Filters a candidate set with one round of feedback
#[derive(Debug, Clone, Copy)]
pub struct FeedbackFilter<'a> {
    record: &'a FeedbackRecord,
}

impl<'a> FeedbackFilter<'a> {
    #[must_use]
    pub const fn new(record: &'a FeedbackRecord) -> Self {
        Self { record }
    }

    /// Second pass: the constraints implied by the record, in position order
    ///
    /// # Examples
    /// ```
    /// use wordle_solver::core::{FeedbackRecord, Letter};
    /// use wordle_solver::filter::{Constraint, FeedbackFilter};
    ///
    /// // 'a' is Misplaced at 0, so the Absent 'a' at 1 only rules out position 1
    /// let record = FeedbackRecord::parse("a? a! b!").unwrap();
    /// let a = Letter::new('a').unwrap();
    /// let b = Letter::new('b').unwrap();
    ///
    /// assert_eq!(
    ///     FeedbackFilter::new(&record).constraints(),
    ///     vec![
    ///         Constraint::require_present_exclude_at(a, 0),
    ///         Constraint::exclude_at(a, 1),
    ///         Constraint::exclude_everywhere(b),
    ///     ]
    /// );
    /// ```
    #[must_use]
    pub fn constraints(&self) -> Vec<Constraint> {
        let tallies = tally(self.record);
        let mut bulk_excluded: FxHashSet<Letter> = FxHashSet::default();
        let mut plan = Vec::with_capacity(self.record.len());

        for (position, component) in self.record.iter().enumerate() {
            let letter = component.letter;
            match component.outcome {
                Outcome::Correct => plan.push(Constraint::require_at(letter, position)),
                Outcome::Misplaced => {
                    plan.push(Constraint::require_present_exclude_at(letter, position));
                }
                Outcome::Absent => match tallies.get(&letter) {
                    // Presence is already enforced by the Misplaced sibling
                    Some(t) if t.misplaced > 0 => {
                        plan.push(Constraint::exclude_at(letter, position));
                    }
                    // Count is pinned to the Correct marks: rule out every
                    // other position, once per letter
                    Some(t) if t.correct > 0 => {
                        if bulk_excluded.insert(letter) {
                            plan.extend(
                                t.remaining
                                    .iter()
                                    .map(|&q| Constraint::exclude_at(letter, q)),
                            );
                        }
                    }
                    _ => plan.push(Constraint::exclude_everywhere(letter)),
                },
            }
        }

        plan
    }
}

impl CandidateFilter for FeedbackFilter<'_> {
    fn filter(&self, candidates: &CandidateSet) -> CandidateSet {
        let mut filtered = candidates.clone();

        for constraint in self.constraints() {
            if filtered.is_empty() {
                break;
            }
            let before = filtered.len();
            filtered = constraint.filter(&filtered);
            debug!(%constraint, before, after = filtered.len(), "applied constraint");
        }

        filtered
    }
}

/// Reduce a candidate set with one round of feedback
///
/// The result is always a subset of `candidates`.
///
/// # Errors
/// Returns `SolverError::FeedbackLengthMismatch` if the record length differs
/// from the length of any candidate word.
///
/// # Examples
/// ```
/// use wordle_solver::core::FeedbackRecord;
/// use wordle_solver::filter::reduce;
/// use wordle_solver::lexicon::CandidateSet;
///
/// let candidates = CandidateSet::from_strs(["dam", "dab", "add"]);
/// let record = FeedbackRecord::parse("b! a$ d?").unwrap();
///
/// let reduced = reduce(&candidates, &record).unwrap();
/// assert_eq!(reduced, CandidateSet::from_strs(["dam"]));
/// ```
pub fn reduce(
    candidates: &CandidateSet,
    record: &FeedbackRecord,
) -> Result<CandidateSet, SolverError> {
    if let Some(word) = candidates.iter().find(|w| w.len() != record.len()) {
        return Err(SolverError::FeedbackLengthMismatch {
            expected: word.len(),
            found: record.len(),
        });
    }

    let reduced = FeedbackFilter::new(record).filter(candidates);
    debug!(
        feedback = %record,
        before = candidates.len(),
        after = reduced.len(),
        "reduced candidates"
    );
    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackComponent, Word, score_guess};
    use proptest::prelude::*;

    fn letter(ch: char) -> Letter {
        Letter::new(ch).unwrap()
    }

    fn record(text: &str) -> FeedbackRecord {
        FeedbackRecord::parse(text).unwrap()
    }

    #[test]
    fn tally_counts_per_letter() {
        let tallies = tally(&record("r$ o? t! o! r!"));

        let r = &tallies[&letter('r')];
        assert_eq!((r.correct, r.misplaced), (1, 0));
        assert_eq!(r.remaining, vec![1, 2, 3, 4]);

        let o = &tallies[&letter('o')];
        assert_eq!((o.correct, o.misplaced), (0, 1));
        assert_eq!(o.remaining, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn reduces_with_repeated_letter_across_outcomes() {
        let candidates = CandidateSet::from_strs(["dam", "dab", "add"]);
        let reduced = reduce(&candidates, &record("b! a$ d?")).unwrap();
        assert_eq!(reduced, CandidateSet::from_strs(["dam"]));
    }

    #[test]
    fn correct_and_absent_pins_letter_count() {
        // Guess ROTOR against RADIO: one R, at position 0
        let candidates = CandidateSet::from_strs(["robot", "radio", "rigor"]);
        let feedback = record("r$ o? t! o! r!");

        let plan = FeedbackFilter::new(&feedback).constraints();
        assert!(plan.contains(&Constraint::exclude_at(letter('r'), 4)));
        assert!(!plan.contains(&Constraint::exclude_everywhere(letter('r'))));

        let reduced = reduce(&candidates, &feedback).unwrap();
        assert_eq!(reduced, CandidateSet::from_strs(["radio"]));
    }

    #[test]
    fn correct_and_absent_keeps_single_copy_words() {
        let candidates = CandidateSet::from_strs(["abc", "aac", "aca", "bca"]);
        let feedback = record("a$ a! a!");

        let reduced = reduce(&candidates, &feedback).unwrap();
        assert_eq!(reduced, CandidateSet::from_strs(["abc"]));

        // A global exclusion would have thrown the target away
        let naive = Constraint::exclude_everywhere(letter('a')).filter(&candidates);
        assert!(!naive.contains_str("abc"));
    }

    #[test]
    fn bulk_exclusion_emitted_once_per_letter() {
        let plan = FeedbackFilter::new(&record("a$ a! a!")).constraints();
        assert_eq!(
            plan,
            vec![
                Constraint::require_at(letter('a'), 0),
                Constraint::exclude_at(letter('a'), 1),
                Constraint::exclude_at(letter('a'), 2),
            ]
        );
    }

    #[test]
    fn misplaced_and_absent_excludes_only_that_position() {
        let candidates = CandidateSet::from_strs(["cda", "cad", "dac", "ccd"]);
        let reduced = reduce(&candidates, &record("a? a! b!")).unwrap();
        assert_eq!(reduced, CandidateSet::from_strs(["cda"]));
    }

    #[test]
    fn absent_before_misplaced_sees_full_tally() {
        let plan = FeedbackFilter::new(&record("a! a? b!")).constraints();
        assert_eq!(
            plan,
            vec![
                Constraint::exclude_at(letter('a'), 0),
                Constraint::require_present_exclude_at(letter('a'), 1),
                Constraint::exclude_everywhere(letter('b')),
            ]
        );
    }

    #[test]
    fn three_way_mix_never_excludes_letter_globally() {
        let plan = FeedbackFilter::new(&record("a$ a? a! b!")).constraints();
        assert_eq!(
            plan,
            vec![
                Constraint::require_at(letter('a'), 0),
                Constraint::require_present_exclude_at(letter('a'), 1),
                Constraint::exclude_at(letter('a'), 2),
                Constraint::exclude_everywhere(letter('b')),
            ]
        );

        let candidates = CandidateSet::from_strs(["acca", "aacc", "acac", "ccca"]);
        let reduced = reduce(&candidates, &record("a$ a? a! b!")).unwrap();
        assert_eq!(reduced, CandidateSet::from_strs(["acca"]));
    }

    #[test]
    fn solved_feedback_keeps_only_the_guess() {
        let candidates = CandidateSet::from_strs(["crane", "crate", "slate"]);
        let reduced = reduce(&candidates, &record("c$ r$ a$ n$ e$")).unwrap();
        assert_eq!(reduced, CandidateSet::from_strs(["crane"]));
    }

    #[test]
    fn length_mismatch_is_an_error() {
        let candidates = CandidateSet::from_strs(["crane", "slate"]);
        assert_eq!(
            reduce(&candidates, &record("b! a$ d?")),
            Err(SolverError::FeedbackLengthMismatch {
                expected: 5,
                found: 3
            })
        );
    }

    #[test]
    fn mixed_length_candidates_are_an_error() {
        // Whichever word the set yields first, the 5-letter word must not
        // slip through a 2-letter record
        let candidates = CandidateSet::from_strs(["ab", "cd", "ef", "gh", "abcdx"]);
        assert_eq!(
            reduce(&candidates, &record("x! y!")),
            Err(SolverError::FeedbackLengthMismatch {
                expected: 5,
                found: 2
            })
        );

        let candidates = CandidateSet::from_strs(["ab", "abcde", "xbcde"]);
        assert!(matches!(
            reduce(&candidates, &record("x! y!")),
            Err(SolverError::FeedbackLengthMismatch { found: 2, .. })
        ));
    }

    #[test]
    fn empty_candidates_reduce_to_empty() {
        let reduced = reduce(&CandidateSet::new(), &record("b! a$ d?")).unwrap();
        assert!(reduced.is_empty());
    }

    fn word_text() -> impl Strategy<Value = String> {
        prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd']), 4)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn candidate_set() -> impl Strategy<Value = CandidateSet> {
        prop::collection::hash_set(word_text(), 1..24)
            .prop_map(|words| CandidateSet::from_strs(words.iter().map(String::as_str)))
    }

    fn any_record() -> impl Strategy<Value = FeedbackRecord> {
        let outcome = prop::sample::select(Outcome::ALL.to_vec());
        (word_text(), prop::collection::vec(outcome, 4)).prop_map(|(guess, outcomes)| {
            FeedbackRecord::new(
                guess
                    .chars()
                    .zip(outcomes)
                    .map(|(ch, outcome)| FeedbackComponent::new(letter(ch), outcome))
                    .collect(),
            )
        })
    }

    proptest! {
        #[test]
        fn reduce_is_monotonic(candidates in candidate_set(), feedback in any_record()) {
            let reduced = reduce(&candidates, &feedback).unwrap();
            prop_assert!(reduced.is_subset(&candidates));
        }

        #[test]
        fn reduce_is_idempotent(candidates in candidate_set(), feedback in any_record()) {
            let once = reduce(&candidates, &feedback).unwrap();
            let twice = reduce(&once, &feedback).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn reduce_keeps_the_target(candidates in candidate_set(), guess in word_text()) {
            let guess = Word::new(guess).unwrap();
            for target in candidates.iter() {
                let feedback = score_guess(&guess, target).unwrap();
                let reduced = reduce(&candidates, &feedback).unwrap();
                prop_assert!(
                    reduced.contains(target),
                    "{} dropped by {} for guess {}", target, feedback, guess
                );
            }
        }
    }
}
