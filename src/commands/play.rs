//! Interactive prompt loop
//!
//! Suggests a word, asks whether it was right, and narrows the lexicon with
//! the feedback typed back in. Reads from any `BufRead` and writes to any
//! `Write` so the loop can be driven from a script.

use crate::core::{Outcome, Word};
use crate::error::SolverError;
use crate::output::formatters::feedback_to_emoji;
use crate::selection::WordSelector;
use crate::session::Session;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// How an interactive game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The proposed word was confirmed correct on `turn`
    Won { word: Word, turn: usize },
    /// Every attempt was used without a confirmed win
    OutOfAttempts,
    /// No word in the lexicon is consistent with the feedback
    NoCandidates,
    /// The player quit, or input ended
    Quit,
}

/// What the player said about a proposed word
enum Verdict {
    Correct,
    Wrong,
    TryAnother,
    Quit,
}

/// Run one interactive game
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    session: &mut Session,
    selector: &dyn WordSelector,
    input: &mut R,
    output: &mut W,
) -> Result<PlayOutcome> {
    writeln!(
        output,
        "Welcome to the Wordle solver! Initial lexicon size is: {}",
        session.candidates_len()
    )?;
    writeln!(
        output,
        "After each wrong guess, enter feedback as letters followed by markers:"
    )?;
    writeln!(
        output,
        "  {} correct position, {} wrong position, {} not in word",
        Outcome::Correct.marker(),
        Outcome::Misplaced.marker(),
        Outcome::Absent.marker()
    )?;
    writeln!(
        output,
        "  e.g. if the second letter is right and the first is misplaced: a? b$ c! d! e!\n"
    )?;

    let mut word = match session.propose(selector) {
        Ok(word) => word,
        Err(SolverError::EmptyCandidateSet) => return no_candidates(output),
        Err(e) => return Err(e.into()),
    };

    loop {
        writeln!(output, "Turn {}/{}", session.turn(), session.total_attempts())?;
        writeln!(
            output,
            "Guessed word is: {}",
            word.text().to_uppercase().bright_white().bold()
        )?;

        let Some(verdict) = read_verdict(input, output)? else {
            return Ok(PlayOutcome::Quit);
        };

        let next = match verdict {
            Verdict::Correct => {
                writeln!(
                    output,
                    "\n{} Won on turn {}/{}! Winning word was: {}",
                    "Congratulations!".bright_green().bold(),
                    session.turn(),
                    session.total_attempts(),
                    word.text().to_uppercase()
                )?;
                return Ok(PlayOutcome::Won {
                    word,
                    turn: session.turn(),
                });
            }
            Verdict::Quit => return Ok(PlayOutcome::Quit),
            Verdict::TryAnother => session.reject(&word, selector),
            Verdict::Wrong => {
                if session.is_exhausted() {
                    writeln!(
                        output,
                        "{}",
                        "Unable to determine the correct word in time!".red()
                    )?;
                    return Ok(PlayOutcome::OutOfAttempts);
                }
                if !read_feedback(session, input, output)? {
                    return Ok(PlayOutcome::Quit);
                }
                session.propose(selector)
            }
        };

        word = match next {
            Ok(word) => word,
            Err(SolverError::EmptyCandidateSet) => return no_candidates(output),
            Err(e) => return Err(e.into()),
        };
    }
}

/// Ask about the proposed word until the answer is understood
///
/// Returns `None` when input ends.
fn read_verdict<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<Option<Verdict>> {
    loop {
        let prompt = "Correct? [y]es, [n]o, [t]ry another word, [q]uit";
        let Some(answer) = get_user_input(input, output, prompt)? else {
            return Ok(None);
        };
        let verdict = match answer.to_lowercase().as_str() {
            "y" | "yes" => Verdict::Correct,
            "n" | "no" => Verdict::Wrong,
            "t" | "try" => Verdict::TryAnother,
            "q" | "quit" | "exit" => Verdict::Quit,
            other => {
                writeln!(output, "Unknown input '{other}'")?;
                continue;
            }
        };
        return Ok(Some(verdict));
    }
}

/// Read feedback lines until one reduces the lexicon
///
/// Returns `false` if the player quit or input ended.
fn read_feedback<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    loop {
        let Some(raw) = get_user_input(input, output, "Enter feedback")? else {
            return Ok(false);
        };
        if matches!(raw.as_str(), "q" | "quit" | "exit") {
            return Ok(false);
        }

        match session.apply_feedback(&raw) {
            Ok(round) => {
                writeln!(
                    output,
                    "{}  Reduced lexicon from {} to {}",
                    feedback_to_emoji(&round.feedback),
                    round.candidates_before,
                    round.candidates_after
                )?;
                return Ok(true);
            }
            Err(
                e @ (SolverError::MalformedFeedback { .. }
                | SolverError::FeedbackLengthMismatch { .. }),
            ) => {
                writeln!(output, "{} {e}", "Invalid feedback:".red())?;
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn no_candidates<W: Write>(output: &mut W) -> Result<PlayOutcome> {
    writeln!(
        output,
        "{}",
        "No consistent word found! The feedback may be incorrect or the word is not in the list."
            .red()
    )?;
    Ok(PlayOutcome::NoCandidates)
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SolverConfig;
    use crate::lexicon::{CandidateSet, Lexicon};
    use crate::selection::AlphabeticalSelector;
    use std::io::Cursor;

    fn session(attempts: usize) -> Session {
        let config = SolverConfig::new(3, attempts).unwrap();
        let words = CandidateSet::from_strs(["add", "bad", "dab", "dam"]);
        Session::new(Lexicon::new(words, config.word_length), &config)
    }

    fn play(session: &mut Session, script: &str) -> (PlayOutcome, String) {
        let mut input = Cursor::new(script.as_bytes());
        let mut output = Vec::new();
        let outcome =
            run_play(session, &AlphabeticalSelector, &mut input, &mut output).unwrap();
        (outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn play_narrows_to_win() {
        let mut session = session(6);
        let (outcome, transcript) = play(&mut session, "n\na? d? d!\nn\nd$ a$ b!\ny\n");

        assert_eq!(
            outcome,
            PlayOutcome::Won {
                word: Word::new("dam").unwrap(),
                turn: 3
            }
        );
        assert!(transcript.contains("Reduced lexicon from 4 to 2"));
        assert_eq!(session.rounds().len(), 2);
    }

    #[test]
    fn play_reprompts_on_bad_feedback() {
        let mut session = session(6);
        let (outcome, transcript) = play(&mut session, "n\na# d? d!\na? d?\na? d? d!\nq\n");

        assert_eq!(outcome, PlayOutcome::Quit);
        assert!(transcript.contains("malformed feedback token"));
        assert!(transcript.contains("feedback has 2 letters but words have 3"));
        assert_eq!(session.rounds().len(), 1);
    }

    #[test]
    fn play_try_another_does_not_use_attempt() {
        let mut session = session(6);
        let (outcome, _) = play(&mut session, "t\ny\n");

        assert_eq!(
            outcome,
            PlayOutcome::Won {
                word: Word::new("bad").unwrap(),
                turn: 1
            }
        );
    }

    #[test]
    fn play_reports_no_candidates() {
        let mut session = session(6);
        let (outcome, transcript) = play(&mut session, "n\na$ a$ a$\n");

        assert_eq!(outcome, PlayOutcome::NoCandidates);
        assert!(transcript.contains("No consistent word found"));
    }

    #[test]
    fn play_runs_out_of_attempts() {
        let mut session = session(1);
        let (outcome, _) = play(&mut session, "n\n");
        assert_eq!(outcome, PlayOutcome::OutOfAttempts);
    }

    #[test]
    fn play_ignores_unknown_verdicts() {
        let mut session = session(6);
        let (outcome, transcript) = play(&mut session, "maybe\ny\n");

        assert!(matches!(outcome, PlayOutcome::Won { turn: 1, .. }));
        assert!(transcript.contains("Unknown input 'maybe'"));
    }

    #[test]
    fn play_quits_at_end_of_input() {
        let mut session = session(6);
        let (outcome, _) = play(&mut session, "");
        assert_eq!(outcome, PlayOutcome::Quit);
    }
}
