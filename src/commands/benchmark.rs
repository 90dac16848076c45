//! Benchmark command
//!
//! Plays a game against many target words in parallel and collects statistics.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::lexicon::Lexicon;
use crate::selection::WordSelector;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run a benchmark on a set of target words
///
/// Each target is an independent game with its own session, so games run in
/// parallel. Averages and the distribution only count solved games.
pub fn run_benchmark<S: WordSelector + Sync>(
    lexicon: &Lexicon,
    target_words: &[Word],
    selector: &S,
    max_guesses: usize,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(target_words.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let start = Instant::now();

    let outcomes: Vec<Option<usize>> = target_words
        .par_iter()
        .map(|target| {
            let mut config = SolveConfig::new(target.text().to_string());
            config.max_guesses = max_guesses;

            let outcome = match solve_word(&config, lexicon, selector) {
                Ok(result) if result.success => Some(result.guesses.len()),
                Ok(_) => None,
                Err(e) => {
                    warn!(%target, error = %e, "benchmark game failed");
                    None
                }
            };
            pb.inc(1);
            outcome
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for &guesses in outcomes.iter().flatten() {
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let total_words = target_words.len();
    let solved = outcomes.iter().flatten().count();
    let total_guesses: usize = outcomes.iter().flatten().sum();

    BenchmarkResult {
        total_words,
        solved,
        failed: total_words - solved,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: outcomes.iter().flatten().copied().min().unwrap_or(0),
        max_guesses: outcomes.iter().flatten().copied().max().unwrap_or(0),
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
