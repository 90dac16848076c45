//! Wordle Solver - CLI
//!
//! Proposes guesses, reads feedback and narrows the word list until the
//! answer is found.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::seq::IteratorRandom;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_solver::{
    commands::{PlayOutcome, SolveConfig, run_benchmark, run_filter, run_play, solve_word},
    config::{DEFAULT_ATTEMPTS, DEFAULT_WORD_LENGTH, SolverConfig},
    core::Word,
    lexicon::{CandidateSet, Lexicon},
    output::{print_benchmark_result, print_filter_result, print_solve_result},
    selection::SelectorKind,
    session::Session,
    wordlists::{
        WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_solver",
    about = "Wordle solver that narrows a word list from per-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Selector: random (default), alphabetical, frequency
    #[arg(short, long, global = true, default_value = "random")]
    selector: String,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Word length to play with
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Number of attempts per game
    #[arg(short = 'a', long, global = true, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default)
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show feedback and candidate counts per turn
        #[arg(long)]
        details: bool,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Apply feedback rounds to the word list and suggest a next guess
    Filter {
        /// Feedback rounds in order, e.g. "c! r$ a? n! e!"
        #[arg(required = true)]
        feedback: Vec<String>,
    },
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordle_solver={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Load the word list named by the -w flag
///
/// - "embedded": the built-in list
/// - "<path>": newline-delimited file
fn load_words(wordlist: &str) -> Result<CandidateSet> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => {
            load_from_file(path).with_context(|| format!("failed to read word list '{path}'"))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    let config = SolverConfig::new(cli.length, cli.attempts)?;
    let selector = SelectorKind::from_name(&cli.selector);
    let lexicon = Lexicon::new(load_words(&cli.wordlist)?, config.word_length);
    info!(
        words = lexicon.len(),
        selector = selector.name(),
        length = config.word_length,
        attempts = config.total_attempts,
        "loaded lexicon"
    );

    if lexicon.is_empty() {
        anyhow::bail!(
            "word list '{}' has no words of length {}",
            cli.wordlist,
            config.word_length
        );
    }

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(lexicon, &config, &selector),
        Commands::Solve { word, details } => {
            run_solve_command(&word, details, &lexicon, &config, &selector)
        }
        Commands::Benchmark { count } => {
            run_benchmark_command(count, &lexicon, &config, &selector);
            Ok(())
        }
        Commands::Filter { feedback } => run_filter_command(&feedback, lexicon, &selector),
    }
}

fn run_play_command(
    lexicon: Lexicon,
    config: &SolverConfig,
    selector: &SelectorKind,
) -> Result<()> {
    let mut session = Session::new(lexicon, config);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let outcome = run_play(&mut session, selector, &mut input, &mut output)?;
    info!(?outcome, rounds = session.rounds().len(), "game over");
    if outcome == PlayOutcome::Quit {
        println!("\nGoodbye!");
    }
    Ok(())
}

fn run_solve_command(
    word: &str,
    details: bool,
    lexicon: &Lexicon,
    config: &SolverConfig,
    selector: &SelectorKind,
) -> Result<()> {
    let mut solve_config = SolveConfig::new(word.to_lowercase());
    solve_config.max_guesses = config.total_attempts;

    let result = solve_word(&solve_config, lexicon, selector)
        .with_context(|| format!("cannot solve '{word}'"))?;
    print_solve_result(&result, details);
    Ok(())
}

fn run_benchmark_command(
    count: usize,
    lexicon: &Lexicon,
    config: &SolverConfig,
    selector: &SelectorKind,
) {
    let count = count.min(lexicon.len());
    println!(
        "Running benchmark on {count} random words with the {} selector...",
        selector.name()
    );

    let mut targets: Vec<Word> = lexicon
        .words()
        .iter()
        .cloned()
        .choose_multiple(&mut rand::rng(), count);
    targets.sort();

    let result = run_benchmark(lexicon, &targets, selector, config.total_attempts, true);
    print_benchmark_result(&result);
}

fn run_filter_command(
    feedback: &[String],
    lexicon: Lexicon,
    selector: &SelectorKind,
) -> Result<()> {
    let result = run_filter(lexicon, feedback, selector).context("invalid feedback")?;
    print_filter_result(&result);
    Ok(())
}
