//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji};
use crate::commands::{BenchmarkResult, FilterResult, SolveResult};
use crate::core::Word;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            step.word.to_uppercase(),
            feedback_to_emoji(&step.feedback)
        );

        if verbose {
            println!("  Feedback:   {}", step.feedback);
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else if result.exhausted_candidates {
        println!(
            "{}",
            "❌ No consistent word found: the target is not in the word list"
                .red()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the candidates left after applying feedback
pub fn print_filter_result(result: &FilterResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "FILTER RESULTS".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, round) in result.rounds.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            round.feedback.guess().to_uppercase(),
            feedback_to_emoji(&round.feedback)
        );
        println!(
            "  Candidates: {} → {}",
            round.candidates_before, round.candidates_after
        );
    }

    println!(
        "\n{} {}",
        "Remaining:".bright_cyan().bold(),
        result.remaining.len()
    );
    for chunk in result.remaining.chunks(8) {
        let line: Vec<&str> = chunk.iter().map(Word::text).collect();
        println!("   {}", line.join(" "));
    }

    match &result.suggestion {
        Some(word) => println!(
            "\nSuggested next guess: {}",
            word.text().to_uppercase().bright_yellow().bold()
        ),
        None => println!(
            "\n{}",
            "No consistent word found! The feedback may be incorrect.".red()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}", result.solved).green()
    );
    if result.failed > 0 {
        println!("   Failed:           {}", format!("{}", result.failed).red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}
