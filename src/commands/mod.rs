//! Command implementations

pub mod benchmark;
pub mod filter;
pub mod play;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use filter::{FilterResult, run_filter};
pub use play::{PlayOutcome, run_play};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
