//! Wordle Solver
//!
//! A feedback-driven Wordle solver. It proposes a word from a lexicon, reads
//! back per-letter feedback (`$` correct, `?` misplaced, `!` absent) and
//! narrows the lexicon to the words still consistent with every round.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_solver::core::parse_feedback;
//! use wordle_solver::filter::reduce;
//! use wordle_solver::lexicon::CandidateSet;
//!
//! let candidates = CandidateSet::from_strs(["robot", "radio", "rigor"]);
//! let feedback = parse_feedback("r$ o? t! o! r!", 5).unwrap();
//!
//! let remaining = reduce(&candidates, &feedback).unwrap();
//! assert!(remaining.contains_str("radio"));
//! assert_eq!(remaining.len(), 1);
//! ```

// Game settings
pub mod config;

// Core domain types
pub mod core;

// Error types
pub mod error;

// Feedback to constraint translation
pub mod filter;

// Candidate words
pub mod lexicon;

// Next-guess selection
pub mod selection;

// Per-game state
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{SolverError, WordError};
