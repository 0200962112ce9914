//! Hangman
//!
//! A category-based hangman game for the terminal: guess letters or the whole
//! word, earn points, and keep cross-session statistics and a per-game audit
//! log.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Round, RoundOutcome, RoundStatus, Secret};
//!
//! let secret = Secret::new("cat", "Animals").unwrap();
//! let mut round = Round::new(secret);
//!
//! round.guess_letter('c');
//! round.guess_letter('a');
//! round.guess_letter('t');
//! assert_eq!(round.status(), RoundStatus::Won);
//!
//! let result = round.finish(RoundOutcome::Won);
//! assert_eq!(result.points, 30);
//! ```

// Core game types and round logic
pub mod core;

// Word selection
pub mod wordlists;

// Cross-session statistics
pub mod stats;

// Per-round audit records
pub mod audit;

// Terminal output
pub mod output;

// Command implementations
pub mod commands;
