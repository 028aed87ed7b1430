//! Expected-size Wordle solver
//!
//! Picks every guess to minimize the expected number of candidates left
//! afterwards, computed exactly from the partition of the pool by feedback
//! pattern.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_expected::core::Word;
//! use wordle_expected::solver::{GameConfig, GameContext};
//!
//! let mut context = GameContext::<5>::from_strs(
//!     &["crane", "slate", "irate", "crate", "grate", "trace"],
//!     GameConfig::default(),
//! )
//! .unwrap();
//!
//! // The opening guess is computed once and reused by every game
//! let target = Word::new("grate").unwrap();
//! let report = context.play_target(target).unwrap();
//! assert_eq!(report.turns[0].guess, context.opening().word);
//! assert_eq!(report.solution(), Some(target));
//! ```

// Core domain types
pub mod core;

// Error taxonomy
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
