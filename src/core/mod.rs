//! Core domain types for the guessing game
//!
//! Fixed-length words and feedback patterns. Everything here is pure and
//! allocation-free so it can sit in the innermost loop of the optimizer.

mod pattern;
mod word;

pub use pattern::{BASE, Feedback, Pattern, Rule, pattern_space};
pub use word::{MAX_WORD_LEN, Word, WordError};
