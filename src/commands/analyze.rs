//! Word analysis command
//!
//! Scores a single guess against the whole dictionary.

use crate::core::Word;
use crate::error::Result;
use crate::solver::{GameContext, expected_size};

/// Result of analyzing a word
pub struct AnalysisResult<const L: usize> {
    pub word: Word<L>,
    pub expected_remaining: f64,
    pub partitions: usize,
    pub max_partition: u32,
    pub total_candidates: usize,
    pub is_opening: bool,
}

/// Expected remaining candidates and partition shape for `word`
///
/// The word does not have to be in the dictionary.
///
/// # Errors
///
/// Returns an error if the word is invalid.
pub fn analyze_word<const L: usize>(
    context: &mut GameContext<L>,
    word: &str,
) -> Result<AnalysisResult<L>> {
    let word = Word::new(word)?;
    let is_opening = word == context.opening().word;
    let total_candidates = context.dictionary().len();

    let (dictionary, histogram) = context.split_mut();
    let expected_remaining = expected_size(histogram, dictionary, &word)?;

    Ok(AnalysisResult {
        word,
        expected_remaining,
        partitions: histogram.partitions(),
        max_partition: histogram.max_partition(),
        total_candidates,
        is_opening,
    })
}
