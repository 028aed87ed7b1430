//! Expected-size guess selection
//!
//! Under a uniform prior over the pool, observing pattern `c` has probability
//! `h[c] / n` and leaves `h[c]` candidates, so the expected pool size after a
//! guess is `Σ h[c]² / n`. Since `n` is shared by every candidate within one
//! selection, candidates are compared on the exact integer `Σ h[c]²`.

use super::histogram::Histogram;
use crate::core::Word;
use crate::error::{ContractViolation, Result};
use rayon::prelude::*;

/// A guess together with its partition score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scored<const L: usize> {
    pub word: Word<L>,
    pub sum_of_squares: u64,
    pub pool_size: usize,
}

impl<const L: usize> Scored<L> {
    /// Expected pool size after guessing `word`
    #[must_use]
    pub fn expected_size(&self) -> f64 {
        self.sum_of_squares as f64 / self.pool_size as f64
    }
}

/// Expected pool size after guessing `guess`
///
/// # Errors
/// Returns a contract violation if `pool` is empty.
///
/// # Examples
/// ```
/// use wordle_expected::core::{Rule, Word};
/// use wordle_expected::solver::{Histogram, expected_size};
///
/// let pool: Vec<Word<5>> = ["slate", "zzzzz"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let mut histogram = Histogram::new(Rule::Standard);
///
/// // SLATE separates both words, so one candidate always remains
/// let size = expected_size(&mut histogram, &pool, &pool[0]).unwrap();
/// assert!((size - 1.0).abs() < f64::EPSILON);
/// ```
pub fn expected_size<const L: usize>(
    histogram: &mut Histogram<L>,
    pool: &[Word<L>],
    guess: &Word<L>,
) -> Result<f64> {
    if pool.is_empty() {
        return Err(ContractViolation::EmptyPool.into());
    }
    histogram.populate(pool, guess);
    Ok(histogram.sum_of_squares() as f64 / pool.len() as f64)
}

/// Pick the candidate minimizing expected pool size
///
/// Ties go to the lexicographically smallest word, whatever order `candidates`
/// arrive in.
///
/// # Errors
/// Returns a contract violation if `pool` or `candidates` is empty.
pub fn best_guess<const L: usize>(
    histogram: &mut Histogram<L>,
    pool: &[Word<L>],
    candidates: &[Word<L>],
) -> Result<Scored<L>> {
    check_inputs(pool, candidates)?;

    let (sum_of_squares, word) = candidates
        .iter()
        .map(|guess| {
            histogram.populate(pool, guess);
            (histogram.sum_of_squares(), *guess)
        })
        .min()
        .ok_or(ContractViolation::EmptyCandidates)?;

    Ok(Scored {
        word,
        sum_of_squares,
        pool_size: pool.len(),
    })
}

/// [`best_guess`] with the pool itself as the candidate list
///
/// # Errors
/// Returns a contract violation if `pool` is empty.
pub fn best_guess_in_pool<const L: usize>(
    histogram: &mut Histogram<L>,
    pool: &[Word<L>],
) -> Result<Scored<L>> {
    best_guess(histogram, pool, pool)
}

/// Parallel [`best_guess`]
///
/// Each rayon worker gets its own histogram; the reduction uses the same
/// `(score, word)` ordering, so the result matches the sequential version.
///
/// # Errors
/// Returns a contract violation if `pool` or `candidates` is empty.
pub fn best_guess_parallel<const L: usize>(
    histogram: &Histogram<L>,
    pool: &[Word<L>],
    candidates: &[Word<L>],
) -> Result<Scored<L>> {
    check_inputs(pool, candidates)?;
    let rule = histogram.rule();

    let (sum_of_squares, word) = candidates
        .par_iter()
        .map_init(
            || Histogram::new(rule),
            |local, guess| {
                local.populate(pool, guess);
                (local.sum_of_squares(), *guess)
            },
        )
        .min()
        .ok_or(ContractViolation::EmptyCandidates)?;

    Ok(Scored {
        word,
        sum_of_squares,
        pool_size: pool.len(),
    })
}

fn check_inputs<const L: usize>(pool: &[Word<L>], candidates: &[Word<L>]) -> Result<()> {
    if pool.is_empty() {
        return Err(ContractViolation::EmptyPool.into());
    }
    if candidates.is_empty() {
        return Err(ContractViolation::EmptyCandidates.into());
    }
    Ok(())
}
