//! Candidate pool refinement

use super::oracle::Oracle;
use crate::core::{Pattern, Rule, Word};
use crate::error::{Result, SolverError};

/// Keep the pool members that would have produced `pattern` for `guess`
///
/// # Errors
/// Returns `SolverError::Inconsistent` if no member survives, which means the
/// feedback cannot come from any word in the pool.
///
/// # Examples
/// ```
/// use wordle_expected::core::{Pattern, Rule, Word};
/// use wordle_expected::solver::refine;
///
/// let pool: Vec<Word<5>> = ["crane", "crate", "slate"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let guess = Word::new("trace").unwrap();
/// let pattern = Pattern::calculate(&guess, &pool[1]);
///
/// let refined = refine(&pool, &guess, pattern, Rule::Standard).unwrap();
/// assert!(refined.contains(&pool[1]));
/// ```
pub fn refine<const L: usize>(
    pool: &[Word<L>],
    guess: &Word<L>,
    pattern: Pattern,
    rule: Rule,
) -> Result<Vec<Word<L>>> {
    let refined: Vec<Word<L>> = pool
        .iter()
        .filter(|&member| rule.encode(guess, member) == pattern)
        .copied()
        .collect();

    log::trace!(
        "refine {guess} / {}: {} -> {} candidates",
        pattern.value(),
        pool.len(),
        refined.len()
    );

    if refined.is_empty() {
        return Err(SolverError::Inconsistent {
            guess: guess.to_string(),
            pattern,
            pool_size: pool.len(),
        });
    }

    Ok(refined)
}

/// Ask the oracle once about `guess` and refine with its answer
///
/// Returns the refined pool together with the observed pattern.
///
/// # Errors
/// Same as [`refine`].
pub fn refine_with<const L: usize, O: Oracle<L> + ?Sized>(
    pool: &[Word<L>],
    guess: &Word<L>,
    oracle: &mut O,
    rule: Rule,
) -> Result<(Vec<Word<L>>, Pattern)> {
    let pattern = oracle.evaluate(guess);
    let refined = refine(pool, guess, pattern, rule)?;
    Ok((refined, pattern))
}
