//! Word solving command
//!
//! Plays one game from a shared context and annotates every turn with the
//! expected and actual pool sizes.

use crate::core::{Pattern, Word};
use crate::error::Result;
use crate::solver::{GameContext, GameReport, expected_size, refine};
use rand::Rng;

/// Result of solving a word
pub struct SolveResult<const L: usize> {
    pub target: Word<L>,
    pub guesses: Vec<GuessStep<L>>,
}

impl<const L: usize> SolveResult<L> {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }
}

/// A single guess step in the solution
pub struct GuessStep<const L: usize> {
    pub word: Word<L>,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub expected_remaining: f64,
}

/// Solve a specific target word
///
/// # Errors
///
/// Returns an error if the target is not a valid word or the game ends
/// inconsistently (for example, the target is not in the dictionary).
pub fn solve_word<const L: usize>(
    context: &mut GameContext<L>,
    target: &str,
) -> Result<SolveResult<L>> {
    let target = Word::new(target)?;
    let report = context.play_target(target)?;
    annotate(context, target, &report)
}

/// Solve a target drawn uniformly from the dictionary
///
/// # Errors
///
/// Same as [`solve_word`].
pub fn solve_random<const L: usize, R: Rng + ?Sized>(
    context: &mut GameContext<L>,
    rng: &mut R,
) -> Result<SolveResult<L>> {
    let (target, report) = context.play_random(rng)?;
    annotate(context, target, &report)
}

/// Replay the report's pools to attach per-turn statistics
fn annotate<const L: usize>(
    context: &mut GameContext<L>,
    target: Word<L>,
    report: &GameReport<L>,
) -> Result<SolveResult<L>> {
    let rule = context.config().rule;
    let mut pool = context.dictionary().to_vec();
    let mut guesses = Vec::with_capacity(report.len());

    for turn in &report.turns {
        let expected_remaining = expected_size(context.histogram_mut(), &pool, &turn.guess)?;
        let candidates_after = if turn.pattern.is_perfect::<L>() {
            1
        } else {
            pool = refine(&pool, &turn.guess, turn.pattern, rule)?;
            pool.len()
        };

        guesses.push(GuessStep {
            word: turn.guess,
            pattern: turn.pattern,
            candidates_before: turn.pool_size,
            candidates_after,
            expected_remaining,
        });
    }

    Ok(SolveResult { target, guesses })
}
