//! Game driver
//!
//! Runs guess → oracle → refine turns until the oracle answers with a perfect
//! pattern. An optional opening guess replaces the optimizer on turn one.

use super::histogram::Histogram;
use super::optimizer::best_guess_in_pool;
use super::oracle::Oracle;
use super::pool::refine;
use crate::core::{Feedback, Pattern, Word};
use crate::error::{ContractViolation, Result};

/// Solver state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Active,
    Solved,
}

/// One played turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn<const L: usize> {
    pub guess: Word<L>,
    pub pattern: Pattern,
    /// Candidates remaining before this guess was made
    pub pool_size: usize,
}

impl<const L: usize> Turn<L> {
    /// Per-position feedback for display
    #[must_use]
    pub fn feedback(&self) -> [Feedback; L] {
        self.pattern.decode::<L>()
    }
}

/// Ordered turn history of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport<const L: usize> {
    pub turns: Vec<Turn<L>>,
}

impl<const L: usize> GameReport<L> {
    /// Number of guesses used
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The word that received the perfect pattern
    #[must_use]
    pub fn solution(&self) -> Option<Word<L>> {
        self.turns
            .last()
            .filter(|turn| turn.pattern.is_perfect::<L>())
            .map(|turn| turn.guess)
    }
}

/// Single-game solver
///
/// Owns the shrinking pool and borrows the histogram for the whole game, so
/// no other evaluation can touch the buffer while a game is in progress.
pub struct Solver<'h, const L: usize> {
    histogram: &'h mut Histogram<L>,
    pool: Vec<Word<L>>,
    opening: Option<Word<L>>,
    history: Vec<Turn<L>>,
    state: State,
}

impl<'h, const L: usize> Solver<'h, L> {
    /// Start a game over `pool`
    ///
    /// # Errors
    /// Returns a contract violation if `pool` is empty.
    pub fn new(histogram: &'h mut Histogram<L>, pool: Vec<Word<L>>) -> Result<Self> {
        if pool.is_empty() {
            return Err(ContractViolation::EmptyPool.into());
        }
        Ok(Self::from_parts(histogram, pool))
    }

    /// Caller guarantees `pool` is non-empty
    pub(crate) fn from_parts(histogram: &'h mut Histogram<L>, pool: Vec<Word<L>>) -> Self {
        Self {
            histogram,
            pool,
            opening: None,
            history: Vec::new(),
            state: State::Active,
        }
    }

    /// Use `opening` as the first guess instead of running the optimizer
    #[must_use]
    pub fn with_opening(mut self, opening: Word<L>) -> Self {
        self.opening = Some(opening);
        self
    }

    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Words still consistent with every answer so far
    #[must_use]
    pub fn pool(&self) -> &[Word<L>] {
        &self.pool
    }

    #[must_use]
    pub fn history(&self) -> &[Turn<L>] {
        &self.history
    }

    /// Guess the next turn would make, without asking the oracle
    ///
    /// # Errors
    /// Returns a contract violation if the pool is empty.
    pub fn next_guess(&mut self) -> Result<Word<L>> {
        if let Some(opening) = self.opening {
            return Ok(opening);
        }
        Ok(best_guess_in_pool(self.histogram, &self.pool)?.word)
    }

    /// Play one turn
    ///
    /// Does nothing once solved.
    ///
    /// # Errors
    /// Returns `SolverError::Inconsistent` if the oracle's answer rules out
    /// every remaining word.
    pub fn step<O: Oracle<L> + ?Sized>(&mut self, oracle: &mut O) -> Result<State> {
        if self.state == State::Solved {
            return Ok(State::Solved);
        }

        let guess = self.next_guess()?;
        self.opening = None;

        let pattern = oracle.evaluate(&guess);
        let pool_size = self.pool.len();
        self.history.push(Turn {
            guess,
            pattern,
            pool_size,
        });

        log::debug!(
            "turn {}: {guess} -> {} ({pool_size} candidates)",
            self.history.len(),
            pattern.value()
        );

        if pattern.is_perfect::<L>() {
            self.state = State::Solved;
        } else {
            self.pool = refine(&self.pool, &guess, pattern, self.histogram.rule())?;
        }

        Ok(self.state)
    }

    /// Play turns until solved
    ///
    /// # Errors
    /// Propagates the first error from [`Solver::step`].
    pub fn play<O: Oracle<L> + ?Sized>(mut self, oracle: &mut O) -> Result<GameReport<L>> {
        while self.state() == State::Active {
            self.step(oracle)?;
        }
        Ok(GameReport {
            turns: self.history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rule;
    use crate::error::SolverError;
    use crate::solver::FixedTarget;

    fn words(list: &[&str]) -> Vec<Word<5>> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn sample_pool() -> Vec<Word<5>> {
        words(&[
            "crane", "crate", "slate", "irate", "grate", "trace", "raise", "arise", "stare",
            "roast", "toast", "beast",
        ])
    }

    /// Oracle that always claims nothing matched
    struct AllAbsent;

    impl Oracle<5> for AllAbsent {
        fn evaluate(&mut self, _guess: &Word<5>) -> Pattern {
            Pattern::new(0)
        }
    }

    #[test]
    fn solves_every_target() {
        let pool = sample_pool();
        let mut histogram = Histogram::new(Rule::Standard);

        for target in &pool {
            let mut oracle = FixedTarget::new(*target, Rule::Standard);
            let report = Solver::new(&mut histogram, pool.clone())
                .unwrap()
                .play(&mut oracle)
                .unwrap();

            assert_eq!(report.solution(), Some(*target));
            assert_eq!(report.len(), oracle.queries());
            assert_eq!(report.turns[0].pool_size, pool.len());
        }
    }

    #[test]
    fn pool_size_strictly_decreases() {
        let pool = sample_pool();
        let mut histogram = Histogram::new(Rule::Standard);
        let mut oracle = FixedTarget::new("toast".parse().unwrap(), Rule::Standard);

        let report = Solver::new(&mut histogram, pool)
            .unwrap()
            .play(&mut oracle)
            .unwrap();

        for pair in report.turns.windows(2) {
            assert!(pair[1].pool_size < pair[0].pool_size);
        }
    }

    #[test]
    fn singleton_pool_takes_one_turn() {
        let mut histogram = Histogram::new(Rule::Standard);
        let target: Word<5> = "rebus".parse().unwrap();
        let mut oracle = FixedTarget::new(target, Rule::Standard);

        let report = Solver::new(&mut histogram, vec![target])
            .unwrap()
            .play(&mut oracle)
            .unwrap();

        assert_eq!(report.len(), 1);
        assert_eq!(report.turns[0].pool_size, 1);
        assert_eq!(report.turns[0].feedback(), [Feedback::Exact; 5]);
    }

    #[test]
    fn opening_guess_used_first() {
        let pool = sample_pool();
        let mut histogram = Histogram::new(Rule::Standard);
        let opening: Word<5> = "zzzzz".parse().unwrap();
        let mut oracle = FixedTarget::new("crane".parse().unwrap(), Rule::Standard);

        let report = Solver::new(&mut histogram, pool)
            .unwrap()
            .with_opening(opening)
            .play(&mut oracle)
            .unwrap();

        assert_eq!(report.turns[0].guess, opening);
        assert_eq!(report.solution(), Some("crane".parse().unwrap()));
    }

    #[test]
    fn step_after_solved_is_noop() {
        let target: Word<5> = "crane".parse().unwrap();
        let mut histogram = Histogram::new(Rule::Standard);
        let mut oracle = FixedTarget::new(target, Rule::Standard);

        let mut solver = Solver::new(&mut histogram, vec![target]).unwrap();
        assert_eq!(solver.state(), State::Active);
        assert_eq!(solver.step(&mut oracle).unwrap(), State::Solved);
        assert_eq!(solver.state(), State::Solved);
        assert_eq!(solver.step(&mut oracle).unwrap(), State::Solved);
        assert_eq!(solver.history().len(), 1);
        assert_eq!(oracle.queries(), 1);
    }

    #[test]
    fn empty_pool_rejected() {
        let mut histogram = Histogram::<5>::new(Rule::Standard);
        let err = Solver::new(&mut histogram, Vec::new()).err().unwrap();
        assert_eq!(err, SolverError::Contract(ContractViolation::EmptyPool));
    }

    #[test]
    fn lying_oracle_fails_fast() {
        let mut histogram = Histogram::new(Rule::Standard);
        let mut oracle = AllAbsent;

        // Every pool word shares letters with every other, so all-absent is impossible
        let err = Solver::new(&mut histogram, sample_pool())
            .unwrap()
            .play(&mut oracle)
            .unwrap_err();

        assert!(matches!(err, SolverError::Inconsistent { pool_size: 12, .. }));
    }

    #[test]
    fn target_outside_pool_is_inconsistent() {
        let mut histogram = Histogram::new(Rule::Standard);
        let mut oracle = FixedTarget::new("fuzzy".parse().unwrap(), Rule::Standard);

        let err = Solver::new(&mut histogram, words(&["crane", "crate"]))
            .unwrap()
            .play(&mut oracle)
            .unwrap_err();

        assert!(!err.is_contract_violation());
    }
}
