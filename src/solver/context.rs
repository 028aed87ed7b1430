//! Dictionary-wide game context
//!
//! Computing the opening guess means scoring every dictionary word against the
//! whole dictionary, by far the most expensive call in a game. The context does
//! it once and replays the result on turn one of every game it starts.

use super::engine::{GameReport, Solver};
use super::histogram::Histogram;
use super::optimizer::{Scored, best_guess, best_guess_parallel};
use super::oracle::{FixedTarget, Oracle};
use crate::core::{Rule, Word};
use crate::error::{ContractViolation, Result};
use rand::Rng;
use std::time::Instant;

/// Settings shared by every game played from one context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Duplicate-letter scoring rule
    pub rule: Rule,
    /// Compute the opening guess with rayon
    pub parallel: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    #[must_use]
    pub const fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Immutable dictionary plus the cached opening guess and a shared histogram
pub struct GameContext<const L: usize> {
    dictionary: Vec<Word<L>>,
    opening: Scored<L>,
    histogram: Histogram<L>,
    config: GameConfig,
}

impl<const L: usize> GameContext<L> {
    /// Build a context, computing the opening guess over the whole dictionary
    ///
    /// The dictionary is sorted and de-duplicated first.
    ///
    /// # Errors
    /// Returns a contract violation if `words` is empty.
    pub fn new(mut words: Vec<Word<L>>, config: GameConfig) -> Result<Self> {
        words.sort_unstable();
        words.dedup();
        if words.is_empty() {
            return Err(ContractViolation::EmptyDictionary.into());
        }

        let mut histogram = Histogram::new(config.rule);

        log::info!(
            "computing opening guess over {} words ({:?} rule)",
            words.len(),
            config.rule
        );
        let start = Instant::now();
        let opening = if config.parallel {
            best_guess_parallel(&histogram, &words, &words)?
        } else {
            best_guess(&mut histogram, &words, &words)?
        };
        log::info!(
            "opening guess {} (expected {:.2} remaining) in {:.2?}",
            opening.word,
            opening.expected_size(),
            start.elapsed()
        );

        Ok(Self {
            dictionary: words,
            opening,
            histogram,
            config,
        })
    }

    /// Parse and validate a word list, then build a context
    ///
    /// # Errors
    /// Returns a contract violation if the list is empty, any entry's length
    /// differs from `L`, or an entry contains invalid symbols.
    ///
    /// # Examples
    /// ```
    /// use wordle_expected::solver::{GameConfig, GameContext};
    ///
    /// let context = GameContext::<5>::from_strs(
    ///     &["crane", "slate", "irate", "crate"],
    ///     GameConfig::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(context.dictionary().len(), 4);
    ///
    /// assert!(GameContext::<5>::from_strs(&["crane", "slates"], GameConfig::default()).is_err());
    /// ```
    pub fn from_strs<S: AsRef<str>>(words: &[S], config: GameConfig) -> Result<Self> {
        let parsed = words
            .iter()
            .enumerate()
            .map(|(index, text)| -> Result<Word<L>> {
                let text = text.as_ref();
                let found = text.chars().count();
                if found != L {
                    return Err(ContractViolation::NonUniformLength {
                        index,
                        expected: L,
                        found,
                    }
                    .into());
                }
                Ok(Word::new(text)?)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(parsed, config)
    }

    /// Sorted, de-duplicated dictionary
    #[must_use]
    pub fn dictionary(&self) -> &[Word<L>] {
        &self.dictionary
    }

    /// The cached opening guess with its score over the whole dictionary
    #[must_use]
    pub const fn opening(&self) -> &Scored<L> {
        &self.opening
    }

    #[must_use]
    pub const fn config(&self) -> GameConfig {
        self.config
    }

    /// Shared histogram, for one-off evaluations between games
    pub fn histogram_mut(&mut self) -> &mut Histogram<L> {
        &mut self.histogram
    }

    /// Dictionary and shared histogram borrowed together
    ///
    /// Lets a caller score guesses against the whole dictionary without
    /// copying it first.
    pub fn split_mut(&mut self) -> (&[Word<L>], &mut Histogram<L>) {
        (&self.dictionary, &mut self.histogram)
    }

    /// Start a fresh game over the full dictionary using the cached opening
    #[must_use]
    pub fn solver(&mut self) -> Solver<'_, L> {
        Solver::from_parts(&mut self.histogram, self.dictionary.clone())
            .with_opening(self.opening.word)
    }

    /// Play one game against `oracle`
    ///
    /// # Errors
    /// Returns `SolverError::Inconsistent` if the oracle disagrees with the
    /// dictionary.
    pub fn play<O: Oracle<L> + ?Sized>(&mut self, oracle: &mut O) -> Result<GameReport<L>> {
        self.solver().play(oracle)
    }

    /// Play one game against a known target
    ///
    /// # Errors
    /// Same as [`GameContext::play`]; a target outside the dictionary is
    /// eventually reported as inconsistent.
    pub fn play_target(&mut self, target: Word<L>) -> Result<GameReport<L>> {
        let mut oracle = FixedTarget::new(target, self.config.rule);
        self.play(&mut oracle)
    }

    /// Play one game against a target drawn uniformly from the dictionary
    ///
    /// Returns the hidden target along with the report.
    ///
    /// # Errors
    /// Same as [`GameContext::play`].
    pub fn play_random<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<(Word<L>, GameReport<L>)> {
        let mut oracle = FixedTarget::random(&self.dictionary, self.config.rule, rng)?;
        let report = self.play(&mut oracle)?;
        Ok((*oracle.target(), report))
    }
}
