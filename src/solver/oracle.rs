//! Oracles hide the target word and answer guesses with feedback

use crate::core::{Pattern, Rule, Word};
use crate::error::{ContractViolation, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Anything that can score a guess against a hidden target
pub trait Oracle<const L: usize> {
    /// Feedback for `guess`
    fn evaluate(&mut self, guess: &Word<L>) -> Pattern;
}

/// Oracle backed by a known target word
#[derive(Debug, Clone)]
pub struct FixedTarget<const L: usize> {
    target: Word<L>,
    rule: Rule,
    queries: usize,
}

impl<const L: usize> FixedTarget<L> {
    #[must_use]
    pub const fn new(target: Word<L>, rule: Rule) -> Self {
        Self {
            target,
            rule,
            queries: 0,
        }
    }

    /// Draw the target uniformly at random from `words`
    ///
    /// # Errors
    /// Returns a contract violation if `words` is empty.
    pub fn random<R: Rng + ?Sized>(words: &[Word<L>], rule: Rule, rng: &mut R) -> Result<Self> {
        let target = words.choose(rng).ok_or(ContractViolation::EmptyDictionary)?;
        Ok(Self::new(*target, rule))
    }

    /// Number of guesses evaluated so far
    #[must_use]
    pub const fn queries(&self) -> usize {
        self.queries
    }

    /// Reveal the hidden target (for reporting after the game)
    #[must_use]
    pub const fn target(&self) -> &Word<L> {
        &self.target
    }
}

impl<const L: usize> Oracle<L> for FixedTarget<L> {
    fn evaluate(&mut self, guess: &Word<L>) -> Pattern {
        self.queries += 1;
        self.rule.encode(guess, &self.target)
    }
}
