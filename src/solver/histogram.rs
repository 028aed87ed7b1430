//! Partition counting
//!
//! For a fixed guess, counts how many pool members land in each feedback
//! pattern. `counts[c]` is both the number of targets producing `c` and the
//! size of the pool after observing `c`.

use crate::core::{Pattern, Rule, Word, pattern_space};

/// Reusable per-pattern counter buffer of length `3^L`
///
/// Allocated once and repopulated in place for every evaluated guess.
#[derive(Debug, Clone)]
pub struct Histogram<const L: usize> {
    counts: Vec<u32>,
    rule: Rule,
}

impl<const L: usize> Histogram<L> {
    /// Allocate a zeroed histogram scored with `rule`
    #[must_use]
    pub fn new(rule: Rule) -> Self {
        Self {
            counts: vec![0; pattern_space(L)],
            rule,
        }
    }

    /// Rule used to score guesses against pool members
    #[inline]
    #[must_use]
    pub const fn rule(&self) -> Rule {
        self.rule
    }

    /// Reset and count the pattern of `guess` against every pool member
    ///
    /// # Examples
    /// ```
    /// use wordle_expected::core::{Rule, Word};
    /// use wordle_expected::solver::Histogram;
    ///
    /// let pool: Vec<Word<5>> = ["crane", "crate", "slate"]
    ///     .iter()
    ///     .map(|s| s.parse().unwrap())
    ///     .collect();
    ///
    /// let mut histogram = Histogram::new(Rule::Standard);
    /// histogram.populate(&pool, &pool[0]);
    /// assert_eq!(histogram.sum(), 3);
    /// ```
    pub fn populate(&mut self, pool: &[Word<L>], guess: &Word<L>) {
        self.counts.fill(0);
        for member in pool {
            self.counts[self.rule.encode(guess, member).index()] += 1;
        }
    }

    /// Count recorded for one pattern
    #[inline]
    #[must_use]
    pub fn get(&self, pattern: Pattern) -> u32 {
        self.counts[pattern.index()]
    }

    /// Raw counts indexed by pattern value
    #[inline]
    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Total of all counts; equals the pool size after `populate`
    #[must_use]
    pub fn sum(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    /// `Σ counts²`, the expected pool size scaled by the pool size
    #[inline]
    #[must_use]
    pub fn sum_of_squares(&self) -> u64 {
        self.counts
            .iter()
            .map(|&c| u64::from(c) * u64::from(c))
            .sum()
    }

    /// Number of non-empty partitions
    #[must_use]
    pub fn partitions(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Largest partition (worst-case pool size after the guess)
    #[must_use]
    pub fn max_partition(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word<5>> {
        list.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn histogram_has_one_slot_per_pattern() {
        let histogram = Histogram::<5>::new(Rule::Standard);
        assert_eq!(histogram.counts().len(), 243);
        assert_eq!(histogram.sum(), 0);
    }

    #[test]
    fn populate_sums_to_pool_size() {
        let pool = words(&["crane", "crate", "slate", "irate", "grate", "trace"]);
        let mut histogram = Histogram::new(Rule::Standard);

        for guess in &pool {
            histogram.populate(&pool, guess);
            assert_eq!(histogram.sum(), pool.len());
            assert_eq!(histogram.get(Pattern::perfect::<5>()), 1);
        }
    }

    #[test]
    fn populate_resets_between_guesses() {
        let pool = words(&["aaaaa", "bbbbb", "ccccc"]);
        let mut histogram = Histogram::new(Rule::Standard);

        histogram.populate(&pool, &"zzzzz".parse().unwrap());
        assert_eq!(histogram.get(Pattern::new(0)), 3);
        assert_eq!(histogram.partitions(), 1);
        assert_eq!(histogram.max_partition(), 3);

        histogram.populate(&pool, &pool[0]);
        assert_eq!(histogram.get(Pattern::new(0)), 2);
        assert_eq!(histogram.partitions(), 2);
        assert_eq!(histogram.sum(), 3);
    }

    #[test]
    fn sum_of_squares_matches_counts() {
        let pool = words(&["aaaaa", "bbbbb", "ccccc"]);
        let mut histogram = Histogram::new(Rule::Standard);

        histogram.populate(&pool, &pool[0]);
        // partitions of size 1 (perfect) and 2 (all absent)
        assert_eq!(histogram.sum_of_squares(), 1 + 4);
    }

    #[test]
    fn rule_changes_partition() {
        // GEESE against THOSE lands in a different slot under each rule
        let pool = words(&["those"]);
        let guess: Word<5> = "geese".parse().unwrap();

        let mut standard = Histogram::new(Rule::Standard);
        standard.populate(&pool, &guess);
        assert_eq!(standard.get(Pattern::new(8)), 1);

        let mut membership = Histogram::new(Rule::Membership);
        membership.populate(&pool, &guess);
        assert_eq!(membership.get(Pattern::new(44)), 1);
    }
}
