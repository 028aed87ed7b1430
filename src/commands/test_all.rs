//! Test all answers - comprehensive solver evaluation
//!
//! Plays every dictionary word as the hidden target from one shared context,
//! so the opening guess is computed only once for the whole run.

use crate::error::Result;
use crate::solver::GameContext;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub opening: String,
    pub hardest_words: Vec<(String, usize)>,
}

/// Run the solver on every dictionary word (or the first `limit` of them)
///
/// Set `show_progress` to draw an indicatif bar on stderr.
///
/// # Errors
///
/// Returns the first solver error; with an honest oracle over its own
/// dictionary this only happens on a bug.
pub fn run_test_all<const L: usize>(
    context: &mut GameContext<L>,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<TestAllStatistics> {
    let targets: Vec<_> = context
        .dictionary()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .copied()
        .collect();

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut counts: Vec<(String, usize)> = Vec::with_capacity(targets.len());
    let total_start = Instant::now();

    for (idx, target) in targets.iter().enumerate() {
        let report = context.play_target(*target)?;
        let num_guesses = report.len();

        *guess_distribution.entry(num_guesses).or_insert(0) += 1;
        counts.push((target.to_string(), num_guesses));

        if idx % 10 == 0 {
            let avg = counts.iter().map(|(_, n)| n).sum::<usize>() as f64 / counts.len() as f64;
            pb.set_message(format!("Avg: {avg:.3}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let total_time = total_start.elapsed();

    let total_guesses: usize = counts.iter().map(|(_, n)| n).sum();
    let average_guesses = if counts.is_empty() {
        0.0
    } else {
        total_guesses as f64 / counts.len() as f64
    };
    let max_guesses = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
    let min_guesses = counts.iter().map(|(_, n)| *n).min().unwrap_or(0);

    let mut hardest_words = counts.clone();
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    log::info!(
        "tested {} words, average {average_guesses:.3} guesses",
        counts.len()
    );

    Ok(TestAllStatistics {
        total_words: counts.len(),
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        opening: context.opening().word.to_string(),
        hardest_words,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::GameConfig;

    const WORDS: &[&str] = &[
        "crane", "crate", "slate", "irate", "grate", "trace", "raise", "arise", "stare", "roast",
        "toast", "beast", "speed", "abide", "geese", "those",
    ];

    fn context() -> GameContext<5> {
        GameContext::from_strs(WORDS, GameConfig::default()).unwrap()
    }

    #[test]
    fn test_all_covers_dictionary() {
        let mut context = context();
        let stats = run_test_all(&mut context, None, false).unwrap();

        assert_eq!(stats.total_words, WORDS.len());
        let tested: usize = stats.guess_distribution.values().sum();
        assert_eq!(tested, WORDS.len());
        assert!(stats.min_guesses >= 1);
        assert!(stats.average_guesses >= stats.min_guesses as f64);
        assert!(stats.average_guesses <= stats.max_guesses as f64);
        // Only the opening word itself can be solved in one guess
        assert_eq!(stats.guess_distribution.get(&1).copied(), Some(1));
    }

    #[test]
    fn test_all_respects_limit() {
        let mut context = context();
        let stats = run_test_all(&mut context, Some(4), false).unwrap();
        assert_eq!(stats.total_words, 4);
        assert!(stats.hardest_words.len() <= 4);
    }

    #[test]
    fn test_all_hardest_sorted() {
        let mut context = context();
        let stats = run_test_all(&mut context, None, false).unwrap();

        for pair in stats.hardest_words.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
        assert_eq!(stats.hardest_words[0].1, stats.max_guesses);
    }
}
