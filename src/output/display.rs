//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_tiles};
use crate::commands::{AnalysisResult, SolveResult, TestAllStatistics};
use crate::solver::Scored;
use colored::Colorize;

/// Print the cached opening guess
pub fn print_opening<const L: usize>(opening: &Scored<L>) {
    let word = opening.word.to_string().to_uppercase();
    let expected = format!("{:.2} expected remaining", opening.expected_size());
    println!(
        "Opening guess: {} ({} over {} words)",
        word.bright_yellow().bold(),
        expected.green(),
        opening.pool_size
    );
}

/// Print the result of solving a word
pub fn print_solve_result<const L: usize>(result: &SolveResult<L>, verbose: bool) {
    let target = result.target.to_string().to_uppercase();
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let word = step.word.to_string().to_uppercase();
        let tiles = feedback_to_tiles(&step.pattern.decode::<L>());
        println!("\nTurn {}: {word} {tiles}", i + 1);

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Expected:   {:.2} candidates", step.expected_remaining);
        }
    }

    let solved = format!("✅ Solved in {} guesses!", result.num_guesses());
    println!();
    println!("{}", solved.green().bold());
}

/// Print the result of word analysis
pub fn print_analysis_result<const L: usize>(result: &AnalysisResult<L>) {
    let word = result.word.to_string().to_uppercase();
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "PARTITION ANALYSIS:".bright_cyan().bold(),
        word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let partitions = result.partitions as f64;
    let bar = create_progress_bar(partitions, result.total_candidates as f64, 30);
    let expected = format!("{:.2} candidates remain", result.expected_remaining);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!("   Expected:    {}", expected.bright_yellow());
    println!("   Partitions:  [{}] {}", bar.green(), result.partitions);
    println!("   Worst case:  {} candidates", result.max_partition);
    if result.is_opening {
        println!("   {}", "This is the optimal opening guess".green().bold());
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    let average = format!("{:.3}", stats.average_guesses);
    let total_secs = stats.total_time.as_secs_f64();

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total words tested:  {}", stats.total_words);
    println!("  Opening guess:       {}", stats.opening.to_uppercase());
    println!("  Average guesses:     {}", average.bright_yellow().bold());
    println!(
        "  Best / worst:        {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!("  Total time:          {total_secs:.2}s");
    if stats.total_words > 0 {
        let per_word = total_secs * 1000.0 / stats.total_words as f64;
        println!("  Time per word:       {per_word:.1}ms");
    }

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let distribution = &stats.guess_distribution;
    let max_count = distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=stats.max_guesses {
        let count = distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.total_words as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(usize::from(count > 0));
        let filled = "█".repeat(bar_len);
        let empty = "░".repeat(40_usize.saturating_sub(bar_len));
        let bar = format!("{}{}", filled.green(), empty.bright_black());
        println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            let word = word.to_uppercase();
            println!("  {} ({guesses} guesses)", word.yellow());
        }
    }
}
