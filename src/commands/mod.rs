//! Command implementations

pub mod analyze;
pub mod solve;
pub mod test_all;

pub use analyze::{AnalysisResult, analyze_word};
pub use solve::{GuessStep, SolveResult, solve_random, solve_word};
pub use test_all::{TestAllStatistics, run_test_all};
