//! Guess selection and game play
//!
//! Leaves first: partition counting, pool refinement, the expected-size
//! optimizer, oracles, the per-game driver, and the dictionary-wide context.

mod context;
mod engine;
mod histogram;
mod optimizer;
mod oracle;
mod pool;

pub use context::{GameConfig, GameContext};
pub use engine::{GameReport, Solver, State, Turn};
pub use histogram::Histogram;
pub use optimizer::{Scored, best_guess, best_guess_in_pool, best_guess_parallel, expected_size};
pub use oracle::{FixedTarget, Oracle};
pub use pool::{refine, refine_with};
