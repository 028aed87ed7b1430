//! Formatting utilities for terminal output

use crate::core::Feedback;

/// Render per-position feedback as tiles
#[must_use]
pub fn feedback_to_tiles(feedback: &[Feedback]) -> String {
    feedback.iter().map(|f| f.symbol()).collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
