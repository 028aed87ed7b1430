//! Word list loading utilities
//!
//! Reads one word per line. Length and symbol validation is left to
//! `GameContext::from_strs`, so malformed lists are reported instead of being
//! silently trimmed.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Lines are trimmed; blank lines and `#` comments are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_expected::wordlists::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_list(&content))
}

/// Split list text into words
#[must_use]
pub fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}
