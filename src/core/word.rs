//! Fixed-length word representation
//!
//! A `Word<L>` is a plain `[u8; L]` so it can be copied around freely in the
//! innermost loops of the optimizer without touching the heap.

use std::fmt::{self, Write as _};

/// Longest supported word length.
///
/// The histogram holds `3^L` counters, so this caps it at 531,441 entries.
pub const MAX_WORD_LEN: usize = 12;

/// A word of exactly `L` ASCII lowercase letters or digits
///
/// Ordering is lexicographic over the bytes and serves as the canonical
/// candidate order for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word<const L: usize>([u8; L]);

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, found: usize },
    InvalidSymbol(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => {
                write!(f, "word must be exactly {expected} symbols, got {found}")
            }
            Self::InvalidSymbol(c) => {
                write!(
                    f,
                    "word contains invalid symbol {c:?} (expected a-z or 0-9)"
                )
            }
        }
    }
}

impl std::error::Error for WordError {}

impl<const L: usize> Word<L> {
    /// Create a new word from text, lowercasing it first
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly `L` symbols long or
    /// contains anything other than ASCII letters and digits.
    ///
    /// # Examples
    /// ```
    /// use wordle_expected::core::Word;
    ///
    /// let word = Word::<5>::new("CRANE").unwrap();
    /// assert_eq!(word.to_string(), "crane");
    ///
    /// assert!(Word::<5>::new("cranes").is_err());
    /// assert!(Word::<5>::new("cr-ne").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        const { assert!(L > 0 && L <= MAX_WORD_LEN, "word length out of range") };

        let found = text.chars().count();
        if found != L {
            return Err(WordError::InvalidLength { expected: L, found });
        }

        let mut bytes = [0u8; L];
        for (slot, ch) in bytes.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_alphanumeric() {
                return Err(WordError::InvalidSymbol(ch));
            }
            *slot = ch.to_ascii_lowercase() as u8;
        }

        Ok(Self(bytes))
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; L] {
        &self.0
    }

    /// Check if the word contains a specific symbol anywhere
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: u8) -> bool {
        self.0.contains(&symbol)
    }
}

impl<const L: usize> fmt::Display for Word<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            f.write_char(char::from(b))?;
        }
        Ok(())
    }
}

impl<const L: usize> std::str::FromStr for Word<L> {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::<5>::new("crane").unwrap();
        assert_eq!(word.bytes(), b"crane");
        assert_eq!(word.to_string(), "crane");
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::<5>::new("CrAnE").unwrap();
        assert_eq!(word, Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_digits() {
        let word = Word::<4>::new("1a2b").unwrap();
        assert_eq!(word.to_string(), "1a2b");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::<5>::new("toolong"),
            Err(WordError::InvalidLength {
                expected: 5,
                found: 7
            })
        );
        assert_eq!(
            Word::<5>::new(""),
            Err(WordError::InvalidLength {
                expected: 5,
                found: 0
            })
        );
    }

    #[test]
    fn word_creation_invalid_symbols() {
        assert_eq!(Word::<5>::new("cran "), Err(WordError::InvalidSymbol(' ')));
        assert_eq!(Word::<5>::new("cran!"), Err(WordError::InvalidSymbol('!')));
        // Multi-byte characters count as one symbol, then fail validation
        assert_eq!(Word::<5>::new("cranë"), Err(WordError::InvalidSymbol('ë')));
    }

    #[test]
    fn word_contains() {
        let word = Word::<5>::new("speed").unwrap();
        assert!(word.contains(b'e'));
        assert!(word.contains(b'd'));
        assert!(!word.contains(b'z'));
    }

    #[test]
    fn word_ordering_is_lexicographic() {
        let mut words: Vec<Word<5>> = ["slate", "crane", "crate", "arise"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        words.sort();
        let text: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(text, ["arise", "crane", "crate", "slate"]);
    }

    #[test]
    fn word_is_stack_sized() {
        assert_eq!(std::mem::size_of::<Word<5>>(), 5);
    }
}
