//! Feedback pattern calculation and representation
//!
//! A pattern encodes the feedback from a guess as a base-3 number, most
//! significant digit first (position 0 is the most significant):
//! - 0 = Absent (letter not in word)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Exact (letter in correct position)
//!
//! For a word of length `L` the value lies in `0..3^L`.

use super::Word;

/// Number of outcome classes per position.
pub const BASE: u32 = 3;

/// Number of distinct patterns for words of length `len`
#[inline]
#[must_use]
pub const fn pattern_space(len: usize) -> usize {
    (BASE as usize).pow(len as u32)
}

/// Per-position feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Feedback {
    Absent = 0,
    Present = 1,
    Exact = 2,
}

impl Feedback {
    /// Base-3 digit for this outcome
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// Inverse of [`Feedback::digit`]; anything above 2 is not a digit.
    #[inline]
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Absent),
            1 => Some(Self::Present),
            2 => Some(Self::Exact),
            _ => None,
        }
    }

    /// Single-character tile used in turn histories
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Exact => '🟩',
        }
    }
}

/// How repeated letters in a guess are scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rule {
    /// Official game rule: exact matches are taken first, then each remaining
    /// target occurrence can mark at most one guessed occurrence as present,
    /// allocated left to right.
    #[default]
    Standard,
    /// A guessed letter is present whenever it occurs anywhere in the target,
    /// regardless of how many times it was already matched.
    Membership,
}

impl Rule {
    /// Calculate the pattern for `guess` when `target` is hidden
    ///
    /// # Examples
    /// ```
    /// use wordle_expected::core::{Rule, Word};
    ///
    /// let guess = Word::<5>::new("geese").unwrap();
    /// let target = Word::<5>::new("those").unwrap();
    ///
    /// // The two leading E's find no unmatched E left in THOSE
    /// assert_eq!(Rule::Standard.encode(&guess, &target).value(), 8);
    /// // Under the membership rule both are marked present
    /// assert_eq!(Rule::Membership.encode(&guess, &target).value(), 44);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::needless_range_loop)] // Index addresses guess, target and digits together
    pub fn encode<const L: usize>(self, guess: &Word<L>, target: &Word<L>) -> Pattern {
        let g = guess.bytes();
        let t = target.bytes();
        let mut digits = [Feedback::Absent; L];

        match self {
            Self::Membership => {
                for i in 0..L {
                    digits[i] = if g[i] == t[i] {
                        Feedback::Exact
                    } else if target.contains(g[i]) {
                        Feedback::Present
                    } else {
                        Feedback::Absent
                    };
                }
            }
            Self::Standard => {
                let mut used = [false; L];

                // First pass: exact matches claim their target slot
                for i in 0..L {
                    if g[i] == t[i] {
                        digits[i] = Feedback::Exact;
                        used[i] = true;
                    }
                }

                // Second pass: remaining letters claim the leftmost free slot
                for i in 0..L {
                    if digits[i] == Feedback::Exact {
                        continue;
                    }
                    if let Some(j) = (0..L).find(|&j| !used[j] && t[j] == g[i]) {
                        used[j] = true;
                        digits[i] = Feedback::Present;
                    }
                }
            }
        }

        Pattern::from_feedback(&digits)
    }
}

/// Feedback pattern for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern(u32);

impl Pattern {
    /// Create a pattern from a raw value
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw pattern value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Histogram slot for this pattern
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The all-exact pattern for words of length `L`
    #[inline]
    #[must_use]
    pub const fn perfect<const L: usize>() -> Self {
        Self(BASE.pow(L as u32) - 1)
    }

    /// Check if this is a perfect match for words of length `L`
    #[inline]
    #[must_use]
    pub const fn is_perfect<const L: usize>(self) -> bool {
        self.0 == Self::perfect::<L>().0
    }

    /// Calculate the pattern with the default [`Rule::Standard`]
    ///
    /// # Examples
    /// ```
    /// use wordle_expected::core::{Pattern, Word};
    ///
    /// let guess = Word::<5>::new("arise").unwrap();
    /// let target = Word::<5>::new("rebus").unwrap();
    ///
    /// // A(absent) R(present) I(absent) S(present) E(present)
    /// // 0×81 + 1×27 + 0×9 + 1×3 + 1 = 31
    /// assert_eq!(Pattern::calculate(&guess, &target).value(), 31);
    /// ```
    #[inline]
    #[must_use]
    pub fn calculate<const L: usize>(guess: &Word<L>, target: &Word<L>) -> Self {
        Rule::Standard.encode(guess, target)
    }

    /// Horner accumulation of per-position digits, first position most significant
    #[inline]
    #[must_use]
    pub fn from_feedback(feedback: &[Feedback]) -> Self {
        Self(
            feedback
                .iter()
                .fold(0, |code, f| code * BASE + u32::from(f.digit())),
        )
    }

    /// Split the value back into per-position feedback
    ///
    /// This inverts the digit layout of the encoding only; a pattern does not
    /// determine the words that produced it. Digits above position `L` are
    /// ignored.
    #[must_use]
    pub fn decode<const L: usize>(self) -> [Feedback; L] {
        let mut out = [Feedback::Absent; L];
        let mut val = self.0;

        for slot in out.iter_mut().rev() {
            *slot = u8::try_from(val % BASE)
                .ok()
                .and_then(Feedback::from_digit)
                .unwrap_or(Feedback::Absent);
            val /= BASE;
        }

        out
    }
}
