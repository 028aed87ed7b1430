//! Error types for the solver core
//!
//! Both kinds are fatal: the core has no transient failure source, so nothing
//! here is retried.

use crate::core::{Pattern, WordError};
use std::fmt;

/// A caller broke a precondition of the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    /// A word failed validation
    Word(WordError),
    /// The optimizer or solver was handed an empty pool
    EmptyPool,
    /// The optimizer was handed no candidate guesses
    EmptyCandidates,
    /// A dictionary with no words
    EmptyDictionary,
    /// A dictionary entry whose length differs from the rest
    NonUniformLength {
        index: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Word(e) => write!(f, "invalid word: {e}"),
            Self::EmptyPool => write!(f, "candidate pool is empty"),
            Self::EmptyCandidates => write!(f, "no candidate guesses to choose from"),
            Self::EmptyDictionary => write!(f, "dictionary is empty"),
            Self::NonUniformLength {
                index,
                expected,
                found,
            } => write!(
                f,
                "dictionary entry {index} has length {found}, expected {expected}"
            ),
        }
    }
}

/// Errors raised by the solver core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Caller-side precondition failure
    Contract(ContractViolation),
    /// The oracle answered with a pattern no pool member can produce,
    /// i.e. the oracle and the dictionary disagree
    Inconsistent {
        guess: String,
        pattern: Pattern,
        pool_size: usize,
    },
}

impl SolverError {
    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self, Self::Contract(_))
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contract(c) => write!(f, "contract violation: {c}"),
            Self::Inconsistent {
                guess,
                pattern,
                pool_size,
            } => write!(
                f,
                "oracle answered {} to '{guess}' but none of {pool_size} candidates fit",
                pattern.value()
            ),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Contract(ContractViolation::Word(e)) => Some(e),
            _ => None,
        }
    }
}

impl From<ContractViolation> for SolverError {
    fn from(value: ContractViolation) -> Self {
        Self::Contract(value)
    }
}

impl From<WordError> for SolverError {
    fn from(value: WordError) -> Self {
        Self::Contract(ContractViolation::Word(value))
    }
}

/// Result alias for the solver core
pub type Result<T> = std::result::Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_errors_become_contract_violations() {
        let err = SolverError::from(WordError::InvalidSymbol('!'));
        assert!(err.is_contract_violation());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn inconsistency_message_names_guess() {
        let err = SolverError::Inconsistent {
            guess: "crane".to_string(),
            pattern: Pattern::new(7),
            pool_size: 12,
        };
        assert!(!err.is_contract_violation());
        let msg = err.to_string();
        assert!(msg.contains("crane"));
        assert!(msg.contains("12"));
    }
}
