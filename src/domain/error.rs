//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent malformed layout expressions.
/// Parsing and expansion are pure, so these are the only ways they fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input does not conform to the layout grammar.
    #[error("syntax error at position {position}: expected {expected}, found {found}")]
    Syntax {
        /// Byte offset into the layout string
        position: usize,
        expected: String,
        found: String,
    },

    /// A level carries a count that is neither a number nor a single letter.
    #[error("invalid count '{count}' for level '{name}': {reason}")]
    Expansion {
        name: String,
        count: String,
        reason: String,
    },
}

impl DomainError {
    /// Create a syntax error.
    pub fn syntax(position: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::Syntax { .. })
    }

    pub fn is_expansion(&self) -> bool {
        matches!(self, Self::Expansion { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
