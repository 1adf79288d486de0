//! Error types for SQL fragment assembly.

use crate::builder::Phase;
use crate::fragment::IdentKind;

/// Errors raised while assembling or rendering a statement.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FreeSqlError {
    /// A table or column name was empty or blank.
    #[error("invalid {kind} identifier: {name:?}")]
    InvalidIdentifier {
        /// Whether a table or a column was being named.
        kind: IdentKind,
        /// The rejected raw name.
        name: String,
    },

    /// The token sequence cannot be rendered to balanced SQL.
    #[error("malformed fragment sequence: {reason}")]
    MalformedSequence {
        /// What was found unbalanced.
        reason: String,
    },

    /// A statement-shape call was made in the wrong phase (strict mode only).
    #[error("`{operation}` is not allowed after {phase}")]
    OutOfOrder {
        /// The rejected operation.
        operation: &'static str,
        /// The phase the builder was in.
        phase: Phase,
    },

    /// A dialect tag could not be recognized.
    #[error("unknown dialect: {0:?}")]
    UnknownDialect(String),
}

/// Result type for fragment assembly.
pub type Result<T> = std::result::Result<T, FreeSqlError>;
