//! Error types for the sqlike crate.

use thiserror::Error;

/// Errors raised while building predicates, order specifications or reading
/// entry fields.
///
/// Evaluating a predicate never fails: null and mismatched values simply do
/// not match.
#[derive(Debug, Error)]
pub enum SqlikeError {
    /// A required constructor argument was missing or unusable.
    #[error("invalid argument '{what}': {reason}")]
    InvalidArgument {
        what: &'static str,
        reason: &'static str,
    },

    /// Invalid regular expression pattern.
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),

    /// A field holds a value that cannot be read as the requested type.
    #[error("type mismatch on field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// No column with the given name.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

impl SqlikeError {
    pub(crate) fn null_bound(what: &'static str) -> Self {
        log::trace!("rejecting null bound for {what}");
        SqlikeError::InvalidArgument {
            what,
            reason: "bound cannot be null",
        }
    }

    pub(crate) fn non_scalar(what: &'static str) -> Self {
        log::trace!("rejecting set or pattern operand for {what}");
        SqlikeError::InvalidArgument {
            what,
            reason: "operand must be a single value",
        }
    }
}

/// Result type for sqlike operations.
pub type Result<T> = std::result::Result<T, SqlikeError>;
