//! Operators of atomic predicates.
//!
//! The [`Op`] enum names the test a leaf predicate performs. Not all
//! operators accept all value types; a mismatch never matches.

use std::cmp::Ordering;

/// Operator of an atomic predicate.
///
/// Operators are grouped by the values they test:
/// - **Universal**: `IsNull`, `Eq`, `In`
/// - **Ordering**: `Gt`, `Gte`, `Lt`, `Lte` (never match null)
/// - **String**: `Matches`, `StartsWith`, `EndsWith`, `Contains`,
///   `Follows`, `Precedes`, `IsEmpty` (never match null or non-strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    // Universal operators
    /// Value is null.
    IsNull,
    /// Equal, with numeric coercion. Null equals null.
    Eq,
    /// Value is one of a set; a null in the set matches null values.
    In,

    // Ordering operators
    /// Greater than.
    Gt,
    /// Greater than or equal.
    Gte,
    /// Less than.
    Lt,
    /// Less than or equal.
    Lte,

    // String operators
    /// String fully matches a regular expression.
    Matches,
    /// String starts with prefix.
    StartsWith,
    /// String ends with suffix.
    EndsWith,
    /// String contains substring.
    Contains,
    /// String sorts strictly after the operand.
    Follows,
    /// String sorts strictly before the operand.
    Precedes,
    /// String is empty.
    IsEmpty,
}

impl Op {
    /// Returns `true` for the ordering operators.
    pub fn is_ordering_op(self) -> bool {
        matches!(self, Op::Gt | Op::Gte | Op::Lt | Op::Lte)
    }

    /// Returns `true` for operators that only apply to strings.
    pub fn is_string_op(self) -> bool {
        matches!(
            self,
            Op::Matches
                | Op::StartsWith
                | Op::EndsWith
                | Op::Contains
                | Op::Follows
                | Op::Precedes
                | Op::IsEmpty
        )
    }

    /// Evaluates an ordering operator given a comparison result.
    ///
    /// `Follows` and `Precedes` behave as `Gt` and `Lt`.
    pub fn eval_ordering(self, ordering: Ordering) -> bool {
        match self {
            Op::Gt | Op::Follows => ordering == Ordering::Greater,
            Op::Gte => ordering != Ordering::Less,
            Op::Lt | Op::Precedes => ordering == Ordering::Less,
            Op::Lte => ordering != Ordering::Greater,
            _ => false,
        }
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::IsNull => "is null",
            Op::Eq => "=",
            Op::In => "in",
            Op::Gt => ">",
            Op::Gte => ">=",
            Op::Lt => "<",
            Op::Lte => "<=",
            Op::Matches => "matches",
            Op::StartsWith => "starts with",
            Op::EndsWith => "ends with",
            Op::Contains => "contains",
            Op::Follows => "follows",
            Op::Precedes => "precedes",
            Op::IsEmpty => "is empty",
        }
    }

    /// Returns `true` for operators that take no operand.
    pub fn is_unary(self) -> bool {
        matches!(self, Op::IsNull | Op::IsEmpty)
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
