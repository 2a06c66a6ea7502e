//! Sqlike - SQL-like queries over in-memory Rust collections.
//!
//! Sqlike wraps a collection, filters it through composable predicates
//! ("where") and sorts the result by one or more keys ("order by"), without
//! a database. It supports:
//!
//! - Element-level predicates for bare values (`Option<&str>`, numbers, ...)
//! - Attribute-scoped predicates on named fields of structs
//! - `and` / `or` / `not` combinators with arbitrary nesting
//! - Multi-key stable ordering with explicit null placement
//! - Row views reading fields by column name
//!
//! # Quick Start
//!
//! ```rust
//! use sqlike::{asc, desc, not, select_from, Attribute, SqlLikeCollection, Value};
//!
//! struct Person {
//!     name: Option<String>,
//!     age: u32,
//! }
//!
//! fn name(p: &Person) -> Value<'_> {
//!     p.name.as_deref().into()
//! }
//!
//! fn age(p: &Person) -> Value<'_> {
//!     p.age.into()
//! }
//!
//! let people = vec![
//!     Person { name: Some("n2".into()), age: 2 },
//!     Person { name: Some("n1".into()), age: 1 },
//!     Person { name: None, age: 9 },
//!     Person { name: Some("n3".into()), age: 1 },
//! ];
//!
//! let name = Attribute::new("name", name);
//! let age = Attribute::new("age", age);
//!
//! let result = select_from(&people)
//!     .filter(not(name.is_null()))
//!     .order_by(&[desc(age), asc(name)]);
//!
//! let names: Vec<_> = result.iter().filter_map(|p| p.name.as_deref()).collect();
//! assert_eq!(names, ["n2", "n1", "n3"]);
//! assert_eq!(result.len(), 3);
//! ```
//!
//! # Null Semantics
//!
//! A null element (or a null attribute) fails every predicate except
//! [`is_null`], `equals(None)` and [`is_in`] over a set containing `None`.
//! Ordering and string predicates never match null. Sorting places nulls
//! first for ascending keys and last for descending keys unless
//! [`OrderBy::nulls_first`] / [`OrderBy::nulls_last`] says otherwise.
//!
//! # Errors
//!
//! Misconfiguration fails when a predicate is built, never when it is
//! evaluated: ordering predicates reject a null bound, [`equals`] and the
//! ordering predicates reject a set or pattern operand, and
//! [`string_matches`] rejects an invalid pattern. See [`SqlikeError`].

mod attribute;
mod entry;
mod error;
mod op;
mod ordering;
mod predicate;
mod query;
mod traits;
mod value;

// Re-export public API
pub use attribute::{Attribute, Getter};
pub use entry::{Columns, Entry};
pub use error::{Result, SqlikeError};
pub use op::Op;
pub use ordering::{
    asc, compare_by_orderings, compare_values, desc, sort_values, Dir, NullOrder, OrderBy,
    ValueComparator,
};
pub use predicate::{
    always_false, always_true, and, empty_string, equals, greater_than, greater_than_or_equals,
    is_in, is_null, less_than, less_than_or_equals, not, or, string_contains, string_ends_with,
    string_equals, string_follows, string_matches, string_precedes, string_starts_with, Predicate,
    Test,
};
pub use query::{select_from, QueryableCollection, QueryableList};
pub use traits::{AsValue, OrderBySupport, SqlLikeCollection, WhereSupport};
pub use value::{Number, Operand, Value};
