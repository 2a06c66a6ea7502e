//! Capability traits.
//!
//! [`AsValue`] lets bare elements (strings, numbers, options of those) be
//! tested directly, without an [`Attribute`](crate::Attribute). The other
//! traits split the query surface into independent capabilities:
//!
//! - [`SqlLikeCollection`]: read-only view (length, iteration, indexing)
//! - [`WhereSupport`]: filtering by a [`Predicate`]
//! - [`OrderBySupport`]: sorting by [`OrderBy`] specifications
//!
//! [`QueryableCollection`](crate::QueryableCollection) implements all three;
//! [`QueryableList`](crate::QueryableList) is read-only.

use crate::ordering::OrderBy;
use crate::predicate::Predicate;
use crate::value::{Number, Value};

/// Trait for element types that can be compared as a whole.
///
/// Implemented for strings, booleans, numbers, references and `Option`s of
/// those; `None` reads as [`Value::Null`].
///
/// # Manual Implementation
///
/// ```
/// use sqlike::{AsValue, Value};
///
/// struct Tag(String);
///
/// impl AsValue for Tag {
///     fn as_value(&self) -> Value<'_> {
///         Value::String(&self.0)
///     }
/// }
///
/// assert_eq!(Tag("x".into()).as_value(), Value::String("x"));
/// ```
pub trait AsValue {
    /// Returns this element as a runtime value.
    fn as_value(&self) -> Value<'_>;
}

impl AsValue for str {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for String {
    fn as_value(&self) -> Value<'_> {
        Value::String(self)
    }
}

impl AsValue for bool {
    fn as_value(&self) -> Value<'_> {
        Value::Bool(*self)
    }
}

impl AsValue for Value<'_> {
    fn as_value(&self) -> Value<'_> {
        *self
    }
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue + ?Sized> AsValue for Box<T> {
    fn as_value(&self) -> Value<'_> {
        (**self).as_value()
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn as_value(&self) -> Value<'_> {
        match self {
            Some(v) => v.as_value(),
            None => Value::Null,
        }
    }
}

macro_rules! impl_as_value_number {
    ($($t:ty),*) => {
        $(
            impl AsValue for $t {
                fn as_value(&self) -> Value<'_> {
                    Value::Number(Number::from(*self))
                }
            }
        )*
    };
}

impl_as_value_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Read-only access to the current rows of a query.
pub trait SqlLikeCollection<'a, E: 'a> {
    /// Returns the rows in their current order.
    fn rows(&self) -> &[&'a E];

    /// Number of rows.
    fn len(&self) -> usize {
        self.rows().len()
    }

    /// Returns `true` if there are no rows.
    fn is_empty(&self) -> bool {
        self.rows().is_empty()
    }

    /// Returns the row at `index`, if any.
    fn get(&self, index: usize) -> Option<&'a E> {
        self.rows().get(index).copied()
    }

    /// Materializes the rows as references in their current order.
    fn to_vec(&self) -> Vec<&'a E> {
        self.rows().to_vec()
    }

    /// Materializes the rows as owned clones in their current order.
    fn cloned(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.rows().iter().map(|row| (*row).clone()).collect()
    }
}

/// Filtering capability.
pub trait WhereSupport<E> {
    /// Collection type returned by a filter.
    type Output;

    /// Keeps exactly the rows the predicate accepts, preserving order.
    #[doc(alias = "where")]
    fn filter(&self, predicate: Predicate<E>) -> Self::Output;
}

/// Ordering capability.
pub trait OrderBySupport<E> {
    /// Ordered collection type.
    type Output;

    /// Stable multi-key sort; an empty spec list keeps the current order.
    fn order_by(&self, specs: &[OrderBy<E>]) -> Self::Output;
}
