//! Ordering types for sorting query results.
//!
//! Provides [`Dir`] for sort direction, [`NullOrder`] for null placement and
//! [`OrderBy`] for attribute-based sort keys.

use std::cmp::Ordering;
use std::fmt;

use crate::attribute::Attribute;
use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Applies this direction to an ordering.
    ///
    /// For `Asc`, returns the ordering unchanged.
    /// For `Desc`, reverses the ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Null placement when none is set explicitly: nulls sort as the lowest
    /// value, so first ascending and last descending.
    pub fn default_nulls(self) -> NullOrder {
        match self {
            Dir::Asc => NullOrder::First,
            Dir::Desc => NullOrder::Last,
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where null keys go, independent of direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NullOrder {
    /// Nulls before every non-null key.
    First,
    /// Nulls after every non-null key.
    Last,
}

/// Comparator over two non-null values.
pub type ValueComparator = for<'x, 'y> fn(&Value<'x>, &Value<'y>) -> Ordering;

/// A single sort key: an attribute, a direction and a comparator.
///
/// # Example
///
/// ```
/// use sqlike::{Attribute, OrderBy, NullOrder};
///
/// struct Row {
///     score: Option<i64>,
/// }
///
/// let score = Attribute::new("score", |r: &Row| r.score.into());
/// let spec = OrderBy::desc(score).nulls_first();
///
/// assert_eq!(spec.null_order(), NullOrder::First);
/// assert_eq!(spec.to_string(), "score desc nulls first");
/// ```
pub struct OrderBy<E> {
    attribute: Attribute<E>,
    dir: Dir,
    nulls: Option<NullOrder>,
    comparator: Option<ValueComparator>,
}

impl<E> OrderBy<E> {
    /// Creates an ordering with the given direction.
    pub fn new(attribute: Attribute<E>, dir: Dir) -> Self {
        OrderBy {
            attribute,
            dir,
            nulls: None,
            comparator: None,
        }
    }

    /// Creates an ascending ordering.
    pub fn asc(attribute: Attribute<E>) -> Self {
        OrderBy::new(attribute, Dir::Asc)
    }

    /// Creates a descending ordering.
    pub fn desc(attribute: Attribute<E>) -> Self {
        OrderBy::new(attribute, Dir::Desc)
    }

    /// Places null keys before all others regardless of direction.
    pub fn nulls_first(mut self) -> Self {
        self.nulls = Some(NullOrder::First);
        self
    }

    /// Places null keys after all others regardless of direction.
    pub fn nulls_last(mut self) -> Self {
        self.nulls = Some(NullOrder::Last);
        self
    }

    /// Replaces the natural comparator for non-null keys.
    ///
    /// The direction still applies on top of the comparator.
    pub fn with_comparator(mut self, comparator: ValueComparator) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// The attribute supplying the key.
    pub fn attribute(&self) -> &Attribute<E> {
        &self.attribute
    }

    /// The sort direction.
    pub fn dir(&self) -> Dir {
        self.dir
    }

    /// The effective null placement.
    pub fn null_order(&self) -> NullOrder {
        self.nulls.unwrap_or_else(|| self.dir.default_nulls())
    }

    /// Compares two elements by this key.
    pub fn compare(&self, a: &E, b: &E) -> Ordering {
        let (val_a, val_b) = (self.attribute.get(a), self.attribute.get(b));
        match (val_a.is_null(), val_b.is_null()) {
            (true, true) => Ordering::Equal,
            (true, false) => self.null_vs_value(),
            (false, true) => self.null_vs_value().reverse(),
            (false, false) => {
                let base = match self.comparator {
                    Some(comparator) => comparator(&val_a, &val_b),
                    None => sort_values(&val_a, &val_b),
                };
                self.dir.apply(base)
            }
        }
    }

    fn null_vs_value(&self) -> Ordering {
        match self.null_order() {
            NullOrder::First => Ordering::Less,
            NullOrder::Last => Ordering::Greater,
        }
    }
}

impl<E> Clone for OrderBy<E> {
    fn clone(&self) -> Self {
        OrderBy {
            attribute: self.attribute.clone(),
            dir: self.dir,
            nulls: self.nulls,
            comparator: self.comparator,
        }
    }
}

impl<E> fmt::Debug for OrderBy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderBy")
            .field("attribute", &self.attribute.name())
            .field("dir", &self.dir)
            .field("nulls", &self.nulls)
            .field("custom_comparator", &self.comparator.is_some())
            .finish()
    }
}

impl<E> fmt::Display for OrderBy<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.attribute, self.dir)?;
        match self.nulls {
            Some(NullOrder::First) => f.write_str(" nulls first"),
            Some(NullOrder::Last) => f.write_str(" nulls last"),
            None => Ok(()),
        }
    }
}

/// Ascending sort key.
pub fn asc<E>(attribute: Attribute<E>) -> OrderBy<E> {
    OrderBy::asc(attribute)
}

/// Descending sort key.
pub fn desc<E>(attribute: Attribute<E>) -> OrderBy<E> {
    OrderBy::desc(attribute)
}

/// Natural comparison of two values.
///
/// Strings compare lexicographically, numbers numerically (exactly, even
/// across variants), booleans `false < true`. Null is lower than every other
/// value. Returns `None` on a type mismatch or NaN.
pub fn compare_values(a: &Value<'_>, b: &Value<'_>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => a.compare(*b),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),

        (Value::Null, Value::Null) => Some(Ordering::Equal),
        (Value::Null, _) => Some(Ordering::Less),
        (_, Value::Null) => Some(Ordering::Greater),

        // Type mismatch - cannot compare
        _ => None,
    }
}

/// Total order used to sort keys.
///
/// Agrees with [`compare_values`] wherever that returns an ordering. NaN
/// sorts after every other number, and values of different types rank
/// null < bool < number < string.
pub fn sort_values(a: &Value<'_>, b: &Value<'_>) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.total_compare(*b),
        _ => compare_values(a, b).unwrap_or_else(|| type_rank(a).cmp(&type_rank(b))),
    }
}

fn type_rank(value: &Value<'_>) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
    }
}

/// Compares two elements using a list of sort keys.
///
/// Uses the first key as the primary sort key, the second to break ties, etc.
/// If all keys compare equal, returns `Equal`.
pub fn compare_by_orderings<E>(a: &E, b: &E, orderings: &[OrderBy<E>]) -> Ordering {
    orderings
        .iter()
        .map(|order_by| order_by.compare(a, b))
        .find(|ordering| *ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
