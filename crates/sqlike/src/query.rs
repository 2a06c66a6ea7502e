//! Query pipeline.
//!
//! [`select_from`] wraps a collection into a [`QueryableCollection`]; each
//! [`filter`](QueryableCollection::filter) returns a new, narrower
//! collection; [`order_by`](QueryableCollection::order_by) ends the chain
//! with a sorted [`QueryableList`].
//!
//! Collections hold references into the caller's source, so the source
//! stays borrowed (and therefore unmodified) for as long as any query over
//! it is alive.

use std::cmp::Ordering;
use std::ops::Index;

use crate::attribute::Attribute;
use crate::entry::{Columns, Entry};
use crate::ordering::{compare_by_orderings, OrderBy};
use crate::predicate::Predicate;
use crate::traits::{OrderBySupport, SqlLikeCollection, WhereSupport};

/// Wraps a collection for querying.
///
/// # Example
///
/// ```
/// use sqlike::{is_null, not, select_from, SqlLikeCollection};
///
/// let names = vec![Some("b"), None, Some("a")];
/// let present = select_from(&names).filter(not(is_null()));
///
/// assert_eq!(present.to_vec(), vec![&Some("b"), &Some("a")]);
/// ```
pub fn select_from<'a, E, I>(source: I) -> QueryableCollection<'a, E>
where
    E: 'a,
    I: IntoIterator<Item = &'a E>,
{
    QueryableCollection {
        rows: source.into_iter().collect(),
    }
}

/// An immutable, filterable and sortable view of a collection.
#[derive(Debug)]
pub struct QueryableCollection<'a, E> {
    rows: Vec<&'a E>,
}

impl<'a, E> QueryableCollection<'a, E> {
    /// Keeps exactly the rows the predicate accepts, preserving order.
    ///
    /// `filter(p1).filter(p2)` selects the same rows as
    /// `filter(and([p1, p2]))`.
    #[doc(alias = "where")]
    pub fn filter(&self, predicate: Predicate<E>) -> Self {
        let rows: Vec<&'a E> = self
            .rows
            .iter()
            .copied()
            .filter(|row| predicate.matches(row))
            .collect();
        log::debug!(
            "filter {predicate} kept {} of {} rows",
            rows.len(),
            self.rows.len()
        );
        QueryableCollection { rows }
    }

    /// Sorts by the given keys into a [`QueryableList`].
    ///
    /// The sort is stable: rows tied on every key keep their current
    /// relative order. An empty key list keeps the current order.
    pub fn order_by(&self, specs: &[OrderBy<E>]) -> QueryableList<'a, E> {
        let mut rows = self.rows.clone();
        if !specs.is_empty() {
            log::debug!(
                "order_by [{}] over {} rows",
                specs
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", "),
                rows.len()
            );
            rows.sort_by(|a, b| compare_by_orderings(*a, *b, specs));
        }
        QueryableList { rows }
    }

    /// Sorts ascending by the natural order of one attribute.
    pub fn order_by_attribute(&self, attribute: Attribute<E>) -> QueryableList<'a, E> {
        self.order_by(&[OrderBy::asc(attribute)])
    }

    /// Sorts with a caller-supplied element comparator (stable).
    pub fn sorted_by<F>(&self, mut compare: F) -> QueryableList<'a, E>
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        let mut rows = self.rows.clone();
        rows.sort_by(|a, b| compare(*a, *b));
        QueryableList { rows }
    }

    /// Counts the rows the predicate accepts.
    pub fn count(&self, predicate: &Predicate<E>) -> usize {
        self.rows.iter().filter(|row| predicate.matches(row)).count()
    }

    /// Returns `true` if any row matches.
    pub fn any(&self, predicate: &Predicate<E>) -> bool {
        self.rows.iter().any(|row| predicate.matches(row))
    }

    /// Returns `true` if every row matches.
    pub fn all(&self, predicate: &Predicate<E>) -> bool {
        self.rows.iter().all(|row| predicate.matches(row))
    }

    /// Finds the first matching row.
    pub fn find(&self, predicate: &Predicate<E>) -> Option<&'a E> {
        self.rows.iter().copied().find(|row| predicate.matches(row))
    }

    /// Finds the index of the first matching row.
    pub fn position(&self, predicate: &Predicate<E>) -> Option<usize> {
        self.rows.iter().position(|row| predicate.matches(row))
    }

    /// Iterates the rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a E> + '_ {
        self.rows.iter().copied()
    }

    /// Views every row through `columns`.
    pub fn entries<'c>(&'c self, columns: &'c Columns<E>) -> Vec<Entry<'c, E>>
    where
        'a: 'c,
    {
        self.rows.iter().map(|row| columns.entry(*row)).collect()
    }
}

impl<E> Clone for QueryableCollection<'_, E> {
    fn clone(&self) -> Self {
        QueryableCollection {
            rows: self.rows.clone(),
        }
    }
}

impl<'a, E> SqlLikeCollection<'a, E> for QueryableCollection<'a, E> {
    fn rows(&self) -> &[&'a E] {
        &self.rows
    }
}

impl<'a, E> WhereSupport<E> for QueryableCollection<'a, E> {
    type Output = QueryableCollection<'a, E>;

    fn filter(&self, predicate: Predicate<E>) -> Self::Output {
        QueryableCollection::filter(self, predicate)
    }
}

impl<'a, E> OrderBySupport<E> for QueryableCollection<'a, E> {
    type Output = QueryableList<'a, E>;

    fn order_by(&self, specs: &[OrderBy<E>]) -> Self::Output {
        QueryableCollection::order_by(self, specs)
    }
}

impl<'a, E> IntoIterator for QueryableCollection<'a, E> {
    type Item = &'a E;
    type IntoIter = std::vec::IntoIter<&'a E>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

/// A sorted, read-only query result.
///
/// Compares equal to another list or a slice of references with the same
/// elements in the same order.
#[derive(Debug)]
pub struct QueryableList<'a, E> {
    rows: Vec<&'a E>,
}

impl<'a, E> QueryableList<'a, E> {
    /// Iterates the rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &'a E> + '_ {
        self.rows.iter().copied()
    }

    /// First row, if any.
    pub fn first(&self) -> Option<&'a E> {
        self.rows.first().copied()
    }

    /// Last row, if any.
    pub fn last(&self) -> Option<&'a E> {
        self.rows.last().copied()
    }

    /// Re-wraps the list as a collection so it can be filtered again.
    ///
    /// Filtering keeps the sorted order.
    pub fn select(&self) -> QueryableCollection<'a, E> {
        QueryableCollection {
            rows: self.rows.clone(),
        }
    }

    /// Views every row through `columns`.
    pub fn entries<'c>(&'c self, columns: &'c Columns<E>) -> Vec<Entry<'c, E>>
    where
        'a: 'c,
    {
        self.rows.iter().map(|row| columns.entry(*row)).collect()
    }
}

impl<E> Clone for QueryableList<'_, E> {
    fn clone(&self) -> Self {
        QueryableList {
            rows: self.rows.clone(),
        }
    }
}

impl<'a, E> SqlLikeCollection<'a, E> for QueryableList<'a, E> {
    fn rows(&self) -> &[&'a E] {
        &self.rows
    }
}

impl<'a, E> Index<usize> for QueryableList<'a, E> {
    type Output = E;

    fn index(&self, index: usize) -> &Self::Output {
        self.rows[index]
    }
}

impl<'a, E> IntoIterator for QueryableList<'a, E> {
    type Item = &'a E;
    type IntoIter = std::vec::IntoIter<&'a E>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<E: PartialEq> PartialEq for QueryableList<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<E: PartialEq> PartialEq<[&E]> for QueryableList<'_, E> {
    fn eq(&self, other: &[&E]) -> bool {
        self.rows.as_slice() == other
    }
}

impl<E: PartialEq> PartialEq<Vec<&E>> for QueryableList<'_, E> {
    fn eq(&self, other: &Vec<&E>) -> bool {
        &self.rows == other
    }
}
