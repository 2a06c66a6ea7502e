//! Row views over query results.
//!
//! [`Columns`] is a named set of attributes; an [`Entry`] pairs one element
//! with those columns so fields can be read by label, the way a database
//! row is read by column name.

use crate::attribute::Attribute;
use crate::error::{Result, SqlikeError};
use crate::ordering::OrderBy;
use crate::value::Value;

/// A named set of attributes over `E`.
///
/// # Example
///
/// ```
/// use sqlike::{Attribute, Columns};
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// let columns = Columns::new()
///     .with(Attribute::new("name", |p: &Person| (&p.name).into()))
///     .with(Attribute::new("age", |p: &Person| p.age.into()));
///
/// let ada = Person { name: "Ada".into(), age: 36 };
/// let entry = columns.entry(&ada);
///
/// assert_eq!(entry.get_string("name").unwrap(), Some("Ada"));
/// assert_eq!(entry.get_integer("age").unwrap(), Some(36));
/// assert!(entry.get_boolean("age").is_err());
/// ```
pub struct Columns<E> {
    attributes: Vec<Attribute<E>>,
}

impl<E> Columns<E> {
    /// Creates an empty column set.
    pub fn new() -> Self {
        Columns {
            attributes: Vec::new(),
        }
    }

    /// Adds a column. A later column shadows an earlier one of the same name.
    pub fn with(mut self, attribute: Attribute<E>) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Looks up a column by name.
    pub fn get(&self, name: &str) -> Option<&Attribute<E>> {
        self.attributes.iter().rev().find(|a| a.name() == name)
    }

    /// Looks up a column by name, failing with [`SqlikeError::UnknownField`].
    pub fn require(&self, name: &str) -> Result<&Attribute<E>> {
        self.get(name)
            .ok_or_else(|| SqlikeError::UnknownField(name.to_string()))
    }

    /// Ascending sort key on the named column.
    pub fn asc(&self, name: &str) -> Result<OrderBy<E>> {
        Ok(OrderBy::asc(self.require(name)?.clone()))
    }

    /// Descending sort key on the named column.
    pub fn desc(&self, name: &str) -> Result<OrderBy<E>> {
        Ok(OrderBy::desc(self.require(name)?.clone()))
    }

    /// Column names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(Attribute::name)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Views one element through these columns.
    pub fn entry<'a>(&'a self, element: &'a E) -> Entry<'a, E> {
        Entry {
            element,
            columns: self,
        }
    }
}

impl<E> Default for Columns<E> {
    fn default() -> Self {
        Columns::new()
    }
}

impl<E> Clone for Columns<E> {
    fn clone(&self) -> Self {
        Columns {
            attributes: self.attributes.clone(),
        }
    }
}

impl<E> std::fmt::Debug for Columns<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<E> FromIterator<Attribute<E>> for Columns<E> {
    fn from_iter<I: IntoIterator<Item = Attribute<E>>>(iter: I) -> Self {
        Columns {
            attributes: iter.into_iter().collect(),
        }
    }
}

/// One element viewed through a set of named columns.
///
/// Typed getters return `Ok(None)` when the field is null or not a column,
/// and [`SqlikeError::TypeMismatch`] when the value is present but cannot be
/// read as the requested type.
pub struct Entry<'a, E> {
    element: &'a E,
    columns: &'a Columns<E>,
}

impl<'a, E> Entry<'a, E> {
    /// The underlying element.
    pub fn element(&self) -> &'a E {
        self.element
    }

    /// The raw value of a field; `None` when absent or null.
    pub fn get_object(&self, name: &str) -> Option<Value<'a>> {
        let attribute = self.columns.get(name)?;
        match attribute.get(self.element) {
            Value::Null => None,
            value => Some(value),
        }
    }

    /// Reads a string field.
    pub fn get_string(&self, name: &str) -> Result<Option<&'a str>> {
        self.read(name, "string", |v| v.as_str())
    }

    /// Reads an integral field that fits in `i32`.
    pub fn get_integer(&self, name: &str) -> Result<Option<i32>> {
        self.read(name, "i32", |v| {
            v.as_number()
                .and_then(|n| n.to_i64())
                .and_then(|n| i32::try_from(n).ok())
        })
    }

    /// Reads an integral field that fits in `i64`.
    pub fn get_long(&self, name: &str) -> Result<Option<i64>> {
        self.read(name, "i64", |v| v.as_number().and_then(|n| n.to_i64()))
    }

    /// Reads a boolean field.
    pub fn get_boolean(&self, name: &str) -> Result<Option<bool>> {
        self.read(name, "bool", |v| v.as_bool())
    }

    fn read<T>(
        &self,
        name: &str,
        expected: &'static str,
        convert: impl FnOnce(&Value<'a>) -> Option<T>,
    ) -> Result<Option<T>> {
        let Some(value) = self.get_object(name) else {
            return Ok(None);
        };
        match convert(&value) {
            Some(converted) => Ok(Some(converted)),
            None => Err(SqlikeError::TypeMismatch {
                field: name.to_string(),
                expected,
                actual: value.type_name(),
            }),
        }
    }
}

impl<E> Clone for Entry<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for Entry<'_, E> {}

impl<E: std::fmt::Debug> std::fmt::Debug for Entry<'_, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for name in self.columns.names() {
            match self.get_object(name) {
                Some(value) => map.entry(&name, &value),
                None => map.entry(&name, &Value::Null),
            };
        }
        map.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[derive(Debug)]
    struct Record {
        label: Option<String>,
        small: i64,
        big: u64,
        ratio: f64,
        flag: bool,
    }

    fn columns() -> Columns<Record> {
        Columns::new()
            .with(Attribute::new("label", |r: &Record| r.label.as_deref().into()))
            .with(Attribute::new("small", |r: &Record| r.small.into()))
            .with(Attribute::new("big", |r: &Record| r.big.into()))
            .with(Attribute::new("ratio", |r: &Record| r.ratio.into()))
            .with(Attribute::new("flag", |r: &Record| r.flag.into()))
    }

    fn record() -> Record {
        Record {
            label: Some("x".to_string()),
            small: 12,
            big: u64::MAX,
            ratio: 0.5,
            flag: true,
        }
    }

    #[test]
    fn typed_getters() {
        let columns = columns();
        let record = record();
        let entry = columns.entry(&record);

        assert_eq!(entry.get_string("label").unwrap(), Some("x"));
        assert_eq!(entry.get_integer("small").unwrap(), Some(12));
        assert_eq!(entry.get_long("small").unwrap(), Some(12));
        assert_eq!(entry.get_boolean("flag").unwrap(), Some(true));
        assert_eq!(
            entry.get_object("ratio"),
            Some(Value::Number(Number::F64(0.5)))
        );
        assert!(std::ptr::eq(entry.element(), &record));
    }

    #[test]
    fn absent_fields_are_none() {
        let columns = columns();
        let record = Record {
            label: None,
            ..record()
        };
        let entry = columns.entry(&record);

        assert_eq!(entry.get_string("label").unwrap(), None);
        assert_eq!(entry.get_object("label"), None);
        assert_eq!(entry.get_string("missing").unwrap(), None);
    }

    #[test]
    fn type_mismatches() {
        let columns = columns();
        let record = record();
        let entry = columns.entry(&record);

        let err = entry.get_string("small").unwrap_err();
        assert!(matches!(
            err,
            SqlikeError::TypeMismatch {
                expected: "string",
                actual: "number",
                ..
            }
        ));
        assert!(entry.get_integer("big").is_err());
        assert!(entry.get_long("big").is_err());
        assert!(entry.get_long("ratio").is_err());
        assert!(entry.get_boolean("label").is_err());
        assert_eq!(
            entry.get_integer("label").unwrap_err().to_string(),
            "type mismatch on field 'label': expected i32, got string"
        );
    }

    #[test]
    fn lookup_by_name() {
        let columns = columns();
        assert_eq!(columns.len(), 5);
        assert!(columns.get("flag").is_some());
        assert!(matches!(
            columns.require("nope"),
            Err(SqlikeError::UnknownField(name)) if name == "nope"
        ));
        assert_eq!(columns.desc("small").unwrap().to_string(), "small desc");
        assert!(columns.asc("nope").is_err());
    }

    #[test]
    fn later_column_shadows_earlier() {
        let columns = columns().with(Attribute::new("small", |_: &Record| Value::Null));
        let record = record();
        assert_eq!(columns.entry(&record).get_long("small").unwrap(), None);
    }
}
