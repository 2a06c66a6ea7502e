//! Named accessors for element fields.

use std::borrow::Cow;
use std::fmt;

use crate::traits::AsValue;
use crate::value::Value;

/// Function reading one value out of an element.
pub type Getter<E> = for<'a> fn(&'a E) -> Value<'a>;

/// A named, pure extractor of one value from an element.
///
/// The name is only used for diagnostics and column lookup; two attributes
/// are never compared by name. Getters must return [`Value::Null`] for
/// absent data rather than panic.
///
/// # Example
///
/// ```
/// use sqlike::{Attribute, Value};
///
/// struct Person {
///     name: Option<String>,
///     age: i32,
/// }
///
/// let name = Attribute::new("name", |p: &Person| p.name.as_deref().into());
/// let age = Attribute::new("age", |p: &Person| p.age.into());
///
/// let bob = Person { name: Some("bob".into()), age: 30 };
/// assert_eq!(name.get(&bob), Value::String("bob"));
/// assert_eq!(age.name(), "age");
/// ```
pub struct Attribute<E> {
    name: Cow<'static, str>,
    get: Getter<E>,
}

impl<E> Attribute<E> {
    /// Creates an attribute from a label and a getter.
    pub fn new(name: impl Into<Cow<'static, str>>, get: Getter<E>) -> Self {
        Attribute {
            name: name.into(),
            get,
        }
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reads the attribute from an element.
    pub fn get<'a>(&self, element: &'a E) -> Value<'a> {
        (self.get)(element)
    }

    /// Returns a copy of this attribute under another name.
    pub fn renamed(&self, name: impl Into<Cow<'static, str>>) -> Self {
        Attribute {
            name: name.into(),
            get: self.get,
        }
    }
}

impl<E: AsValue> Attribute<E> {
    /// The self-accessor: reads the element itself.
    pub fn identity() -> Self {
        Attribute::new("self", <E as AsValue>::as_value)
    }
}

impl<E> Clone for Attribute<E> {
    fn clone(&self) -> Self {
        Attribute {
            name: self.name.clone(),
            get: self.get,
        }
    }
}

impl<E> fmt::Debug for Attribute<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Attribute")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<E> fmt::Display for Attribute<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    struct Item {
        label: Option<String>,
        count: u32,
    }

    fn label(item: &Item) -> Value<'_> {
        item.label.as_deref().into()
    }

    #[test]
    fn reads_fields() {
        let item = Item {
            label: Some("x".to_string()),
            count: 4,
        };
        let count = Attribute::new("count", |i: &Item| i.count.into());

        assert_eq!(Attribute::new("label", label).get(&item), Value::String("x"));
        assert_eq!(count.get(&item), Value::Number(Number::U64(4)));
    }

    #[test]
    fn absent_field_is_null() {
        let item = Item {
            label: None,
            count: 0,
        };
        assert!(Attribute::new("label", label).get(&item).is_null());
    }

    #[test]
    fn identity_reads_element() {
        let attr = Attribute::<Option<&str>>::identity();
        assert_eq!(attr.name(), "self");
        assert_eq!(attr.get(&Some("a")), Value::String("a"));
        assert_eq!(attr.get(&None), Value::Null);
    }

    #[test]
    fn renamed_keeps_getter() {
        let attr = Attribute::new("label", label).renamed("title");
        let item = Item {
            label: Some("t".to_string()),
            count: 0,
        };
        assert_eq!(attr.to_string(), "title");
        assert_eq!(attr.get(&item), Value::String("t"));
    }
}
