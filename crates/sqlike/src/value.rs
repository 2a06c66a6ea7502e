//! Runtime value types for predicate evaluation and ordering.
//!
//! [`Value`] is what an [`Attribute`](crate::Attribute) reads out of an
//! element, borrowed from it. [`Operand`] is the owned counterpart stored
//! inside predicates.

use std::cmp::Ordering;
use std::fmt;

use regex::Regex;

/// Runtime value for comparison, borrowed from the source element.
///
/// # Example
///
/// ```
/// use sqlike::{Value, Number};
///
/// struct Person {
///     name: Option<String>,
///     age: u8,
/// }
///
/// fn name(p: &Person) -> Value<'_> {
///     p.name.as_deref().into()
/// }
///
/// fn age(p: &Person) -> Value<'_> {
///     Value::Number(Number::U64(p.age as u64))
/// }
///
/// let anon = Person { name: None, age: 3 };
/// assert!(name(&anon).is_null());
/// assert_eq!(age(&anon), Value::Number(Number::U64(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Boolean value.
    Bool(bool),
    /// No value: a null element or an unpopulated field.
    Null,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is the `Null` sentinel.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number value, if present.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the variant, used in type mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Null => "null",
        }
    }

    /// Value equality with numeric coercion: `I64(2)` equals `F64(2.0)`.
    ///
    /// `Null` equals only `Null`.
    pub fn loosely_eq(&self, other: &Value<'_>) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.compare(*b) == Some(Ordering::Equal),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s:?}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

macro_rules! impl_value_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_value_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Numeric value supporting all common numeric types.
///
/// Comparisons between different variants are exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64 for comparison.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Compares two numbers exactly, handling mixed types.
    ///
    /// Returns `None` when either side is NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match (self.as_integer(), other.as_integer()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (Some(a), None) => cmp_integer_float(a, other.to_f64()),
            (None, Some(b)) => cmp_integer_float(b, self.to_f64()).map(Ordering::reverse),
            (None, None) => self.to_f64().partial_cmp(&other.to_f64()),
        }
    }

    /// Total order over all numbers: NaN sorts after every other number and
    /// equals itself.
    pub fn total_compare(self, other: Number) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self.compare(other).unwrap_or(Ordering::Equal),
        }
    }

    /// Returns `true` for a floating point NaN.
    pub fn is_nan(self) -> bool {
        matches!(self, Number::F64(n) if n.is_nan())
    }

    fn as_integer(self) -> Option<i128> {
        match self {
            Number::I64(n) => Some(i128::from(n)),
            Number::U64(n) => Some(i128::from(n)),
            Number::F64(_) => None,
        }
    }

    /// Returns the value as `i64` if it is integral and in range.
    pub fn to_i64(self) -> Option<i64> {
        match self {
            Number::I64(n) => Some(n),
            Number::U64(n) => i64::try_from(n).ok(),
            Number::F64(_) => None,
        }
    }
}

// Every i64 and u64 lies in [-2^63, 2^64)
const INTEGER_MIN: f64 = -9_223_372_036_854_775_808.0;
const INTEGER_END: f64 = 18_446_744_073_709_551_616.0;

fn cmp_integer_float(a: i128, b: f64) -> Option<Ordering> {
    if b.is_nan() {
        return None;
    }
    if b >= INTEGER_END {
        return Some(Ordering::Less);
    }
    if b < INTEGER_MIN {
        return Some(Ordering::Greater);
    }
    let floor = b.floor();
    // In range, so the cast is exact
    match a.cmp(&(floor as i128)) {
        Ordering::Equal if floor < b => Some(Ordering::Less),
        ordering => Some(ordering),
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(*other)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

macro_rules! impl_number_from {
    ($variant:ident as $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::$variant(n as $wide)
                }
            }
        )*
    };
}

impl_number_from!(I64 as i64: i8, i16, i32, i64, isize);
impl_number_from!(U64 as u64: u8, u16, u32, u64, usize);
impl_number_from!(F64 as f64: f32, f64);

/// Owned value stored inside a predicate.
///
/// Unlike [`Value`], which borrows from the element, `Operand` owns its data
/// so predicates can outlive the collections they are applied to. The `Set`
/// and `Pattern` variants are only built by the `is_in` and `string_matches`
/// constructors.
#[derive(Debug, Clone)]
pub enum Operand {
    /// The null literal.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Numeric value.
    Number(Number),
    /// String value.
    String(String),
    /// Set of candidate values for membership tests.
    Set(Vec<Operand>),
    /// Compiled regular expression, anchored for full-match semantics.
    Pattern(Regex),
}

impl Operand {
    /// Returns `true` for the null literal.
    pub fn is_null(&self) -> bool {
        matches!(self, Operand::Null)
    }

    /// Borrows a scalar operand as a [`Value`].
    ///
    /// Sets and patterns have no scalar view and return `None`.
    pub fn as_scalar(&self) -> Option<Value<'_>> {
        match self {
            Operand::Null => Some(Value::Null),
            Operand::Bool(b) => Some(Value::Bool(*b)),
            Operand::Number(n) => Some(Value::Number(*n)),
            Operand::String(s) => Some(Value::String(s)),
            Operand::Set(_) | Operand::Pattern(_) => None,
        }
    }
}

impl PartialEq for Operand {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Operand::Set(a), Operand::Set(b)) => a == b,
            (Operand::Pattern(a), Operand::Pattern(b)) => a.as_str() == b.as_str(),
            (Operand::Set(_) | Operand::Pattern(_), _)
            | (_, Operand::Set(_) | Operand::Pattern(_)) => false,
            (a, b) => a.as_scalar() == b.as_scalar(),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Set(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Operand::Pattern(re) => write!(f, "/{}/", re.as_str()),
            Operand::Null => write!(f, "{}", Value::Null),
            Operand::Bool(b) => write!(f, "{}", Value::Bool(*b)),
            Operand::Number(n) => write!(f, "{}", Value::Number(*n)),
            Operand::String(s) => write!(f, "{}", Value::String(s)),
        }
    }
}

impl From<String> for Operand {
    fn from(s: String) -> Self {
        Operand::String(s)
    }
}

impl From<&str> for Operand {
    fn from(s: &str) -> Self {
        Operand::String(s.to_string())
    }
}

impl From<&String> for Operand {
    fn from(s: &String) -> Self {
        Operand::String(s.clone())
    }
}

impl From<bool> for Operand {
    fn from(b: bool) -> Self {
        Operand::Bool(b)
    }
}

impl From<Number> for Operand {
    fn from(n: Number) -> Self {
        Operand::Number(n)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        v.map_or(Operand::Null, Into::into)
    }
}

impl From<Value<'_>> for Operand {
    fn from(v: Value<'_>) -> Self {
        match v {
            Value::String(s) => Operand::String(s.to_string()),
            Value::Number(n) => Operand::Number(n),
            Value::Bool(b) => Operand::Bool(b),
            Value::Null => Operand::Null,
        }
    }
}

macro_rules! impl_operand_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Operand::Number(Number::from(n))
                }
            }
        )*
    };
}

impl_operand_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
