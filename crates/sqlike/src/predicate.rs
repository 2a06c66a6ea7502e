//! Predicate algebra.
//!
//! A [`Predicate`] is an immutable tree: constant leaves, atomic [`Test`]
//! leaves, and `and`/`or`/`not` nodes owning their children. Evaluation is
//! a recursive walk.
//!
//! Atomic predicates come in two forms:
//!
//! - free functions ([`is_null`], [`equals`], [`greater_than`], ...) that
//!   test the element itself, for elements implementing [`AsValue`]
//! - methods of the same name on [`Attribute`] that test one field of the
//!   element
//!
//! Every predicate tolerates null: a null value fails every test except
//! [`is_null`], `equals(None)` and `is_in` over a set containing null.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use regex::Regex;

use crate::attribute::Attribute;
use crate::error::{Result, SqlikeError};
use crate::op::Op;
use crate::ordering::compare_values;
use crate::traits::AsValue;
use crate::value::{Operand, Value};

/// An atomic test: an attribute, an operator and an operand.
pub struct Test<E> {
    attribute: Attribute<E>,
    op: Op,
    operand: Operand,
}

impl<E> Test<E> {
    fn new(attribute: &Attribute<E>, op: Op, operand: Operand) -> Self {
        Test {
            attribute: attribute.clone(),
            op,
            operand,
        }
    }

    /// The attribute this test reads.
    pub fn attribute(&self) -> &Attribute<E> {
        &self.attribute
    }

    /// The operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// The stored operand (`Null` for unary operators).
    pub fn operand(&self) -> &Operand {
        &self.operand
    }

    /// Evaluates this test against an element.
    pub fn matches(&self, element: &E) -> bool {
        self.matches_value(&self.attribute.get(element))
    }

    /// Evaluates this test against an already extracted value.
    pub fn matches_value(&self, value: &Value<'_>) -> bool {
        match self.op {
            Op::IsNull => value.is_null(),
            Op::Eq => self
                .operand
                .as_scalar()
                .is_some_and(|operand| value.loosely_eq(&operand)),
            Op::In => match &self.operand {
                // Nested sets and patterns never match
                Operand::Set(candidates) => candidates.iter().any(|candidate| {
                    candidate
                        .as_scalar()
                        .is_some_and(|candidate| value.loosely_eq(&candidate))
                }),
                _ => false,
            },
            Op::Gt | Op::Gte | Op::Lt | Op::Lte => {
                if value.is_null() {
                    return false;
                }
                let Some(bound) = self.operand.as_scalar() else {
                    return false;
                };
                match compare_values(value, &bound) {
                    Some(ordering) => self.op.eval_ordering(ordering),
                    // Type mismatch or NaN
                    None => false,
                }
            }
            _ => match value {
                Value::String(s) => self.match_string(s),
                _ => false,
            },
        }
    }

    fn match_string(&self, field: &str) -> bool {
        match (self.op, &self.operand) {
            (Op::IsEmpty, _) => field.is_empty(),
            (Op::Matches, Operand::Pattern(regex)) => regex.is_match(field),
            (Op::StartsWith, Operand::String(p)) => field.starts_with(p.as_str()),
            (Op::EndsWith, Operand::String(p)) => field.ends_with(p.as_str()),
            (Op::Contains, Operand::String(p)) => field.contains(p.as_str()),
            (Op::Follows | Op::Precedes, Operand::String(p)) => {
                self.op.eval_ordering(field.cmp(p.as_str()))
            }
            _ => false,
        }
    }
}

impl<E> Clone for Test<E> {
    fn clone(&self) -> Self {
        Test {
            attribute: self.attribute.clone(),
            op: self.op,
            operand: self.operand.clone(),
        }
    }
}

impl<E> fmt::Display for Test<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.op.is_unary() {
            write!(f, "{} {}", self.attribute, self.op)
        } else {
            write!(f, "{} {} {}", self.attribute, self.op, self.operand)
        }
    }
}

/// A boolean test over one element.
///
/// # Example
///
/// ```
/// use sqlike::{empty_string, is_null, not, or, Predicate};
///
/// let present: Predicate<Option<&str>> = not(or([empty_string(), is_null()]));
///
/// assert!(present.matches(&Some("A")));
/// assert!(!present.matches(&Some("")));
/// assert!(!present.matches(&None));
/// assert_eq!(present.to_string(), "not(or(self is empty, self is null))");
/// ```
pub enum Predicate<E> {
    /// Constant result.
    Const(bool),
    /// Atomic test.
    Test(Test<E>),
    /// True iff every child is true; true when empty.
    And(Vec<Predicate<E>>),
    /// True iff at least one child is true; false when empty.
    Or(Vec<Predicate<E>>),
    /// Logical negation.
    Not(Box<Predicate<E>>),
}

impl<E> Predicate<E> {
    /// Evaluates the predicate against an element.
    pub fn matches(&self, element: &E) -> bool {
        match self {
            Predicate::Const(result) => *result,
            Predicate::Test(test) => test.matches(element),
            Predicate::And(children) => children.iter().all(|p| p.matches(element)),
            Predicate::Or(children) => children.iter().any(|p| p.matches(element)),
            Predicate::Not(inner) => !inner.matches(element),
        }
    }

    /// Conjunction with another predicate, flattening nested `and`s.
    pub fn and_also(self, other: Predicate<E>) -> Self {
        match self {
            Predicate::And(mut children) => {
                children.push(other);
                Predicate::And(children)
            }
            first => Predicate::And(vec![first, other]),
        }
    }

    /// Disjunction with another predicate, flattening nested `or`s.
    pub fn or_else(self, other: Predicate<E>) -> Self {
        match self {
            Predicate::Or(mut children) => {
                children.push(other);
                Predicate::Or(children)
            }
            first => Predicate::Or(vec![first, other]),
        }
    }

    /// Wraps this predicate in `not`.
    pub fn negate(self) -> Self {
        Predicate::Not(Box::new(self))
    }

    /// Returns the constant result, if this predicate is a constant leaf.
    pub fn is_const(&self) -> Option<bool> {
        match self {
            Predicate::Const(result) => Some(*result),
            _ => None,
        }
    }
}

impl<E> Clone for Predicate<E> {
    fn clone(&self) -> Self {
        match self {
            Predicate::Const(result) => Predicate::Const(*result),
            Predicate::Test(test) => Predicate::Test(test.clone()),
            Predicate::And(children) => Predicate::And(children.clone()),
            Predicate::Or(children) => Predicate::Or(children.clone()),
            Predicate::Not(inner) => Predicate::Not(inner.clone()),
        }
    }
}

impl<E> fmt::Display for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::Const(result) => write!(f, "{result}"),
            Predicate::Test(test) => write!(f, "{test}"),
            Predicate::And(children) => write_node(f, "and", children),
            Predicate::Or(children) => write_node(f, "or", children),
            Predicate::Not(inner) => write!(f, "not({inner})"),
        }
    }
}

fn write_node<E>(f: &mut fmt::Formatter<'_>, name: &str, children: &[Predicate<E>]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{child}")?;
    }
    f.write_str(")")
}

impl<E> fmt::Debug for Predicate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate")
            .field(&format_args!("{self}"))
            .finish()
    }
}

impl<E> Not for Predicate<E> {
    type Output = Predicate<E>;

    fn not(self) -> Self::Output {
        self.negate()
    }
}

impl<E> BitAnd for Predicate<E> {
    type Output = Predicate<E>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and_also(rhs)
    }
}

impl<E> BitOr for Predicate<E> {
    type Output = Predicate<E>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or_else(rhs)
    }
}

// ============================================================================
// Attribute-scoped constructors
// ============================================================================

impl<E> Attribute<E> {
    fn test(&self, op: Op, operand: Operand) -> Predicate<E> {
        Predicate::Test(Test::new(self, op, operand))
    }

    fn ordering_test(&self, op: Op, bound: Operand, what: &'static str) -> Result<Predicate<E>> {
        match bound {
            Operand::Null => Err(SqlikeError::null_bound(what)),
            Operand::Set(_) | Operand::Pattern(_) => Err(SqlikeError::non_scalar(what)),
            bound => Ok(self.test(op, bound)),
        }
    }

    /// The attribute is null.
    pub fn is_null(&self) -> Predicate<E> {
        self.test(Op::IsNull, Operand::Null)
    }

    /// The attribute equals `value`. A null `value` matches null attributes.
    ///
    /// Fails when `value` is a set or a pattern; use [`is_in`](Self::is_in)
    /// or [`string_matches`](Self::string_matches) for those.
    pub fn equals(&self, value: impl Into<Operand>) -> Result<Predicate<E>> {
        match value.into() {
            Operand::Set(_) | Operand::Pattern(_) => Err(SqlikeError::non_scalar("equals")),
            value => Ok(self.test(Op::Eq, value)),
        }
    }

    /// The attribute equals one of `values`.
    pub fn is_in<I, V>(&self, values: I) -> Predicate<E>
    where
        I: IntoIterator<Item = V>,
        V: Into<Operand>,
    {
        let set = values.into_iter().map(Into::into).collect();
        self.test(Op::In, Operand::Set(set))
    }

    /// The attribute is greater than `bound`. Fails on a null, set or pattern bound.
    pub fn greater_than(&self, bound: impl Into<Operand>) -> Result<Predicate<E>> {
        self.ordering_test(Op::Gt, bound.into(), "greater_than")
    }

    /// The attribute is greater than or equal to `bound`. Fails on a null, set or pattern bound.
    pub fn greater_than_or_equals(&self, bound: impl Into<Operand>) -> Result<Predicate<E>> {
        self.ordering_test(Op::Gte, bound.into(), "greater_than_or_equals")
    }

    /// The attribute is less than `bound`. Fails on a null, set or pattern bound.
    pub fn less_than(&self, bound: impl Into<Operand>) -> Result<Predicate<E>> {
        self.ordering_test(Op::Lt, bound.into(), "less_than")
    }

    /// The attribute is less than or equal to `bound`. Fails on a null, set or pattern bound.
    pub fn less_than_or_equals(&self, bound: impl Into<Operand>) -> Result<Predicate<E>> {
        self.ordering_test(Op::Lte, bound.into(), "less_than_or_equals")
    }

    /// The attribute is a string equal to `value`.
    pub fn string_equals(&self, value: impl Into<String>) -> Predicate<E> {
        self.test(Op::Eq, Operand::String(value.into()))
    }

    /// The attribute is a string fully matching `pattern`.
    pub fn string_matches(&self, pattern: &str) -> Result<Predicate<E>> {
        let regex = Regex::new(&format!("^(?:{pattern})$"))?;
        Ok(self.test(Op::Matches, Operand::Pattern(regex)))
    }

    /// The attribute is a string starting with `prefix`.
    pub fn string_starts_with(&self, prefix: impl Into<String>) -> Predicate<E> {
        self.test(Op::StartsWith, Operand::String(prefix.into()))
    }

    /// The attribute is a string ending with `suffix`.
    pub fn string_ends_with(&self, suffix: impl Into<String>) -> Predicate<E> {
        self.test(Op::EndsWith, Operand::String(suffix.into()))
    }

    /// The attribute is a string containing `needle`.
    pub fn string_contains(&self, needle: impl Into<String>) -> Predicate<E> {
        self.test(Op::Contains, Operand::String(needle.into()))
    }

    /// The attribute is a string sorting strictly after `other`.
    pub fn string_follows(&self, other: impl Into<String>) -> Predicate<E> {
        self.test(Op::Follows, Operand::String(other.into()))
    }

    /// The attribute is a string sorting strictly before `other`.
    pub fn string_precedes(&self, other: impl Into<String>) -> Predicate<E> {
        self.test(Op::Precedes, Operand::String(other.into()))
    }

    /// The attribute is the empty string.
    pub fn empty_string(&self) -> Predicate<E> {
        self.test(Op::IsEmpty, Operand::Null)
    }
}

// ============================================================================
// Element-level constructors
// ============================================================================

/// Matches every element.
pub fn always_true<E>() -> Predicate<E> {
    Predicate::Const(true)
}

/// Matches no element.
pub fn always_false<E>() -> Predicate<E> {
    Predicate::Const(false)
}

/// The element is null.
pub fn is_null<E: AsValue>() -> Predicate<E> {
    Attribute::identity().is_null()
}

/// The element equals `value`.
pub fn equals<E: AsValue>(value: impl Into<Operand>) -> Result<Predicate<E>> {
    Attribute::identity().equals(value)
}

/// The element equals one of `values`; include `None` to match nulls.
pub fn is_in<E, I, V>(values: I) -> Predicate<E>
where
    E: AsValue,
    I: IntoIterator<Item = V>,
    V: Into<Operand>,
{
    Attribute::identity().is_in(values)
}

/// The element is greater than `bound`.
pub fn greater_than<E: AsValue>(bound: impl Into<Operand>) -> Result<Predicate<E>> {
    Attribute::identity().greater_than(bound)
}

/// The element is greater than or equal to `bound`.
pub fn greater_than_or_equals<E: AsValue>(bound: impl Into<Operand>) -> Result<Predicate<E>> {
    Attribute::identity().greater_than_or_equals(bound)
}

/// The element is less than `bound`.
pub fn less_than<E: AsValue>(bound: impl Into<Operand>) -> Result<Predicate<E>> {
    Attribute::identity().less_than(bound)
}

/// The element is less than or equal to `bound`.
pub fn less_than_or_equals<E: AsValue>(bound: impl Into<Operand>) -> Result<Predicate<E>> {
    Attribute::identity().less_than_or_equals(bound)
}

/// The element is a string equal to `value`.
pub fn string_equals<E: AsValue>(value: impl Into<String>) -> Predicate<E> {
    Attribute::identity().string_equals(value)
}

/// The element is a string fully matching `pattern`.
pub fn string_matches<E: AsValue>(pattern: &str) -> Result<Predicate<E>> {
    Attribute::identity().string_matches(pattern)
}

/// The element is a string starting with `prefix`.
pub fn string_starts_with<E: AsValue>(prefix: impl Into<String>) -> Predicate<E> {
    Attribute::identity().string_starts_with(prefix)
}

/// The element is a string ending with `suffix`.
pub fn string_ends_with<E: AsValue>(suffix: impl Into<String>) -> Predicate<E> {
    Attribute::identity().string_ends_with(suffix)
}

/// The element is a string containing `needle`.
pub fn string_contains<E: AsValue>(needle: impl Into<String>) -> Predicate<E> {
    Attribute::identity().string_contains(needle)
}

/// The element is a string sorting strictly after `other`.
pub fn string_follows<E: AsValue>(other: impl Into<String>) -> Predicate<E> {
    Attribute::identity().string_follows(other)
}

/// The element is a string sorting strictly before `other`.
pub fn string_precedes<E: AsValue>(other: impl Into<String>) -> Predicate<E> {
    Attribute::identity().string_precedes(other)
}

/// The element is the empty string.
pub fn empty_string<E: AsValue>() -> Predicate<E> {
    Attribute::identity().empty_string()
}

// ============================================================================
// Combinators
// ============================================================================

/// True iff every predicate is true; vacuously true.
pub fn and<E, I>(predicates: I) -> Predicate<E>
where
    I: IntoIterator<Item = Predicate<E>>,
{
    Predicate::And(predicates.into_iter().collect())
}

/// True iff at least one predicate is true; vacuously false.
pub fn or<E, I>(predicates: I) -> Predicate<E>
where
    I: IntoIterator<Item = Predicate<E>>,
{
    Predicate::Or(predicates.into_iter().collect())
}

/// Logical negation.
pub fn not<E>(predicate: Predicate<E>) -> Predicate<E> {
    predicate.negate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[derive(Debug)]
    struct Person {
        name: Option<String>,
        age: i32,
    }

    fn name(p: &Person) -> Value<'_> {
        p.name.as_deref().into()
    }

    fn age(p: &Person) -> Value<'_> {
        p.age.into()
    }

    fn person(n: Option<&str>, a: i32) -> Person {
        Person {
            name: n.map(str::to_string),
            age: a,
        }
    }

    #[test]
    fn constants() {
        assert!(always_true::<i32>().matches(&1));
        assert!(!always_false::<i32>().matches(&1));
        assert_eq!(always_true::<i32>().is_const(), Some(true));
        assert_eq!(is_null::<i32>().is_const(), None);
    }

    #[test]
    fn null_checks() {
        let p = is_null::<Option<&str>>();
        assert!(p.matches(&None));
        assert!(!p.matches(&Some("")));
        assert!(!not(p).matches(&None));
    }

    #[test]
    fn equals_coerces_numbers() {
        let p = equals::<u8>(3i64).unwrap();
        assert!(p.matches(&3));
        assert!(!p.matches(&4));
        assert!(equals::<f64>(2).unwrap().matches(&2.0));
    }

    #[test]
    fn equals_null_matches_null() {
        let p = equals::<Option<i32>>(None::<i32>).unwrap();
        assert!(p.matches(&None));
        assert!(!p.matches(&Some(0)));
    }

    #[test]
    fn in_set_with_and_without_null() {
        let with_null = is_in::<Option<&str>, _, _>([None, Some("A"), Some("B")]);
        assert!(with_null.matches(&Some("A")));
        assert!(with_null.matches(&None));
        assert!(!with_null.matches(&Some("C")));

        let without_null = is_in::<Option<&str>, _, _>(["A", "B"]);
        assert!(without_null.matches(&Some("B")));
        assert!(!without_null.matches(&None));
    }

    #[test]
    fn ordering_predicates() {
        let gt = greater_than::<i32>(10).unwrap();
        assert!(gt.matches(&11));
        assert!(!gt.matches(&10));

        let gte = greater_than_or_equals::<i32>(10).unwrap();
        assert!(gte.matches(&10));
        assert!(!gte.matches(&9));

        let lt = less_than::<i32>(10).unwrap();
        assert!(lt.matches(&9));
        assert!(!lt.matches(&10));

        let lte = less_than_or_equals::<i32>(10).unwrap();
        assert!(lte.matches(&10));
        assert!(!lte.matches(&11));
    }

    #[test]
    fn ordering_never_matches_null() {
        let preds = [
            greater_than::<Option<i32>>(0).unwrap(),
            greater_than_or_equals::<Option<i32>>(i32::MIN).unwrap(),
            less_than::<Option<i32>>(0).unwrap(),
            less_than_or_equals::<Option<i32>>(i32::MAX).unwrap(),
        ];
        for p in &preds {
            assert!(!p.matches(&None), "{p} matched null");
        }
    }

    #[test]
    fn ordering_rejects_null_bound() {
        let err = greater_than::<Option<i32>>(None::<i32>).unwrap_err();
        assert!(matches!(
            err,
            SqlikeError::InvalidArgument {
                what: "greater_than",
                ..
            }
        ));
        assert!(less_than_or_equals::<i32>(Operand::Null).is_err());
    }

    #[test]
    fn set_and_pattern_operands_are_rejected() {
        let set = || Operand::Set(vec![1.into()]);
        let pattern = || Operand::Pattern(Regex::new("^1$").unwrap());

        for bound in [set(), pattern()] {
            assert!(matches!(
                greater_than::<i32>(bound.clone()),
                Err(SqlikeError::InvalidArgument { .. })
            ));
            assert!(less_than_or_equals::<i32>(bound.clone()).is_err());
            assert!(matches!(
                equals::<Option<i32>>(bound),
                Err(SqlikeError::InvalidArgument { what: "equals", .. })
            ));
        }
        assert!(Attribute::new("age", age).equals(Operand::Set(vec![])).is_err());
    }

    #[test]
    fn nested_set_candidates_never_match() {
        let p = is_in::<Option<i32>, _, _>([Operand::Set(vec![Operand::Null])]);
        assert!(!p.matches(&None));
        assert!(!p.matches(&Some(1)));
    }

    #[test]
    fn ordering_type_mismatch_never_matches() {
        let p = greater_than::<&str>(1).unwrap();
        assert!(!p.matches(&"zzz"));
    }

    #[test]
    fn string_predicates() {
        assert!(string_equals::<&str>("A").matches(&"A"));
        assert!(!string_equals::<&str>("A").matches(&"a"));
        assert!(string_starts_with::<&str>("Del").matches(&"Delta"));
        assert!(string_ends_with::<&str>("a").matches(&"Alpha"));
        assert!(string_contains::<&str>("l").matches(&"Global"));
        assert!(string_follows::<&str>("Charlie").matches(&"Delta"));
        assert!(!string_follows::<&str>("Charlie").matches(&"Charlie"));
        assert!(string_precedes::<&str>("Global").matches(&"Fox"));
        assert!(empty_string::<&str>().matches(&""));
        assert!(!empty_string::<&str>().matches(&" "));
    }

    #[test]
    fn string_predicates_reject_null_and_non_strings() {
        let preds: Vec<Predicate<Option<&str>>> = vec![
            string_equals(""),
            string_starts_with(""),
            string_ends_with(""),
            string_contains(""),
            string_follows(""),
            string_precedes("zzz"),
            empty_string(),
            string_matches(".*").unwrap(),
        ];
        for p in &preds {
            assert!(!p.matches(&None), "{p} matched null");
        }
        assert!(!string_contains::<i32>("1").matches(&1));
    }

    #[test]
    fn string_matches_is_full_match() {
        let p = string_matches::<&str>("A|B|C").unwrap();
        assert!(p.matches(&"A"));
        assert!(p.matches(&"C"));
        assert!(!p.matches(&"AB"));
        assert!(!p.matches(&"xA"));
    }

    #[test]
    fn string_matches_invalid_pattern() {
        let err = string_matches::<&str>("(").unwrap_err();
        assert!(matches!(err, SqlikeError::InvalidRegex(_)));
    }

    #[test]
    fn combinators() {
        let t = always_true::<i32>;
        let f = always_false::<i32>;

        assert!(and::<i32, _>([]).matches(&0));
        assert!(!or::<i32, _>([]).matches(&0));
        assert!(and([t(), t()]).matches(&0));
        assert!(!and([t(), f()]).matches(&0));
        assert!(or([f(), t()]).matches(&0));
        assert!(!or([f(), f()]).matches(&0));
        assert!(not(f()).matches(&0));
    }

    #[test]
    fn operators_build_trees() {
        type Row = Option<&'static str>;
        let p = (is_null::<Row>() | empty_string::<Row>()) & !string_equals::<Row>("x");
        assert_eq!(
            p.to_string(),
            r#"and(or(self is null, self is empty), not(self = "x"))"#
        );
        assert!(p.matches(&None));
        assert!(p.matches(&Some("")));
        assert!(!p.matches(&Some("y")));
    }

    #[test]
    fn and_also_flattens() {
        let p = always_true::<i32>()
            .and_also(always_true())
            .and_also(always_false());
        match &p {
            Predicate::And(children) => assert_eq!(children.len(), 3),
            other => panic!("expected and, got {other}"),
        }
        assert!(!p.matches(&0));
    }

    #[test]
    fn attribute_scoped() {
        let name = Attribute::new("name", name);
        let age = Attribute::new("age", age);

        let p = or([
            name.is_null(),
            name.string_ends_with("2"),
            age.less_than_or_equals(0).unwrap(),
        ]);

        assert!(p.matches(&person(None, 5)));
        assert!(p.matches(&person(Some("name2"), 2)));
        assert!(p.matches(&person(Some(""), 0)));
        assert!(!p.matches(&person(Some("name1"), 1)));
    }

    #[test]
    fn attribute_in_set() {
        let age = Attribute::new("age", age);
        let p = not(age.is_in([0, 2]));
        assert!(p.matches(&person(None, 1)));
        assert!(!p.matches(&person(None, 2)));
        assert_eq!(p.to_string(), "not(age in [0, 2])");
    }

    #[test]
    fn test_accessors() {
        let age = Attribute::new("age", age);
        let p = age.greater_than(Number::I64(3)).unwrap();
        let Predicate::Test(test) = &p else {
            panic!("expected test leaf");
        };
        assert_eq!(test.attribute().name(), "age");
        assert_eq!(test.op(), Op::Gt);
        assert_eq!(test.operand(), &Operand::Number(Number::I64(3)));
        assert!(test.matches_value(&Value::Number(Number::F64(3.5))));
    }
}
