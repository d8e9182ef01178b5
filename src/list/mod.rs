//! The List type.
//!
//! A [`List`] is a dense, 1-indexed, immutable sequence of [`Value`]s tagged with the [`Prototype`] it was cloned
//! from. Every operation that looks like it modifies a list returns a new one carrying the same prototype; the
//! receiver is never touched, and element values are shared rather than copied.
//!
//! Operations exist in two equivalent forms:
//! - free functions taking the list first ([`append`], [`concat`], [`sub`], ...): the single implementation,
//! - methods on [`List`] that forward to them.
//!
//! The dynamic surface (`List::call` / [`crate::ListModule::call`]) resolves operation names through the same
//! implementations; see [`dispatch`].
//!
//! ## Operators
//! - `..` concatenates two lists ([`Concatenable`]).
//! - `+` appends its right operand as ONE element, even when that operand is itself a list ([`Appendable`]).
//! - `<` / `<=` compare structurally ([`Orderable`], [`PartialOrd`]); `>` / `>=` are the same relation with the
//!   operands swapped.
//!
//! ## Examples
//!
//! ```rust
//! use batteries::{List, Value, list};
//!
//! let l = list![1, 2, 3];
//! assert_eq!(l.append(4), list![1, 2, 3, 4]);
//! assert_eq!(l.sub(Some(-2), None), list![2, 3]);
//! assert_eq!(l.clone() + Value::from(list![4]), list![1, 2, 3, list![4]]);
//! assert!(l < list![1, 2, 3, 4]);
//! ```

pub mod dispatch;
pub mod legacy;
mod operations;
mod prototype;
mod sequence;

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::sync::Arc;

use batteries_core::errors as msg;
use batteries_core::index;

use crate::capability::{Appendable, Capability, Concatenable, Orderable};
use crate::errors::{BatteriesError, Result};
use crate::value::Value;

pub use operations::{append, compare, concat, cons, rep, sub, tail};
pub use prototype::Prototype;
pub use sequence::Sequence;
use sequence::Elements;

/// Build a [`List`] on the shared prototype from values convertible into [`Value`].
///
/// ```rust
/// use batteries::list;
///
/// let nested = list![1, "two", list![3.0]];
/// assert_eq!(nested.to_string(), r#"List {1, "two", List {3.0}}"#);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($x:expr),+ $(,)?) => {
        $crate::List::from_values([$($crate::Value::from($x)),+])
    };
}

/// A dense, 1-indexed, immutable sequence of values.
#[derive(Clone)]
pub struct List {
    items: Arc<[Value]>,
    proto: Arc<Prototype>,
}

impl List {
    /// An empty list on the shared prototype.
    pub fn new() -> Self {
        Prototype::shared().empty()
    }

    /// A list on the shared prototype holding `values` in order.
    pub fn from_values<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Self::with_prototype(Prototype::shared(), values.into_iter().map(Into::into).collect())
    }

    pub(crate) fn with_prototype(proto: Arc<Prototype>, items: Vec<Value>) -> Self {
        Self {
            items: items.into(),
            proto,
        }
    }

    /// A new list sharing this list's prototype.
    pub(crate) fn derive(&self, items: Vec<Value>) -> Self {
        Self::with_prototype(Arc::clone(&self.proto), items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Element at 1-based `position`, or `None` outside `1..=len`.
    pub fn get(&self, position: i64) -> Option<&Value> {
        index::position(self.len(), position).map(|i| &self.items[i])
    }

    pub fn first(&self) -> Option<&Value> {
        self.items.first()
    }

    pub fn last(&self) -> Option<&Value> {
        self.items.last()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn prototype(&self) -> &Arc<Prototype> {
        &self.proto
    }

    /// The type tag carried by the prototype (`"List"`).
    pub fn type_name(&self) -> &'static str {
        self.proto.type_name()
    }

    pub fn has_capability(&self, capability: Capability) -> bool {
        self.proto.has_capability(capability)
    }

    /// Whether two lists share the same backing storage.
    pub fn ptr_eq(&self, other: &List) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    // --- canonical operations, method form ---------------------------------------------------

    pub fn append(&self, x: impl Into<Value>) -> List {
        append(self, x.into())
    }

    pub fn concat(&self, others: &[&dyn Sequence]) -> List {
        concat(self, others)
    }

    pub fn cons(&self, x: impl Into<Value>) -> List {
        cons(self, x.into())
    }

    pub fn rep(&self, n: i64) -> Result<List> {
        rep(self, n)
    }

    pub fn sub(&self, from: Option<i64>, to: Option<i64>) -> List {
        sub(self, from, to)
    }

    pub fn tail(&self) -> List {
        tail(self)
    }

    pub fn compare(&self, other: &List) -> Result<i32> {
        compare(self, other)
    }

    /// Invoke an operation by name, method style: `l:name(args...)`.
    ///
    /// Resolves through the prototype's method table, so legacy names are available (with a one-time advisory)
    /// unless the prototype was built with legacy operations removed.
    ///
    /// ## Errors
    /// - `NoSuchOperation` if the method table has no entry for `name`.
    /// - `ContractViolation` for a wrong argument count or a malformed argument.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let entry = self
            .proto
            .methods()
            .get(name)
            .ok_or_else(|| BatteriesError::no_such_operation(name))?;
        entry.advise();
        entry.invoke_method(self, args)
    }
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

/// Structural equality; the prototype takes no part in it.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

/// Structural order; `None` when some pair of elements cannot be ordered.
impl PartialOrd for List {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self, other).ok().map(|c| c.cmp(&0))
    }
}

impl Orderable for List {
    fn order(&self, other: &Value) -> Result<i32> {
        match other {
            Value::List(m) => compare(self, m),
            _ => Err(BatteriesError::type_mismatch(
                "compare",
                2,
                msg::compare_between(self.type_name(), other.type_name()),
            )),
        }
    }
}

impl Concatenable for List {
    fn concat_value(&self, rhs: &Value) -> Result<Value> {
        match Elements::from_value(rhs) {
            Some(m) => Ok(Value::List(concat(self, &[&m as &dyn Sequence]))),
            None => Err(BatteriesError::bad_argument(
                "concat",
                2,
                self.type_name(),
                rhs.type_name(),
            )),
        }
    }
}

impl Appendable for List {
    fn append_value(&self, rhs: &Value) -> Value {
        Value::List(append(self, rhs.clone()))
    }
}

/// `l + x` appends `x` as a single element.
impl Add<Value> for List {
    type Output = List;

    fn add(self, rhs: Value) -> List {
        append(&self, rhs)
    }
}

impl FromIterator<Value> for List {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl From<Vec<Value>> for List {
    fn from(values: Vec<Value>) -> Self {
        Self::with_prototype(Prototype::shared(), values)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.type_name())?;
        for (idx, v) in self.items.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            v.fmt_nested(f)?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Key, Table};

    #[test]
    fn get_is_one_based() {
        let l = list![10, 20];
        assert_eq!(l.get(1), Some(&Value::Int(10)));
        assert_eq!(l.get(2), Some(&Value::Int(20)));
        assert_eq!(l.get(0), None);
        assert_eq!(l.get(3), None);
    }

    #[test]
    fn derived_lists_share_the_prototype() {
        let l = list![1];
        let m = l.append(2).tail().cons(0);
        assert!(Arc::ptr_eq(l.prototype(), m.prototype()));
    }

    #[test]
    fn add_appends_a_list_as_one_element() {
        let l = list![1, 2];
        let r = l.clone() + Value::from(list![3, 4]);
        assert_eq!(r.len(), 3);
        assert_eq!(r.last(), Some(&Value::from(list![3, 4])));
    }

    #[test]
    fn concat_value_rejects_non_lists() {
        let err = list![1].concat_value(&Value::Int(2)).unwrap_err();
        assert_eq!(err.to_string(), "bad argument #2 to 'concat' (List expected, got number)");
    }

    #[test]
    fn concat_value_reads_positional_tables() {
        let t = Table::from_entries([(Key::Int(1), Value::Int(3)), (Key::Int(2), Value::Int(4))]);
        let r = list![1, 2].concat_value(&Value::Table(t)).unwrap();
        assert_eq!(r, Value::from(list![1, 2, 3, 4]));

        let keyed = Table::from_entries([(Key::Str("k".into()), Value::Int(1))]);
        let err = list![1].concat_value(&Value::Table(keyed)).unwrap_err();
        assert_eq!(err.to_string(), "bad argument #2 to 'concat' (List expected, got table)");
    }

    #[test]
    fn partial_ord_follows_compare() {
        assert!(list![1, 2] < list![1, 2, 3]);
        assert!(list![1, 3] > list![1, 2, 9]);
        assert_eq!(list![1, "a"].partial_cmp(&list![1, 2]), None);
    }

    #[test]
    fn display_quotes_nested_strings() {
        assert_eq!(list![].to_string(), "List {}");
        assert_eq!(list!["a", Value::Nil, 1.5].to_string(), r#"List {"a", nil, 1.5}"#);
    }
}
