//! Capabilities a value type may implement.
//!
//! The operator table checks for these before falling back to primitive semantics, so a type that defines its own
//! ordering, `..` or `+` gets it honored wherever the operator is applied (operator syntax, operator-table function
//! values, nested comparisons inside other containers).

use crate::errors::Result;
use crate::value::Value;

/// Named behaviors a prototype advertises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// New instances can be produced by cloning the prototype with an initializer.
    Clonable,
    /// `+` appends a single element.
    Appendable,
    /// `..` concatenates sequences.
    Concatenable,
    /// `<` and `<=` follow the type's own ordering.
    Orderable,
}

/// A type with its own total ordering.
///
/// `>` and `>=` are never implemented separately: the operator table evaluates them as `<` / `<=` with the operands
/// swapped.
pub trait Orderable {
    /// Compare against `other`, returning `-1`, `0` or `1`.
    fn order(&self, other: &Value) -> Result<i32>;

    fn less_than(&self, other: &Value) -> Result<bool> {
        Ok(self.order(other)? < 0)
    }

    fn less_equal(&self, other: &Value) -> Result<bool> {
        Ok(self.order(other)? <= 0)
    }
}

/// A type with its own `..` behavior.
pub trait Concatenable {
    fn concat_value(&self, rhs: &Value) -> Result<Value>;
}

/// A type with its own `+` behavior.
pub trait Appendable {
    fn append_value(&self, rhs: &Value) -> Value;
}
