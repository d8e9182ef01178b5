//! The operator table.
//!
//! Every built-in operator, wrapped as a plain function so it can be passed around as a [`Function`] value (for
//! example as the combining function of a fold). Names and symbols come from
//! [`batteries_core::lang::operators`]; this module only supplies the behavior.
//!
//! Key behaviors:
//! - Arithmetic requires numbers; anything else is a `TypeMismatch` naming the offending operand.
//! - Integer `+`, `-`, `*` stay integers (wrapping on overflow); `/` and `^` always produce floats.
//! - `%` is floored: the remainder takes the sign of the divisor.
//! - `and`/`or` return one of their operands, not a coerced boolean, and accept `nil`.
//! - `<`/`<=` defer to the left operand's own ordering when its type has one; `>`/`>=` swap the operands.
//! - `+` and `..` defer to the left operand's own behavior when its type has one (Lists append / concatenate).
//!
//! ## Examples
//!
//! ```rust
//! use batteries::ops;
//! use batteries::Value;
//!
//! let sum = ops::lookup("+").unwrap();
//! assert_eq!(sum.call(&[Value::Int(2), Value::Int(3)]).unwrap(), Value::Int(5));
//! assert_eq!(ops::conj(&Value::Int(0), &Value::str("x")), Value::str("x"));
//! ```

use std::cmp::Ordering;
use std::sync::LazyLock;

use batteries_core::errors as msg;
use batteries_core::lang::operators::{self, OPERATORS, OperatorId};

use crate::errors::{BatteriesError, Result};
use crate::function::Function;
use crate::value::Value;

// --- Numeric kernels ---------------------------------------------------------------------------

#[inline]
fn floored_mod_i64(a: i64, b: i64) -> i64 {
    debug_assert!(b != 0);
    // `wrapping_rem` keeps `i64::MIN % -1` from trapping.
    let r = a.wrapping_rem(b);
    if (r > 0 && b < 0) || (r < 0 && b > 0) { r + b } else { r }
}

#[inline]
fn floored_mod_f64(a: f64, b: f64) -> f64 {
    let r = a % b;
    if (r > 0.0 && b < 0.0) || (r < 0.0 && b > 0.0) {
        r + b
    } else {
        r
    }
}

/// A pair of numeric operands, promoted to a common representation.
enum Operands {
    Ints(i64, i64),
    Floats(f64, f64),
}

fn numeric(op: OperatorId, a: &Value, b: &Value) -> Result<Operands> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(Operands::Ints(*x, *y)),
        _ => {
            let x = a.as_number().ok_or_else(|| arith_error(op, 1, a))?;
            let y = b.as_number().ok_or_else(|| arith_error(op, 2, b))?;
            Ok(Operands::Floats(x, y))
        }
    }
}

fn arith_error(op: OperatorId, position: usize, operand: &Value) -> BatteriesError {
    BatteriesError::type_mismatch(operators::as_str(op), position, msg::arithmetic_on(operand.type_name()))
}

// --- String / access ---------------------------------------------------------------------------

/// `a .. b`.
///
/// Joins the textual representations of both operands (`nil` renders as `nil`). When the left operand defines its
/// own concatenation (a List), that is used instead.
pub fn concat(a: &Value, b: &Value) -> Result<Value> {
    if let Some(c) = a.as_concatenable() {
        return c.concat_value(b);
    }
    Ok(Value::from(format!("{a}{b}")))
}

/// `t[k]`, yielding `nil` instead of failing when `t` is falsy or `k` is absent.
///
/// Lists are indexed by 1-based position. Indexing any other non-container value is a `TypeMismatch`.
pub fn deref(t: &Value, k: &Value) -> Result<Value> {
    match t {
        _ if !t.is_truthy() => Ok(Value::Nil),
        Value::Table(table) => Ok(table.get(k)),
        Value::List(list) => Ok(k.as_int().and_then(|i| list.get(i)).cloned().unwrap_or_default()),
        other => Err(BatteriesError::type_mismatch(
            operators::as_str(OperatorId::Deref),
            1,
            msg::index_into(other.type_name()),
        )),
    }
}

// --- Arithmetic --------------------------------------------------------------------------------

/// `a + b`; a left operand with its own `+` (a List) appends `b` as a single element.
pub fn sum(a: &Value, b: &Value) -> Result<Value> {
    if let Some(l) = a.as_appendable() {
        return Ok(l.append_value(b));
    }
    Ok(match numeric(OperatorId::Sum, a, b)? {
        Operands::Ints(x, y) => Value::Int(x.wrapping_add(y)),
        Operands::Floats(x, y) => Value::Float(x + y),
    })
}

/// `a - b`.
pub fn diff(a: &Value, b: &Value) -> Result<Value> {
    Ok(match numeric(OperatorId::Diff, a, b)? {
        Operands::Ints(x, y) => Value::Int(x.wrapping_sub(y)),
        Operands::Floats(x, y) => Value::Float(x - y),
    })
}

/// `a * b`.
pub fn prod(a: &Value, b: &Value) -> Result<Value> {
    Ok(match numeric(OperatorId::Prod, a, b)? {
        Operands::Ints(x, y) => Value::Int(x.wrapping_mul(y)),
        Operands::Floats(x, y) => Value::Float(x * y),
    })
}

/// `a / b`, always a float (division by zero follows IEEE: `inf` or `nan`).
pub fn quot(a: &Value, b: &Value) -> Result<Value> {
    Ok(match numeric(OperatorId::Quot, a, b)? {
        Operands::Ints(x, y) => Value::Float(x as f64 / y as f64),
        Operands::Floats(x, y) => Value::Float(x / y),
    })
}

/// `a % b`, floored.
///
/// An integer modulo by zero is evaluated in floating point and yields `nan`.
pub fn modulo(a: &Value, b: &Value) -> Result<Value> {
    Ok(match numeric(OperatorId::Mod, a, b)? {
        Operands::Ints(x, 0) => Value::Float(floored_mod_f64(x as f64, 0.0)),
        Operands::Ints(x, y) => Value::Int(floored_mod_i64(x, y)),
        Operands::Floats(x, y) => Value::Float(floored_mod_f64(x, y)),
    })
}

/// `a ^ b` via floating-point exponentiation, so fractional exponents work.
pub fn pow(a: &Value, b: &Value) -> Result<Value> {
    Ok(match numeric(OperatorId::Pow, a, b)? {
        Operands::Ints(x, y) => Value::Float((x as f64).powf(y as f64)),
        Operands::Floats(x, y) => Value::Float(x.powf(y)),
    })
}

// --- Logical -----------------------------------------------------------------------------------

/// `a and b`: `a` if it is falsy, otherwise `b`.
pub fn conj(a: &Value, b: &Value) -> Value {
    if a.is_truthy() { b.clone() } else { a.clone() }
}

/// `a or b`: `a` if it is truthy, otherwise `b`.
pub fn disj(a: &Value, b: &Value) -> Value {
    if a.is_truthy() { a.clone() } else { b.clone() }
}

/// `not a`.
pub fn neg(a: &Value) -> Value {
    Value::Bool(!a.is_truthy())
}

// --- Relational --------------------------------------------------------------------------------

/// `a == b`.
pub fn eq(a: &Value, b: &Value) -> bool {
    a == b
}

/// `a ~= b`.
pub fn neq(a: &Value, b: &Value) -> bool {
    a != b
}

/// Primitive ordering for values without a relation of their own.
///
/// `None` means "unordered" (a NaN was involved); every comparison against it is false.
fn primitive_order(op: OperatorId, a: &Value, b: &Value) -> Result<Option<Ordering>> {
    match (a, b) {
        (Value::Int(x), Value::Int(y)) => Ok(Some(x.cmp(y))),
        (Value::Str(x), Value::Str(y)) => Ok(Some(x.cmp(y))),
        _ => match (a.as_number(), b.as_number()) {
            (Some(x), Some(y)) => Ok(x.partial_cmp(&y)),
            _ => Err(BatteriesError::type_mismatch(
                operators::as_str(op),
                2,
                msg::compare_between(a.type_name(), b.type_name()),
            )),
        },
    }
}

/// `a < b`.
pub fn lt(a: &Value, b: &Value) -> Result<bool> {
    if let Some(o) = a.as_orderable() {
        return o.less_than(b);
    }
    Ok(primitive_order(OperatorId::Lt, a, b)? == Some(Ordering::Less))
}

/// `a <= b`.
pub fn lte(a: &Value, b: &Value) -> Result<bool> {
    if let Some(o) = a.as_orderable() {
        return o.less_equal(b);
    }
    Ok(matches!(
        primitive_order(OperatorId::Lte, a, b)?,
        Some(Ordering::Less | Ordering::Equal)
    ))
}

/// `a > b`, evaluated as `b < a`.
pub fn gt(a: &Value, b: &Value) -> Result<bool> {
    lt(b, a)
}

/// `a >= b`, evaluated as `b <= a`.
pub fn gte(a: &Value, b: &Value) -> Result<bool> {
    lte(b, a)
}

// --- Table -------------------------------------------------------------------------------------

/// Apply an operator to its operands.
///
/// ## Errors
/// - `ContractViolation` if `args` does not hold exactly as many operands as the operator takes.
/// - Whatever the operator itself reports (`TypeMismatch` for arithmetic on non-numbers, ...).
pub fn apply(id: OperatorId, args: &[Value]) -> Result<Value> {
    let info = operators::info_for(id);
    let arity = info.fixity.arity();
    if args.len() != arity {
        return Err(BatteriesError::wrong_arity(info.name, arity, args.len()));
    }
    let a = &args[0];
    if arity == 1 {
        return Ok(neg(a));
    }
    let b = &args[1];
    match id {
        OperatorId::Concat => concat(a, b),
        OperatorId::Deref => deref(a, b),
        OperatorId::Sum => sum(a, b),
        OperatorId::Diff => diff(a, b),
        OperatorId::Prod => prod(a, b),
        OperatorId::Quot => quot(a, b),
        OperatorId::Mod => modulo(a, b),
        OperatorId::Pow => pow(a, b),
        OperatorId::Conj => Ok(conj(a, b)),
        OperatorId::Disj => Ok(disj(a, b)),
        OperatorId::Neg => Ok(neg(a)),
        OperatorId::Eq => Ok(Value::Bool(eq(a, b))),
        OperatorId::Neq => Ok(Value::Bool(neq(a, b))),
        OperatorId::Lt => lt(a, b).map(Value::Bool),
        OperatorId::Lte => lte(a, b).map(Value::Bool),
        OperatorId::Gt => gt(a, b).map(Value::Bool),
        OperatorId::Gte => gte(a, b).map(Value::Bool),
    }
}

/// One function value per registry entry, built once so repeated lookups return the same (identical) function.
static FUNCTIONS: LazyLock<Vec<(OperatorId, Function)>> = LazyLock::new(|| {
    OPERATORS
        .iter()
        .map(|info| {
            let id = info.id;
            (id, Function::new(info.name, move |args| apply(id, args)))
        })
        .collect()
});

/// Return the function value for an operator.
pub fn function(id: OperatorId) -> Function {
    FUNCTIONS
        .iter()
        .find(|(fid, _)| *fid == id)
        .map(|(_, f)| f.clone())
        .unwrap_or_else(|| Function::new(operators::as_str(id), move |args| apply(id, args)))
}

/// Look an operator up by function-style name (`"sum"`) or symbol (`"+"`).
pub fn lookup(spelling: &str) -> Option<Function> {
    operators::from_str(spelling).map(function)
}

/// Iterate over the whole table as `(name, function)` pairs, in registry order.
pub fn entries() -> impl Iterator<Item = (&'static str, Function)> {
    FUNCTIONS
        .iter()
        .map(|(id, f)| (operators::as_str(*id), f.clone()))
}
