//! Legacy list operations.
//!
//! These predate the canonical surface and are kept so existing callers keep working. They are reachable by name
//! through both dispatch tables (with a one-time advisory) and as the typed functions below, which carry
//! `#[deprecated]` so the compiler points Rust callers at the same migration.
//!
//! All of them follow the canonical rules: the receiver is never modified, and every list they return shares the
//! receiver's prototype.

#![allow(deprecated)]

use std::sync::Arc;

use crate::errors::{BatteriesError, Result};
use crate::function::Function;
use crate::ops;
use crate::table::{Key, Table};
use crate::value::Value;

use super::{List, Prototype, sub};

fn inner_list<'a>(op: &str, v: &'a Value, at: usize) -> Result<&'a List> {
    v.as_list().ok_or_else(|| {
        BatteriesError::bad_argument(op, 1, "List of Lists", format!("{} at position {}", v.type_name(), at + 1))
    })
}

fn table_key(op: &str, k: &Value) -> Result<Key> {
    Key::from_value(k)
        .ok_or_else(|| BatteriesError::bad_argument(op, 1, "boolean, integer or string key", k.type_name()))
}

/// All elements, in order.
#[deprecated(since = "0.2.0", note = "use `sub` instead")]
pub fn elems(l: &List) -> List {
    sub(l, None, None)
}

/// All elements, last first.
#[deprecated(since = "0.2.0", note = "iterate over the list's elements in reverse instead")]
pub fn relems(l: &List) -> List {
    l.derive(l.iter().rev().cloned().collect())
}

#[deprecated(since = "0.2.0", note = "iterate over the list's elements in reverse instead")]
pub fn reverse(l: &List) -> List {
    relems(l)
}

/// Keep the elements for which `p` returns a truthy value.
#[deprecated(since = "0.2.0", note = "use an iterator filter over the list's elements instead")]
pub fn filter(l: &List, p: &Function) -> Result<List> {
    let mut kept = Vec::new();
    for x in l {
        if p.call(std::slice::from_ref(x))?.is_truthy() {
            kept.push(x.clone());
        }
    }
    Ok(l.derive(kept))
}

/// Apply `f` to every element.
#[deprecated(since = "0.2.0", note = "use an iterator map over the list's elements instead")]
pub fn map(l: &List, f: &Function) -> Result<List> {
    let items = l
        .iter()
        .map(|x| f.call(std::slice::from_ref(x)))
        .collect::<Result<Vec<_>>>()?;
    Ok(l.derive(items))
}

/// Apply `f` to every element, each of which must be a list whose elements become `f`'s arguments.
#[deprecated(since = "0.2.0", note = "use an iterator map that spreads each inner list instead")]
pub fn map_with(l: &List, f: &Function) -> Result<List> {
    let items = l
        .iter()
        .enumerate()
        .map(|(i, x)| f.call(inner_list("map_with", x, i)?.as_slice()))
        .collect::<Result<Vec<_>>>()?;
    Ok(l.derive(items))
}

/// Left fold: `f(f(f(init, x1), x2), x3)`.
///
/// Without `init` the first element seeds the fold; an empty list then folds to `nil`.
#[deprecated(since = "0.2.0", note = "use an iterator fold over the list's elements instead")]
pub fn foldl(l: &List, f: &Function, init: Option<Value>) -> Result<Value> {
    let (seed, rest) = match init {
        Some(v) => (v, l.as_slice()),
        None => match l.as_slice().split_first() {
            Some((first, rest)) => (first.clone(), rest),
            None => return Ok(Value::Nil),
        },
    };
    rest.iter().try_fold(seed, |acc, x| f.call(&[acc, x.clone()]))
}

/// Right fold: `f(x1, f(x2, f(x3, init)))`.
///
/// Without `init` the last element seeds the fold; an empty list then folds to `nil`.
#[deprecated(since = "0.2.0", note = "use a reversed iterator fold over the list's elements instead")]
pub fn foldr(l: &List, f: &Function, init: Option<Value>) -> Result<Value> {
    let (seed, rest) = match init {
        Some(v) => (v, l.as_slice()),
        None => match l.as_slice().split_last() {
            Some((last, rest)) => (last.clone(), rest),
            None => return Ok(Value::Nil),
        },
    };
    rest.iter().rev().try_fold(seed, |acc, x| f.call(&[x.clone(), acc]))
}

fn flatten_into(out: &mut Vec<Value>, items: &[Value]) {
    for x in items {
        match x {
            Value::List(inner) => flatten_into(out, inner.as_slice()),
            other => out.push(other.clone()),
        }
    }
}

/// Flatten nested lists depth-first: `{1, {2, {3}}, 4}` becomes `{1, 2, 3, 4}`.
#[deprecated(since = "0.2.0", note = "flatten nested lists with an explicit traversal instead")]
#[tracing::instrument(level = "trace", skip_all, fields(len = l.len()))]
pub fn flatten(l: &List) -> List {
    let mut out = Vec::with_capacity(l.len());
    flatten_into(&mut out, l.as_slice());
    l.derive(out)
}

/// Reshape the flattened list into nested lists with dimensions `dims`.
///
/// One dimension may be `0`, which stands for "whatever fits": it becomes `ceil(#flat / product of the others)`.
/// Filling stops when the flattened list runs out: the last row may be short and rows past the end are left out,
/// so the work is bounded by the list's length rather than by `dims`. With no `dims` the result is the first element.
///
/// ## Returns
/// - `None` when more than one dimension is `0`: the shape cannot be determined.
///
/// ## Examples
/// ```rust
/// #![allow(deprecated)]
/// use batteries::list::legacy::shape;
/// use batteries::{Value, list};
///
/// let l = list![1, 2, 3, 4, 5, 6];
/// assert_eq!(shape(&l, &[3, 0]), Some(Value::from(list![list![1, 2], list![3, 4], list![5, 6]])));
/// assert_eq!(shape(&l, &[0, 0]), None);
/// ```
#[deprecated(since = "0.2.0", note = "reshape with explicit sub-ranges instead")]
#[tracing::instrument(level = "trace", skip_all, fields(len = l.len(), dims = ?dims))]
pub fn shape(l: &List, dims: &[usize]) -> Option<Value> {
    let flat = flatten(l);
    let mut dims = dims.to_vec();

    let mut wildcard = None;
    let mut size = 1usize;
    for (i, &d) in dims.iter().enumerate() {
        if d == 0 {
            if wildcard.is_some() {
                return None;
            }
            wildcard = Some(i);
        } else {
            size = size.saturating_mul(d);
        }
    }
    if let Some(i) = wildcard {
        dims[i] = flat.len().div_ceil(size);
    }

    let mut next = 0;
    Some(fill(&flat, &dims, &mut next))
}

fn fill(flat: &List, dims: &[usize], next: &mut usize) -> Value {
    match dims.split_first() {
        None => {
            let v = flat.as_slice().get(*next).cloned().unwrap_or_default();
            *next += 1;
            v
        }
        Some((&count, rest)) => {
            let mut row = Vec::new();
            for _ in 0..count {
                if *next >= flat.len() {
                    break;
                }
                let cell = fill(flat, rest, next);
                if !cell.is_nil() {
                    row.push(cell);
                }
            }
            Value::List(flat.derive(row))
        }
    }
}

/// Swap rows and columns of a list of lists.
///
/// Rows of unequal length are truncated to the shortest one, so every column is complete.
#[deprecated(since = "0.2.0", note = "build the columns with explicit indexing instead")]
pub fn transpose(l: &List) -> Result<List> {
    let rows = l
        .iter()
        .enumerate()
        .map(|(i, x)| inner_list("transpose", x, i))
        .collect::<Result<Vec<_>>>()?;
    let width = rows.iter().map(|r| r.len()).min().unwrap_or(0);
    let columns = (0..width)
        .map(|c| Value::List(l.derive(rows.iter().map(|r| r.as_slice()[c].clone()).collect())))
        .collect();
    Ok(l.derive(columns))
}

/// `map_with(transpose(l), f)`: apply `f` across the columns of a list of lists.
#[deprecated(since = "0.2.0", note = "zip the inner lists' iterators and map over them instead")]
pub fn zip_with(l: &List, f: &Function) -> Result<List> {
    map_with(&transpose(l)?, f)
}

/// Look `key` up in every element; elements without it contribute nothing.
#[deprecated(since = "0.2.0", note = "use an iterator map with the deref operator instead")]
pub fn project(l: &List, key: &Value) -> Result<List> {
    let mut items = Vec::with_capacity(l.len());
    for x in l {
        let v = ops::deref(x, key)?;
        if !v.is_nil() {
            items.push(v);
        }
    }
    Ok(l.derive(items))
}

/// Turn a list of `{key, value}` pairs into a table; later pairs win.
#[deprecated(since = "0.2.0", note = "build the table with a loop over the pairs instead")]
pub fn depair(l: &List) -> Result<Table> {
    l.iter()
        .enumerate()
        .map(|(i, x)| {
            let pair = inner_list("depair", x, i)?;
            let k = pair.get(1).unwrap_or(&Value::Nil);
            let v = pair.get(2).cloned().unwrap_or_default();
            Ok((table_key("depair", k)?, v))
        })
        .collect::<Result<Vec<_>>>()
        .map(Table::from_entries)
}

/// Turn a table into a list of `{key, value}` pairs, in the table's order, on the shared prototype.
#[deprecated(since = "0.2.0", note = "iterate over the table's entries instead")]
pub fn enpair(t: &Table) -> List {
    enpair_on(&Prototype::shared(), t)
}

pub(crate) fn enpair_on(proto: &Arc<Prototype>, t: &Table) -> List {
    let pairs = t
        .iter()
        .map(|(k, v)| Value::List(List::with_prototype(Arc::clone(proto), vec![k.to_value(), v.clone()])))
        .collect();
    List::with_prototype(Arc::clone(proto), pairs)
}

fn index_by(op: &str, l: &List, key: &Value, entry: impl Fn(usize, &Value) -> Value) -> Result<Table> {
    let mut entries = Vec::with_capacity(l.len());
    for (i, x) in l.iter().enumerate() {
        let k = ops::deref(x, key)?;
        if k.is_truthy() {
            entries.push((table_key(op, &k)?, entry(i + 1, x)));
        }
    }
    Ok(Table::from_entries(entries))
}

/// Map each element's `key` field to the element's 1-based position.
#[deprecated(since = "0.2.0", note = "build the index with a loop over the elements instead")]
pub fn index_key(l: &List, key: &Value) -> Result<Table> {
    index_by("index_key", l, key, |i, _| Value::from(i))
}

/// Map each element's `key` field to the element itself.
#[deprecated(since = "0.2.0", note = "build the index with a loop over the elements instead")]
pub fn index_value(l: &List, key: &Value) -> Result<Table> {
    index_by("index_value", l, key, |_, x| x.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    fn func(name: &str, f: impl Fn(&[Value]) -> Result<Value> + Send + Sync + 'static) -> Function {
        Function::new(name, f)
    }

    #[test]
    fn folds_seed_from_the_ends() {
        let minus = func("minus", |args| ops::diff(&args[0], &args[1]));
        let l = list![10, 3, 2];
        // (10 - 3) - 2
        assert_eq!(foldl(&l, &minus, None).unwrap(), Value::Int(5));
        // 10 - (3 - 2)
        assert_eq!(foldr(&l, &minus, None).unwrap(), Value::Int(9));
        assert_eq!(foldl(&list![], &minus, None).unwrap(), Value::Nil);
        assert_eq!(foldl(&l, &minus, Some(Value::Int(0))).unwrap(), Value::Int(-15));
    }

    #[test]
    fn flatten_is_depth_first() {
        let l = list![1, list![2, list![3]], list![], 4];
        assert_eq!(flatten(&l), list![1, 2, 3, 4]);
    }

    #[test]
    fn shape_fills_rows_and_drops_missing_cells() {
        let l = list![1, 2, 3, 4, 5];
        assert_eq!(
            shape(&l, &[0, 2]),
            Some(Value::from(list![list![1, 2], list![3, 4], list![5]]))
        );
        assert_eq!(shape(&l, &[]), Some(Value::Int(1)));
        assert_eq!(shape(&list![list![1, 2], list![3, 4]], &[4]), Some(Value::from(list![1, 2, 3, 4])));
    }

    #[test]
    fn shape_stops_when_the_elements_run_out() {
        let l = list![1, 2, 3];
        assert_eq!(shape(&l, &[usize::MAX]), Some(Value::from(list![1, 2, 3])));
        assert_eq!(
            shape(&l, &[usize::MAX, usize::MAX]),
            Some(Value::from(list![list![1, 2, 3]]))
        );
        assert_eq!(shape(&l, &[4, 2]), Some(Value::from(list![list![1, 2], list![3]])));
        assert_eq!(shape(&list![], &[usize::MAX]), Some(Value::from(list![])));
    }

    #[test]
    fn transpose_truncates_ragged_rows() {
        let l = list![list![1, 2, 3], list![4, 5]];
        assert_eq!(transpose(&l).unwrap(), list![list![1, 4], list![2, 5]]);
        assert!(transpose(&list![1]).is_err());
    }

    #[test]
    fn zip_with_spreads_columns() {
        let add = func("add", |args| ops::sum(&args[0], &args[1]));
        let l = list![list![1, 2], list![10, 20]];
        assert_eq!(zip_with(&l, &add).unwrap(), list![11, 22]);
    }

    #[test]
    fn pairs_round_trip_through_tables() {
        let pairs = list![list!["a", 1], list!["b", 2]];
        let t = depair(&pairs).unwrap();
        assert_eq!(t.get(&Value::str("b")), Value::Int(2));
        assert_eq!(enpair(&t), pairs);
    }

    #[test]
    fn depair_rejects_unkeyable_keys() {
        let err = depair(&list![list![1.5, "x"]]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad argument #1 to 'depair' (boolean, integer or string key expected, got number)"
        );
    }

    #[test]
    fn index_helpers_skip_elements_without_the_key() {
        let a = Table::from_entries([(Key::Str("id".into()), Value::str("x"))]);
        let b = Table::new();
        let l = list![a.clone(), b];
        let by_pos = index_key(&l, &Value::str("id")).unwrap();
        assert_eq!(by_pos.get(&Value::str("x")), Value::Int(1));
        assert_eq!(by_pos.len(), 1);
        let by_value = index_value(&l, &Value::str("id")).unwrap();
        assert_eq!(by_value.get(&Value::str("x")), Value::Table(a));
    }

    #[test]
    fn project_drops_absent_fields() {
        let a = Table::from_entries([(Key::Int(1), Value::str("first"))]);
        let l = list![a, Table::new()];
        assert_eq!(project(&l, &Value::Int(1)).unwrap(), list!["first"]);
    }
}
