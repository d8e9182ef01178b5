//! Canonical list operations.
//!
//! Each operation takes the receiver as its first parameter and returns a fresh list on the receiver's prototype.

use batteries_core::errors as msg;
use batteries_core::index::sub_range;

use crate::errors::{BatteriesError, Result};
use crate::ops;
use crate::value::Value;

use super::{List, Sequence};

const COMPARE: &str = "compare";

/// Return a new list with `x` added as the last element.
pub fn append(l: &List, x: Value) -> List {
    let mut items = Vec::with_capacity(l.len() + 1);
    items.extend_from_slice(l.as_slice());
    items.push(x);
    l.derive(items)
}

/// Return the elements of `l` followed by the elements of each of `others`, in argument order.
///
/// With no `others` the result is a copy of `l`.
#[tracing::instrument(level = "trace", skip_all, fields(len = l.len(), args = others.len()))]
pub fn concat(l: &List, others: &[&dyn Sequence]) -> List {
    let total = l.len() + others.iter().map(|s| s.elements().len()).sum::<usize>();
    let mut items = Vec::with_capacity(total);
    items.extend_from_slice(l.as_slice());
    for seq in others {
        items.extend_from_slice(seq.elements());
    }
    l.derive(items)
}

/// Return a new list with `x` added in front: `{x} .. l`.
pub fn cons(l: &List, x: Value) -> List {
    let mut items = Vec::with_capacity(l.len() + 1);
    items.push(x);
    items.extend_from_slice(l.as_slice());
    l.derive(items)
}

/// Return `l` concatenated with itself `n` times.
///
/// ## Errors
/// - `ContractViolation` if `n` is negative, or if the result would not fit in memory.
#[tracing::instrument(level = "trace", skip_all, fields(len = l.len(), n = n))]
pub fn rep(l: &List, n: i64) -> Result<List> {
    let count = usize::try_from(n).map_err(|_| BatteriesError::bad_argument("rep", 2, "non-negative integer", n))?;
    if l.is_empty() || count == 0 {
        return Ok(l.derive(Vec::new()));
    }
    let total = l
        .len()
        .checked_mul(count)
        .ok_or_else(|| BatteriesError::bad_argument("rep", 2, "repeat count within range", n))?;
    let mut items = Vec::new();
    items
        .try_reserve_exact(total)
        .map_err(|_| BatteriesError::bad_argument("rep", 2, "repeat count within range", n))?;
    for _ in 0..count {
        items.extend_from_slice(l.as_slice());
    }
    Ok(l.derive(items))
}

/// Return the inclusive, 1-based sub-range `[from, to]` of `l`.
///
/// `from` defaults to `1` and `to` to `#l`. Negative positions count from the end (`-1` is the last element).
/// Out-of-range positions clip; a range that selects nothing yields an empty list.
pub fn sub(l: &List, from: Option<i64>, to: Option<i64>) -> List {
    let len = l.len();
    let range = sub_range(len, from.unwrap_or(1), to.unwrap_or(i64::MAX));
    l.derive(l.as_slice()[range].to_vec())
}

/// Return every element but the first; an empty list stays empty.
pub fn tail(l: &List) -> List {
    sub(l, Some(2), None)
}

/// Compare two lists lexicographically, returning `-1`, `0` or `1`.
///
/// Elements are compared left to right with the operator table's `<`, so elements that define their own ordering
/// (nested lists) are compared by it. Equal pairs are skipped without consulting an ordering. When one list is a
/// prefix of the other, the shorter one is less.
///
/// ## Errors
/// - `TypeMismatch` naming `compare` if a pair of differing elements has no ordering (a number against a string,
///   for example).
pub fn compare(l: &List, m: &List) -> Result<i32> {
    for (a, b) in l.iter().zip(m.iter()) {
        if a == b {
            continue;
        }
        if ops::lt(a, b).map_err(|e| incomparable(e, a, b))? {
            return Ok(-1);
        }
        if ops::gt(a, b).map_err(|e| incomparable(e, a, b))? {
            return Ok(1);
        }
    }
    Ok(match l.len().cmp(&m.len()) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    })
}

/// Report an element pair the operator table could not order as a failure of `compare` itself.
///
/// Errors already raised by a nested `compare` pass through, so the innermost offending pair is the one named.
fn incomparable(err: BatteriesError, a: &Value, b: &Value) -> BatteriesError {
    match err {
        BatteriesError::TypeMismatch { ref op, .. } if op != COMPARE => {
            BatteriesError::type_mismatch(COMPARE, 2, msg::compare_between(a.type_name(), b.type_name()))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;

    #[test]
    fn sub_defaults_cover_the_whole_list() {
        let l = list![1, 2, 3];
        assert_eq!(sub(&l, None, None), l);
        assert_eq!(sub(&l, Some(-1), Some(-1)), list![3]);
        assert_eq!(sub(&l, Some(3), Some(1)), list![]);
        assert_eq!(sub(&l, Some(-10), Some(10)), l);
    }

    #[test]
    fn tail_of_empty_is_empty() {
        assert!(tail(&list![]).is_empty());
        assert_eq!(tail(&list![1, 2]), list![2]);
    }

    #[test]
    fn rep_rejects_negative_counts() {
        let err = rep(&list![1], -1).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad argument #2 to 'rep' (non-negative integer expected, got -1)"
        );
        assert_eq!(rep(&list![1, 2], 0).unwrap(), list![]);
    }

    #[test]
    fn concat_accepts_plain_sequences() {
        let l = list![1];
        let v = vec![Value::Int(2)];
        let a = [Value::Int(3), Value::Int(4)];
        let others: [&dyn Sequence; 2] = [&v, &a];
        assert_eq!(concat(&l, &others), list![1, 2, 3, 4]);
    }

    #[test]
    fn receiver_is_untouched() {
        let l = list![1, 2];
        let _ = append(&l, Value::Int(3));
        let _ = cons(&l, Value::Int(0));
        assert_eq!(l, list![1, 2]);
    }

    #[test]
    fn compare_recurses_into_nested_lists() {
        let a = list![list![1, 2], 5];
        let b = list![list![1, 3], 0];
        assert_eq!(compare(&a, &b).unwrap(), -1);
        assert_eq!(compare(&b, &a).unwrap(), 1);
    }

    #[test]
    fn rep_reports_counts_too_large_to_allocate() {
        let err = rep(&list![1], 1 << 60).unwrap_err();
        assert_eq!(err.kind(), batteries_core::ErrorKind::ContractViolation);
        assert_eq!(err.position(), Some(2));
    }

    #[test]
    fn compare_errors_name_compare() {
        let err = compare(&list![1], &list!["1"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad argument #2 to 'compare' (attempt to compare number with string)"
        );

        let err = compare(&list![list![1, 2]], &list![list![1, "x"]]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bad argument #2 to 'compare' (attempt to compare number with string)"
        );
    }

    #[test]
    fn compare_skips_equal_unorderable_elements() {
        let t = crate::table::Table::new();
        let a = list![Value::Table(t.clone()), 1];
        let b = list![Value::Table(t), 2];
        assert_eq!(compare(&a, &b).unwrap(), -1);
    }
}
