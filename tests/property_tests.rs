//! Property-based tests for List and the operator table
//!
//! These tests use proptest to check the list laws across many randomly generated lists, including nested ones.

use batteries::{List, ListModule, Sequence, Value, list, ops};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Scalar elements that are always mutually comparable within their kind.
fn int_value() -> impl Strategy<Value = Value> {
    (-50i64..50).prop_map(Value::Int)
}

fn int_list() -> impl Strategy<Value = List> {
    prop::collection::vec(int_value(), 0..12).prop_map(List::from_values)
}

fn non_empty_int_list() -> impl Strategy<Value = List> {
    prop::collection::vec(int_value(), 1..12).prop_map(List::from_values)
}

/// Lists of integers and lists of integers, nested one level, so comparison recurses.
fn nested_list() -> impl Strategy<Value = List> {
    let inner = prop::collection::vec(int_value(), 0..4).prop_map(|v| Value::from(List::from_values(v)));
    prop::collection::vec(inner, 0..6).prop_map(List::from_values)
}

/// Any storable element, including nil and nested lists.
fn any_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Nil),
        any::<bool>().prop_map(Value::Bool),
        int_value(),
        "[a-z]{0,4}".prop_map(Value::from),
        int_list().prop_map(Value::from),
    ]
}

// =============================================================================
// List laws
// =============================================================================

proptest! {
    /// Property: sub(l, 1, #l) equals l
    #[test]
    fn full_sub_is_identity(l in non_empty_int_list()) {
        let len = i64::try_from(l.len()).unwrap();
        prop_assert_eq!(l.sub(Some(1), Some(len)), l);
    }

    /// Property: sub(l, -1, -1) is the singleton of the last element
    #[test]
    fn last_element_sub(l in non_empty_int_list()) {
        let last = l.last().cloned().unwrap();
        prop_assert_eq!(l.sub(Some(-1), Some(-1)), List::from_values([last]));
    }

    /// Property: sub never panics and never grows the list
    #[test]
    fn sub_clips(l in int_list(), from in -20i64..20, to in -20i64..20) {
        let s = l.sub(Some(from), Some(to));
        prop_assert!(s.len() <= l.len());
    }

    /// Property: concat with no further arguments copies l, and empty .. empty is empty
    #[test]
    fn concat_identity(l in int_list()) {
        prop_assert_eq!(l.concat(&[]), l.clone());
        let empty = List::new();
        let others: [&dyn Sequence; 1] = [&empty];
        prop_assert!(List::new().concat(&others).is_empty());
    }

    /// Property: concat length is the sum of the argument lengths
    #[test]
    fn concat_lengths(l in int_list(), m in int_list(), n in int_list()) {
        let others: [&dyn Sequence; 2] = [&m, &n];
        let joined = l.concat(&others);
        prop_assert_eq!(joined.len(), l.len() + m.len() + n.len());
        prop_assert_eq!(joined.sub(None, Some(i64::try_from(l.len()).unwrap())), l);
    }

    /// Property: append grows by exactly one, puts x last, and leaves l untouched
    #[test]
    fn append_growth(l in int_list(), x in any_value()) {
        let before = l.clone();
        let appended = l.append(x.clone());
        prop_assert_eq!(appended.len(), l.len() + 1);
        prop_assert_eq!(appended.last(), Some(&x));
        prop_assert_eq!(&l, &before);
        prop_assert!(l.ptr_eq(&before));
    }

    /// Property: cons(l, x) equals {x} .. l
    #[test]
    fn cons_is_prefix_concat(l in int_list(), x in any_value()) {
        let expected = List::from_values([x.clone()]).concat(&[&l as &dyn Sequence]);
        prop_assert_eq!(l.cons(x), expected);
    }

    /// Property: rep(l, n) has n * #l elements and every chunk equals l
    #[test]
    fn rep_chunks(l in int_list(), n in 0i64..5) {
        let r = l.rep(n).unwrap();
        prop_assert_eq!(r.len(), l.len() * usize::try_from(n).unwrap());
        for chunk in r.as_slice().chunks(l.len().max(1)) {
            prop_assert_eq!(chunk, l.as_slice());
        }
    }

    /// Property: tail(l) equals sub(l, 2)
    #[test]
    fn tail_is_sub_from_two(l in int_list()) {
        prop_assert_eq!(l.tail(), l.sub(Some(2), None));
    }

    /// Property: compare is antisymmetric and reflexive-zero
    #[test]
    fn compare_antisymmetry(l in nested_list(), m in nested_list()) {
        let lm = l.compare(&m).unwrap();
        let ml = m.compare(&l).unwrap();
        prop_assert_eq!(lm, -ml);
        prop_assert_eq!(l.compare(&l).unwrap(), 0);
        prop_assert!(matches!(lm, -1..=1));
    }

    /// Property: compare agrees with slice ordering for integer lists
    #[test]
    fn compare_matches_lexicographic_order(
        a in prop::collection::vec(-5i64..5, 0..8),
        b in prop::collection::vec(-5i64..5, 0..8)
    ) {
        let expected = match a.cmp(&b) {
            std::cmp::Ordering::Less => -1,
            std::cmp::Ordering::Equal => 0,
            std::cmp::Ordering::Greater => 1,
        };
        let (l, m) = (List::from_values(a), List::from_values(b));
        prop_assert_eq!(l.compare(&m).unwrap(), expected);
        prop_assert_eq!(ops::lt(&Value::from(l.clone()), &Value::from(m.clone())).unwrap(), expected < 0);
        prop_assert_eq!(ops::gte(&Value::from(l), &Value::from(m)).unwrap(), expected >= 0);
    }

    /// Property: method-style and free-style calls agree
    #[test]
    fn conventions_agree(l in int_list(), from in -6i64..6, n in 0i64..3) {
        let module = ListModule::default();
        let lv = Value::from(l.clone());
        prop_assert_eq!(
            l.call("sub", &[Value::Int(from)]).unwrap(),
            module.call("sub", &[lv.clone(), Value::Int(from)]).unwrap()
        );
        prop_assert_eq!(
            l.call("rep", &[Value::Int(n)]).unwrap(),
            module.call("rep", &[lv, Value::Int(n)]).unwrap()
        );
    }
}

// =============================================================================
// Operator table laws
// =============================================================================

proptest! {
    /// Property: conj/disj return one of their operands, chosen by truthiness
    #[test]
    fn logical_operators_return_operands(a in any_value(), b in any_value()) {
        let conj = ops::conj(&a, &b);
        let disj = ops::disj(&a, &b);
        prop_assert_eq!(conj, if a.is_truthy() { b.clone() } else { a.clone() });
        prop_assert_eq!(disj, if a.is_truthy() { a.clone() } else { b.clone() });
        prop_assert_eq!(ops::neg(&a), Value::Bool(!a.is_truthy()));
    }

    /// Property: floored mod takes the sign of the divisor and differs from a by a multiple of b
    #[test]
    fn floored_mod(a in -1000i64..1000, b in (-50i64..50).prop_filter("non-zero", |b| *b != 0)) {
        let r = ops::modulo(&Value::Int(a), &Value::Int(b)).unwrap().as_int().unwrap();
        prop_assert!(r == 0 || (r < 0) == (b < 0));
        prop_assert!(r.abs() < b.abs());
        prop_assert_eq!((a - r) % b, 0);
    }

    /// Property: gt and gte are lt and lte with swapped operands
    #[test]
    fn swapped_relations(a in -20i64..20, b in -20i64..20) {
        let (x, y) = (Value::Int(a), Value::Int(b));
        prop_assert_eq!(ops::gt(&x, &y).unwrap(), ops::lt(&y, &x).unwrap());
        prop_assert_eq!(ops::gte(&x, &y).unwrap(), ops::lte(&y, &x).unwrap());
    }

    /// Property: `+` on a list appends one element while `..` splices
    #[test]
    fn plus_versus_concat(l in int_list(), m in int_list()) {
        let (lv, mv) = (Value::from(l.clone()), Value::from(m.clone()));
        let appended = ops::sum(&lv, &mv).unwrap();
        let spliced = ops::concat(&lv, &mv).unwrap();
        prop_assert_eq!(appended.as_list().unwrap().len(), l.len() + 1);
        prop_assert_eq!(spliced.as_list().unwrap().len(), l.len() + m.len());
    }
}

#[test]
fn pinned_examples() {
    assert_eq!(list![1, 2].rep(2).unwrap(), list![1, 2, 1, 2]);
    assert_eq!(list![1, 2].compare(&list![1, 2, 3]).unwrap(), -1);
}
