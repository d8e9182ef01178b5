//! Method-style and free-function-style calls resolve to the same implementation.
//!
//! Modules here are built silent so advisories do not interfere; advisory emission is covered in
//! `deprecation_advisories.rs`.

use batteries::{Config, DeprecationMode, ErrorKind, Function, Key, List, ListModule, Table, Value, list, ops};
use batteries_core::lang::list_ops::{LIST_OPS, Receiver};

fn module() -> ListModule {
    ListModule::new(Config::default().with_deprecation(DeprecationMode::Silent))
}

fn v(l: List) -> Value {
    Value::from(l)
}

fn is_even() -> Value {
    Value::from(Function::new("is_even", |args| {
        Ok(Value::Bool(args[0].as_int().is_some_and(|n| n % 2 == 0)))
    }))
}

fn double() -> Value {
    Value::from(Function::new("double", |args| ops::prod(&args[0], &Value::Int(2))))
}

fn op(name: &str) -> Value {
    Value::from(ops::lookup(name).expect("operator"))
}

/// Call `name` method-style on `receiver` and free-style with `free_args`, assert both agree, return the result.
fn both(m: &ListModule, name: &str, receiver: &List, method_args: &[Value], free_args: &[Value]) -> Value {
    let via_method = receiver.call(name, method_args).expect("method call");
    let via_free = m.call(name, free_args).expect("free call");
    assert_eq!(via_method, via_free, "{name}: method and free results differ");
    via_method
}

// =============================================================================
// Canonical operations
// =============================================================================

#[test]
fn canonical_operations_agree_across_conventions() {
    let m = module();
    let l = m.list([1, 2, 3]);
    let lv = v(l.clone());

    let r = both(&m, "append", &l, &[Value::Int(4)], &[lv.clone(), Value::Int(4)]);
    assert_eq!(r, v(l.append(4)));

    let r = both(&m, "cons", &l, &[Value::Int(0)], &[lv.clone(), Value::Int(0)]);
    assert_eq!(r, v(l.cons(0)));

    let other = v(list![4, 5]);
    let r = both(&m, "concat", &l, &[other.clone(), other.clone()], &[lv.clone(), other.clone(), other]);
    assert_eq!(r, v(list![1, 2, 3, 4, 5, 4, 5]));

    let r = both(&m, "concat", &l, &[], &[lv.clone()]);
    assert_eq!(r, lv);

    let r = both(&m, "rep", &l, &[Value::Int(2)], &[lv.clone(), Value::Int(2)]);
    assert_eq!(r, v(l.rep(2).unwrap()));

    let r = both(&m, "sub", &l, &[Value::Int(-2)], &[lv.clone(), Value::Int(-2)]);
    assert_eq!(r, v(list![2, 3]));

    let r = both(&m, "sub", &l, &[Value::Nil, Value::Int(2)], &[lv.clone(), Value::Nil, Value::Int(2)]);
    assert_eq!(r, v(list![1, 2]));

    let r = both(&m, "tail", &l, &[], &[lv.clone()]);
    assert_eq!(r, v(l.tail()));

    let r = both(&m, "compare", &l, &[v(list![1, 2])], &[lv, v(list![1, 2])]);
    assert_eq!(r, Value::Int(1));
}

#[test]
fn derived_lists_keep_the_receivers_prototype() {
    let m = module();
    let l = m.list([1]);
    let r = l.call("append", &[Value::Int(2)]).unwrap();
    let r = r.as_list().unwrap();
    assert!(std::sync::Arc::ptr_eq(r.prototype(), m.prototype()));
}

#[test]
fn dynamic_concat_accepts_positional_tables() {
    let m = module();
    let l = m.list([1]);
    let positional = Value::Table(Table::from_entries([(Key::Int(1), Value::Int(2)), (Key::Int(2), Value::Int(3))]));

    let r = m.call("concat", &[v(l.clone()), positional.clone(), v(list![4])]).unwrap();
    assert_eq!(r, v(list![1, 2, 3, 4]));
    assert_eq!(l.call("concat", &[positional]).unwrap(), v(list![1, 2, 3]));

    let keyed = Value::Table(Table::from_entries([(Key::Int(1), Value::Int(2)), (Key::Str("k".into()), Value::Nil)]));
    let err = l.call("concat", &[keyed]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ContractViolation);
    assert_eq!(err.to_string(), "bad argument #2 to 'concat' (List expected, got table)");
}

#[test]
fn dynamic_arguments_are_checked() {
    let m = module();
    let l = m.list([1]);

    let err = l.call("rep", &[Value::str("2")]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ContractViolation);
    assert_eq!(err.to_string(), "bad argument #2 to 'rep' (integer expected, got string)");

    let err = m.call("concat", &[v(l.clone()), v(list![2]), Value::Int(3)]).unwrap_err();
    assert_eq!(err.to_string(), "bad argument #3 to 'concat' (List expected, got number)");

    let err = l.call("tail", &[Value::Int(1)]).unwrap_err();
    assert_eq!(err.to_string(), "wrong number of arguments to 'tail' (expected 0, got 1)");

    let err = m.call("sub", &[]).unwrap_err();
    assert_eq!(err.to_string(), "wrong number of arguments to 'sub' (expected 1 to 3, got 0)");

    let err = l.call("frobnicate", &[]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NoSuchOperation);
}

// =============================================================================
// Legacy operations: both legacy spellings agree with each other and with the canonical form
// =============================================================================

#[test]
fn elems_matches_canonical_sub() {
    let m = module();
    let l = m.list([1, 2, 3]);
    let r = both(&m, "elems", &l, &[], &[v(l.clone())]);
    assert_eq!(r, v(l.sub(None, None)));
}

#[test]
fn higher_order_legacy_operations_take_the_list_last_in_free_form() {
    let m = module();
    let l = m.list([1, 2, 3, 4]);
    let lv = v(l.clone());

    let r = both(&m, "filter", &l, &[is_even()], &[is_even(), lv.clone()]);
    assert_eq!(r, v(list![2, 4]));

    let r = both(&m, "map", &l, &[double()], &[double(), lv.clone()]);
    assert_eq!(r, v(list![2, 4, 6, 8]));

    let r = both(&m, "foldl", &l, &[op("-")], &[op("-"), lv.clone()]);
    assert_eq!(r, Value::Int(1 - 2 - 3 - 4));

    let r = both(&m, "foldl", &l, &[op("+"), Value::Int(100)], &[op("+"), Value::Int(100), lv.clone()]);
    assert_eq!(r, Value::Int(110));

    let r = both(&m, "foldr", &l, &[op("-")], &[op("-"), lv]);
    assert_eq!(r, Value::Int(1 - (2 - (3 - 4))));
}

#[test]
fn structural_legacy_operations() {
    let m = module();
    let nested = m.list([v(list![1, 2]), v(list![3, 4])]);
    let nv = v(nested.clone());

    let r = both(&m, "flatten", &nested, &[], &[nv.clone()]);
    assert_eq!(r, v(list![1, 2, 3, 4]));

    let r = both(&m, "transpose", &nested, &[], &[nv.clone()]);
    assert_eq!(r, v(list![list![1, 3], list![2, 4]]));

    let r = both(&m, "map_with", &nested, &[op("*")], &[op("*"), nv.clone()]);
    assert_eq!(r, v(list![2, 12]));

    let r = both(&m, "zip_with", &nested, &[op("+")], &[nv.clone(), op("+")]);
    assert_eq!(r, v(list![4, 6]));

    let dims = v(list![4]);
    let r = both(&m, "shape", &nested, &[dims.clone()], &[dims, nv.clone()]);
    assert_eq!(r, v(list![1, 2, 3, 4]));

    let two_wildcards = v(list![0, 0]);
    let r = both(&m, "shape", &nested, &[two_wildcards.clone()], &[two_wildcards, nv]);
    assert_eq!(r, Value::Nil);

    let flat = m.list([1, 2, 3]);
    let r = both(&m, "reverse", &flat, &[], &[v(flat.clone())]);
    assert_eq!(r, v(list![3, 2, 1]));
    let r = both(&m, "relems", &flat, &[], &[v(flat.clone())]);
    assert_eq!(r, v(list![3, 2, 1]));
}

#[test]
fn table_legacy_operations() {
    let m = module();
    let pairs = m.list([v(list!["a", 1]), v(list!["b", 2])]);

    let via_method = pairs.call("depair", &[]).unwrap();
    let via_free = m.call("depair", &[v(pairs.clone())]).unwrap();
    let (tm, tf) = (via_method.as_table().unwrap(), via_free.as_table().unwrap());
    assert_eq!(tm.to_string(), tf.to_string());
    assert_eq!(tm.get(&Value::str("a")), Value::Int(1));

    // enpair has no method form.
    let back = m.call("enpair", &[via_free.clone()]).unwrap();
    assert_eq!(back, v(pairs.clone()));
    assert_eq!(pairs.call("enpair", &[]).unwrap_err().kind(), ErrorKind::NoSuchOperation);

    let records = m.list([
        Value::from(Table::from_entries([(Key::Str("id".into()), Value::str("x"))])),
        Value::from(Table::from_entries([(Key::Str("id".into()), Value::str("y"))])),
    ]);
    let key = Value::str("id");

    let r = both(&m, "project", &records, &[key.clone()], &[key.clone(), v(records.clone())]);
    assert_eq!(r, v(list!["x", "y"]));

    let via_method = records.call("index_key", &[key.clone()]).unwrap();
    let via_free = m.call("index_key", &[key.clone(), v(records.clone())]).unwrap();
    assert_eq!(via_method.to_string(), via_free.to_string());
    assert_eq!(via_method.as_table().unwrap().get(&Value::str("y")), Value::Int(2));

    let via_method = records.call("index_value", &[key.clone()]).unwrap();
    let via_free = m.call("index_value", &[key, v(records.clone())]).unwrap();
    assert_eq!(via_method.to_string(), via_free.to_string());
}

#[test]
fn legacy_free_form_reports_positions_as_written() {
    let m = module();
    let err = m.call("map", &[Value::Int(1), v(list![1])]).unwrap_err();
    assert_eq!(err.position(), Some(1));
    assert_eq!(err.to_string(), "bad argument #1 to 'map' (function expected, got number)");

    let err = m.call("map", &[double(), Value::Int(1)]).unwrap_err();
    assert_eq!(err.position(), Some(2));

    let err = m.call("foldl", &[double()]).unwrap_err();
    assert_eq!(err.to_string(), "wrong number of arguments to 'foldl' (expected 2 to 3, got 1)");
}

#[test]
fn every_registry_operation_is_reachable_in_its_conventions() {
    let m = module();
    let l = m.list([1]);
    for info in LIST_OPS {
        assert!(m.names().any(|n| n == info.canonical), "{} missing from free table", info.canonical);
        let has_method = l.prototype().methods().get(info.canonical).is_some();
        assert_eq!(has_method, info.method, "{}", info.canonical);
        if info.receiver == Receiver::Absent {
            assert!(!info.method);
        }
    }
}
