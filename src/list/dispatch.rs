//! Name-based dispatch for list operations.
//!
//! Both calling conventions are built from the operation registry in [`batteries_core::lang::list_ops`]:
//! - **method**: `l:op(args...)`, the receiver is implicit ([`List::call`]);
//! - **free**: `op(l, args...)`, the receiver is an explicit argument ([`crate::ListModule::call`]). Legacy
//!   operations keep their historical argument order here, so `filter(p, l)` still takes the list last.
//!
//! Each operation has exactly one implementation ([`implementation`]); the two tables only differ in how they
//! unpack arguments before calling it. A legacy operation that was superseded outright is routed to the
//! implementation of the operation that replaced it.
//!
//! Argument positions in error messages are 1-based and count the receiver as `#1`. For legacy free-function
//! spellings that take the list last, positions are renumbered to match the order the caller wrote them.

use std::sync::Arc;

use batteries_core::lang::list_ops::{self, Arity, LIST_OPS, ListOpId, ListOpInfo, Migration, Receiver};
use batteries_core::lang::registry::Stability;

use crate::config::{Config, DeprecationMode};
use crate::deprecation::Notice;
use crate::errors::{BatteriesError, Result};
use crate::function::Function;
use crate::table::Table;
use crate::value::Value;

use super::{Elements, List, Prototype, Sequence, legacy};

/// Implementation taking the receiver first.
pub type MethodFn = fn(&List, &[Value]) -> Result<Value>;
/// Implementation of an operation that takes no list; the prototype decides where results live.
pub type FreeFn = fn(&Arc<Prototype>, &[Value]) -> Result<Value>;

#[derive(Clone, Copy)]
pub enum Implementation {
    Method(MethodFn),
    Free(FreeFn),
}

/// Which calling convention a dispatch table serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Convention {
    Method,
    Free,
}

impl Convention {
    /// The advisory name of an operation under this convention (`List:filter` or `list.filter`).
    pub fn spelling(self, info: &ListOpInfo) -> String {
        match self {
            Convention::Method => info.method_spelling(),
            Convention::Free => info.free_spelling(),
        }
    }
}

/// One resolvable operation name.
#[derive(Clone)]
pub struct Entry {
    info: &'static ListOpInfo,
    implementation: Implementation,
    notice: Option<Notice>,
}

impl Entry {
    pub fn name(&self) -> &'static str {
        self.info.canonical
    }

    pub fn info(&self) -> &'static ListOpInfo {
        self.info
    }

    /// The advisory attached to this entry, if it is a legacy spelling in a mode that warns.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Emit this entry's advisory (at most once per name per process).
    pub(crate) fn advise(&self) {
        if let Some(notice) = &self.notice {
            notice.emit();
        }
    }

    fn check_arity(&self, arity: Arity, got: usize) -> Result<()> {
        if arity.accepts(got) {
            Ok(())
        } else {
            Err(BatteriesError::wrong_arity(self.name(), arity, got))
        }
    }

    /// Invoke with the receiver given separately.
    pub fn invoke_method(&self, receiver: &List, args: &[Value]) -> Result<Value> {
        self.check_arity(self.info.arity, args.len())?;
        match self.implementation {
            Implementation::Method(f) => f(receiver, args),
            Implementation::Free(f) => f(receiver.prototype(), args),
        }
    }

    /// Invoke with the receiver (if any) among `args`, at the position the registry records.
    pub fn invoke_free(&self, proto: &Arc<Prototype>, args: &[Value]) -> Result<Value> {
        let op = self.name();
        let arity = self.info.arity;
        match (self.info.receiver, self.implementation) {
            (Receiver::Absent, Implementation::Free(f)) => {
                self.check_arity(arity, args.len())?;
                f(proto, args)
            }
            (Receiver::Absent, Implementation::Method(_)) => Err(BatteriesError::no_such_operation(op)),
            (Receiver::First, _) => {
                let total = with_receiver(arity);
                let Some((first, rest)) = args.split_first() else {
                    return Err(BatteriesError::wrong_arity(op, total, 0));
                };
                let receiver = receiver_arg(op, first, 1)?;
                self.check_arity(arity, rest.len())
                    .map_err(|_| BatteriesError::wrong_arity(op, total, args.len()))?;
                self.invoke_method(receiver, rest)
            }
            (Receiver::Last, _) => {
                let total = with_receiver(arity);
                let Some((last, rest)) = args.split_last() else {
                    return Err(BatteriesError::wrong_arity(op, total, 0));
                };
                self.check_arity(arity, rest.len())
                    .map_err(|_| BatteriesError::wrong_arity(op, total, args.len()))?;
                let receiver = receiver_arg(op, last, args.len())?;
                let n = args.len();
                self.invoke_method(receiver, rest)
                    .map_err(|e| e.renumber(op, |p| if p == 1 { n } else { p - 1 }))
            }
        }
    }
}

/// The arity of a free-function spelling: the operation's own arity plus the list itself.
fn with_receiver(arity: Arity) -> Arity {
    Arity {
        min: arity.min + 1,
        max: arity.max.map(|m| m + 1),
    }
}

fn receiver_arg<'a>(op: &str, value: &'a Value, position: usize) -> Result<&'a List> {
    value
        .as_list()
        .ok_or_else(|| BatteriesError::bad_argument(op, position, "List", value.type_name()))
}

/// The operations reachable under one calling convention.
#[derive(Clone)]
pub struct DispatchTable {
    convention: Convention,
    entries: Vec<Entry>,
}

impl DispatchTable {
    /// Build the table for `convention` from the operation registry.
    ///
    /// - Operations without a method form are left out of the method table.
    /// - Under [`DeprecationMode::Remove`] every deprecated operation is left out.
    /// - Under [`DeprecationMode::Silent`] deprecated operations stay but carry no advisory.
    pub fn build(convention: Convention, config: &Config) -> Self {
        let entries = LIST_OPS
            .iter()
            .filter(|info| convention == Convention::Free || info.method)
            .filter(|info| !(info.stability == Stability::Deprecated && config.deprecation == DeprecationMode::Remove))
            .map(|info| {
                let target = match info.deprecation.map(|d| d.migration) {
                    Some(Migration::Superseded(by)) => by,
                    _ => info.id,
                };
                let notice = match config.deprecation {
                    DeprecationMode::Warn => Notice::for_operation(info, convention),
                    DeprecationMode::Silent | DeprecationMode::Remove => None,
                };
                Entry {
                    info,
                    implementation: implementation(target),
                    notice,
                }
            })
            .collect();
        Self { convention, entries }
    }

    pub fn convention(&self) -> Convention {
        self.convention
    }

    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name() == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(Entry::name)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// --- argument helpers --------------------------------------------------------------------------
//
// `idx` is the zero-based index into the arguments that follow the receiver; the reported position is `idx + 2`.

fn arg(args: &[Value], idx: usize) -> &Value {
    args.get(idx).unwrap_or(&Value::Nil)
}

fn list_arg<'a>(op: &str, args: &'a [Value], idx: usize) -> Result<&'a List> {
    let v = arg(args, idx);
    v.as_list()
        .ok_or_else(|| BatteriesError::bad_argument(op, idx + 2, "List", v.type_name()))
}

/// A List, or a table whose keys are exactly `1..=n`; anything else is reported as a bad List argument.
fn sequence_arg<'a>(op: &str, args: &'a [Value], idx: usize) -> Result<Elements<'a>> {
    let v = arg(args, idx);
    Elements::from_value(v).ok_or_else(|| BatteriesError::bad_argument(op, idx + 2, "List", v.type_name()))
}

fn function_arg<'a>(op: &str, args: &'a [Value], idx: usize) -> Result<&'a Function> {
    let v = arg(args, idx);
    v.as_function()
        .ok_or_else(|| BatteriesError::bad_argument(op, idx + 2, "function", v.type_name()))
}

fn int_arg(op: &str, args: &[Value], idx: usize) -> Result<i64> {
    let v = arg(args, idx);
    v.as_int()
        .ok_or_else(|| BatteriesError::bad_argument(op, idx + 2, "integer", v.type_name()))
}

fn opt_int_arg(op: &str, args: &[Value], idx: usize) -> Result<Option<i64>> {
    match arg(args, idx) {
        Value::Nil => Ok(None),
        _ => int_arg(op, args, idx).map(Some),
    }
}

fn opt_arg(args: &[Value], idx: usize) -> Option<Value> {
    args.get(idx).filter(|v| !v.is_nil()).cloned()
}

fn dims_arg(op: &str, args: &[Value], idx: usize) -> Result<Vec<usize>> {
    let dims = list_arg(op, args, idx)?;
    dims.iter()
        .map(|d| {
            d.as_int()
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| BatteriesError::bad_argument(op, idx + 2, "List of non-negative integers", d))
        })
        .collect()
}

fn table_arg<'a>(op: &str, args: &'a [Value], position: usize) -> Result<&'a Table> {
    let v = args.get(position - 1).unwrap_or(&Value::Nil);
    v.as_table()
        .ok_or_else(|| BatteriesError::bad_argument(op, position, "table", v.type_name()))
}

// --- implementations ---------------------------------------------------------------------------

/// The single implementation behind an operation name.
#[allow(deprecated)]
pub fn implementation(id: ListOpId) -> Implementation {
    use Implementation::{Free, Method};

    match id {
        ListOpId::Append => Method(|l, args| Ok(l.append(arg(args, 0).clone()).into())),
        ListOpId::Compare => Method(|l, args| Ok(l.compare(list_arg("compare", args, 0)?)?.into())),
        ListOpId::Concat => Method(|l, args| {
            let others = (0..args.len())
                .map(|idx| sequence_arg("concat", args, idx))
                .collect::<Result<Vec<_>>>()?;
            let others: Vec<&dyn Sequence> = others.iter().map(|e| e as &dyn Sequence).collect();
            Ok(l.concat(&others).into())
        }),
        ListOpId::Cons => Method(|l, args| Ok(l.cons(arg(args, 0).clone()).into())),
        ListOpId::Rep => Method(|l, args| Ok(l.rep(int_arg("rep", args, 0)?)?.into())),
        ListOpId::Sub => Method(|l, args| {
            let from = opt_int_arg("sub", args, 0)?;
            let to = opt_int_arg("sub", args, 1)?;
            Ok(l.sub(from, to).into())
        }),
        ListOpId::Tail => Method(|l, _| Ok(l.tail().into())),
        ListOpId::Depair => Method(|l, _| Ok(legacy::depair(l)?.into())),
        ListOpId::Elems => Method(|l, _| Ok(legacy::elems(l).into())),
        ListOpId::Enpair => Free(|proto, args| {
            let t = table_arg(list_ops::as_str(ListOpId::Enpair), args, 1)?;
            Ok(legacy::enpair_on(proto, t).into())
        }),
        ListOpId::Filter => Method(|l, args| Ok(legacy::filter(l, function_arg("filter", args, 0)?)?.into())),
        ListOpId::Flatten => Method(|l, _| Ok(legacy::flatten(l).into())),
        ListOpId::Foldl => Method(|l, args| legacy::foldl(l, function_arg("foldl", args, 0)?, opt_arg(args, 1))),
        ListOpId::Foldr => Method(|l, args| legacy::foldr(l, function_arg("foldr", args, 0)?, opt_arg(args, 1))),
        ListOpId::IndexKey => Method(|l, args| Ok(legacy::index_key(l, arg(args, 0))?.into())),
        ListOpId::IndexValue => Method(|l, args| Ok(legacy::index_value(l, arg(args, 0))?.into())),
        ListOpId::Map => Method(|l, args| Ok(legacy::map(l, function_arg("map", args, 0)?)?.into())),
        ListOpId::MapWith => Method(|l, args| Ok(legacy::map_with(l, function_arg("map_with", args, 0)?)?.into())),
        ListOpId::Project => Method(|l, args| Ok(legacy::project(l, arg(args, 0))?.into())),
        ListOpId::Relems => Method(|l, _| Ok(legacy::relems(l).into())),
        ListOpId::Reverse => Method(|l, _| Ok(legacy::reverse(l).into())),
        ListOpId::Shape => Method(|l, args| Ok(legacy::shape(l, &dims_arg("shape", args, 0)?).unwrap_or_default())),
        ListOpId::Transpose => Method(|l, _| Ok(legacy::transpose(l)?.into())),
        ListOpId::ZipWith => Method(|l, args| Ok(legacy::zip_with(l, function_arg("zip_with", args, 0)?)?.into())),
    }
}
