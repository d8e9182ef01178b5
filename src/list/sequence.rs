//! Ordered-sequence capability.

use crate::value::Value;

use super::List;

/// Anything that exposes its elements as a dense, ordered slice.
///
/// `concat` accepts any mix of these as trailing arguments, so callers can concatenate plain vectors onto a List
/// without wrapping them first.
pub trait Sequence {
    fn elements(&self) -> &[Value];
}

impl Sequence for List {
    fn elements(&self) -> &[Value] {
        self.as_slice()
    }
}

impl Sequence for [Value] {
    fn elements(&self) -> &[Value] {
        self
    }
}

impl Sequence for Vec<Value> {
    fn elements(&self) -> &[Value] {
        self
    }
}

impl<const N: usize> Sequence for [Value; N] {
    fn elements(&self) -> &[Value] {
        self
    }
}

impl<S: Sequence + ?Sized> Sequence for &S {
    fn elements(&self) -> &[Value] {
        (**self).elements()
    }
}

/// A dynamic argument viewed as a sequence: a List, or a table whose keys are exactly `1..=n`.
pub(crate) enum Elements<'a> {
    Borrowed(&'a [Value]),
    Owned(Vec<Value>),
}

impl<'a> Elements<'a> {
    pub(crate) fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::List(l) => Some(Elements::Borrowed(l.as_slice())),
            Value::Table(t) => t.sequence_values().map(Elements::Owned),
            _ => None,
        }
    }
}

impl Sequence for Elements<'_> {
    fn elements(&self) -> &[Value] {
        match self {
            Elements::Borrowed(items) => *items,
            Elements::Owned(items) => items.as_slice(),
        }
    }
}
