//! Minimal associative container.
//!
//! `Table` exists so the operator table's `deref` and the legacy pair/index list operations have something to look
//! keys up in. It is immutable once built and remembers insertion order, which keeps `enpair` deterministic.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::value::Value;

/// A value usable as a table key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Bool(bool),
    Int(i64),
    Str(Arc<str>),
}

impl Key {
    /// Convert a value into a key; integral floats normalize to integers.
    ///
    /// Returns `None` for values that cannot index a table (`nil`, non-integral floats, containers, functions).
    pub fn from_value(value: &Value) -> Option<Key> {
        match value {
            Value::Bool(b) => Some(Key::Bool(*b)),
            Value::Str(s) => Some(Key::Str(Arc::clone(s))),
            Value::Int(_) | Value::Float(_) => value.as_int().map(Key::Int),
            _ => None,
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Key::Bool(b) => Value::Bool(*b),
            Key::Int(i) => Value::Int(*i),
            Key::Str(s) => Value::Str(Arc::clone(s)),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Bool(b) => write!(f, "{b}"),
            Key::Int(i) => write!(f, "{i}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

/// An insertion-ordered, immutable key/value container.
///
/// ## Notes
/// - Equality is identity ([`Table::ptr_eq`]); tables define no structural equality of their own.
/// - Entries whose value is `nil` are never stored, so looking up a missing key and looking up a `nil` entry agree.
#[derive(Clone, Default)]
pub struct Table(Arc<IndexMap<Key, Value>>);

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from entries; later entries overwrite earlier ones under the same key.
    pub fn from_entries(entries: impl IntoIterator<Item = (Key, Value)>) -> Self {
        let mut map = IndexMap::new();
        for (k, v) in entries {
            if v.is_nil() {
                map.shift_remove(&k);
            } else {
                map.insert(k, v);
            }
        }
        Self(Arc::new(map))
    }

    /// Look a key up, yielding `nil` when it is absent or not a valid key.
    pub fn get(&self, key: &Value) -> Value {
        Key::from_value(key)
            .and_then(|k| self.0.get(&k).cloned())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The values of a table whose keys are exactly the positions `1..=len`, in position order.
    ///
    /// Returns `None` when any key is not such a position. An empty table is the empty sequence.
    pub fn sequence_values(&self) -> Option<Vec<Value>> {
        (1..=self.len())
            .map(|i| {
                let key = Key::Int(i64::try_from(i).ok()?);
                self.0.get(&key).cloned()
            })
            .collect()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.0.iter()
    }

    pub fn ptr_eq(&self, other: &Table) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl FromIterator<(Key, Value)> for Table {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (k, v)) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{k}=")?;
            v.fmt_nested(f)?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
