//! List-operation vocabulary.
//!
//! Every operation a List exposes is registered here once, with the metadata both calling conventions need:
//! - whether the operation is available as a method (`l:op(args)`),
//! - where the list sits in the free-function form (`op(l, args)`, or the legacy `op(f, l)` shapes),
//! - how many arguments the operation accepts besides the list,
//! - whether it is deprecated, since when, and what replaces it.
//!
//! The runtime builds its method table and its free-function table from [`LIST_OPS`], so the two conventions cannot
//! drift apart.
//!
//! ## Examples
//! ```rust
//! use batteries_core::lang::list_ops::{self, ListOpId, Receiver};
//! use batteries_core::lang::registry::Stability;
//!
//! assert_eq!(list_ops::from_str("append"), Some(ListOpId::Append));
//! assert_eq!(list_ops::info_for(ListOpId::Filter).stability, Stability::Deprecated);
//! assert_eq!(list_ops::info_for(ListOpId::Filter).receiver, Receiver::Last);
//! ```

use super::registry::{SinceVersion, Stability};

/// Release in which the legacy list surface was deprecated.
pub const LEGACY_SINCE: SinceVersion = "0.2.0";

/// Stable identifier for a list operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListOpId {
    // Canonical surface
    Append,
    Compare,
    Concat,
    Cons,
    Rep,
    Sub,
    Tail,

    // Legacy surface
    Depair,
    Elems,
    Enpair,
    Filter,
    Flatten,
    Foldl,
    Foldr,
    IndexKey,
    IndexValue,
    Map,
    MapWith,
    Project,
    Relems,
    Reverse,
    Shape,
    Transpose,
    ZipWith,
}

/// Where the list argument sits in an operation's free-function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Receiver {
    /// `op(l, args...)`
    First,
    /// `op(args..., l)`, the shape of most legacy higher-order functions (`filter(p, l)`).
    Last,
    /// The operation does not take a list at all (`enpair(t)`).
    Absent,
}

/// Number of arguments accepted besides the list receiver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arity {
    pub min: usize,
    /// `None` means variadic.
    pub max: Option<usize>,
}

impl Arity {
    pub const fn exactly(n: usize) -> Self {
        Self { min: n, max: Some(n) }
    }

    pub const fn between(min: usize, max: usize) -> Self {
        Self { min, max: Some(max) }
    }

    pub const fn at_least(min: usize) -> Self {
        Self { min, max: None }
    }

    /// Check an argument count against this arity.
    pub fn accepts(self, n: usize) -> bool {
        n >= self.min && self.max.is_none_or(|max| n <= max)
    }
}

impl core::fmt::Display for Arity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.max {
            Some(max) if max == self.min => write!(f, "{max}"),
            Some(max) => write!(f, "{} to {max}", self.min),
            None => write!(f, "at least {}", self.min),
        }
    }
}

/// How callers of a deprecated operation should migrate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Migration {
    /// Replaced outright; calls are forwarded to the superseding operation.
    Superseded(ListOpId),
    /// Still implemented as-is; the text tells callers what to use instead.
    Hint(&'static str),
}

/// Deprecation metadata attached to a legacy operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Deprecation {
    pub since: SinceVersion,
    pub migration: Migration,
}

/// Metadata for a list operation.
#[derive(Debug, Clone, Copy)]
pub struct ListOpInfo {
    pub id: ListOpId,
    pub canonical: &'static str,
    pub description: &'static str,
    pub stability: Stability,
    pub deprecation: Option<Deprecation>,
    /// Whether `l:op(args)` is available.
    pub method: bool,
    pub receiver: Receiver,
    pub arity: Arity,
}

impl ListOpInfo {
    /// Advisory name for the method spelling (`List:filter`).
    pub fn method_spelling(&self) -> String {
        format!("List:{}", self.canonical)
    }

    /// Advisory name for the free-function spelling (`list.filter`).
    pub fn free_spelling(&self) -> String {
        format!("list.{}", self.canonical)
    }
}

/// Registry of all list operations.
pub const LIST_OPS: &[ListOpInfo] = &[
    stable(
        ListOpId::Append,
        "append",
        Arity::exactly(1),
        "Return a new list with one element added at the end.",
    ),
    stable(
        ListOpId::Compare,
        "compare",
        Arity::exactly(1),
        "Compare two lists lexicographically, returning -1, 0 or 1.",
    ),
    stable(
        ListOpId::Concat,
        "concat",
        Arity::at_least(0),
        "Return a new list holding the elements of every argument in order.",
    ),
    stable(
        ListOpId::Cons,
        "cons",
        Arity::exactly(1),
        "Return a new list with one element added at the front.",
    ),
    stable(
        ListOpId::Rep,
        "rep",
        Arity::exactly(1),
        "Return the list repeated n times.",
    ),
    stable(
        ListOpId::Sub,
        "sub",
        Arity::between(0, 2),
        "Return an inclusive 1-based sub-range; negative positions count from the end.",
    ),
    stable(ListOpId::Tail, "tail", Arity::exactly(0), "Return all elements but the first."),
    legacy(
        ListOpId::Depair,
        "depair",
        Receiver::First,
        true,
        Arity::exactly(0),
        Migration::Hint("build the table with a loop over the pairs instead"),
        "Turn a list of {key, value} pairs into a table.",
    ),
    legacy(
        ListOpId::Elems,
        "elems",
        Receiver::First,
        true,
        Arity::exactly(0),
        Migration::Superseded(ListOpId::Sub),
        "Return the elements in order.",
    ),
    legacy(
        ListOpId::Enpair,
        "enpair",
        Receiver::Absent,
        false,
        Arity::exactly(1),
        Migration::Hint("iterate over the table's entries instead"),
        "Turn a table into a list of {key, value} pairs.",
    ),
    legacy(
        ListOpId::Filter,
        "filter",
        Receiver::Last,
        true,
        Arity::exactly(1),
        Migration::Hint("use an iterator filter over the list's elements instead"),
        "Keep the elements for which a predicate is truthy.",
    ),
    legacy(
        ListOpId::Flatten,
        "flatten",
        Receiver::First,
        true,
        Arity::exactly(0),
        Migration::Hint("flatten nested lists with an explicit traversal instead"),
        "Flatten nested lists depth-first.",
    ),
    legacy(
        ListOpId::Foldl,
        "foldl",
        Receiver::Last,
        true,
        Arity::between(1, 2),
        Migration::Hint("use an iterator fold over the list's elements instead"),
        "Fold the list from the left.",
    ),
    legacy(
        ListOpId::Foldr,
        "foldr",
        Receiver::Last,
        true,
        Arity::between(1, 2),
        Migration::Hint("use a reversed iterator fold over the list's elements instead"),
        "Fold the list from the right.",
    ),
    legacy(
        ListOpId::IndexKey,
        "index_key",
        Receiver::Last,
        true,
        Arity::exactly(1),
        Migration::Hint("build the index with a loop over the elements instead"),
        "Map each element's field value to the element's position.",
    ),
    legacy(
        ListOpId::IndexValue,
        "index_value",
        Receiver::Last,
        true,
        Arity::exactly(1),
        Migration::Hint("build the index with a loop over the elements instead"),
        "Map each element's field value to the element itself.",
    ),
    legacy(
        ListOpId::Map,
        "map",
        Receiver::Last,
        true,
        Arity::exactly(1),
        Migration::Hint("use an iterator map over the list's elements instead"),
        "Apply a function to every element.",
    ),
    legacy(
        ListOpId::MapWith,
        "map_with",
        Receiver::Last,
        true,
        Arity::exactly(1),
        Migration::Hint("use an iterator map that spreads each inner list instead"),
        "Apply a function to the spread elements of every inner list.",
    ),
    legacy(
        ListOpId::Project,
        "project",
        Receiver::Last,
        true,
        Arity::exactly(1),
        Migration::Hint("use an iterator map with the deref operator instead"),
        "Look the same key up in every element.",
    ),
    legacy(
        ListOpId::Relems,
        "relems",
        Receiver::First,
        true,
        Arity::exactly(0),
        Migration::Hint("iterate over the list's elements in reverse instead"),
        "Return the elements in reverse order.",
    ),
    legacy(
        ListOpId::Reverse,
        "reverse",
        Receiver::First,
        true,
        Arity::exactly(0),
        Migration::Hint("iterate over the list's elements in reverse instead"),
        "Return the list reversed.",
    ),
    legacy(
        ListOpId::Shape,
        "shape",
        Receiver::Last,
        true,
        Arity::exactly(1),
        Migration::Hint("reshape with explicit sub-ranges instead"),
        "Reshape the flattened list into nested lists of the given dimensions.",
    ),
    legacy(
        ListOpId::Transpose,
        "transpose",
        Receiver::First,
        true,
        Arity::exactly(0),
        Migration::Hint("build the columns with explicit indexing instead"),
        "Swap rows and columns of a list of lists.",
    ),
    legacy(
        ListOpId::ZipWith,
        "zip_with",
        Receiver::First,
        true,
        Arity::exactly(1),
        Migration::Hint("zip the inner lists' iterators and map over them instead"),
        "Apply a function across the columns of a list of lists.",
    ),
];

/// Return the full metadata entry for a list operation.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: ListOpId) -> &'static ListOpInfo {
    LIST_OPS.iter().find(|o| o.id == id).expect("list operation info missing")
}

/// Return the canonical spelling of a list operation.
pub fn as_str(id: ListOpId) -> &'static str {
    info_for(id).canonical
}

/// Resolve a list-operation spelling.
pub fn from_str(name: &str) -> Option<ListOpId> {
    LIST_OPS.iter().find(|o| o.canonical == name).map(|o| o.id)
}

/// Iterate over the operations that are not deprecated.
pub fn stable_ops() -> impl Iterator<Item = &'static ListOpInfo> {
    LIST_OPS.iter().filter(|o| o.stability == Stability::Stable)
}

// --- helpers -----------------------------------------------------------------

const fn stable(id: ListOpId, canonical: &'static str, arity: Arity, description: &'static str) -> ListOpInfo {
    ListOpInfo {
        id,
        canonical,
        description,
        stability: Stability::Stable,
        deprecation: None,
        method: true,
        receiver: Receiver::First,
        arity,
    }
}

const fn legacy(
    id: ListOpId,
    canonical: &'static str,
    receiver: Receiver,
    method: bool,
    arity: Arity,
    migration: Migration,
    description: &'static str,
) -> ListOpInfo {
    ListOpInfo {
        id,
        canonical,
        description,
        stability: Stability::Deprecated,
        deprecation: Some(Deprecation {
            since: LEGACY_SINCE,
            migration,
        }),
        method,
        receiver,
        arity,
    }
}
