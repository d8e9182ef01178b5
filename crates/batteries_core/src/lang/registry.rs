//! Shareable metadata for `batteries_core::lang` registries.
//!
//! ## Notes
//! - These types are `Copy`-friendly so registries can live in `const` tables.
//! - Metadata drives dispatch-table construction and docs; it does not execute anything.

/// Identify the release a vocabulary item is available (or deprecated) since.
///
/// ## Examples
/// ```rust
/// use batteries_core::lang::registry::SinceVersion;
///
/// let since: SinceVersion = "0.2.0";
/// assert!(!since.is_empty());
/// ```
pub type SinceVersion = &'static str;

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Notes
/// - `Deprecated` items stay callable; the runtime routes them through its deprecation shim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

/// Shared metadata shape for “registry-first” vocabulary items.
///
/// Registries that need extra per-item data (operator symbol and fixity, list-operation calling conventions) wrap
/// or extend this with their own info type.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since: SinceVersion,
    pub stability: Stability,
}

/// Resolve a spelling against a registry table (canonical names first, then aliases).
pub(crate) fn from_str_impl<Id: Copy>(items: &[LangItemInfo<Id>], name: &str) -> Option<Id> {
    if let Some(m) = items.iter().find(|m| m.canonical == name) {
        return Some(m.id);
    }
    items
        .iter()
        .find(|m| {
            let aliases: &[&str] = m.aliases;
            aliases.contains(&name)
        })
        .map(|m| m.id)
}
