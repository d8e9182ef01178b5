//! 1-based index semantics shared by the list operations.
//!
//! ## Notes
//! - **Indexing model**: positions start at `1`; the last element is `len`.
//! - **Negative indices**: `-1` is the last element, `-len` the first (string sub-ranging convention).
//! - **Clipping**: ranges never error. `from` clamps up to `1`, `to` clamps down to `len`, and a range whose start lies
//!   past its end is simply empty.

use core::ops::Range;

/// Resolve an inclusive, 1-based, negative-aware `[from, to]` into a zero-based half-open range.
///
/// ## Parameters
/// - `len`: length of the sequence being sub-ranged.
/// - `from`: first position (inclusive); negative counts from the end.
/// - `to`: last position (inclusive); negative counts from the end.
///
/// ## Returns
/// - (`Range<usize>`): indices into the backing slice; empty when nothing is selected.
///
/// ## Examples
/// ```rust
/// use batteries_core::index::sub_range;
///
/// assert_eq!(sub_range(5, 2, 4), 1..4);
/// assert_eq!(sub_range(5, -2, -1), 3..5);
/// assert_eq!(sub_range(5, 4, 2), 0..0);
/// assert_eq!(sub_range(3, -10, 10), 0..3);
/// ```
pub fn sub_range(len: usize, from: i64, to: i64) -> Range<usize> {
    let len_i = i64::try_from(len).unwrap_or(i64::MAX);
    let from = if from < 0 { len_i.saturating_add(from).saturating_add(1) } else { from };
    let to = if to < 0 { len_i.saturating_add(to).saturating_add(1) } else { to };

    let from = from.max(1);
    let to = to.min(len_i);
    if from > to {
        return 0..0;
    }
    // Both bounds are within 1..=len here.
    (from - 1) as usize..to as usize
}

/// Resolve a positive 1-based position into a zero-based index.
///
/// Returns `None` when `index` is outside `1..=len`. Negative positions are not accepted here: element lookup
/// (`deref`) follows plain key semantics, only sub-ranging counts from the end.
pub fn position(len: usize, index: i64) -> Option<usize> {
    let i = usize::try_from(index).ok()?;
    if i == 0 || i > len { None } else { Some(i - 1) }
}
