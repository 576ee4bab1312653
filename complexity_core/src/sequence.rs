//! Base sequence shared by both demo units.

/// Value type stored in every demo sequence.
pub type Element = i64;

/// Index reported when a search target is absent.
pub const NOT_FOUND: i64 = -1;

/// Build `[0, 1, ..., n-1]`.
pub fn base_sequence(n: usize) -> Vec<Element> {
    (0..n as Element).collect()
}

/// Flatten a search result into the `-1` sentinel form used in reports.
pub fn index_or_sentinel(index: Option<usize>) -> i64 {
    index.map_or(NOT_FOUND, |i| i as i64)
}
