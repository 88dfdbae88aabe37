//! # Deterministic Playlist Ordering
//!
//! Playlist entries are ordered by comparing path *segments*, not raw
//! strings. Each path is split on the platform separator and the segments
//! are compared pairwise, ignoring case; when one path is a segment-prefix
//! of the other, the shorter path sorts first. The result is that a
//! directory's own files always precede the files of its subdirectories,
//! regardless of how the filesystem happened to enumerate them.
//!
//! Ordering is applied as an explicit sort step when a set of entries is
//! materialized for output. There is no sorted container carrying an
//! ambient invariant; every ordered sequence in the crate goes through
//! [`into_ordered`].

use std::cmp::Ordering;
use std::collections::HashSet;
use std::path::MAIN_SEPARATOR;

/// Compare two relative path strings segment-by-segment.
///
/// Segments are compared case-insensitively. When all shared segments are
/// equal, the path with fewer segments sorts first. Two distinct strings
/// never compare equal: paths that differ only by case fall through to a
/// final case-sensitive comparison, so the order is total.
pub fn compare_paths(a: &str, b: &str) -> Ordering {
    let a_parts: Vec<&str> = a.split(MAIN_SEPARATOR).collect();
    let b_parts: Vec<&str> = b.split(MAIN_SEPARATOR).collect();

    for (left, right) in a_parts.iter().zip(&b_parts) {
        match compare_segments(left, right) {
            Ordering::Equal => continue,
            decided => return decided,
        }
    }

    a_parts
        .len()
        .cmp(&b_parts.len())
        .then_with(|| a.cmp(b))
}

/// Case-insensitive segment comparison, one lowercased character at a time.
///
/// Avoids allocating lowercased copies of every segment; `char::to_lowercase`
/// may expand a character into several, which the flattened iterators handle.
fn compare_segments(a: &str, b: &str) -> Ordering {
    let mut lhs = a.chars().flat_map(char::to_lowercase);
    let mut rhs = b.chars().flat_map(char::to_lowercase);

    loop {
        match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => match l.cmp(&r) {
                Ordering::Equal => continue,
                decided => return decided,
            },
        }
    }
}

/// Materialize a deduplicated entry set into its deterministic order.
pub fn into_ordered(entries: HashSet<String>) -> Vec<String> {
    let mut ordered: Vec<String> = entries.into_iter().collect();
    ordered.sort_by(|a, b| compare_paths(a, b));
    ordered
}
