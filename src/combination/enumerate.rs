//! Brute-force subset enumeration
//!
//! Every subset of sizes `1..N` is produced, followed by the full set of all
//! `N` pieces. The full set is appended separately so the image carrying every
//! attribute is always a candidate. Candidate count is `2^N - 1`, which limits
//! useful catalogs to a few dozen pieces at most.

use itertools::Itertools;

/// Enumerate every candidate subset of `items`
///
/// Order: increasing subset size, lexicographic by position within a size,
/// then the full set last. An empty input still yields the (empty) full set
/// once.
pub fn enumerate_candidates<T>(items: &[T]) -> impl Iterator<Item = Vec<&T>> + '_ {
    (1..items.len())
        .flat_map(move |size| items.iter().combinations(size))
        .chain(std::iter::once(items.iter().collect()))
}

/// Number of candidates `enumerate_candidates` yields for `n` items
///
/// Saturates at `u64::MAX` for catalogs too large to count.
pub const fn candidate_count(n: usize) -> u64 {
    match n {
        0 => 1,
        1..=63 => (1_u64 << n) - 1,
        _ => u64::MAX,
    }
}
