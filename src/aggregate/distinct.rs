use std::collections::HashSet;
use std::hash::Hash;

use derive_more::IsVariant;

/// Which end of a sorted collection to search from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Extreme {
    Largest,
    Smallest,
}

/// Removes repeated values from `items`, keeping the first occurrence of each.
pub fn dedupe<T: Eq + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert(*item))
        .cloned()
        .collect()
}

/// Finds the second largest or second smallest distinct value in `items`. Duplicates of the
/// extreme value don't count, so `[10, 10, 9]` has a second largest value of 9.
///
/// Returns [`None`] if `items` has fewer than two distinct values.
pub fn second_extreme<T: Ord + Hash + Clone>(items: &[T], extreme: Extreme) -> Option<T> {
    let mut distinct = dedupe(items);

    match extreme {
        Extreme::Largest => distinct.sort_unstable_by(|a, b| b.cmp(a)),
        Extreme::Smallest => distinct.sort_unstable(),
    }

    distinct.into_iter().nth(1)
}
