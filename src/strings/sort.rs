use derive_more::IsVariant;

/// The direction to sort in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Order {
    Ascending,
    Descending,
}

/// Returns a sorted copy of `items`. The sort is stable and compares strings lexicographically by
/// Unicode scalar value.
pub fn sort_strings<S: AsRef<str>>(items: &[S], order: Order) -> Vec<String> {
    let mut sorted: Vec<String> = items.iter().map(|s| s.as_ref().to_owned()).collect();

    match order {
        Order::Ascending => sorted.sort(),
        Order::Descending => sorted.sort_by(|a, b| b.cmp(a)),
    }

    sorted
}
