use derive_more::IsVariant;
use tracing::trace;

/// Reduces `items` with `reducer`, starting from the first element. Passing [`Ord::max`] or
/// [`Ord::min`] finds the largest or smallest element.
///
/// Returns [`None`] if `items` is empty.
pub fn reduce_with<T, F>(items: &[T], reducer: F) -> Option<T>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    let result = items.iter().copied().reduce(reducer);
    if result.is_none() {
        trace!("nothing to reduce");
    }
    result
}

/// An operation for [`combine`], with its identity as the starting value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Combine {
    /// Adds all elements, starting from 0.
    Sum,
    /// Multiplies all elements, starting from 1.
    Product,
}

impl Combine {
    /// The value that leaves any other unchanged under this operation.
    pub const fn identity(self) -> i32 {
        match self {
            Combine::Sum => 0,
            Combine::Product => 1,
        }
    }

    /// Applies this operation to a pair of values, wrapping around at the bounds of [`i32`] on
    /// overflow.
    pub const fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            Combine::Sum => a.wrapping_add(b),
            Combine::Product => a.wrapping_mul(b),
        }
    }
}

/// Folds `items` into a single sum or product. Overflow wraps, as in [`Combine::apply`].
///
/// Returns [`None`] if `items` is empty, even though the identity of either operation would be a
/// reasonable answer.
pub fn combine(items: &[i32], op: Combine) -> Option<i32> {
    if items.is_empty() {
        trace!(?op, "nothing to combine");
        return None;
    }

    Some(
        items
            .iter()
            .fold(op.identity(), |acc, &n| op.apply(acc, n)),
    )
}

/// Sums the squares of all elements in `items` that match `predicate`. Both the squaring and the
/// sum wrap around at the bounds of [`i32`] on overflow.
///
/// Returns [`None`] if `items` is empty, but `Some(0)` if it only contains elements that don't
/// match.
pub fn sum_of_squares<F>(items: &[i32], mut predicate: F) -> Option<i32>
where
    F: FnMut(i32) -> bool,
{
    if items.is_empty() {
        return None;
    }

    Some(
        items
            .iter()
            .copied()
            .filter(|&n| predicate(n))
            .map(|n| n.wrapping_mul(n))
            .fold(0, i32::wrapping_add),
    )
}

/// Calculates the arithmetic mean of `items`.
///
/// An empty slice isn't checked for: its mean is `0.0 / 0.0`, which is [`NaN`](f64::NAN).
pub fn average(items: &[f64]) -> f64 {
    items.iter().sum::<f64>() / items.len() as f64
}
