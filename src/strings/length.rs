use tracing::trace;

fn char_len<S: AsRef<str>>(s: &S) -> usize {
    s.as_ref().chars().count()
}

/// Reduces the lengths of all strings in `items` with `reducer`, e.g. [`Ord::max`] for the length
/// of the longest string. Returns [`None`] if `items` is empty.
pub fn reduce_lengths<S, F>(items: &[S], reducer: F) -> Option<usize>
where
    S: AsRef<str>,
    F: FnMut(usize, usize) -> usize,
{
    let result = items.iter().map(char_len).reduce(reducer);
    if result.is_none() {
        trace!("no lengths to reduce");
    }
    result
}

/// Calculates the mean length of the strings in `items`, or 0 if `items` is empty.
pub fn average_length<S: AsRef<str>>(items: &[S]) -> f64 {
    if items.is_empty() {
        return 0.0;
    }

    let total: usize = items.iter().map(char_len).sum();
    total as f64 / items.len() as f64
}
