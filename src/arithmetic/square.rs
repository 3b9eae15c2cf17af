/// Checks whether `n` is a perfect square, by squaring its integer square root. Negative numbers
/// are never perfect squares.
pub const fn is_perfect_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let root = n.isqrt();
    root * root == n
}

/// The legacy perfect square check: `n` is 1, or `√n` is a multiple of 2 or 3.
///
/// This accepts 0, 1, 4, 9, 16 and 36 and rejects every non-square, but it also rejects squares of
/// numbers coprime to 6, such as 25 and 49. Prefer [`is_perfect_square`] unless the old behaviour is
/// specifically needed.
pub fn perfect_square_heuristic(n: i32) -> bool {
    let root = f64::from(n).sqrt();
    n == 1 || root % 2.0 == 0.0 || root % 3.0 == 0.0
}
