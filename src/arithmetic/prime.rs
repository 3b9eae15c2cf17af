/// Checks whether `n` is prime, by trial division up to the square root of `n`. Anything less than
/// 2 isn't prime.
pub fn is_prime(n: i64) -> bool {
    n > 1 && !has_divisor_up_to_root(n.unsigned_abs())
}

/// Sums all primes in the range `0..end`. Returns 0 if there are none, including when `end` is
/// negative.
pub fn sum_of_primes_below(end: i32) -> i64 {
    (0..end).map(i64::from).filter(|&n| is_prime(n)).sum()
}

/// Derives a factor of `n` from its largest prime factor no greater than `√n`.
///
/// Candidates are searched from `⌊√n⌋` down to 2, stopping at the first prime that divides `n`.
/// If that prime `p` leaves an odd cofactor `n / p`, the cofactor is returned, otherwise `p` is.
/// When no candidate divides `n` (i.e. `n` is prime, 0 or 1), `n` itself is returned.
///
/// For example, `176 = 11 * 16` produces 11 and `87 = 3 * 29` produces 29.
pub fn prime_factor_heuristic(n: u64) -> u64 {
    let factor = (2..=n.isqrt())
        .rev()
        .find(|&f| n % f == 0 && !has_divisor_up_to_root(f));

    match factor {
        None => n,
        Some(f) if (n / f) % 2 != 0 => n / f,
        Some(f) => f,
    }
}

/// Checks for any divisor of `n` in `2..=√n`. Written as `i <= n / i` to avoid overflowing `i * i`.
fn has_divisor_up_to_root(n: u64) -> bool {
    (2..).take_while(|&i| i <= n / i).any(|i| n % i == 0)
}
