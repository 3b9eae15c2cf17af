use tracing::debug;

use super::FactorialOverflow;
use crate::util::result::ResultExtension;

/// The largest `n` for which `n!` still fits in a [`u64`].
pub const MAX_FACTORIAL_INPUT: u64 = 20;

/// Calculates `n!`, the product of all integers from 1 to `n`. The factorial of 0 is 1.
///
/// # Panics
/// Panics if the result overflows a [`u64`], which happens for any `n` above
/// [`MAX_FACTORIAL_INPUT`]. Use [`checked_factorial`] to handle this case instead.
#[track_caller]
pub fn factorial(n: u64) -> u64 {
    checked_factorial(n).throw()
}

/// Calculates `n!`, returning a [`FactorialOverflow`] rather than panicking if the result doesn't
/// fit in a [`u64`].
pub fn checked_factorial(n: u64) -> Result<u64, FactorialOverflow> {
    let result = (1..=n).try_fold(1_u64, |acc, i| acc.checked_mul(i));

    if result.is_none() {
        debug!(n, "factorial overflowed");
    }

    result.ok_or(FactorialOverflow { n })
}
