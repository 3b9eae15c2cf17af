/// Adds two integers, wrapping around at the bounds of [`i32`] on overflow.
pub const fn sum(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

/// Returns the base 2 representation of `n` with no leading zeros.
///
/// Negative numbers are represented by their 32-bit two's complement, so `-1` produces 32 ones.
pub fn to_binary_string(n: i32) -> String {
    format!("{n:b}")
}
