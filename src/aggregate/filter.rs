use derive_more::IsVariant;

/// Whether a number is odd or even.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    /// Returns the parity of `n`. Negative numbers follow the same rule, so -3 is odd.
    pub const fn of(n: i32) -> Parity {
        if n % 2 != 0 { Parity::Odd } else { Parity::Even }
    }
}

/// Returns the numbers in `items` with the requested [`Parity`], preserving their order.
pub fn filter_parity(items: &[i32], parity: Parity) -> Vec<i32> {
    items
        .iter()
        .copied()
        .filter(|&n| Parity::of(n) == parity)
        .collect()
}
