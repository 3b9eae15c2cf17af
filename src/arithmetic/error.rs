use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The factorial of `n` is larger than [`u64::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorialOverflow {
    /// The input whose factorial was requested.
    pub n: u64,
}

impl Display for FactorialOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Factorial of {} overflows a 64-bit integer!", self.n)
    }
}

impl Error for FactorialOverflow {}
