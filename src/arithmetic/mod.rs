//! Exercises over single integers: sums, factorials, primes, perfect squares and binary
//! representation.
//!
//! Everything here takes one or two primitives and returns a primitive (or a [`String`] for
//! [`to_binary_string`]). The only fallible operation is [`checked_factorial`], which reports a
//! [`FactorialOverflow`] once the result no longer fits in a [`u64`].

mod error;
mod factorial;
mod integer;
mod prime;
mod square;

pub use error::*;
pub use factorial::*;
pub use integer::*;
pub use prime::*;
pub use square::*;
