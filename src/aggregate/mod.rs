//! Exercises that filter, deduplicate or reduce collections of numbers.
//!
//! # Absent Results
//! A reduction over an empty collection has no meaningful result, so [`reduce_with`], [`combine`],
//! [`sum_of_squares`] and [`second_extreme`] all return [`None`] in that case rather than an
//! identity value. [`average`] is the exception, see its docs.

mod distinct;
mod filter;
mod reduce;
mod tests;

pub use distinct::*;
pub use filter::*;
pub use reduce::*;
