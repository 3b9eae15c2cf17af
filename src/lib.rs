//! A small library of functional-style exercises over in-memory collections.
//!
//! # Purpose
//! Each function here is a self-contained exercise in mapping, filtering, reducing or sorting a
//! small collection (or a single primitive). There is no shared state between them and no I/O;
//! every function is deterministic given its arguments.
//!
//! # Method
//! The exercises are grouped by topic:
//! - [`arithmetic`]: sums, factorials, primes, perfect squares and binary representation.
//! - [`strings`]: case conversion and checks, sorting, palindromes and word counts.
//! - [`aggregate`]: parity filters, averages, deduplication and reductions over numbers.
//!
//! Flags that select between two behaviours are small enums rather than booleans, so a call site
//! like `filter_parity(&ls, Parity::Odd)` reads without needing to look up the signature.
//! Reducers and predicates are plain closures or function paths such as [`Ord::max`].
//!
//! # Error Handling
//! Reducing an empty collection isn't an error, it just has no result, so those functions return
//! [`Option`]s. The only real error is a factorial that doesn't fit in a [`u64`], which is reported
//! by [`arithmetic::checked_factorial`] and turned into a panic by [`arithmetic::factorial`].
//!
//! # Features
//! Each module sits behind a feature of the same name, all of which are enabled by default through
//! the `all` feature.

// #![warn(missing_docs)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]

#[cfg(feature = "aggregate")]
pub mod aggregate;
#[cfg(feature = "arithmetic")]
pub mod arithmetic;
#[cfg(feature = "strings")]
pub mod strings;

#[cfg(feature = "arithmetic")]
pub(crate) mod util;
