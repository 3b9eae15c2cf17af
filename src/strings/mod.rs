//! Exercises over strings and collections of strings.
//!
//! Functions taking a collection accept any slice of [`AsRef<str>`] items, so both `&[&str]` and
//! `&[String]` work. Lengths are always counted in [`char`]s, not bytes.

mod case;
mod error;
mod length;
mod sort;
mod text;

pub use case::*;
pub use error::*;
pub use length::*;
pub use sort::*;
pub use text::*;
