use derive_more::{Display, Error};

/// A string that didn't name a known [`CaseMode`](super::CaseMode).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown case mode {mode:?}, expected \"lowercase\" or \"uppercase\"!")]
pub struct UnknownCaseMode {
    /// The unrecognised input.
    pub mode: String,
}
