use std::str::FromStr;

use derive_more::IsVariant;
use tracing::debug;

use super::UnknownCaseMode;

/// The case to convert strings to with [`convert_case`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Case {
    Lower,
    Upper,
}

impl Case {
    /// Converts a single string to this case.
    pub fn apply(self, s: &str) -> String {
        match self {
            Case::Lower => s.to_lowercase(),
            Case::Upper => s.to_uppercase(),
        }
    }
}

/// Converts every string in `items` to the provided [`Case`], preserving order.
pub fn convert_case<S: AsRef<str>>(items: &[S], case: Case) -> Vec<String> {
    items.iter().map(|s| case.apply(s.as_ref())).collect()
}

/// A case that strings can be checked against with [`all_match_case`]. Parsed from either
/// `"lowercase"` or `"uppercase"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum CaseMode {
    Lowercase,
    Uppercase,
}

impl CaseMode {
    /// Checks if `s` is unchanged by conversion to this case. Strings without any cased characters
    /// match both modes.
    pub fn matches(self, s: &str) -> bool {
        match self {
            CaseMode::Lowercase => s == s.to_lowercase(),
            CaseMode::Uppercase => s == s.to_uppercase(),
        }
    }
}

impl FromStr for CaseMode {
    type Err = UnknownCaseMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lowercase" => Ok(CaseMode::Lowercase),
            "uppercase" => Ok(CaseMode::Uppercase),
            _ => Err(UnknownCaseMode { mode: s.to_owned() }),
        }
    }
}

/// Checks that every string in `items` matches the case named by `mode`.
///
/// An empty collection never matches. A `mode` that isn't a valid [`CaseMode`] places no
/// restriction on the strings, so any non-empty collection matches it.
pub fn all_match_case<S: AsRef<str>>(items: &[S], mode: &str) -> bool {
    if items.is_empty() {
        return false;
    }

    match mode.parse::<CaseMode>() {
        Ok(mode) => items.iter().all(|s| mode.matches(s.as_ref())),
        Err(error) => {
            debug!(%error, "treating case mode as a wildcard");
            true
        }
    }
}
