//! Selection between intersection and union.

use std::fmt;
use std::str::FromStr;

/// How a list of identifier collections is merged.
///
/// The mode is chosen per call and is never stored by the combiner.
///
/// # Examples
///
/// ```rust
/// use idset::combine::CombinationMode;
///
/// let mode: CombinationMode = "AND".parse().unwrap();
/// assert_eq!(mode, CombinationMode::Intersect);
/// assert_eq!(mode.to_string(), "intersect");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CombinationMode {
    /// Keep identifiers present in every collection (AND semantics).
    #[default]
    Intersect,
    /// Keep identifiers present in at least one collection (OR semantics).
    Union,
}

impl CombinationMode {
    /// Returns the lowercase name used by `Display` and `FromStr`.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intersect => "intersect",
            Self::Union => "union",
        }
    }
}

impl fmt::Display for CombinationMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Represents an error when text does not name a [`CombinationMode`].
///
/// # Examples
///
/// ```rust
/// use idset::combine::{CombinationMode, ParseCombinationModeError};
///
/// let error = "xor".parse::<CombinationMode>().unwrap_err();
/// assert_eq!(error, ParseCombinationModeError { input: "xor".to_string() });
/// assert_eq!(
///     format!("{}", error),
///     "unknown combination mode `xor`; expected one of: intersect, and, union, or"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCombinationModeError {
    /// The rejected text.
    pub input: String,
}

impl fmt::Display for ParseCombinationModeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unknown combination mode `{}`; expected one of: intersect, and, union, or",
            self.input
        )
    }
}

impl std::error::Error for ParseCombinationModeError {}

impl FromStr for CombinationMode {
    type Err = ParseCombinationModeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        if trimmed.eq_ignore_ascii_case("intersect") || trimmed.eq_ignore_ascii_case("and") {
            Ok(Self::Intersect)
        } else if trimmed.eq_ignore_ascii_case("union") || trimmed.eq_ignore_ascii_case("or") {
            Ok(Self::Union)
        } else {
            Err(ParseCombinationModeError {
                input: text.to_string(),
            })
        }
    }
}
