//! Per-document verdicts
//!
//! A [`Verdict`] is the annotator's judgment of how one document relates
//! to the query. Menu codes `1`..`6` map onto the variants in order.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Relation of a document to the query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Document answers the query
    Supports,
    /// Document answers part of the query
    Partial,
    /// Document disagrees with the supported answer
    Contradicts,
    /// Document is off-topic
    Irrelevant,
    /// Document carries superseded information
    Outdated,
    /// Document carries false claims
    Misinformation,
}

impl Verdict {
    /// All verdicts in menu order
    pub const ALL: [Verdict; 6] = [
        Verdict::Supports,
        Verdict::Partial,
        Verdict::Contradicts,
        Verdict::Irrelevant,
        Verdict::Outdated,
        Verdict::Misinformation,
    ];

    /// Verdict used when the annotator input is empty or unrecognized
    pub const DEFAULT: Verdict = Verdict::Irrelevant;

    /// Menu code shown to the annotator
    #[inline]
    #[must_use]
    pub fn code(self) -> char {
        match self {
            Self::Supports => '1',
            Self::Partial => '2',
            Self::Contradicts => '3',
            Self::Irrelevant => '4',
            Self::Outdated => '5',
            Self::Misinformation => '6',
        }
    }

    /// Wire name (also accepted as input)
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Supports => "supports",
            Self::Partial => "partial",
            Self::Contradicts => "contradicts",
            Self::Irrelevant => "irrelevant",
            Self::Outdated => "outdated",
            Self::Misinformation => "misinformation",
        }
    }

    /// Whether this verdict puts the document in the supporting set
    #[inline]
    #[must_use]
    pub fn is_supporting(self) -> bool {
        matches!(self, Self::Supports | Self::Partial)
    }

    /// Parse annotator input, falling back to [`Verdict::DEFAULT`]
    ///
    /// Empty and unrecognized input both yield the default.
    #[must_use]
    pub fn from_input_or_default(input: &str) -> Self {
        input.parse().unwrap_or(Self::DEFAULT)
    }
}

impl Display for Verdict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that is neither a menu code nor a verdict name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized verdict: '{0}'")]
pub struct UnknownVerdict(pub String);

impl FromStr for Verdict {
    type Err = UnknownVerdict;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|v| {
                (trimmed.len() == 1 && trimmed.starts_with(v.code()))
                    || trimmed.eq_ignore_ascii_case(v.as_str())
            })
            .ok_or_else(|| UnknownVerdict(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_menu_order() {
        let codes: String = Verdict::ALL.iter().map(|v| v.code()).collect();
        assert_eq!(codes, "123456");
        assert_eq!("1".parse::<Verdict>().unwrap(), Verdict::Supports);
        assert_eq!("6".parse::<Verdict>().unwrap(), Verdict::Misinformation);
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("Partial".parse::<Verdict>().unwrap(), Verdict::Partial);
        assert_eq!(" outdated ".parse::<Verdict>().unwrap(), Verdict::Outdated);
    }

    #[test]
    fn unknown_input_defaults_to_irrelevant() {
        assert_eq!(Verdict::from_input_or_default(""), Verdict::Irrelevant);
        assert_eq!(Verdict::from_input_or_default("7"), Verdict::Irrelevant);
        assert_eq!(Verdict::from_input_or_default("12"), Verdict::Irrelevant);
        assert_eq!(Verdict::from_input_or_default("yes"), Verdict::Irrelevant);
    }

    #[test]
    fn only_supports_and_partial_are_supporting() {
        let supporting: Vec<_> = Verdict::ALL.into_iter().filter(|v| v.is_supporting()).collect();
        assert_eq!(supporting, vec![Verdict::Supports, Verdict::Partial]);
    }

    #[test]
    fn serializes_as_snake_case_name() {
        let json = serde_json::to_string(&Verdict::Misinformation).unwrap();
        assert_eq!(json, "\"misinformation\"");
        let back: Verdict = serde_json::from_str("\"contradicts\"").unwrap();
        assert_eq!(back, Verdict::Contradicts);
    }

    #[test]
    fn unknown_verdict_display() {
        let err = "x".parse::<Verdict>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognized verdict: 'x'");
    }
}
