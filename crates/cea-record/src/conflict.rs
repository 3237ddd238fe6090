//! Conflict types and answer style guidance
//!
//! [`ConflictType`] classifies why the documents of an example agree or
//! disagree. [`StyleGuide`] maps each type to the guidance string shown in
//! the decision phase and stored as `final.style_hint`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Why an example's documents disagree or align
///
/// Labels outside the known five are kept verbatim in [`ConflictType::Other`]
/// so that records always round-trip.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConflictType {
    NoConflict,
    Complementary,
    ConflictingOpinions,
    Outdated,
    Misinformation,
    Other(String),
}

impl ConflictType {
    /// The five known conflict types
    pub const KNOWN: [ConflictType; 5] = [
        ConflictType::NoConflict,
        ConflictType::Complementary,
        ConflictType::ConflictingOpinions,
        ConflictType::Outdated,
        ConflictType::Misinformation,
    ];

    /// Label as written in the data files
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::NoConflict => "No conflict",
            Self::Complementary => "Complementary",
            Self::ConflictingOpinions => "Conflicting opinions",
            Self::Outdated => "Outdated",
            Self::Misinformation => "Misinformation",
            Self::Other(label) => label,
        }
    }

    /// Check whether this is one of the five known types
    #[inline]
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<String> for ConflictType {
    fn from(label: String) -> Self {
        Self::KNOWN
            .into_iter()
            .find(|known| known.label() == label)
            .unwrap_or(Self::Other(label))
    }
}

impl From<&str> for ConflictType {
    fn from(label: &str) -> Self {
        Self::from(label.to_string())
    }
}

impl From<ConflictType> for String {
    fn from(value: ConflictType) -> Self {
        match value {
            ConflictType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl Display for ConflictType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Conflict label → answer guidance table
///
/// Keys are conflict labels. Unknown labels map to an empty hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleGuide(BTreeMap<String, String>);

impl StyleGuide {
    /// Empty guide (every hint is empty)
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Guidance for a conflict type
    #[must_use]
    pub fn hint(&self, conflict_type: &ConflictType) -> &str {
        self.0
            .get(conflict_type.label())
            .map_or("", String::as_str)
    }

    /// Set or replace the guidance for one label
    #[must_use]
    pub fn with_hint(mut self, label: impl Into<String>, hint: impl Into<String>) -> Self {
        self.0.insert(label.into(), hint.into());
        self
    }

    /// Overlay another guide's entries on top of this one
    #[must_use]
    pub fn merged(mut self, overrides: StyleGuide) -> Self {
        self.0.extend(overrides.0);
        self
    }

    /// Number of labels with guidance
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no guidance is configured
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StyleGuide {
    fn default() -> Self {
        Self::empty()
            .with_hint(
                ConflictType::NoConflict.label(),
                "Give a single direct answer grounded in the most relevant passage(s). No hedging.",
            )
            .with_hint(
                ConflictType::Complementary.label(),
                "Synthesize multiple valid facets; combine complementary details. Do not invent contradictions.",
            )
            .with_hint(
                ConflictType::ConflictingOpinions.label(),
                "Present the differing positions neutrally; attribute each stance; avoid picking a side unless recency/evidence quality clearly favors one.",
            )
            .with_hint(
                ConflictType::Outdated.label(),
                "Prefer the most recent reliable data; you may note older values but clarify they are outdated.",
            )
            .with_hint(
                ConflictType::Misinformation.label(),
                "Ignore incorrect claims; state the verified fact with reliable citations.",
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_parse_to_variants() {
        assert_eq!(ConflictType::from("No conflict"), ConflictType::NoConflict);
        assert_eq!(
            ConflictType::from("Conflicting opinions"),
            ConflictType::ConflictingOpinions
        );
    }

    #[test]
    fn unknown_label_is_preserved() {
        let ct = ConflictType::from("Conflict due to outdated information");
        assert!(!ct.is_known());
        assert_eq!(ct.label(), "Conflict due to outdated information");
        let json = serde_json::to_string(&ct).unwrap();
        assert_eq!(json, "\"Conflict due to outdated information\"");
    }

    #[test]
    fn serde_uses_labels() {
        let json = serde_json::to_string(&ConflictType::Outdated).unwrap();
        assert_eq!(json, "\"Outdated\"");
        let back: ConflictType = serde_json::from_str("\"Complementary\"").unwrap();
        assert_eq!(back, ConflictType::Complementary);
    }

    #[test]
    fn default_guide_covers_every_known_type() {
        let guide = StyleGuide::default();
        assert_eq!(guide.len(), 5);
        for ct in ConflictType::KNOWN {
            assert!(!guide.hint(&ct).is_empty(), "missing hint for {ct}");
        }
    }

    #[test]
    fn unknown_type_has_empty_hint() {
        let guide = StyleGuide::default();
        assert_eq!(guide.hint(&ConflictType::from("Something else")), "");
    }

    #[test]
    fn overrides_replace_single_entries() {
        let guide = StyleGuide::default()
            .merged(StyleGuide::empty().with_hint("Outdated", "Use the newest figure."));
        assert_eq!(guide.hint(&ConflictType::Outdated), "Use the newest figure.");
        assert!(guide.hint(&ConflictType::NoConflict).starts_with("Give a single"));
    }
}
