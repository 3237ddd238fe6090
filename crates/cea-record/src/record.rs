//! Notes, final decisions and the persisted annotation record

use crate::conflict::ConflictType;
use crate::example::{Document, Example};
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// Answer text stored when the annotator abstains
pub const DEFAULT_ABSTAIN_ANSWER: &str = "Unknown based on provided documents.";

/// Trace type stored on every record
pub const DEFAULT_TRACE_TYPE: &str = "summarized";

/// One annotator judgment about one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub doc_id: String,
    pub verdict: Verdict,
    #[serde(default)]
    pub key_fact: String,
    #[serde(default)]
    pub quote: String,
}

impl Note {
    /// Create a note with empty free-text fields
    #[inline]
    #[must_use]
    pub fn new(doc_id: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            doc_id: doc_id.into(),
            verdict,
            key_fact: String::new(),
            quote: String::new(),
        }
    }

    /// With key fact
    #[inline]
    #[must_use]
    pub fn with_key_fact(mut self, key_fact: impl Into<String>) -> Self {
        self.key_fact = key_fact.into();
        self
    }

    /// With quote
    #[inline]
    #[must_use]
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }
}

/// Documents whose note verdict is supports or partial, in note order
///
/// The only valid evidence pool for a non-abstaining answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupportingSet(Vec<String>);

impl SupportingSet {
    /// Compute from notes
    #[must_use]
    pub fn from_notes(notes: &[Note]) -> Self {
        let mut ids: Vec<String> = Vec::new();
        for note in notes.iter().filter(|n| n.verdict.is_supporting()) {
            if !ids.contains(&note.doc_id) {
                ids.push(note.doc_id.clone());
            }
        }
        Self(ids)
    }

    /// Check membership
    #[inline]
    #[must_use]
    pub fn contains(&self, doc_id: &str) -> bool {
        self.0.iter().any(|id| id == doc_id)
    }

    /// Supporting doc ids in note order
    #[inline]
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The terminal output of one annotation session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalDecision {
    pub style_hint: String,
    pub answer: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    #[serde(default)]
    pub abstain: bool,
}

impl FinalDecision {
    /// Abstain: no grounded answer is possible
    ///
    /// Always legal; evidence is empty.
    #[must_use]
    pub fn abstain(style_hint: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            style_hint: style_hint.into(),
            answer: answer.into(),
            evidence: Vec::new(),
            abstain: true,
        }
    }

    /// Answer grounded in the supporting set
    ///
    /// Cited ids outside `supporting` are dropped, duplicates are collapsed,
    /// and the typed order is kept. An empty supporting set always yields
    /// empty evidence.
    pub fn answer<I, S>(
        style_hint: impl Into<String>,
        answer: impl Into<String>,
        cited: I,
        supporting: &SupportingSet,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut evidence: Vec<String> = Vec::new();
        for id in cited {
            let id = id.as_ref();
            if supporting.contains(id) && !evidence.iter().any(|e| e == id) {
                evidence.push(id.to_string());
            }
        }
        Self {
            style_hint: style_hint.into(),
            answer: answer.into(),
            evidence,
            abstain: false,
        }
    }
}

/// The persisted unit: one per example, written once
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub id: String,
    pub query: String,
    pub conflict_type: ConflictType,
    #[serde(default)]
    pub docs: Vec<Document>,
    #[serde(default)]
    pub notes: Vec<Note>,
    #[serde(rename = "final")]
    pub final_decision: FinalDecision,
    #[serde(default)]
    pub trace_type: String,
    #[serde(default)]
    pub think: String,
}

impl AnnotationRecord {
    /// Assemble a record from an example's immutable fields and session output
    #[must_use]
    pub fn assemble(
        example: &Example,
        notes: Vec<Note>,
        final_decision: FinalDecision,
        trace_type: impl Into<String>,
        think: impl Into<String>,
    ) -> Self {
        Self {
            id: example.id.clone(),
            query: example.query.clone(),
            conflict_type: example.conflict_type.clone(),
            docs: example.docs.clone(),
            notes,
            final_decision,
            trace_type: trace_type.into(),
            think: think.into(),
        }
    }

    /// Supporting set computed from this record's notes
    #[inline]
    #[must_use]
    pub fn supporting_set(&self) -> SupportingSet {
        SupportingSet::from_notes(&self.notes)
    }

    /// Check if a doc id belongs to this record's documents
    #[inline]
    #[must_use]
    pub fn has_doc(&self, doc_id: &str) -> bool {
        self.docs.iter().any(|d| d.doc_id == doc_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn notes() -> Vec<Note> {
        vec![
            Note::new("d1", Verdict::Supports),
            Note::new("d2", Verdict::Irrelevant),
            Note::new("d3", Verdict::Partial),
        ]
    }

    #[test]
    fn supporting_set_keeps_note_order() {
        let set = SupportingSet::from_notes(&notes());
        assert_eq!(set.ids(), &["d1".to_string(), "d3".to_string()]);
        assert!(!set.contains("d2"));
    }

    #[test]
    fn answer_drops_unsupported_and_duplicate_citations() {
        let set = SupportingSet::from_notes(&notes());
        let decision = FinalDecision::answer("", "A.", ["d3", "d2", "d9", "d3", "d1"], &set);
        assert_eq!(decision.evidence, vec!["d3".to_string(), "d1".to_string()]);
        assert!(!decision.abstain);
    }

    #[test]
    fn answer_with_empty_supporting_set_has_no_evidence() {
        let decision = FinalDecision::answer("", "A.", ["d1"], &SupportingSet::default());
        assert!(decision.evidence.is_empty());
    }

    #[test]
    fn abstain_has_no_evidence() {
        let decision = FinalDecision::abstain("hint", DEFAULT_ABSTAIN_ANSWER);
        assert!(decision.abstain);
        assert!(decision.evidence.is_empty());
        assert_eq!(decision.answer, DEFAULT_ABSTAIN_ANSWER);
    }

    #[test]
    fn final_field_uses_wire_name() {
        let ex = Example::new("ex1", "q", "No conflict", vec![Document::new("d1")]);
        let record = AnnotationRecord::assemble(
            &ex,
            vec![Note::new("d1", Verdict::Supports)],
            FinalDecision::answer("h", "a", ["d1"], &SupportingSet::from_notes(&[Note::new("d1", Verdict::Supports)])),
            DEFAULT_TRACE_TYPE,
            "<think></think>",
        );
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["final"]["evidence"][0], "d1");
        assert_eq!(value["notes"][0]["verdict"], "supports");
        assert_eq!(value["conflict_type"], "No conflict");

        let back: AnnotationRecord = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }
}
