//! Cross-field invariants of an [`AnnotationRecord`]
//!
//! Two check sets are exposed:
//! - [`AnnotationRecord::referential_violations`]: notes point at real
//!   documents, answers are grounded, evidence stays in the supporting set.
//! - [`AnnotationRecord::invariant_violations`]: the referential checks plus
//!   per-document note coverage and abstain purity.

use crate::record::AnnotationRecord;
use std::collections::HashSet;

/// One broken invariant of one record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// A note references a doc id that is not among the record's documents
    #[error("note refers to unknown doc_id {doc_id}")]
    UnknownNoteDoc { doc_id: String },

    /// Non-abstaining decision with an empty supporting set
    #[error("non-abstain but no supports/partial")]
    UngroundedAnswer,

    /// Cited evidence outside the supporting set
    #[error("evidence {doc_id} not among supports/partial")]
    EvidenceNotSupporting { doc_id: String },

    /// A document received no note
    #[error("no note for doc_id {doc_id}")]
    MissingNote { doc_id: String },

    /// A document received more than one note
    #[error("duplicate notes for doc_id {doc_id}")]
    DuplicateNote { doc_id: String },

    /// Abstaining decision that still cites evidence
    #[error("abstain with {count} evidence doc_id(s)")]
    AbstainWithEvidence { count: usize },
}

impl Violation {
    /// Check whether this violation is part of the referential set
    #[inline]
    #[must_use]
    pub fn is_referential(&self) -> bool {
        matches!(
            self,
            Self::UnknownNoteDoc { .. } | Self::UngroundedAnswer | Self::EvidenceNotSupporting { .. }
        )
    }
}

impl AnnotationRecord {
    /// Referential and grounding violations
    ///
    /// Does not check note coverage.
    #[must_use]
    pub fn referential_violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();

        for note in &self.notes {
            if !self.has_doc(&note.doc_id) {
                out.push(Violation::UnknownNoteDoc {
                    doc_id: note.doc_id.clone(),
                });
            }
        }

        let supporting = self.supporting_set();
        if !self.final_decision.abstain && supporting.is_empty() {
            out.push(Violation::UngroundedAnswer);
        }

        for doc_id in &self.final_decision.evidence {
            if !supporting.contains(doc_id) {
                out.push(Violation::EvidenceNotSupporting {
                    doc_id: doc_id.clone(),
                });
            }
        }

        out
    }

    /// Every invariant a persisted record must satisfy
    #[must_use]
    pub fn invariant_violations(&self) -> Vec<Violation> {
        let mut out = self.referential_violations();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut duplicated: HashSet<&str> = HashSet::new();
        for note in &self.notes {
            if !seen.insert(note.doc_id.as_str()) && duplicated.insert(note.doc_id.as_str()) {
                out.push(Violation::DuplicateNote {
                    doc_id: note.doc_id.clone(),
                });
            }
        }
        for doc in &self.docs {
            if !seen.contains(doc.doc_id.as_str()) {
                out.push(Violation::MissingNote {
                    doc_id: doc.doc_id.clone(),
                });
            }
        }

        if self.final_decision.abstain && !self.final_decision.evidence.is_empty() {
            out.push(Violation::AbstainWithEvidence {
                count: self.final_decision.evidence.len(),
            });
        }

        out
    }
}
