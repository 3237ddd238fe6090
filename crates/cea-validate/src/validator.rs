//! Record checks and diagnostics
//!
//! [`ValidationMode::Referential`] catches what manual edits to the log
//! can break: notes pointing at unknown documents, ungrounded answers and
//! evidence outside the supporting set. Note coverage is left to the
//! session, which enforces it while capturing. [`ValidationMode::Strict`]
//! adds coverage and abstain purity.

use cea_record::{AnnotationRecord, Violation};
use cea_store::{OutputLog, StoreResult};
use std::fmt::{self, Display, Formatter};

/// Which invariant set to check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Referential and grounding checks only
    #[default]
    Referential,
    /// Every record invariant
    Strict,
}

/// One violation of one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub record_id: String,
    pub violation: Violation,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.record_id, self.violation)
    }
}

/// All diagnostics for a log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    records_checked: usize,
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    #[inline]
    #[must_use]
    pub fn records_checked(&self) -> usize {
        self.records_checked
    }

    /// Diagnostics in log order
    #[inline]
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// True when no diagnostic was produced
    #[inline]
    #[must_use]
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Ids of records with at least one diagnostic, in log order
    #[must_use]
    pub fn failing_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = Vec::new();
        for d in &self.diagnostics {
            if ids.last() != Some(&d.record_id.as_str()) {
                ids.push(&d.record_id);
            }
        }
        ids
    }
}

/// Checks annotation records against their invariants
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyValidator {
    mode: ValidationMode,
}

impl ConsistencyValidator {
    #[inline]
    #[must_use]
    pub fn new(mode: ValidationMode) -> Self {
        Self { mode }
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Violations of a single record under this validator's mode
    #[must_use]
    pub fn check(&self, record: &AnnotationRecord) -> Vec<Violation> {
        match self.mode {
            ValidationMode::Referential => record.referential_violations(),
            ValidationMode::Strict => record.invariant_violations(),
        }
    }

    /// Check every record; never stops at the first failure
    #[must_use]
    pub fn validate(&self, records: &[AnnotationRecord]) -> ValidationReport {
        let mut report = ValidationReport {
            records_checked: records.len(),
            diagnostics: Vec::new(),
        };
        for record in records {
            for violation in self.check(record) {
                report.diagnostics.push(Diagnostic {
                    record_id: record.id.clone(),
                    violation,
                });
            }
        }
        tracing::debug!(
            mode = ?self.mode,
            records = report.records_checked,
            diagnostics = report.diagnostics.len(),
            "validated annotation records"
        );
        report
    }

    /// Read and check a whole log
    ///
    /// A missing log or an undecodable line is an error, not a diagnostic.
    pub fn validate_log(&self, log: &OutputLog) -> StoreResult<ValidationReport> {
        let records = log.read_records()?;
        Ok(self.validate(&records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cea_record::{Document, Example, FinalDecision, Note, SupportingSet, Verdict};

    fn grounded(id: &str) -> AnnotationRecord {
        let ex = Example::new(id, "q", "No conflict", vec![Document::new("d1"), Document::new("d2")]);
        let notes = vec![Note::new("d1", Verdict::Supports), Note::new("d2", Verdict::Outdated)];
        let set = SupportingSet::from_notes(&notes);
        AnnotationRecord::assemble(&ex, notes, FinalDecision::answer("", "a", ["d1"], &set), "summarized", "")
    }

    #[test]
    fn clean_records_pass() {
        let report = ConsistencyValidator::default().validate(&[grounded("a"), grounded("b")]);
        assert!(report.passed());
        assert_eq!(report.records_checked(), 2);
    }

    #[test]
    fn reports_all_violations_across_records() {
        let mut first = grounded("a");
        first.final_decision.evidence.push("d2".into());
        first.notes.push(Note::new("zz", Verdict::Irrelevant));
        let mut second = grounded("b");
        second.notes[0].verdict = Verdict::Contradicts;
        second.final_decision.evidence.clear();

        let report = ConsistencyValidator::default().validate(&[first, grounded("ok"), second]);

        let lines: Vec<String> = report.diagnostics().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "a: note refers to unknown doc_id zz",
                "a: evidence d2 not among supports/partial",
                "b: non-abstain but no supports/partial",
            ]
        );
        assert_eq!(report.failing_ids(), vec!["a", "b"]);
        assert!(!report.passed());
    }

    #[test]
    fn coverage_gaps_only_fail_in_strict_mode() {
        let mut record = grounded("a");
        record.notes.pop();

        assert!(ConsistencyValidator::new(ValidationMode::Referential)
            .validate(std::slice::from_ref(&record))
            .passed());
        let strict = ConsistencyValidator::new(ValidationMode::Strict).validate(&[record]);
        assert_eq!(strict.diagnostics()[0].to_string(), "a: no note for doc_id d2");
    }
}
