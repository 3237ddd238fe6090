//! Progress summary over the source and the annotation log

use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// Number of pending ids listed as "next up"
pub const DEFAULT_NEXT_UP: usize = 8;

/// Total / annotated / pending counts for one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressReport {
    /// Examples in the source
    pub total: usize,
    /// Distinct ids present in the annotation log
    pub annotated: usize,
    /// Source ids not yet annotated, in source order
    pub pending: Vec<String>,
    /// How many pending ids to show
    pub next_up: usize,
}

impl ProgressReport {
    /// Compute from source ids (in file order) and annotated ids
    #[must_use]
    pub fn compute<I, S>(source_ids: I, annotated: &BTreeSet<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut total = 0;
        let mut pending = Vec::new();
        for id in source_ids {
            total += 1;
            let id = id.into();
            if !annotated.contains(&id) {
                pending.push(id);
            }
        }
        Self {
            total,
            annotated: annotated.len(),
            pending,
            next_up: DEFAULT_NEXT_UP,
        }
    }

    /// With a different "next up" length
    #[inline]
    #[must_use]
    pub fn with_next_up(mut self, next_up: usize) -> Self {
        self.next_up = next_up;
        self
    }

    /// Check whether every source example is annotated
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Display for ProgressReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total sample: {}", self.total)?;
        writeln!(f, "Annotated   : {}", self.annotated)?;
        write!(f, "Pending     : {}", self.pending.len())?;
        if !self.pending.is_empty() && self.next_up > 0 {
            let next: Vec<&str> = self
                .pending
                .iter()
                .take(self.next_up)
                .map(String::as_str)
                .collect();
            write!(f, "\nNext up: {}", next.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn pending_keeps_source_order() {
        let report = ProgressReport::compute(["c", "a", "b"], &done(&["a"]));
        assert_eq!(report.total, 3);
        assert_eq!(report.annotated, 1);
        assert_eq!(report.pending, vec!["c", "b"]);
    }

    #[test]
    fn renders_next_up_limited() {
        let ids: Vec<String> = (0..12).map(|i| format!("ex_{i:02}")).collect();
        let report = ProgressReport::compute(ids, &BTreeSet::new()).with_next_up(3);
        let text = report.to_string();
        assert!(text.ends_with("Next up: ex_00, ex_01, ex_02"));
        assert!(text.contains("Pending     : 12"));
    }

    #[test]
    fn complete_report_has_no_next_up() {
        let report = ProgressReport::compute(["a"], &done(&["a", "zzz"]));
        assert!(report.is_complete());
        assert_eq!(report.annotated, 2);
        assert!(!report.to_string().contains("Next up"));
    }
}
