//! CEA Record Schema
//!
//! Shared data shapes for the conflicting-evidence annotation workflow.
//!
//! # Core Concepts
//!
//! - [`Example`]: one query with its fixed, ordered candidate [`Document`]s
//! - [`Note`]: one annotator [`Verdict`] about one document
//! - [`FinalDecision`]: the answer (or abstain) with cited evidence
//! - [`AnnotationRecord`]: the persisted unit, one per example
//! - [`Violation`]: a broken cross-field invariant of a record
//!
//! Nothing in this crate performs I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use cea_record::{AnnotationRecord, FinalDecision};
//!
//! let supporting = record.supporting_set();
//! let decision = FinalDecision::answer(hint, "Paris.", ["d1", "d9"], &supporting);
//! assert!(record.invariant_violations().is_empty());
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod conflict;
mod example;
mod invariants;
mod record;
mod verdict;

pub use conflict::{ConflictType, StyleGuide};
pub use example::{Document, Example};
pub use invariants::Violation;
pub use record::{
    AnnotationRecord, FinalDecision, Note, SupportingSet, DEFAULT_ABSTAIN_ANSWER,
    DEFAULT_TRACE_TYPE,
};
pub use verdict::{UnknownVerdict, Verdict};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
