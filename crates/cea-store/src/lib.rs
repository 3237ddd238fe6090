//! CEA Store
//!
//! Local-file plumbing for the annotation workflow:
//!
//! - [`ExampleSource`]: strict line-delimited JSON reader for examples
//! - [`OutputLog`]: append-only log of [`cea_record::AnnotationRecord`]s
//! - [`ProgressTracker`]: atomically replaced set of completed example ids
//! - [`ProgressReport`]: total / annotated / pending summary
//!
//! No locking is performed; one process at a time is assumed.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod jsonl;
mod log;
mod progress;
mod report;
mod source;

pub use error::{StoreError, StoreResult};
pub use log::OutputLog;
pub use progress::{ProgressSet, ProgressTracker};
pub use report::{ProgressReport, DEFAULT_NEXT_UP};
pub use source::ExampleSource;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
