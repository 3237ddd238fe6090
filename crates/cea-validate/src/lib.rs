//! CEA Validate
//!
//! Standalone consistency check over a finished annotation log. Every
//! record is checked independently of how it was produced; nothing is
//! repaired.
//!
//! ```rust,ignore
//! use cea_validate::{ConsistencyValidator, ValidationMode};
//!
//! let report = ConsistencyValidator::new(ValidationMode::Referential).validate_log(&log)?;
//! for diagnostic in report.diagnostics() {
//!     eprintln!("{diagnostic}");
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod validator;

pub use validator::{ConsistencyValidator, Diagnostic, ValidationMode, ValidationReport};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
