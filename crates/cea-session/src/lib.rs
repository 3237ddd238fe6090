//! CEA Session
//!
//! The annotation record lifecycle:
//!
//! 1. **Capture**: one [`cea_record::Note`] per document, in order
//! 2. **Decide**: answer (grounded in the supporting set) or abstain
//! 3. **Commit**: append the record, then save the progress set
//!
//! The annotator is reached only through [`Prompter`], so the whole
//! lifecycle can be driven by a [`ScriptedPrompter`].
//!
//! # Example
//!
//! ```rust,ignore
//! use cea_session::{AnnotationRunner, ConsolePrompter, SessionConfig};
//!
//! let runner = AnnotationRunner::new(SessionConfig::new(), source, log, tracker);
//! let stdin = std::io::stdin();
//! let mut prompter = ConsolePrompter::new(stdin.lock(), std::io::stdout());
//! let summary = runner.run(&mut prompter)?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod config;
pub mod error;
pub mod phase;
pub mod prompt;
mod render;
pub mod runner;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use phase::{validate_transition, SessionPhase};
pub use prompt::{ConsolePrompter, Prompter, ScriptedPrompter};
pub use runner::{AnnotationRunner, RunSummary};
pub use session::AnnotationSession;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
