//! Error types for annotation sessions

use crate::phase::SessionPhase;
use cea_store::StoreError;

/// Errors that end a session
///
/// Invalid interactive input is never an error: it is defaulted or
/// reprompted inside the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The input stream ended; the current example is discarded
    #[error("input closed before the example was complete")]
    InputClosed,

    /// Terminal read or write failed
    #[error("terminal io error: {0}")]
    Io(#[from] std::io::Error),

    /// Log or progress persistence failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Phase machine was driven out of order
    #[error("illegal session transition: {from:?} -> {to:?}")]
    IllegalTransition {
        from: SessionPhase,
        to: SessionPhase,
    },
}

impl SessionError {
    /// Check if this error is the interruption path
    #[inline]
    #[must_use]
    pub fn is_interruption(&self) -> bool {
        matches!(self, Self::InputClosed)
    }
}

/// Result type alias for session operations
pub type SessionResult<T> = Result<T, SessionError>;
