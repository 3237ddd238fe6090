//! Session phase machine
//!
//! `Capture { next: 0 } → … → Capture { next: n-1 } → Decide → Assembled`.
//! Capture has no early exit: every document is visited before the
//! decision phase. An example without documents starts in `Decide`.

use crate::error::SessionError;

/// Where one example's session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Collecting the note for document `next`
    Capture { next: usize },
    /// Choosing answer or abstain
    Decide,
    /// Record built; nothing left to ask
    Assembled,
}

impl SessionPhase {
    /// Initial phase for an example with `doc_count` documents
    #[inline]
    #[must_use]
    pub fn start(doc_count: usize) -> Self {
        if doc_count == 0 {
            Self::Decide
        } else {
            Self::Capture { next: 0 }
        }
    }

    /// The single legal successor, if any
    #[must_use]
    pub fn successor(self, doc_count: usize) -> Option<Self> {
        match self {
            Self::Capture { next } if next + 1 < doc_count => Some(Self::Capture { next: next + 1 }),
            Self::Capture { next } if next < doc_count => Some(Self::Decide),
            Self::Capture { .. } => None,
            Self::Decide => Some(Self::Assembled),
            Self::Assembled => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Assembled)
    }
}

/// Validates a phase transition for an example with `doc_count` documents
pub fn validate_transition(
    from: SessionPhase,
    to: SessionPhase,
    doc_count: usize,
) -> Result<(), SessionError> {
    if from.successor(doc_count) == Some(to) {
        Ok(())
    } else {
        Err(SessionError::IllegalTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_every_document_then_decides() {
        let mut phase = SessionPhase::start(3);
        let mut visited = Vec::new();
        while let SessionPhase::Capture { next } = phase {
            visited.push(next);
            phase = phase.successor(3).unwrap();
        }
        assert_eq!(visited, vec![0, 1, 2]);
        assert_eq!(phase, SessionPhase::Decide);
        assert_eq!(phase.successor(3), Some(SessionPhase::Assembled));
        assert!(SessionPhase::Assembled.successor(3).is_none());
    }

    #[test]
    fn no_documents_starts_in_decide() {
        assert_eq!(SessionPhase::start(0), SessionPhase::Decide);
    }

    #[test]
    fn skipping_a_document_is_illegal() {
        let from = SessionPhase::Capture { next: 0 };
        assert!(validate_transition(from, SessionPhase::Decide, 2).is_err());
        assert!(validate_transition(from, SessionPhase::Capture { next: 2 }, 3).is_err());
        assert!(validate_transition(from, SessionPhase::Capture { next: 1 }, 2).is_ok());
    }

    #[test]
    fn assembled_is_terminal() {
        assert!(SessionPhase::Assembled.is_terminal());
        assert!(validate_transition(SessionPhase::Assembled, SessionPhase::Decide, 1).is_err());
    }
}
