//! Session configuration
//!
//! Everything the session used to take from module-level constants: the
//! style guide, the abstain sentinel, trace metadata and layout width.

use cea_record::{StyleGuide, DEFAULT_ABSTAIN_ANSWER, DEFAULT_TRACE_TYPE};
use serde::{Deserialize, Serialize};

/// Think text stored on abstaining records
pub const DEFAULT_ABSTAIN_THINK: &str =
    "<think>Per-doc notes then abstain because no support.</think>";

/// Think text stored on answering records
pub const DEFAULT_ANSWER_THINK: &str =
    "<think>Summarized per-doc notes precede the final answer.</think>";

/// Column width for wrapped query and snippet text
pub const DEFAULT_WRAP_WIDTH: usize = 98;

/// Configuration for [`crate::AnnotationSession`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Conflict label → answer guidance
    pub style_guide: StyleGuide,
    /// Answer text stored when abstaining
    pub abstain_answer: String,
    /// `trace_type` stored on every record
    pub trace_type: String,
    /// `think` stored on abstaining records
    pub abstain_think: String,
    /// `think` stored on answering records
    pub answer_think: String,
    /// Wrap width for displayed text
    pub wrap_width: usize,
    /// Accept an answer when no document supports the query
    ///
    /// Off by default: such a record fails the grounding invariant, so the
    /// annotator is sent back to the action prompt and can only abstain.
    /// Turning it on accepts the answer with empty evidence, as the plain
    /// console workflow did, but such records fail referential validation.
    pub allow_ungrounded_answer: bool,
}

impl SessionConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With style guide
    #[inline]
    #[must_use]
    pub fn with_style_guide(mut self, style_guide: StyleGuide) -> Self {
        self.style_guide = style_guide;
        self
    }

    /// With abstain answer sentinel
    #[inline]
    #[must_use]
    pub fn with_abstain_answer(mut self, answer: impl Into<String>) -> Self {
        self.abstain_answer = answer.into();
        self
    }

    /// With wrap width
    #[inline]
    #[must_use]
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// With ungrounded answers allowed or refused
    #[inline]
    #[must_use]
    pub fn with_ungrounded_answers(mut self, allow: bool) -> Self {
        self.allow_ungrounded_answer = allow;
        self
    }

    /// Think text for a decision
    #[inline]
    #[must_use]
    pub fn think_for(&self, abstain: bool) -> &str {
        if abstain {
            &self.abstain_think
        } else {
            &self.answer_think
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            style_guide: StyleGuide::default(),
            abstain_answer: DEFAULT_ABSTAIN_ANSWER.to_string(),
            trace_type: DEFAULT_TRACE_TYPE.to_string(),
            abstain_think: DEFAULT_ABSTAIN_THINK.to_string(),
            answer_think: DEFAULT_ANSWER_THINK.to_string(),
            wrap_width: DEFAULT_WRAP_WIDTH,
            allow_ungrounded_answer: false,
        }
    }
}
