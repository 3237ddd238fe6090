//! One example → one annotation record
//!
//! The session walks the phase machine in [`crate::phase`]: one note per
//! document in `docs` order, then a decision, then assembly. Bad input is
//! never fatal here: an unrecognized verdict becomes `irrelevant` and an
//! unrecognized action is asked again. The only way out before a record
//! exists is the prompter closing.

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::phase::{validate_transition, SessionPhase};
use crate::prompt::Prompter;
use crate::render::{self, DOC_RULE, SECTION_RULE};
use cea_record::{AnnotationRecord, Document, Example, FinalDecision, Note, SupportingSet, Verdict};
use cea_store::{OutputLog, ProgressSet, ProgressTracker};

pub const VERDICT_PROMPT: &str =
    "Verdict 1 sup | 2 part | 3 contra | 4 irr | 5 old | 6 misinfo [default=4]: ";
pub const KEY_FACT_PROMPT: &str = "Key fact (short; optional): ";
pub const QUOTE_PROMPT: &str = "Optional short quote/span: ";
pub const ACTION_PROMPT: &str = "[a]nswer  [u]nknown/abstain: ";
pub const ANSWER_PROMPT: &str = "Write final answer (3–6 sentences):\n> ";
pub const UNGROUNDED_NOTICE: &str =
    "No supporting docs: an answer would be ungrounded. Abstain with [u].";
pub const EVIDENCE_PROMPT: &str =
    "List evidence doc_ids separated by space (e.g., d2 d5), or empty: ";

/// Decision-phase action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Answer,
    Abstain,
}

impl Action {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "a" => Some(Self::Answer),
            "u" => Some(Self::Abstain),
            _ => None,
        }
    }
}

/// Drives one [`Example`] to an [`AnnotationRecord`]
///
/// Knows nothing about batches; the caller decides which examples to feed.
pub struct AnnotationSession<'a, P: ?Sized> {
    config: &'a SessionConfig,
    prompter: &'a mut P,
    phase: SessionPhase,
}

impl<'a, P: Prompter + ?Sized> AnnotationSession<'a, P> {
    #[must_use]
    pub fn new(config: &'a SessionConfig, prompter: &'a mut P) -> Self {
        Self {
            config,
            prompter,
            phase: SessionPhase::Assembled,
        }
    }

    /// Current phase (`Assembled` before the first example)
    #[inline]
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Capture notes and a decision, then assemble the record
    ///
    /// Nothing is persisted.
    pub fn annotate(&mut self, example: &Example) -> SessionResult<AnnotationRecord> {
        let doc_count = example.docs.len();
        self.phase = SessionPhase::start(doc_count);
        self.show_header(example)?;

        let mut notes = Vec::with_capacity(doc_count);
        while let SessionPhase::Capture { next } = self.phase {
            notes.push(self.capture_note(&example.docs[next])?);
            let to = if next + 1 < doc_count {
                SessionPhase::Capture { next: next + 1 }
            } else {
                SessionPhase::Decide
            };
            self.advance(to, doc_count)?;
        }

        let decision = self.decide(example, &notes)?;
        self.advance(SessionPhase::Assembled, doc_count)?;

        let think = self.config.think_for(decision.abstain).to_string();
        Ok(AnnotationRecord::assemble(
            example,
            notes,
            decision,
            self.config.trace_type.clone(),
            think,
        ))
    }

    /// Annotate, append to `log`, then record the id in `progress`
    ///
    /// The append is the commit point. The progress set is saved right
    /// after it, before anything else is asked.
    pub fn annotate_and_commit(
        &mut self,
        example: &Example,
        log: &OutputLog,
        tracker: &ProgressTracker,
        progress: &mut ProgressSet,
    ) -> SessionResult<AnnotationRecord> {
        let record = self.annotate(example)?;
        log.append(&record)?;
        progress.insert(record.id.clone());
        tracker.save(progress)?;

        tracing::info!(
            id = %record.id,
            abstain = record.final_decision.abstain,
            evidence = record.final_decision.evidence.len(),
            "committed record"
        );
        self.prompter.show(&format!("Saved {} ✔", record.id))?;
        Ok(record)
    }

    fn advance(&mut self, to: SessionPhase, doc_count: usize) -> SessionResult<()> {
        validate_transition(self.phase, to, doc_count)?;
        tracing::trace!(from = ?self.phase, to = ?to, "session transition");
        self.phase = to;
        Ok(())
    }

    fn show_header(&mut self, example: &Example) -> SessionResult<()> {
        self.prompter.show(&format!("\n{}", render::rule(SECTION_RULE)))?;
        self.prompter.show(&format!(
            "ID {}  |  Type: {}",
            example.id, example.conflict_type
        ))?;
        self.prompter.show(&format!(
            "QUERY: {}",
            render::wrap(&example.query, self.config.wrap_width)
        ))
    }

    fn capture_note(&mut self, doc: &Document) -> SessionResult<Note> {
        self.prompter.show(&format!("\n{}", render::rule(DOC_RULE)))?;
        self.prompter
            .show(&render::document(doc, self.config.wrap_width))?;

        let raw = self.prompter.ask(VERDICT_PROMPT)?;
        let verdict = Verdict::from_input_or_default(&raw);
        if !raw.trim().is_empty() && raw.parse::<Verdict>().is_err() {
            tracing::debug!(doc_id = %doc.doc_id, input = %raw.trim(), "unrecognized verdict, using default");
        }
        let key_fact = self.prompter.ask(KEY_FACT_PROMPT)?;
        let quote = self.prompter.ask(QUOTE_PROMPT)?;

        tracing::debug!(doc_id = %doc.doc_id, %verdict, "captured note");
        Ok(Note::new(doc.doc_id.clone(), verdict)
            .with_key_fact(key_fact.trim())
            .with_quote(quote.trim()))
    }

    fn decide(&mut self, example: &Example, notes: &[Note]) -> SessionResult<FinalDecision> {
        let style_hint = self
            .config
            .style_guide
            .hint(&example.conflict_type)
            .to_string();
        let supporting = SupportingSet::from_notes(notes);

        self.prompter.show(&format!("\n{}", render::rule(SECTION_RULE)))?;
        self.prompter.show(&format!(
            "QUERY: {}",
            render::wrap(&example.query, self.config.wrap_width)
        ))?;
        self.prompter.show(&format!("\nStyle: {style_hint}"))?;
        let listed = if supporting.is_empty() {
            "(none)".to_string()
        } else {
            supporting.ids().join(", ")
        };
        self.prompter.show(&format!("Supporting docs: {listed}"))?;

        loop {
            let choice = self.prompter.ask(ACTION_PROMPT)?;
            match Action::parse(&choice) {
                Some(Action::Abstain) => {
                    return Ok(FinalDecision::abstain(
                        style_hint,
                        self.config.abstain_answer.clone(),
                    ));
                }
                Some(Action::Answer)
                    if supporting.is_empty() && !self.config.allow_ungrounded_answer =>
                {
                    tracing::debug!(id = %example.id, "answer refused: empty supporting set");
                    self.prompter.show(UNGROUNDED_NOTICE)?;
                }
                Some(Action::Answer) => {
                    let answer = self.prompter.ask(ANSWER_PROMPT)?;
                    let cited = if supporting.is_empty() {
                        String::new()
                    } else {
                        self.prompter.ask(EVIDENCE_PROMPT)?
                    };
                    let decision = FinalDecision::answer(
                        style_hint,
                        answer.trim(),
                        cited.split_whitespace(),
                        &supporting,
                    );
                    let typed = cited.split_whitespace().count();
                    if typed > decision.evidence.len() {
                        tracing::debug!(
                            id = %example.id,
                            typed,
                            kept = decision.evidence.len(),
                            "dropped citations outside the supporting set"
                        );
                    }
                    return Ok(decision);
                }
                None => {
                    tracing::debug!(input = %choice.trim(), "unrecognized decision action");
                }
            }
        }
    }
}
