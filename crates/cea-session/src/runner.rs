//! Resumable run loop over an example source
//!
//! The progress set is the single source of truth for "done". On start it
//! is reconciled with the ids already in the output log, which covers a
//! crash between a log append and the following progress save.

use crate::config::SessionConfig;
use crate::error::SessionResult;
use crate::prompt::Prompter;
use crate::session::AnnotationSession;
use cea_record::Example;
use cea_store::{ExampleSource, OutputLog, ProgressSet, ProgressTracker};
use std::collections::HashSet;

/// Outcome of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// Ids already done when the run started
    pub already_done: usize,
    /// Records appended during this run
    pub annotated: usize,
    /// Examples still pending when the run ended
    pub remaining: usize,
    /// Whether the run stopped because input closed
    pub interrupted: bool,
}

/// Feeds every not-yet-done example through an [`AnnotationSession`]
#[derive(Debug, Clone)]
pub struct AnnotationRunner {
    config: SessionConfig,
    source: ExampleSource,
    log: OutputLog,
    tracker: ProgressTracker,
}

impl AnnotationRunner {
    #[must_use]
    pub fn new(
        config: SessionConfig,
        source: ExampleSource,
        log: OutputLog,
        tracker: ProgressTracker,
    ) -> Self {
        Self {
            config,
            source,
            log,
            tracker,
        }
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Load the progress set and add any ids the log has but it lacks
    ///
    /// Saves the set when reconciliation changed it.
    pub fn load_progress(&self) -> SessionResult<ProgressSet> {
        let mut progress = self.tracker.load()?;
        let logged = self.log.annotated_ids()?;
        let added = progress.absorb(logged);
        if added > 0 {
            tracing::warn!(
                added,
                path = %self.tracker.path().display(),
                "progress state was behind the annotation log; reconciled"
            );
            self.tracker.save(&progress)?;
        }
        Ok(progress)
    }

    /// Examples not in `progress`, in source order, each id once
    pub fn pending(&self, progress: &ProgressSet) -> SessionResult<Vec<Example>> {
        let mut seen = HashSet::new();
        let pending = self
            .source
            .read_all()?
            .into_iter()
            .filter(|ex| !progress.contains(&ex.id) && seen.insert(ex.id.clone()))
            .collect();
        Ok(pending)
    }

    /// Annotate pending examples until done or input closes
    pub fn run<P: Prompter + ?Sized>(&self, prompter: &mut P) -> SessionResult<RunSummary> {
        let mut progress = self.load_progress()?;
        let pending = self.pending(&progress)?;

        let mut summary = RunSummary {
            already_done: progress.len(),
            remaining: pending.len(),
            ..RunSummary::default()
        };
        tracing::info!(
            done = summary.already_done,
            pending = summary.remaining,
            source = %self.source.path().display(),
            "starting annotation run"
        );
        prompter.show(&format!(
            "{} already annotated, {} to go from {}.",
            summary.already_done,
            summary.remaining,
            self.source.path().display()
        ))?;

        let mut session = AnnotationSession::new(&self.config, prompter);
        for example in &pending {
            match session.annotate_and_commit(example, &self.log, &self.tracker, &mut progress) {
                Ok(_) => {
                    summary.annotated += 1;
                    summary.remaining -= 1;
                }
                Err(e) if e.is_interruption() => {
                    tracing::info!(id = %example.id, "input closed; example discarded");
                    summary.interrupted = true;
                    return Ok(summary);
                }
                Err(e) => return Err(e),
            }
        }

        prompter.show("All done ✅")?;
        Ok(summary)
    }
}
