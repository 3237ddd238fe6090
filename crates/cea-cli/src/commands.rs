//! Subcommand bodies
//!
//! Each command takes resolved configuration and returns its result; the
//! binary decides what to print and which exit status to use.

use crate::config::AppConfig;
use anyhow::{Context, Result};
use cea_session::{AnnotationRunner, Prompter, RunSummary};
use cea_store::{ExampleSource, OutputLog, ProgressReport, ProgressTracker};
use cea_validate::{ConsistencyValidator, ValidationMode, ValidationReport};
use std::path::Path;

/// Run the interactive annotation loop over `config.paths.input`
pub fn annotate<P: Prompter + ?Sized>(config: &AppConfig, prompter: &mut P) -> Result<RunSummary> {
    let source = ExampleSource::open(config.paths.input.clone())?;
    let runner = AnnotationRunner::new(
        config.session_config(),
        source,
        OutputLog::new(config.paths.output.clone()),
        ProgressTracker::new(config.paths.progress.clone()),
    );
    runner.run(prompter).context("annotation run failed")
}

/// Check every record of an annotation log
pub fn validate(log: &Path, mode: ValidationMode) -> Result<ValidationReport> {
    let report = ConsistencyValidator::new(mode).validate_log(&OutputLog::new(log))?;
    Ok(report)
}

/// Compare the example source with the ids already in the log
pub fn progress(input: &Path, log: &Path) -> Result<ProgressReport> {
    let examples = ExampleSource::open(input)?
        .read_all()
        .context("reading example source")?;
    let done = OutputLog::new(log).annotated_ids()?;
    Ok(ProgressReport::compute(
        examples.into_iter().map(|ex| ex.id),
        &done,
    ))
}
