//! Testing utilities for CEA workspace
//!
//! Shared fixtures, scripted annotator input and a throwaway file layout.

#![allow(missing_docs)]

use cea_record::{AnnotationRecord, Document, Example};
use cea_session::{AnnotationRunner, SessionConfig};
use cea_store::{ExampleSource, OutputLog, ProgressTracker};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn example_with_docs(id: &str, doc_ids: &[&str]) -> Example {
    let docs = doc_ids
        .iter()
        .map(|d| {
            Document::new(*d)
                .with_title(format!("Title of {d}"))
                .with_snippet(format!("Snippet text for {d}."))
        })
        .collect();
    Example::new(id, format!("Query for {id}?"), "No conflict", docs)
}

/// `ex1` with documents `d1` and `d2`
pub fn scenario_example() -> Example {
    example_with_docs("ex1", &["d1", "d2"])
}

/// Verdict, empty key fact and empty quote for each document
pub fn verdict_script(verdicts: &[&str]) -> Vec<String> {
    verdicts
        .iter()
        .flat_map(|v| [(*v).to_string(), String::new(), String::new()])
        .collect()
}

/// Answer action, answer text and citation line
pub fn answer_script(answer: &str, cites: &str) -> Vec<String> {
    vec!["a".to_string(), answer.to_string(), cites.to_string()]
}

pub fn abstain_script() -> Vec<String> {
    vec!["u".to_string()]
}

/// Full script for one example: verdicts then the decision
pub fn example_script(verdicts: &[&str], decision: Vec<String>) -> Vec<String> {
    let mut script = verdict_script(verdicts);
    script.extend(decision);
    script
}

pub fn write_examples(path: &Path, examples: &[Example]) {
    let mut file = fs::File::create(path).unwrap();
    for ex in examples {
        writeln!(file, "{}", serde_json::to_string(ex).unwrap()).unwrap();
    }
}

/// Input, log and progress files inside a temporary directory
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join("working/sample.jsonl")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("annotated/train.jsonl")
    }

    pub fn progress_path(&self) -> PathBuf {
        self.dir.path().join("annotated/.progress.json")
    }

    pub fn with_examples(self, examples: &[Example]) -> Self {
        let input = self.input_path();
        fs::create_dir_all(input.parent().unwrap()).unwrap();
        write_examples(&input, examples);
        self
    }

    pub fn log(&self) -> OutputLog {
        OutputLog::new(self.output_path())
    }

    pub fn tracker(&self) -> ProgressTracker {
        ProgressTracker::new(self.progress_path())
    }

    pub fn runner(&self) -> AnnotationRunner {
        AnnotationRunner::new(
            SessionConfig::new(),
            ExampleSource::open(self.input_path()).unwrap(),
            self.log(),
            self.tracker(),
        )
    }

    pub fn records(&self) -> Vec<AnnotationRecord> {
        self.log().read_records().unwrap()
    }

    pub fn record_ids(&self) -> Vec<String> {
        self.records().into_iter().map(|r| r.id).collect()
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new()
    }
}
