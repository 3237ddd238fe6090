//! Annotation lifecycle tests
//!
//! Session scenarios, commit ordering and resume behaviour against real
//! files in a temporary directory.

use cea_record::Verdict;
use cea_session::{AnnotationSession, ScriptedPrompter, SessionConfig};
use cea_store::ProgressSet;
use cea_test_utils::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashSet;

fn three_examples() -> Vec<cea_record::Example> {
    vec![
        example_with_docs("ex1", &["d1", "d2"]),
        example_with_docs("ex2", &["d1"]),
        example_with_docs("ex3", &["d1", "d2", "d3"]),
    ]
}

fn full_script(example: &cea_record::Example) -> Vec<String> {
    let verdicts: Vec<&str> = example.docs.iter().map(|_| "1").collect();
    example_script(&verdicts, answer_script("Because.", "d1"))
}

#[test]
fn test_scenario_answer_with_citation() {
    let config = SessionConfig::new();
    let mut prompter = ScriptedPrompter::new(example_script(&["1", "4"], answer_script("Yes.", "d1")));

    let record = AnnotationSession::new(&config, &mut prompter)
        .annotate(&scenario_example())
        .unwrap();

    assert_eq!(record.notes.len(), 2);
    assert_eq!(record.final_decision.evidence, vec!["d1".to_string()]);
    assert!(!record.final_decision.abstain);
    assert!(record.invariant_violations().is_empty());
}

#[test]
fn test_scenario_abstain_regardless_of_verdicts() {
    for verdicts in [["1", "2"], ["4", "4"], ["3", "6"]] {
        let config = SessionConfig::new();
        let mut prompter = ScriptedPrompter::new(example_script(&verdicts, abstain_script()));

        let record = AnnotationSession::new(&config, &mut prompter)
            .annotate(&scenario_example())
            .unwrap();

        assert_eq!(record.final_decision.answer, config.abstain_answer);
        assert!(record.final_decision.evidence.is_empty());
        assert!(record.final_decision.abstain);
    }
}

#[test]
fn test_scenario_foreign_citation_excluded() {
    let config = SessionConfig::new();
    let mut prompter =
        ScriptedPrompter::new(example_script(&["1", "4"], answer_script("Yes.", "d2 d42 d1")));

    let record = AnnotationSession::new(&config, &mut prompter)
        .annotate(&scenario_example())
        .unwrap();

    assert_eq!(record.final_decision.evidence, vec!["d1".to_string()]);
}

#[test]
fn test_notes_cover_every_document_in_order() {
    let example = example_with_docs("ex", &["d3", "d1", "d2"]);
    let config = SessionConfig::new();
    let mut prompter = ScriptedPrompter::new(example_script(&["9", "", "partial"], abstain_script()));

    let record = AnnotationSession::new(&config, &mut prompter)
        .annotate(&example)
        .unwrap();

    let noted: Vec<&str> = record.notes.iter().map(|n| n.doc_id.as_str()).collect();
    assert_eq!(noted, vec!["d3", "d1", "d2"]);
    let verdicts: Vec<Verdict> = record.notes.iter().map(|n| n.verdict).collect();
    assert_eq!(verdicts, vec![Verdict::Irrelevant, Verdict::Irrelevant, Verdict::Partial]);
}

#[test]
fn test_commit_appends_then_saves_progress() {
    let ws = Workspace::new().with_examples(&[scenario_example()]);
    let config = SessionConfig::new();
    let mut prompter = ScriptedPrompter::new(example_script(&["1", "4"], answer_script("Yes.", "d1")));
    let mut progress = ProgressSet::new();

    AnnotationSession::new(&config, &mut prompter)
        .annotate_and_commit(&scenario_example(), &ws.log(), &ws.tracker(), &mut progress)
        .unwrap();

    assert_eq!(ws.record_ids(), vec!["ex1".to_string()]);
    assert!(ws.tracker().load().unwrap().contains("ex1"));
    assert!(prompter.shown().iter().any(|s| s == "Saved ex1 ✔"));
}

#[test]
fn test_run_annotates_everything_once() {
    let examples = three_examples();
    let ws = Workspace::new().with_examples(&examples);
    let script: Vec<String> = examples.iter().flat_map(full_script).collect();
    let mut prompter = ScriptedPrompter::new(script);

    let summary = ws.runner().run(&mut prompter).unwrap();

    assert_eq!(summary.annotated, 3);
    assert_eq!(summary.remaining, 0);
    assert!(!summary.interrupted);
    assert_eq!(ws.record_ids(), vec!["ex1", "ex2", "ex3"]);
    assert!(prompter.shown().iter().any(|s| s == "All done ✅"));
}

#[test]
fn test_interrupted_run_discards_partial_example() {
    let examples = three_examples();
    let ws = Workspace::new().with_examples(&examples);
    let mut script = full_script(&examples[0]);
    script.extend(["1".to_string(), "half".to_string()]);
    let mut prompter = ScriptedPrompter::new(script);

    let summary = ws.runner().run(&mut prompter).unwrap();

    assert!(summary.interrupted);
    assert_eq!(summary.annotated, 1);
    assert_eq!(summary.remaining, 2);
    assert_eq!(ws.record_ids(), vec!["ex1"]);
    assert_eq!(ws.tracker().load().unwrap().len(), 1);
}

#[test]
fn test_resume_skips_done_examples() {
    let examples = three_examples();
    let ws = Workspace::new().with_examples(&examples);

    let mut first = ScriptedPrompter::new(full_script(&examples[0]));
    ws.runner().run(&mut first).unwrap();

    let script: Vec<String> = examples[1..].iter().flat_map(full_script).collect();
    let mut second = ScriptedPrompter::new(script);
    let summary = ws.runner().run(&mut second).unwrap();

    assert_eq!(summary.already_done, 1);
    assert_eq!(summary.annotated, 2);
    assert_eq!(ws.record_ids(), vec!["ex1", "ex2", "ex3"]);
    assert!(second.shown()[0].starts_with("1 already annotated, 2 to go from "));
}

#[test]
fn test_progress_behind_log_is_reconciled() {
    let examples = three_examples();
    let ws = Workspace::new().with_examples(&examples);

    // Simulate a crash after the append but before the progress save.
    let config = SessionConfig::new();
    let mut prompter = ScriptedPrompter::new(full_script(&examples[0]));
    let record = AnnotationSession::new(&config, &mut prompter)
        .annotate(&examples[0])
        .unwrap();
    ws.log().append(&record).unwrap();
    assert!(ws.tracker().load().unwrap().is_empty());

    let progress = ws.runner().load_progress().unwrap();
    assert!(progress.contains("ex1"));
    assert!(ws.tracker().load().unwrap().contains("ex1"));

    let script: Vec<String> = examples[1..].iter().flat_map(full_script).collect();
    ws.runner().run(&mut ScriptedPrompter::new(script)).unwrap();
    assert_eq!(ws.record_ids(), vec!["ex1", "ex2", "ex3"]);
}

#[test]
fn test_duplicate_source_ids_annotated_once() {
    let ex = scenario_example();
    let ws = Workspace::new().with_examples(&[ex.clone(), ex.clone()]);
    let mut prompter = ScriptedPrompter::new(full_script(&ex));

    let summary = ws.runner().run(&mut prompter).unwrap();

    assert_eq!(summary.annotated, 1);
    assert!(!summary.interrupted);
    assert_eq!(ws.record_ids(), vec!["ex1"]);
}

#[test]
fn test_session_records_pass_full_invariants() {
    let examples = three_examples();
    let ws = Workspace::new().with_examples(&examples);
    let mut script = example_script(&["1", "3"], answer_script("A.", "d1 d2"));
    // No supporting document: the answer is refused and the annotator abstains.
    script.extend(example_script(&["4"], vec!["a".to_string(), "u".to_string()]));
    script.extend(example_script(&["2", "2", "5"], abstain_script()));

    ws.runner().run(&mut ScriptedPrompter::new(script)).unwrap();

    let records = ws.records();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].invariant_violations(), vec![]);
    assert!(records[1].final_decision.abstain);
    assert_eq!(records[1].invariant_violations(), vec![]);
    assert_eq!(records[2].invariant_violations(), vec![]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn prop_resume_yields_each_id_exactly_once(
        count in 1usize..6,
        interrupt_after in 0usize..6,
        partial_answers in 0usize..3,
    ) {
        let examples: Vec<_> = (0..count)
            .map(|i| example_with_docs(&format!("ex{i}"), &["d1", "d2"]))
            .collect();
        let ws = Workspace::new().with_examples(&examples);
        let k = interrupt_after.min(count);

        let mut script: Vec<String> = examples[..k].iter().flat_map(full_script).collect();
        script.extend(std::iter::repeat("1".to_string()).take(partial_answers));
        ws.runner().run(&mut ScriptedPrompter::new(script)).unwrap();

        let rest: Vec<String> = examples[k..].iter().flat_map(full_script).collect();
        ws.runner().run(&mut ScriptedPrompter::new(rest)).unwrap();

        let ids = ws.record_ids();
        let unique: HashSet<_> = ids.iter().cloned().collect();
        prop_assert_eq!(ids.len(), count);
        prop_assert_eq!(unique.len(), count);
    }
}

#[test]
fn test_invalid_utf8_verdict_falls_back_to_default() {
    use cea_session::ConsolePrompter;

    let config = SessionConfig::new();
    let input: &[u8] = b"\xff\n\n\n1\n\n\na\nYes.\nd2\n";
    let mut prompter = ConsolePrompter::new(input, Vec::new());

    let record = AnnotationSession::new(&config, &mut prompter)
        .annotate(&scenario_example())
        .unwrap();

    assert_eq!(record.notes[0].verdict, Verdict::Irrelevant);
    assert_eq!(record.final_decision.evidence, vec!["d2".to_string()]);
}
