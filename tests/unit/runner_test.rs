//! Tests for the check orchestrator

use marvin::checker::CheckError;
use marvin::models::Checker;
use marvin::runner::CheckRunner;
use marvin::store::ResultStore;
use tempfile::TempDir;

use crate::common::{
    test_config, MissingBinaryRunner, ScriptedRunner, TimeoutRunner, MARKDOWNLINT_OUTPUT,
    VALE_OUTPUT,
};

fn runner_with(
    temp: &TempDir,
    command_runner: Box<dyn marvin::checker::CommandRunner + Send + Sync>,
) -> CheckRunner {
    let config = test_config(temp.path());
    let store = ResultStore::new(temp.path());
    CheckRunner::with_runner(config, store, command_runner)
}

#[test]
fn test_run_persists_exactly_one_record() {
    let temp = TempDir::new().unwrap();
    let runner = runner_with(&temp, Box::new(ScriptedRunner::new(VALE_OUTPUT, "", 1)));

    let outcome = runner.run(Checker::Vale, Some("docs/")).unwrap();
    assert!(outcome.id.starts_with("vale-"));
    assert_eq!(outcome.record.path, "docs/");
    assert_eq!(outcome.record.summary.total_files, 2);
    assert_eq!(outcome.record.summary.total_issues, 2);
    assert_eq!(outcome.raw_output, VALE_OUTPUT);

    let page = runner.store().list(None, 20, 0).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.results[0].id, outcome.id);
}

#[test]
fn test_run_defaults_path_to_docs_root() {
    let temp = TempDir::new().unwrap();
    let runner = runner_with(&temp, Box::new(ScriptedRunner::new(MARKDOWNLINT_OUTPUT, "", 1)));

    let outcome = runner.run(Checker::Markdownlint, None).unwrap();
    assert_eq!(outcome.record.path, runner.config().docs_root);
}

#[test]
fn test_run_records_checker_metadata() {
    let temp = TempDir::new().unwrap();
    let runner = runner_with(&temp, Box::new(ScriptedRunner::new(VALE_OUTPUT, "", 0)));

    let outcome = runner.run(Checker::Vale, Some("docs/")).unwrap();
    assert_eq!(outcome.record.metadata["min_alert_level"], serde_json::json!("suggestion"));
    assert!(outcome.record.metadata.contains_key("config_file"));
}

#[test]
fn test_run_records_fix_metadata() {
    let temp = TempDir::new().unwrap();
    let mut config = test_config(temp.path());
    config.markdownlint.fix = true;
    let store = ResultStore::new(temp.path());
    let runner = CheckRunner::with_runner(
        config,
        store,
        Box::new(ScriptedRunner::new(MARKDOWNLINT_OUTPUT, "", 1)),
    );

    let outcome = runner.run(Checker::Markdownlint, None).unwrap();
    assert_eq!(outcome.record.metadata["fix_enabled"], serde_json::json!(true));
}

#[test]
fn test_timeout_persists_nothing() {
    let temp = TempDir::new().unwrap();
    let runner = runner_with(&temp, Box::new(TimeoutRunner));

    let err = runner.run(Checker::Vale, None).unwrap_err();
    assert!(matches!(err, CheckError::Timeout { .. }));
    assert_eq!(runner.store().list(None, 20, 0).unwrap().total, 0);
}

#[test]
fn test_execution_failure_persists_nothing() {
    let temp = TempDir::new().unwrap();
    let runner = runner_with(&temp, Box::new(MissingBinaryRunner));

    let err = runner.run(Checker::Markdownlint, None).unwrap_err();
    assert!(matches!(err, CheckError::ExecutionFailure { .. }));
    assert_eq!(runner.store().list(None, 20, 0).unwrap().total, 0);
}

#[test]
fn test_unparseable_output_persists_nothing() {
    let temp = TempDir::new().unwrap();
    // Non-empty stdout counts as a completed run, but the payload is not
    // the checker's JSON shape.
    let runner = runner_with(&temp, Box::new(ScriptedRunner::new("plain text report", "", 0)));

    let err = runner.run(Checker::Vale, None).unwrap_err();
    assert!(matches!(err, CheckError::Parse { checker: Checker::Vale, .. }));
    assert_eq!(runner.store().list(None, 20, 0).unwrap().total, 0);
}
