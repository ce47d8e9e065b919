//! Tests for the HTTP-agnostic API layer

use marvin::api::{self, ApiError, ApiResponse, ErrorCode, ListResultsQuery, RunCheckRequest};
use marvin::checker::CheckError;
use marvin::models::Checker;
use marvin::runner::CheckRunner;
use marvin::store::{ResultStore, StoreError};
use tempfile::TempDir;

use crate::common::{record_at, test_config, ScriptedRunner, VALE_OUTPUT};

fn runner_with(temp: &TempDir, scripted: ScriptedRunner) -> CheckRunner {
    let config = test_config(temp.path());
    let store = ResultStore::new(temp.path());
    CheckRunner::with_runner(config, store, Box::new(scripted))
}

// =============================================================================
// ERROR MAPPING
// =============================================================================

#[test]
fn test_error_code_status_codes() {
    assert_eq!(ErrorCode::NotFound.status_code(), 404);
    assert_eq!(ErrorCode::BadRequest.status_code(), 400);
    assert_eq!(ErrorCode::Internal.status_code(), 500);
}

#[test]
fn test_store_not_found_maps_to_404() {
    let err = ApiError::from(StoreError::NotFound {
        id: "vale-x".to_string(),
    });
    assert_eq!(err.code, ErrorCode::NotFound);
    assert!(err.message.contains("vale-x"));
}

#[test]
fn test_invalid_checker_maps_to_400() {
    let err = ApiError::from(CheckError::InvalidChecker("eslint".to_string()));
    assert_eq!(err.code, ErrorCode::BadRequest);
}

#[test]
fn test_timeout_maps_to_500() {
    let err = ApiError::from(CheckError::Timeout {
        checker: Checker::Vale,
        limit: std::time::Duration::from_secs(60),
    });
    assert_eq!(err.code, ErrorCode::Internal);
}

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

#[test]
fn test_success_envelope_omits_error() {
    let response = ApiResponse::success(serde_json::json!({"id": "vale-1"}));
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("\"data\""));
    assert!(!json.contains("\"error\""));
}

#[test]
fn test_error_envelope_omits_data() {
    let response = ApiResponse::error("NOT_FOUND", "result 'x' not found");
    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"success\":false"));
    assert!(json.contains("\"code\":\"NOT_FOUND\""));
    assert!(!json.contains("\"data\""));
}

// =============================================================================
// HANDLERS
// =============================================================================

#[test]
fn test_list_results_rejects_unknown_checker() {
    let temp = TempDir::new().unwrap();
    let store = ResultStore::new(temp.path());
    let query = ListResultsQuery {
        checker: Some("eslint".to_string()),
        ..ListResultsQuery::default()
    };

    let err = api::list_results(&store, &query).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
}

#[test]
fn test_list_results_applies_defaults() {
    let temp = TempDir::new().unwrap();
    let store = ResultStore::new(temp.path());
    store.save(&record_at(Checker::Vale, "2026-08-27T08:00:00Z", "docs/")).unwrap();

    let page = api::list_results(&store, &ListResultsQuery::default()).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.page_size, api::DEFAULT_PAGE_SIZE);
    assert_eq!(page.page, 1);
}

#[test]
fn test_get_result_missing_is_404() {
    let temp = TempDir::new().unwrap();
    let store = ResultStore::new(temp.path());

    let err = api::get_result(&store, "vale-20000101-000000").unwrap_err();
    assert_eq!(err.code, ErrorCode::NotFound);
}

#[test]
fn test_run_check_rejects_unknown_checker() {
    let temp = TempDir::new().unwrap();
    let runner = runner_with(&temp, ScriptedRunner::new(VALE_OUTPUT, "", 0));
    let req = RunCheckRequest {
        checker: "eslint".to_string(),
        path: None,
    };

    let err = api::run_check(&runner, &req).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRequest);
}

#[test]
fn test_run_check_persists_and_reports() {
    let temp = TempDir::new().unwrap();
    let runner = runner_with(&temp, ScriptedRunner::new(VALE_OUTPUT, "", 1));
    let req = RunCheckRequest {
        checker: "vale".to_string(),
        path: Some("docs/".to_string()),
    };

    let data = api::run_check(&runner, &req).unwrap();
    assert_eq!(data.checker, "vale");
    assert!(data.id.starts_with("vale-"));
    assert_eq!(data.message, "vale check completed successfully");
    assert_eq!(data.output, VALE_OUTPUT);

    let stored = runner.store().get(&data.id).unwrap();
    assert_eq!(stored.record.summary.total_issues, 2);
}

#[test]
fn test_run_check_blank_path_uses_docs_root() {
    let temp = TempDir::new().unwrap();
    let runner = runner_with(&temp, ScriptedRunner::new(VALE_OUTPUT, "", 0));
    let req = RunCheckRequest {
        checker: "vale".to_string(),
        path: Some("   ".to_string()),
    };

    let data = api::run_check(&runner, &req).unwrap();
    let stored = runner.store().get(&data.id).unwrap();
    assert_eq!(stored.record.path, runner.config().docs_root);
}
