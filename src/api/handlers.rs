//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take typed input and return `Result<T, ApiError>`.

use crate::checker::CheckError;
use crate::models::Checker;
use crate::runner::CheckRunner;
use crate::store::{ListPage, ResultStore, StoredRecord};

use super::error::ApiError;
use super::types::{ListResultsQuery, RunCheckData, RunCheckRequest};

/// Default page size for listings
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// List stored results with optional checker filter and pagination
pub fn list_results(store: &ResultStore, query: &ListResultsQuery) -> Result<ListPage, ApiError> {
    let filter = match query.checker.as_deref() {
        Some(raw) => Some(raw.parse::<Checker>().map_err(ApiError::bad_request)?),
        None => None,
    };
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_SIZE);
    let offset = query.offset.unwrap_or(0);

    Ok(store.list(filter, limit, offset)?)
}

/// Fetch a single result by identifier
pub fn get_result(store: &ResultStore, id: &str) -> Result<StoredRecord, ApiError> {
    Ok(store.get(id)?)
}

/// Trigger a check run and persist its result.
///
/// An invalid checker kind is rejected before anything is spawned; a
/// run that found issues is still a success here.
pub fn run_check(runner: &CheckRunner, req: &RunCheckRequest) -> Result<RunCheckData, ApiError> {
    let checker = req
        .checker
        .parse::<Checker>()
        .map_err(|_| ApiError::from(CheckError::InvalidChecker(req.checker.clone())))?;

    let path = req.path.as_deref().filter(|p| !p.trim().is_empty());
    let outcome = runner.run(checker, path)?;

    Ok(RunCheckData {
        checker: checker.to_string(),
        id: outcome.id,
        message: format!("{checker} check completed successfully"),
        output: outcome.raw_output,
    })
}
