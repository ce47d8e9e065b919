//! HTTP-agnostic API layer
//!
//! Handlers here serve the dashboard's query surface: list and fetch
//! stored results, and trigger new runs. Server adapters translate
//! these into HTTP responses.

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{DEFAULT_PAGE_SIZE, get_result, list_results, run_check};
pub use types::{ApiResponse, ListResultsQuery, RunCheckData, RunCheckRequest};
