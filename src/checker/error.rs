//! Check execution errors
//!
//! The taxonomy distinguishes "the checker found problems" (a success,
//! even on a non-zero exit) from "the checker could not run".

use std::time::Duration;

use thiserror::Error;

use crate::models::Checker;
use crate::store::StoreError;

/// Errors that can occur while running a check
#[derive(Debug, Error)]
pub enum CheckError {
    /// The requested checker kind is not known. Rejected before any
    /// subprocess is spawned.
    #[error("unknown checker: {0}. Use: vale, markdownlint")]
    InvalidChecker(String),

    /// Execution exceeded the configured bound; the child was killed
    /// and no record was produced.
    #[error("{checker} timed out after {}s", limit.as_secs())]
    Timeout {
        /// The checker that was running
        checker: Checker,
        /// The wall-clock bound that was exceeded
        limit: Duration,
    },

    /// The process produced no usable output: crash, missing binary,
    /// or empty stdout.
    #[error("{checker} produced no output{}{}", format_status(*status), format_stderr(stderr))]
    ExecutionFailure {
        /// The checker that failed
        checker: Checker,
        /// Exit code, when the process ran to completion
        status: Option<i32>,
        /// Captured standard error, for diagnostics
        stderr: String,
    },

    /// The checker ran but its output was not in the expected format
    #[error("failed to parse {checker} output: {reason}")]
    Parse {
        /// The checker whose output could not be parsed
        checker: Checker,
        /// What went wrong
        reason: String,
    },

    /// Persisting the result failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

fn format_status(status: Option<i32>) -> String {
    status.map_or_else(String::new, |code| format!(" (exit status {code})"))
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
