//! Checker invocation and output parsing
//!
//! A checker is an opaque external command that takes a target path and
//! a config file and prints machine-readable findings. The invoker owns
//! the one load-bearing quirk of these tools: a non-zero exit status is
//! *not* an error. Linters exit non-zero to signal "issues were found",
//! so a run counts as successful whenever it produced output on stdout,
//! and fails only when there was no output at all.

mod error;
mod invoker;
pub mod markdownlint;
pub mod vale;

pub use error::CheckError;
pub use invoker::{CommandRunner, RawOutput, RunError, SystemRunner};

use std::time::Duration;

use crate::config::Config;
use crate::models::{Checker, Issue, Summary};

/// Parsed checker output: the summary plus issues in emission order
#[derive(Debug, Clone, Default)]
pub struct Findings {
    /// Aggregate counters
    pub summary: Summary,
    /// Issues in the order the checker emitted them
    pub issues: Vec<Issue>,
}

/// Run a checker against a target path and classify the outcome.
///
/// Returns the raw stdout payload on success. Classification rule
/// (preserved exactly from the upstream tools' behavior): non-empty
/// stdout is a success regardless of exit code; an empty stdout means
/// the checker could not run.
pub fn invoke(
    runner: &dyn CommandRunner,
    checker: Checker,
    config: &Config,
    target: &str,
    timeout: Duration,
) -> Result<String, CheckError> {
    let config_file = config.checker_config(checker);
    let (program, args) = match checker {
        Checker::Vale => vale::command(&config.vale, config_file.as_deref(), target),
        Checker::Markdownlint => {
            markdownlint::command(&config.markdownlint, config_file.as_deref(), target)
        },
    };

    let output = runner.run(&program, &args, timeout).map_err(|e| match e {
        RunError::TimedOut => CheckError::Timeout {
            checker,
            limit: timeout,
        },
        RunError::Spawn(source) | RunError::Io(source) => CheckError::ExecutionFailure {
            checker,
            status: None,
            stderr: source.to_string(),
        },
    })?;

    if output.stdout.trim().is_empty() {
        return Err(CheckError::ExecutionFailure {
            checker,
            status: output.status,
            stderr: output.stderr,
        });
    }

    if output.status.is_some_and(|code| code != 0) {
        log::debug!("{checker} exited non-zero but produced output; treating as issues found");
    }

    Ok(output.stdout)
}

/// Parse a checker's raw stdout into findings
pub fn parse(checker: Checker, output: &str) -> Result<Findings, CheckError> {
    let result = match checker {
        Checker::Vale => vale::parse(output),
        Checker::Markdownlint => markdownlint::parse(output),
    };
    result.map_err(|reason| CheckError::Parse { checker, reason })
}
