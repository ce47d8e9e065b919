//! Run a checker and persist the result

use marvin::models::Checker;
use marvin::output::{OutputMode, RunReport};
use marvin::runner::CheckRunner;

/// Run a checker against a path and render the outcome.
///
/// Exits non-zero when the run recorded error-severity issues, so CI
/// pipelines can gate on it. A checker that merely found warnings still
/// exits zero.
pub fn run_check(
    runner: &CheckRunner,
    checker: Checker,
    path: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let outcome = runner.run(checker, path)?;

    let error_count = outcome.record.summary.error_count;
    let report = RunReport {
        id: outcome.id,
        record: outcome.record,
    };
    report.render(mode);

    if error_count > 0 {
        std::process::exit(1);
    }

    Ok(())
}
