//! Browse stored check results

use marvin::models::Checker;
use marvin::output::{ListReport, OutputMode, RunReport};
use marvin::store::ResultStore;

/// List stored results, most recent first
pub fn results_list(
    store: &ResultStore,
    checker: Option<Checker>,
    limit: usize,
    offset: usize,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let page = store.list(checker, limit, offset)?;
    ListReport { page }.render(mode);
    Ok(())
}

/// Show a single result by identifier
pub fn results_show(store: &ResultStore, id: &str, mode: OutputMode) -> anyhow::Result<()> {
    let stored = store.get(id)?;
    let report = RunReport {
        id: stored.id,
        record: stored.record,
    };
    report.render(mode);
    Ok(())
}
