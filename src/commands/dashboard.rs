//! Aggregated dashboard over all recorded checks

use marvin::output::{DashboardReport, OutputMode};
use marvin::query;
use marvin::store::ResultStore;

/// Render per-checker stats and overall totals from the full history
pub fn dashboard(store: &ResultStore, mode: OutputMode) -> anyhow::Result<()> {
    let page = store.list(None, usize::MAX, 0)?;
    let data = query::dashboard(&page.results);
    DashboardReport { data }.render(mode);
    Ok(())
}
