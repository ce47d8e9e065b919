//! Read-side queries over stored results
//!
//! Everything here is pure over the store's output; nothing mutates
//! persisted state.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{Issue, Summary};
use crate::store::StoredRecord;

/// Group issues by file, preserving emission order within each file.
///
/// The map keys are exactly the distinct file values present.
#[must_use]
pub fn group_issues_by_file(issues: &[Issue]) -> BTreeMap<String, Vec<&Issue>> {
    let mut grouped: BTreeMap<String, Vec<&Issue>> = BTreeMap::new();
    for issue in issues {
        grouped.entry(issue.file.clone()).or_default().push(issue);
    }
    grouped
}

/// Percentage of checked files with zero issues.
///
/// Zero files checked is a vacuous pass (100).
#[must_use]
pub fn calculate_pass_rate(total_files: u32, files_with_issues: u32) -> u32 {
    if total_files == 0 {
        return 100;
    }
    let clean = u64::from(total_files.saturating_sub(files_with_issues));
    let total = u64::from(total_files);
    // Round half up; the result never exceeds 100.
    u32::try_from((clean * 100 + total / 2) / total).unwrap_or(100)
}

/// Element-wise sum of every summary across the given records
#[must_use]
pub fn aggregate_summaries(records: &[StoredRecord]) -> Summary {
    let mut total = Summary::default();
    for stored in records {
        let s = &stored.record.summary;
        total.total_files += s.total_files;
        total.files_with_issues += s.files_with_issues;
        total.total_issues += s.total_issues;
        total.error_count += s.error_count;
        total.warning_count += s.warning_count;
        total.info_count += s.info_count;
    }
    total
}

/// Aggregated run history for one checker
#[derive(Debug, Clone, Serialize)]
pub struct CheckerStats {
    /// Checker name
    pub name: String,
    /// Number of recorded runs
    pub total_runs: usize,
    /// Timestamp of the most recent run
    pub latest_run: DateTime<Utc>,
    /// Issues across all runs
    pub total_issues: u32,
    /// Errors across all runs
    pub error_count: u32,
    /// Warnings across all runs
    pub warning_count: u32,
    /// Infos across all runs
    pub info_count: u32,
}

/// Dashboard-wide view over the full history
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    /// Per-checker stats, sorted by checker name
    pub checkers: Vec<CheckerStats>,
    /// Number of recorded runs across all checkers
    pub total_checks: usize,
    /// Most recent record per checker
    pub latest: Vec<StoredRecord>,
    /// Summary summed over the latest record of each checker
    pub overall: Summary,
}

/// Build the dashboard view from the full record history
#[must_use]
pub fn dashboard(records: &[StoredRecord]) -> DashboardData {
    let mut by_checker: HashMap<String, Vec<&StoredRecord>> = HashMap::new();
    for record in records {
        by_checker.entry(record.record.checker.to_string()).or_default().push(record);
    }

    let mut checkers = Vec::new();
    let mut latest = Vec::new();
    for (name, mut runs) in by_checker {
        runs.sort_by(|a, b| b.record.timestamp.cmp(&a.record.timestamp));

        // runs is non-empty by construction
        let newest = runs[0];
        latest.push(newest.clone());

        let mut stats = CheckerStats {
            name,
            total_runs: runs.len(),
            latest_run: newest.record.timestamp,
            total_issues: 0,
            error_count: 0,
            warning_count: 0,
            info_count: 0,
        };
        for run in &runs {
            let s = &run.record.summary;
            stats.total_issues += s.total_issues;
            stats.error_count += s.error_count;
            stats.warning_count += s.warning_count;
            stats.info_count += s.info_count;
        }
        checkers.push(stats);
    }

    checkers.sort_by(|a, b| a.name.cmp(&b.name));
    latest.sort_by(|a, b| a.record.checker.to_string().cmp(&b.record.checker.to_string()));
    let overall = aggregate_summaries(&latest);

    DashboardData {
        checkers,
        total_checks: records.len(),
        latest,
        overall,
    }
}
