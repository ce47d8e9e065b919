//! Tests for read-side queries: grouping, pass rate, dashboard

use marvin::models::Checker;
use marvin::query;
use marvin::store::StoredRecord;

use crate::common::{issue_in, record_at};

fn stored(id: &str, checker: Checker, timestamp: &str) -> StoredRecord {
    StoredRecord {
        id: id.to_string(),
        record: record_at(checker, timestamp, "docs/"),
    }
}

// =============================================================================
// GROUPING
// =============================================================================

#[test]
fn test_group_issues_by_file() {
    let issues = vec![
        issue_in("docs/a.md", 3, "first in a"),
        issue_in("docs/b.md", 1, "only in b"),
        issue_in("docs/a.md", 10, "second in a"),
    ];

    let grouped = query::group_issues_by_file(&issues);
    assert_eq!(grouped.len(), 2);
    assert_eq!(grouped["docs/b.md"].len(), 1);

    // Order within a file follows emission order, not line order.
    let messages: Vec<&str> = grouped["docs/a.md"].iter().map(|i| i.message.as_str()).collect();
    assert_eq!(messages, vec!["first in a", "second in a"]);
}

#[test]
fn test_group_issues_empty_input() {
    assert!(query::group_issues_by_file(&[]).is_empty());
}

// =============================================================================
// PASS RATE
// =============================================================================

#[test]
fn test_pass_rate_no_files_is_vacuous_pass() {
    assert_eq!(query::calculate_pass_rate(0, 0), 100);
}

#[test]
fn test_pass_rate_all_clean() {
    assert_eq!(query::calculate_pass_rate(50, 0), 100);
}

#[test]
fn test_pass_rate_partial() {
    assert_eq!(query::calculate_pass_rate(50, 10), 80);
    assert_eq!(query::calculate_pass_rate(4, 3), 25);
}

#[test]
fn test_pass_rate_all_failing() {
    assert_eq!(query::calculate_pass_rate(7, 7), 0);
}

#[test]
fn test_pass_rate_rounds_half_up() {
    // 2 clean of 3 is 66.67, reported as 67.
    assert_eq!(query::calculate_pass_rate(3, 1), 67);
}

// =============================================================================
// AGGREGATION
// =============================================================================

#[test]
fn test_aggregate_summaries_sums_fields() {
    let mut a = stored("vale-1", Checker::Vale, "2026-08-27T08:00:00Z");
    a.record.summary.total_files = 4;
    a.record.summary.files_with_issues = 1;
    a.record.summary.total_issues = 2;
    a.record.summary.error_count = 2;

    let mut b = stored("markdownlint-1", Checker::Markdownlint, "2026-08-27T09:00:00Z");
    b.record.summary.total_files = 3;
    b.record.summary.total_issues = 5;
    b.record.summary.warning_count = 5;

    let total = query::aggregate_summaries(&[a, b]);
    assert_eq!(total.total_files, 7);
    assert_eq!(total.files_with_issues, 1);
    assert_eq!(total.total_issues, 7);
    assert_eq!(total.error_count, 2);
    assert_eq!(total.warning_count, 5);
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[test]
fn test_dashboard_empty_history() {
    let data = query::dashboard(&[]);
    assert!(data.checkers.is_empty());
    assert_eq!(data.total_checks, 0);
    assert!(data.latest.is_empty());
    assert_eq!(data.overall.total_issues, 0);
}

#[test]
fn test_dashboard_latest_per_checker() {
    let mut old_vale = stored("vale-old", Checker::Vale, "2026-08-25T08:00:00Z");
    old_vale.record.summary.total_issues = 9;
    let mut new_vale = stored("vale-new", Checker::Vale, "2026-08-27T08:00:00Z");
    new_vale.record.summary.total_issues = 1;
    let md = stored("markdownlint-1", Checker::Markdownlint, "2026-08-26T08:00:00Z");

    let data = query::dashboard(&[old_vale, md, new_vale]);

    assert_eq!(data.total_checks, 3);
    assert_eq!(data.latest.len(), 2);
    let vale_latest = data.latest.iter().find(|r| r.record.checker == Checker::Vale).unwrap();
    assert_eq!(vale_latest.id, "vale-new");
    // Overall counts only the latest run of each checker.
    assert_eq!(data.overall.total_issues, 1);
}

#[test]
fn test_dashboard_stats_sorted_by_name() {
    let records = vec![
        stored("vale-1", Checker::Vale, "2026-08-27T08:00:00Z"),
        stored("vale-2", Checker::Vale, "2026-08-27T09:00:00Z"),
        stored("markdownlint-1", Checker::Markdownlint, "2026-08-27T10:00:00Z"),
    ];

    let data = query::dashboard(&records);
    let names: Vec<&str> = data.checkers.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["markdownlint", "vale"]);
    assert_eq!(data.checkers[1].total_runs, 2);
    assert_eq!(
        data.checkers[1].latest_run,
        "2026-08-27T09:00:00Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap()
    );
}

#[test]
fn test_dashboard_stats_sum_all_runs() {
    let mut first = stored("vale-1", Checker::Vale, "2026-08-27T08:00:00Z");
    first.record.summary.total_issues = 3;
    first.record.summary.error_count = 3;
    let mut second = stored("vale-2", Checker::Vale, "2026-08-27T09:00:00Z");
    second.record.summary.total_issues = 2;
    second.record.summary.warning_count = 2;

    let data = query::dashboard(&[first, second]);
    let vale = &data.checkers[0];
    assert_eq!(vale.total_issues, 5);
    assert_eq!(vale.error_count, 3);
    assert_eq!(vale.warning_count, 2);
}
