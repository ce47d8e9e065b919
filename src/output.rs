//! Output formatting for human and JSON modes

use colored::Colorize as _;
use serde::Serialize;

use crate::models::{CheckRecord, Severity};
use crate::query::{self, DashboardData};
use crate::store::ListPage;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Rendering of one completed run
#[derive(Debug, Serialize)]
pub struct RunReport {
    /// Store-assigned identifier
    pub id: String,
    /// The persisted record
    #[serde(flatten)]
    pub record: CheckRecord,
}

impl RunReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        let s = &self.record.summary;
        println!(
            "{} checked {} file(s) in {}",
            self.record.checker.to_string().bold(),
            s.total_files,
            self.record.path
        );

        if self.record.issues.is_empty() {
            println!("{}", "No issues found.".green());
        } else {
            for (file, issues) in query::group_issues_by_file(&self.record.issues) {
                println!("\n{}", file.bold());
                for issue in issues {
                    println!(
                        "  {}:{} {} {} [{}]",
                        issue.line,
                        issue.column,
                        severity_label(issue.severity),
                        issue.message,
                        issue.rule.dimmed()
                    );
                }
            }
            println!(
                "\n{} issue(s): {} error(s), {} warning(s), {} info",
                s.total_issues, s.error_count, s.warning_count, s.info_count
            );
        }

        let pass_rate = query::calculate_pass_rate(s.total_files, s.files_with_issues);
        println!("Pass rate: {pass_rate}%");
        println!("Saved as: {}", self.id);
    }
}

/// Rendering of a results listing
#[derive(Debug, Serialize)]
pub struct ListReport {
    /// The page being shown
    #[serde(flatten)]
    pub page: ListPage,
}

impl ListReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.page.results.is_empty() {
            println!("No check results recorded.");
            return;
        }

        for stored in &self.page.results {
            let s = &stored.record.summary;
            println!(
                "{}  {}  {}  {} issue(s) in {} file(s)",
                stored.id.bold(),
                stored.record.timestamp.format("%Y-%m-%d %H:%M:%S"),
                stored.record.path,
                s.total_issues,
                s.total_files
            );
        }
        println!(
            "\nShowing {} of {} result(s) (page {})",
            self.page.results.len(),
            self.page.total,
            self.page.page
        );
    }
}

/// Rendering of the dashboard summary
#[derive(Debug, Serialize)]
pub struct DashboardReport {
    /// Aggregated history
    #[serde(flatten)]
    pub data: DashboardData,
}

impl DashboardReport {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => render_json(self),
        }
    }

    fn render_human(&self) {
        if self.data.total_checks == 0 {
            println!("No check results recorded. Run 'marvin vale' or 'marvin markdownlint' first.");
            return;
        }

        println!("{} recorded check(s)\n", self.data.total_checks);
        for stats in &self.data.checkers {
            println!(
                "{}: {} run(s), latest {}",
                stats.name.bold(),
                stats.total_runs,
                stats.latest_run.format("%Y-%m-%d %H:%M:%S")
            );
            println!(
                "  {} issue(s): {} error(s), {} warning(s), {} info",
                stats.total_issues, stats.error_count, stats.warning_count, stats.info_count
            );
        }

        let overall = &self.data.overall;
        let pass_rate = query::calculate_pass_rate(overall.total_files, overall.files_with_issues);
        println!(
            "\nLatest runs: {} file(s), {} with issues, pass rate {pass_rate}%",
            overall.total_files, overall.files_with_issues
        );
    }
}

fn severity_label(severity: Severity) -> String {
    match severity {
        Severity::Error => "error".red().to_string(),
        Severity::Warning => "warning".yellow().to_string(),
        Severity::Info => "info".blue().to_string(),
    }
}

fn render_json<T: Serialize>(value: &T) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}
