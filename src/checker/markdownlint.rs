//! markdownlint integration
//!
//! markdownlint is invoked with `--json` and prints an array with one
//! object per finding. Unlike Vale it only reports files that have
//! issues, so `total_files` counts the distinct files seen in output.

use std::collections::HashSet;

use serde::Deserialize;

use crate::config::MarkdownlintSettings;
use crate::models::{Issue, Severity, Summary};

use super::Findings;

/// A single markdownlint finding
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MarkdownlintIssue {
    file_name: String,
    line_number: u32,
    #[serde(default)]
    rule_names: Vec<String>,
    #[serde(default)]
    rule_description: String,
    #[serde(default)]
    error_detail: Option<String>,
    #[serde(default)]
    error_context: Option<String>,
    #[serde(default)]
    error_range: Option<Vec<u32>>,
    #[serde(default)]
    severity: String,
}

/// Build the markdownlint command line for a target path
#[must_use]
pub fn command(settings: &MarkdownlintSettings, config_file: Option<&str>, target: &str) -> (String, Vec<String>) {
    let mut args = Vec::new();
    if let Some(config) = config_file {
        args.push("--config".to_string());
        args.push(config.to_string());
    }
    if settings.fix {
        args.push("--fix".to_string());
    }
    args.push(target.to_string());
    args.push("--json".to_string());
    (settings.binary.clone(), args)
}

/// Parse markdownlint JSON output into findings
pub fn parse(output: &str) -> Result<Findings, String> {
    let trimmed = output.trim();
    // A non-JSON payload is usually an error message from the tool.
    if !trimmed.starts_with('[') && !trimmed.starts_with('{') {
        return Err(format!("unexpected output: {trimmed}"));
    }

    let raw: Vec<MarkdownlintIssue> = serde_json::from_str(trimmed).map_err(|e| e.to_string())?;

    let mut summary = Summary::default();
    let mut seen_files = HashSet::new();
    let mut issues = Vec::new();
    for item in &raw {
        if seen_files.insert(item.file_name.clone()) {
            summary.total_files += 1;
            summary.files_with_issues += 1;
        }

        let rule = item.rule_names.first().cloned().unwrap_or_else(|| "unknown".to_string());
        let message = match item.error_detail.as_deref() {
            Some(detail) if !detail.is_empty() => {
                format!("{}: {detail}", item.rule_description)
            },
            _ => item.rule_description.clone(),
        };
        // markdownlint only distinguishes error from warning.
        let severity = if item.severity == "error" {
            Severity::Error
        } else {
            Severity::Warning
        };
        summary.record_issue(severity);

        issues.push(Issue {
            file: item.file_name.clone(),
            line: item.line_number,
            column: item.error_range.as_ref().and_then(|r| r.first()).copied().unwrap_or(0),
            severity,
            message,
            rule,
            context: item.error_context.clone().filter(|c| !c.is_empty()),
        });
    }

    Ok(Findings { summary, issues })
}

/// Checker-specific metadata recorded with each run
#[must_use]
pub fn metadata(settings: &MarkdownlintSettings, config_file: Option<&str>) -> Vec<(String, serde_json::Value)> {
    vec![
        ("config_file".to_string(), serde_json::json!(config_file.unwrap_or(""))),
        ("fix_enabled".to_string(), serde_json::json!(settings.fix)),
    ]
}
