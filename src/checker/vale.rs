//! Vale prose linter integration
//!
//! Vale is invoked with `--output=JSON` and prints a map of file path to
//! alert list. Files are keyed in the map even when their alert list is
//! empty, so every key counts toward `total_files`. A JSON map carries
//! no reliable key order, so findings are emitted sorted by file path;
//! within one file, alerts keep the order Vale reported them in.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::{Config, ValeSettings};
use crate::models::{Issue, Severity, Summary};

use super::Findings;

/// A single Vale alert, as emitted by `vale --output=JSON`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ValeAlert {
    check: String,
    line: u32,
    message: String,
    severity: String,
    #[serde(default)]
    span: Vec<u32>,
    #[serde(default)]
    r#match: String,
}

/// Build the Vale command line for a target path
#[must_use]
pub fn command(settings: &ValeSettings, config_file: Option<&str>, target: &str) -> (String, Vec<String>) {
    let mut args = vec!["--output=JSON".to_string()];
    if let Some(config) = config_file {
        args.push(format!("--config={config}"));
    }
    if !settings.min_alert_level.is_empty() {
        args.push(format!("--minAlertLevel={}", settings.min_alert_level));
    }
    if let Some(glob) = &settings.glob {
        args.push(format!("--glob={glob}"));
    }
    args.push(target.to_string());
    (settings.binary.clone(), args)
}

/// Parse Vale JSON output into findings
pub fn parse(output: &str) -> Result<Findings, String> {
    // BTreeMap keeps file iteration deterministic.
    let alerts: BTreeMap<String, Vec<ValeAlert>> =
        serde_json::from_str(output).map_err(|e| e.to_string())?;

    let mut summary = Summary::default();
    let mut issues = Vec::new();
    for (file, file_alerts) in &alerts {
        summary.total_files += 1;
        if !file_alerts.is_empty() {
            summary.files_with_issues += 1;
        }
        for alert in file_alerts {
            let severity = normalize_severity(&alert.severity);
            summary.record_issue(severity);
            issues.push(Issue {
                file: file.clone(),
                line: alert.line,
                column: alert.span.first().copied().unwrap_or(0),
                severity,
                message: alert.message.clone(),
                rule: alert.check.clone(),
                context: (!alert.r#match.is_empty()).then(|| alert.r#match.clone()),
            });
        }
    }

    Ok(Findings { summary, issues })
}

/// Checker-specific metadata recorded with each run
#[must_use]
pub fn metadata(config: &Config, config_file: Option<&str>) -> Vec<(String, serde_json::Value)> {
    vec![
        ("config_file".to_string(), serde_json::json!(config_file.unwrap_or(""))),
        ("min_alert_level".to_string(), serde_json::json!(config.vale.min_alert_level)),
    ]
}

/// Vale reports `suggestion`; everything unknown degrades to info
fn normalize_severity(severity: &str) -> Severity {
    match severity {
        "error" => Severity::Error,
        "warning" => Severity::Warning,
        _ => Severity::Info,
    }
}
