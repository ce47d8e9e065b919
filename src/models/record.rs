//! Persisted check results
//!
//! A [`CheckRecord`] is created exactly once, at the end of a successful
//! checker invocation, and never mutated after persistence. Corrections
//! require a new run producing a new record.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Checker, Severity};

/// One finding reported by a checker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// File the issue was found in (relative path)
    pub file: String,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
    /// Severity level
    pub severity: Severity,
    /// Human-readable description
    pub message: String,
    /// Identifier of the rule that fired
    pub rule: String,
    /// Offending text snippet, when the checker provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Aggregate counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Files scanned
    pub total_files: u32,
    /// Files containing at least one issue
    pub files_with_issues: u32,
    /// All issues across all files
    pub total_issues: u32,
    /// Issues with error severity
    pub error_count: u32,
    /// Issues with warning severity
    pub warning_count: u32,
    /// Issues with info severity
    pub info_count: u32,
}

impl Summary {
    /// Count an issue of the given severity
    pub fn record_issue(&mut self, severity: Severity) {
        self.total_issues += 1;
        match severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
            Severity::Info => self.info_count += 1,
        }
    }
}

/// The outcome of one completed checker invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckRecord {
    /// Which checker produced this record
    pub checker: Checker,
    /// When the check ran
    pub timestamp: DateTime<Utc>,
    /// The path that was checked
    pub path: String,
    /// Aggregate counters
    pub summary: Summary,
    /// Issues in the order the checker emitted them
    pub issues: Vec<Issue>,
    /// Checker-specific key/value details, no enforced schema
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl CheckRecord {
    /// Create a record stamped with the current time
    #[must_use]
    pub fn new(checker: Checker, path: impl Into<String>) -> Self {
        Self {
            checker,
            timestamp: Utc::now(),
            path: path.into(),
            summary: Summary::default(),
            issues: Vec::new(),
            metadata: HashMap::new(),
        }
    }
}
