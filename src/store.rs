//! File-backed result store
//!
//! One JSON document per completed run, written once and never edited.
//! The identifier doubles as the file name: `{checker}-{timestamp}`,
//! with a numeric suffix when two runs of the same checker land in the
//! same second. Allocation goes through `create_new`, so concurrent
//! saves can never overwrite each other.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

use crate::models::{CheckRecord, Checker};

/// Timestamp format used in identifiers (second resolution)
const ID_TIMESTAMP_FORMAT: &str = "%Y%m%d-%H%M%S";

/// Errors from the result store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record exists for the given identifier
    #[error("result '{id}' not found")]
    NotFound {
        /// The identifier that was requested
        id: String,
    },

    /// The backing directory cannot be read or written
    #[error("results store unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    /// A persisted record exists but cannot be parsed
    #[error("result '{id}' is corrupt: {source}")]
    Corrupt {
        /// The identifier of the unreadable record
        id: String,
        /// The underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

/// A persisted record together with its store-assigned identifier
#[derive(Debug, Clone, Serialize)]
pub struct StoredRecord {
    /// Store-assigned identifier
    pub id: String,
    /// The record itself
    #[serde(flatten)]
    pub record: CheckRecord,
}

/// One page of listing results
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    /// Records on this page, most recent first
    pub results: Vec<StoredRecord>,
    /// Records matching the filter, before pagination
    pub total: usize,
    /// 1-based page number
    pub page: usize,
    /// Requested page size
    pub page_size: usize,
}

/// Durable store for check results
#[derive(Debug, Clone)]
pub struct ResultStore {
    dir: PathBuf,
}

impl ResultStore {
    /// Create a store handle over the given directory.
    ///
    /// The directory is created lazily on first save; a missing
    /// directory reads as empty history.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backing directory
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist a record, returning its newly assigned identifier.
    ///
    /// Identifiers derive from checker name and timestamp; ties resolve
    /// to unique ids via a disambiguating suffix.
    pub fn save(&self, record: &CheckRecord) -> Result<String, StoreError> {
        fs::create_dir_all(&self.dir)?;

        let base = format!(
            "{}-{}",
            record.checker,
            record.timestamp.format(ID_TIMESTAMP_FORMAT)
        );
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| StoreError::Unavailable(std::io::Error::other(e)))?;

        let mut attempt: u32 = 1;
        loop {
            let id = if attempt == 1 {
                base.clone()
            } else {
                format!("{base}-{attempt}")
            };
            let path = self.record_path(&id);
            match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(json.as_bytes())?;
                    log::debug!("saved result {id} to {}", path.display());
                    return Ok(id);
                },
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    attempt += 1;
                },
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Fetch a record by identifier
    pub fn get(&self, id: &str) -> Result<StoredRecord, StoreError> {
        // Anything that is not a plain file name cannot be one of ours.
        if !is_valid_id(id) {
            return Err(StoreError::NotFound { id: id.to_string() });
        }

        let path = self.record_path(id);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound { id: id.to_string() });
            },
            Err(e) => return Err(e.into()),
        };

        let record = serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
            id: id.to_string(),
            source,
        })?;

        Ok(StoredRecord {
            id: id.to_string(),
            record,
        })
    }

    /// List persisted records, most recent first.
    ///
    /// A missing backing directory is empty history, not an error.
    /// Individual records that fail to parse are skipped with a warning
    /// so one corrupt file cannot take down the whole listing; `total`
    /// counts the records matching `filter` before pagination.
    pub fn list(
        &self,
        filter: Option<Checker>,
        limit: usize,
        offset: usize,
    ) -> Result<ListPage, StoreError> {
        let mut records = if self.dir.exists() {
            self.read_all()?
        } else {
            Vec::new()
        };

        if let Some(checker) = filter {
            records.retain(|r| r.record.checker == checker);
        }
        records.sort_by(|a, b| b.record.timestamp.cmp(&a.record.timestamp));

        let total = records.len();
        let results: Vec<StoredRecord> = records.into_iter().skip(offset).take(limit).collect();
        let page = if limit == 0 { 1 } else { offset / limit + 1 };

        Ok(ListPage {
            results,
            total,
            page,
            page_size: limit,
        })
    }

    fn read_all(&self) -> Result<Vec<StoredRecord>, StoreError> {
        let mut records = Vec::new();
        for entry in WalkDir::new(&self.dir) {
            let entry = entry.map_err(|e| {
                StoreError::Unavailable(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("results directory walk failed")
                }))
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            let Some(id) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            match fs::read_to_string(path).map_err(StoreError::from).and_then(|content| {
                serde_json::from_str::<CheckRecord>(&content).map_err(|source| {
                    StoreError::Corrupt {
                        id: id.to_string(),
                        source,
                    }
                })
            }) {
                Ok(record) => records.push(StoredRecord {
                    id: id.to_string(),
                    record,
                }),
                Err(e) => log::warn!("skipping unreadable result {}: {e}", path.display()),
            }
        }
        Ok(records)
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }
}

/// Identifiers are file-system-safe names: checker, timestamp, and an
/// optional suffix, joined by dashes.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
