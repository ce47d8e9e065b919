//! Check orchestration
//!
//! Composes the invoker and the store: execute the checker, normalize
//! its output into a [`CheckRecord`], persist it, and hand back a run
//! summary. On any invocation failure nothing is persisted; a record
//! only becomes visible once its write has completed.

use crate::checker::{self, CheckError, CommandRunner, SystemRunner};
use crate::config::Config;
use crate::models::{CheckRecord, Checker};
use crate::store::ResultStore;

/// Summary of one completed run
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Store-assigned identifier of the new record
    pub id: String,
    /// The record that was persisted
    pub record: CheckRecord,
    /// Raw checker stdout, for callers that want to display it
    pub raw_output: String,
}

/// Runs checks and persists their results
pub struct CheckRunner {
    config: Config,
    store: ResultStore,
    runner: Box<dyn CommandRunner + Send + Sync>,
}

impl std::fmt::Debug for CheckRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRunner")
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl CheckRunner {
    /// Create a runner that spawns real checker processes
    #[must_use]
    pub fn new(config: Config, store: ResultStore) -> Self {
        Self::with_runner(config, store, Box::new(SystemRunner))
    }

    /// Create a runner with a custom command runner (used in tests)
    #[must_use]
    pub fn with_runner(
        config: Config,
        store: ResultStore,
        runner: Box<dyn CommandRunner + Send + Sync>,
    ) -> Self {
        Self {
            config,
            store,
            runner,
        }
    }

    /// The store this runner persists to
    #[must_use]
    pub const fn store(&self) -> &ResultStore {
        &self.store
    }

    /// The active configuration
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Run a checker and persist the result.
    ///
    /// `path` defaults to the configured docs root. Timeouts and
    /// execution failures propagate without creating a record.
    pub fn run(&self, checker: Checker, path: Option<&str>) -> Result<RunOutcome, CheckError> {
        let target = path.unwrap_or(&self.config.docs_root).to_string();
        log::info!("running {checker} against {target}");

        let raw_output = checker::invoke(
            self.runner.as_ref(),
            checker,
            &self.config,
            &target,
            self.config.timeout(),
        )?;

        let findings = checker::parse(checker, &raw_output)?;

        let mut record = CheckRecord::new(checker, target);
        record.summary = findings.summary;
        record.issues = findings.issues;
        let config_file = self.config.checker_config(checker);
        let metadata = match checker {
            Checker::Vale => checker::vale::metadata(&self.config, config_file.as_deref()),
            Checker::Markdownlint => {
                checker::markdownlint::metadata(&self.config.markdownlint, config_file.as_deref())
            },
        };
        record.metadata.extend(metadata);

        let id = self.store.save(&record)?;
        log::info!(
            "{checker} finished: {} issue(s) across {} file(s), saved as {id}",
            record.summary.total_issues,
            record.summary.total_files
        );

        Ok(RunOutcome {
            id,
            record,
            raw_output,
        })
    }
}
