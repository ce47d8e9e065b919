//! Tool configuration
//!
//! Settings live in `marvin.toml` at the project root. Every field has a
//! default, so the file is optional. The resolved config is passed
//! explicitly to the runner and store rather than held in a global.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::Checker;

/// Default config file name
pub const CONFIG_FILE: &str = "marvin.toml";

/// Default directory that check results are written to
pub const DEFAULT_RESULTS_DIR: &str = ".marvin/results";

/// Default documentation root checked when no path is given
pub const DEFAULT_DOCS_ROOT: &str = "docs/";

/// Marvin configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path checked when a run request omits one
    #[serde(default = "default_docs_root")]
    pub docs_root: String,
    /// Directory check results are written to
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
    /// Wall-clock bound for a single checker run, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Vale-specific settings
    #[serde(default)]
    pub vale: ValeSettings,
    /// markdownlint-specific settings
    #[serde(default)]
    pub markdownlint: MarkdownlintSettings,
}

/// Settings for the Vale prose linter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValeSettings {
    /// Binary to invoke
    #[serde(default = "default_vale_binary")]
    pub binary: String,
    /// Explicit config file; `.vale.ini` is auto-detected when unset
    #[serde(default)]
    pub config: Option<String>,
    /// Minimum alert level passed to Vale
    #[serde(default = "default_min_alert_level")]
    pub min_alert_level: String,
    /// Glob filter passed to Vale (e.g. `!node_modules`)
    #[serde(default)]
    pub glob: Option<String>,
}

/// Settings for the markdownlint linter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownlintSettings {
    /// Binary to invoke
    #[serde(default = "default_markdownlint_binary")]
    pub binary: String,
    /// Explicit config file; `.markdownlint.yaml` is auto-detected when unset
    #[serde(default)]
    pub config: Option<String>,
    /// Pass `--fix` so markdownlint rewrites fixable issues in place
    #[serde(default)]
    pub fix: bool,
}

fn default_docs_root() -> String {
    DEFAULT_DOCS_ROOT.to_string()
}

fn default_results_dir() -> PathBuf {
    PathBuf::from(DEFAULT_RESULTS_DIR)
}

const fn default_timeout_secs() -> u64 {
    60
}

fn default_vale_binary() -> String {
    "vale".to_string()
}

fn default_min_alert_level() -> String {
    "suggestion".to_string()
}

fn default_markdownlint_binary() -> String {
    "markdownlint".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            docs_root: default_docs_root(),
            results_dir: default_results_dir(),
            timeout_secs: default_timeout_secs(),
            vale: ValeSettings::default(),
            markdownlint: MarkdownlintSettings::default(),
        }
    }
}

impl Default for ValeSettings {
    fn default() -> Self {
        Self {
            binary: default_vale_binary(),
            config: None,
            min_alert_level: default_min_alert_level(),
            glob: None,
        }
    }
}

impl Default for MarkdownlintSettings {
    fn default() -> Self {
        Self {
            binary: default_markdownlint_binary(),
            config: None,
            fix: false,
        }
    }
}

impl Config {
    /// Load config from `marvin.toml` in the current directory, or
    /// defaults if the file does not exist or cannot be parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load config from a specific file, falling back to defaults
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            fs::read_to_string(path)
                .ok()
                .and_then(|content| toml::from_str(&content).ok())
                .unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// The timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Resolve the config file for a checker: the explicit setting, or
    /// the conventional file at the project root when it exists.
    #[must_use]
    pub fn checker_config(&self, checker: Checker) -> Option<String> {
        let explicit = match checker {
            Checker::Vale => self.vale.config.clone(),
            Checker::Markdownlint => self.markdownlint.config.clone(),
        };
        explicit.or_else(|| {
            let default = checker.default_config_file();
            Path::new(default).exists().then(|| default.to_string())
        })
    }
}
