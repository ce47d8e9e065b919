//! Known checker kinds

use serde::{Deserialize, Serialize};

/// An external documentation checker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Checker {
    /// Vale prose linter
    Vale,
    /// markdownlint markdown linter
    Markdownlint,
}

impl Checker {
    /// All known checkers
    pub const ALL: [Self; 2] = [Self::Vale, Self::Markdownlint];

    /// The checker name as used in identifiers and JSON
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vale => "vale",
            Self::Markdownlint => "markdownlint",
        }
    }

    /// Default binary name on PATH
    #[must_use]
    pub const fn default_binary(self) -> &'static str {
        self.name()
    }

    /// Config file auto-detected at the project root
    #[must_use]
    pub const fn default_config_file(self) -> &'static str {
        match self {
            Self::Vale => ".vale.ini",
            Self::Markdownlint => ".markdownlint.yaml",
        }
    }
}

impl std::fmt::Display for Checker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Checker {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vale" => Ok(Self::Vale),
            "markdownlint" => Ok(Self::Markdownlint),
            _ => Err(format!("Unknown checker: {s}. Use: vale, markdownlint")),
        }
    }
}
