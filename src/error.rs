//! Unified error types for the helper.

use std::fmt;

// ---------------------------------------------------------------------------
// LookupError
// ---------------------------------------------------------------------------

/// Errors arising from catalog lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The named game is not in the catalog.
    GameNotFound(String),
    /// The game exists, but no advice category matched the query.
    IssueNotFound {
        game: String,
        /// Advice categories available for the game, in catalog order.
        available: Vec<String>,
    },
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameNotFound(game) => write!(f, "no game named `{game}` in the catalog"),
            Self::IssueNotFound { game, .. } => write!(f, "no matching issue for `{game}`"),
        }
    }
}

impl std::error::Error for LookupError {}

// ---------------------------------------------------------------------------
// ActionError
// ---------------------------------------------------------------------------

/// Errors arising from cleanup-action execution.
///
/// The action runner suppresses these by design; they only ever surface as a
/// log line and a per-action outcome.
#[derive(Debug)]
pub enum ActionError {
    /// The action ran but encountered a failure.
    ExecutionFailed(String),
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed(msg) => write!(f, "execution failed: {msg}"),
        }
    }
}

impl std::error::Error for ActionError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
