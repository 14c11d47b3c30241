//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. `MEDIC_NO_COLOR` environment override
//! 2. TOML file specified via --config CLI flag
//! 3. ./medic.toml in the current directory
//! 4. $XDG_CONFIG_HOME/medic/medic.toml (or ~/.config/medic/medic.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub display: DisplayConfig,
    pub cleanup: CleanupConfig,
}

/// Terminal display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Whether ANSI color/style output is enabled.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Cleanup-behavior settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupConfig {
    /// Ask for confirmation before running a cleanup plan.
    pub confirm: bool,
}

// ---------------------------------------------------------------------------
// File schema
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    display: FileDisplayConfig,
    cleanup: FileCleanupConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct FileDisplayConfig {
    color: bool,
}

impl Default for FileDisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileCleanupConfig {
    confirm: bool,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let config_text = read_config_text(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = match config_text {
        Some(text) => toml::from_str(&text)?,
        None => FileConfig::default(),
    };

    let mut config = Config {
        display: DisplayConfig {
            color: parsed.display.color,
        },
        cleanup: CleanupConfig {
            confirm: parsed.cleanup.confirm,
        },
    };
    if env_lookup("MEDIC_NO_COLOR").is_some_and(|value| !value.trim().is_empty()) {
        config.display.color = false;
    }

    Ok(config)
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<Option<String>, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicitly requested file must exist.
    if let Some(p) = path_override {
        return read_file(Path::new(p)).map(Some).map_err(ConfigError::Io);
    }

    match read_file(Path::new("medic.toml")) {
        Ok(text) => return Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(ConfigError::Io(e)),
    }

    if let Some(root) = config_root() {
        let global = root.join("medic").join("medic.toml");
        match read_file(&global) {
            Ok(text) => return Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::Io(e)),
        }
    }

    Ok(None)
}

fn config_root_dir() -> Option<PathBuf> {
    dirs::config_dir()
}
