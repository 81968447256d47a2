//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → CLI flags.
//!
//! Config lives at `~/.todoman/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::todo::MAX_TODOS;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TodomanConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    pub data_file: Option<PathBuf>,
    pub max_todos: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DATA_FILE: &str = "todos.dat";
pub const DEFAULT_LOG_FILE: &str = "todoman.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub data_file: PathBuf,
    pub max_todos: usize,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    /// Problems found while resolving, reported once the logger is up.
    pub warnings: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.todoman/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".todoman").join("config.toml"))
}

/// Load config from `~/.todoman/config.toml`.
///
/// A missing file (or no home directory) yields `TodomanConfig::default()`.
/// This runs before the logger exists, so it does not log; see
/// [`ensure_default_config`] for first-run file generation.
pub fn load_config() -> Result<TodomanConfig, ConfigError> {
    match config_path() {
        Some(path) if path.exists() => load_config_from(&path),
        _ => Ok(TodomanConfig::default()),
    }
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<TodomanConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Writes a commented-out default to `~/.todoman/config.toml` if none exists.
/// Call after logging is initialized.
pub fn ensure_default_config() {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return;
    };
    if path.exists() {
        debug!("Using config at {}", path.display());
        return;
    }
    info!("No config file found, generating default at {}", path.display());
    generate_default_config(&path);
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# todoman configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → CLI flags.

# [storage]
# data_file = "todos.dat"     # Relative paths resolve against the working directory
# max_todos = 20

# [logging]
# log_file = "todoman.log"
# level = "debug"             # "off", "error", "warn", "info", "debug", "trace"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// `cli_data_file` comes from `--file` (None = not specified).
pub fn resolve(config: &TodomanConfig, cli_data_file: Option<&Path>) -> ResolvedConfig {
    // Data file: CLI → config → default
    let data_file = cli_data_file
        .map(Path::to_path_buf)
        .or_else(|| config.storage.data_file.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

    let mut warnings = Vec::new();
    let log_level = match config.logging.level.as_deref() {
        Some(level) => LevelFilter::from_str(level).unwrap_or_else(|_| {
            warnings.push(format!(
                "Unknown log level {level:?}, using {DEFAULT_LOG_LEVEL}"
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    ResolvedConfig {
        data_file,
        max_todos: config.storage.max_todos.unwrap_or(MAX_TODOS).max(1),
        log_file: config
            .logging
            .log_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        log_level,
        warnings,
    }
}
