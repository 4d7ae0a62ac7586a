//! Configuration system for the taskboard tracker.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/taskboard/config.toml`)
//! 4. Compiled defaults
//!
//! The administrator identity has no compiled default: it must come from
//! the CLI, the environment, or the config file.

use std::path::PathBuf;

use crate::stable::{DEFAULT_MAX_ENTRIES, DEFAULT_MAX_VALUE_BYTES};

/// Errors that can occur when loading tracker configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),

    /// No administrator identity was supplied by any layer.
    #[error("no administrator identity configured (set --admin, TASKBOARD_ADMIN, or admin_identity in the config file)")]
    MissingAdmin,
}

// ---------------------------------------------------------------------------
// TOML file structs (all fields Option for partial overrides)
// ---------------------------------------------------------------------------

/// Top-level TOML config file structure for the tracker.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TrackerConfigFile {
    tracker: TrackerFileSection,
}

/// `[tracker]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct TrackerFileSection {
    admin_identity: Option<String>,
    max_members: Option<usize>,
    max_tasks: Option<usize>,
    max_value_bytes: Option<usize>,
}

// ---------------------------------------------------------------------------
// CLI arguments
// ---------------------------------------------------------------------------

/// CLI arguments for the tracker shell.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Taskboard tracker shell")]
pub struct TrackerCliArgs {
    /// Administrator identity token.
    #[arg(short, long, env = "TASKBOARD_ADMIN")]
    pub admin: Option<String>,

    /// Path to config file (default: `~/.config/taskboard/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Maximum number of registered members.
    #[arg(long)]
    pub max_members: Option<usize>,

    /// Maximum number of stored tasks.
    #[arg(long)]
    pub max_tasks: Option<usize>,

    /// Maximum serialized record size in bytes.
    #[arg(long)]
    pub max_value_bytes: Option<usize>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", env = "TASKBOARD_LOG")]
    pub log_level: String,
}

// ---------------------------------------------------------------------------
// Resolved configuration
// ---------------------------------------------------------------------------

/// Fully resolved tracker configuration.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Administrator identity token; the one caller allowed to mutate.
    pub admin_identity: String,
    /// Maximum number of registered members.
    pub max_members: usize,
    /// Maximum number of stored tasks.
    pub max_tasks: usize,
    /// Maximum serialized record size in bytes.
    pub max_value_bytes: usize,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            admin_identity: String::new(),
            max_members: DEFAULT_MAX_ENTRIES,
            max_tasks: DEFAULT_MAX_ENTRIES,
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
            log_level: "info".to_string(),
        }
    }
}

impl TrackerConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and a missing
    /// file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the explicit config file cannot be read
    /// or parsed, or if no layer supplies an administrator identity.
    pub fn load(cli: &TrackerCliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        let config = Self::resolve(cli, &file);
        if config.admin_identity.is_empty() {
            return Err(ConfigError::MissingAdmin);
        }
        Ok(config)
    }

    /// Resolve a `TrackerConfig` from CLI args and a parsed config file.
    ///
    /// Priority: CLI > file > default.
    #[must_use]
    fn resolve(cli: &TrackerCliArgs, file: &TrackerConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            admin_identity: cli
                .admin
                .clone()
                .or_else(|| file.tracker.admin_identity.clone())
                .unwrap_or(defaults.admin_identity),
            max_members: cli
                .max_members
                .or(file.tracker.max_members)
                .unwrap_or(defaults.max_members),
            max_tasks: cli
                .max_tasks
                .or(file.tracker.max_tasks)
                .unwrap_or(defaults.max_tasks),
            max_value_bytes: cli
                .max_value_bytes
                .or(file.tracker.max_value_bytes)
                .unwrap_or(defaults.max_value_bytes),
            log_level: cli.log_level.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Load and parse a TOML config file for the tracker.
fn load_config_file(
    explicit_path: Option<&std::path::Path>,
) -> Result<TrackerConfigFile, ConfigError> {
    let path = if let Some(p) = explicit_path {
        let contents = std::fs::read_to_string(p).map_err(|e| ConfigError::ReadFile {
            path: p.to_path_buf(),
            source: e,
        })?;
        return Ok(toml::from_str(&contents)?);
    } else {
        let Some(config_dir) = dirs::config_dir() else {
            return Ok(TrackerConfigFile::default());
        };
        config_dir.join("taskboard").join("config.toml")
    };

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TrackerConfigFile::default()),
        Err(e) => Err(ConfigError::ReadFile { path, source: e }),
    }
}
