//! Configuration for notestamp.
//!
//! Stored as TOML at `<workspace>/config/config.toml`, where the workspace is
//! `$NOTESTAMP_HOME` when set and the OS data directory otherwise:
//!   %APPDATA%/notestamp on Windows
//!   $XDG_DATA_HOME/notestamp on Linux
//!   ~/Library/Application Support/notestamp on macOS

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::vault::DEFAULT_NOTE_EXTENSION;

/// Environment variable overriding the workspace root.
pub const HOME_ENV: &str = "NOTESTAMP_HOME";

/// Standard file name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    #[serde(default)]
    pub vault: VaultSettings,
    /// Settings owned by the note commands themselves.
    #[serde(default)]
    pub commands: CommandSettings,
}

/// Where notes live when no vault is given on the command line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultSettings {
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Extension for notes created by the "new file" command.
    #[serde(default = "default_note_extension")]
    pub note_extension: String,
}

impl Default for VaultSettings {
    fn default() -> Self {
        Self {
            root: None,
            note_extension: default_note_extension(),
        }
    }
}

fn default_note_extension() -> String {
    DEFAULT_NOTE_EXTENSION.to_string()
}

/// Command settings. Carries no fields yet; round-trips as an empty table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct CommandSettings {}

/// Returns the root directory where notestamp keeps its files.
///
/// Order of precedence:
/// 1. `NOTESTAMP_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("notestamp"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}
