//! Where mathscribe keeps its files
//!
//! Everything lives in one directory:
//! - `config.yaml` editor defaults
//! - `session.json` open tabs and accessibility settings
//! - `logs/` daily-rotated debug logs
//!
//! The directory is `$XDG_CONFIG_HOME/mathscribe` or `~/.config/mathscribe`,
//! and `%APPDATA%\mathscribe` on Windows.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

const APP_DIR: &str = "mathscribe";
const CONFIG_FILE: &str = "config.yaml";
const SESSION_FILE: &str = "session.json";
const LOGS_DIR: &str = "logs";

pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var_os("APPDATA").map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .map(|base| base.join(APP_DIR))
    }
}

pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

pub fn session_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(SESSION_FILE))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(LOGS_DIR))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("No config directory available")?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create logs directory {}", logs.display()))?;
    Ok(logs)
}

/// Create the directory that will hold `file`.
///
/// Used before writing the session or config so a custom `--session` path
/// in a fresh directory works too.
pub fn ensure_parent_dir(file: &Path) -> Result<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display())),
        _ => Ok(()),
    }
}
