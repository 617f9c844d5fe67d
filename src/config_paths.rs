//! Centralized configuration paths for hover-sidebar
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/hover-sidebar/`
//! - Windows: `%APPDATA%\hover-sidebar\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::config::ConfigError;

const APP_DIR: &str = "hover-sidebar";

/// File name prefix used by the rolling log appender
pub const LOG_FILE_PREFIX: &str = "hover-sidebar.log";

/// Base config directory for hover-sidebar
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/hover-sidebar`
///   - Else: `~/.config/hover-sidebar`
///
/// Windows:
///   - `%APPDATA%\hover-sidebar`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/hover-sidebar/config.json`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// `~/.config/hover-sidebar/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Most recent log file (daily rotation names them `hover-sidebar.log.YYYY-MM-DD`)
pub fn log_file() -> Option<PathBuf> {
    let logs_dir = logs_dir()?;

    let mut log_files: Vec<PathBuf> = fs::read_dir(&logs_dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(LOG_FILE_PREFIX))
        })
        .collect();

    // YYYY-MM-DD sorts naturally
    log_files.sort_by(|a, b| b.cmp(a));

    log_files
        .into_iter()
        .next()
        .or_else(|| Some(logs_dir.join(LOG_FILE_PREFIX)))
}

/// Create `path` and its parents if missing
pub fn ensure_dir(path: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, ConfigError> {
    let logs = logs_dir().ok_or(ConfigError::NoConfigDir)?;
    ensure_dir(&logs)?;
    Ok(logs)
}
