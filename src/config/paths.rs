// SPDX-License-Identifier: PMPL-1.0-or-later

//! Location of the per-user config file.

use crate::error::{Result, TranError};
use std::fs;
use std::path::PathBuf;

/// Overrides the config file location when set.
pub const CONFIG_ENV: &str = "TRAN_CONFIG";

/// `$TRAN_CONFIG`, or `<config dir>/tran/config.toml`
/// (`~/.config` on Linux, `%APPDATA%` on Windows).
///
/// The parent directory is created if missing.
pub fn config_file() -> Result<PathBuf> {
    let path = match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => dirs::config_dir()
            .ok_or(TranError::ConfigDirNotFound)?
            .join("tran")
            .join("config.toml"),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    tracing::debug!(path = %path.display(), "resolved config path");
    Ok(path)
}
