// SPDX-License-Identifier: PMPL-1.0-or-later

//! Runtime configuration.
//!
//! Loading goes through four steps:
//!
//! 1. build the defaults ([`ConfigFile::initial`]);
//! 2. merge them with `config.toml`, writing back any filled-in keys;
//! 3. apply `-s`/`-t` overrides, resolved through the [`Resolver`];
//! 4. validate into a [`Config`].
//!
//! The resulting value is owned by the caller and passed to the shell or the
//! batch runner. Changing languages in a session touches only that value;
//! [`Config::save_languages`] is the one way back to disk.

pub mod color;
pub mod file;
pub mod paths;

pub use color::{Palette, Rgb};
pub use file::ConfigFile;

use crate::client::{Endpoint, Translator};
use crate::error::{Result, TranError};
use crate::lang::{self, Language};
use crate::resolver::Resolver;
use std::path::{Path, PathBuf};

/// Languages given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<String>,
    pub target: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// [`Language::AUTO`] when the endpoint should detect it
    pub source: Language,
    pub target: Language,
    pub endpoint: String,
    pub limit_n_chars: usize,
    pub palette: Palette,
    /// File this config was read from
    pub path: PathBuf,
}

impl Config {
    /// Loads the user's config file and applies `overrides`.
    pub fn load(overrides: &Overrides) -> Result<Config> {
        let path = paths::config_file()?;
        let mut file = ConfigFile::load_from(&path, &ConfigFile::initial())?;

        if overrides.source.is_some() || overrides.target.is_some() {
            let endpoint = Endpoint::new(file.api.endpoint.clone())?;
            apply_overrides(&mut file, overrides, &endpoint)?;
        }

        Config::from_file(&file, path)
    }

    /// Validates a merged config document.
    pub fn from_file(file: &ConfigFile, path: PathBuf) -> Result<Config> {
        let source = if file.default.source.trim().is_empty() {
            Language::AUTO
        } else {
            lang::lookup_code(&file.default.source).ok_or_else(|| {
                invalid("[default] source", format!("{:?}", file.default.source))
            })?
        };

        let target = lang::lookup_code(&file.default.target)
            .ok_or_else(|| invalid("[default] target", format!("{:?}", file.default.target)))?;

        let endpoint = file.api.endpoint.trim();
        if endpoint.is_empty() {
            return Err(invalid("[api] endpoint", format!("{endpoint:?}, want: url")));
        }

        let limit_n_chars = file.api.limit_n_chars;
        if limit_n_chars == 0 {
            return Err(invalid(
                "[api] limit_n_chars",
                format!("{limit_n_chars}, want: positive number"),
            ));
        }

        let color = |key: &str, value: &str| -> Result<Rgb> {
            value.parse().map_err(|err: String| invalid(key, err))
        };
        let palette = Palette {
            info: color("[colors] info", &file.colors.info)?,
            state: color("[colors] state", &file.colors.state)?,
            error: color("[colors] error", &file.colors.error)?,
            result: color("[colors] result", &file.colors.result)?,
        };

        Ok(Config {
            source,
            target,
            endpoint: endpoint.to_string(),
            limit_n_chars,
            palette,
            path,
        })
    }

    /// Persists `source` and `target` as the new defaults, keeping every
    /// other key of the file as it is.
    pub fn save_languages(&self, source: Language, target: Language) -> Result<&Path> {
        let mut file = ConfigFile::load_from(&self.path, &ConfigFile::initial())?;
        file.default.source = source.code.to_string();
        file.default.target = target.code.to_string();
        file.save_to(&self.path)?;
        tracing::debug!(path = %self.path.display(), source = source.code, target = target.code, "saved default languages");
        Ok(self.path.as_path())
    }
}

/// Replaces the file's default languages with resolved command-line values.
///
/// Overrides may be codes or names; anything the resolver rejects is a
/// config error rather than a silent fallback.
pub fn apply_overrides(
    file: &mut ConfigFile,
    overrides: &Overrides,
    translator: &dyn Translator,
) -> Result<()> {
    let resolver = Resolver::new(translator);
    let resolve = |flag: &str, value: &str| -> Result<String> {
        resolver
            .resolve(value)
            .map(|lang| lang.code.to_string())
            .map_err(|_| TranError::invalid_config(format!("{flag} {value:?} is not a known language")))
    };

    if let Some(source) = overrides.source.as_deref().filter(|s| !s.trim().is_empty()) {
        file.default.source = resolve("-s", source)?;
    }
    if let Some(target) = overrides.target.as_deref().filter(|s| !s.trim().is_empty()) {
        file.default.target = resolve("-t", target)?;
    }
    Ok(())
}

fn invalid(key: &str, detail: String) -> TranError {
    TranError::invalid_config(format!("config.toml: {key} is invalid: {detail}"))
}
