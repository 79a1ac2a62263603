// SPDX-License-Identifier: PMPL-1.0-or-later

//! The persisted `config.toml` document.
//!
//! ```toml
//! [default]
//! source = ""
//! target = "ja"
//!
//! [api]
//! endpoint = "https://..."
//! limit_n_chars = 4000
//!
//! [colors]
//! info = "#80a0d0"
//! state = "#60c060"
//! error = "#d04040"
//! result = "#ffc864"
//! ```
//!
//! Missing or blank keys are filled from the built-in defaults and the file
//! is rewritten, so a hand-trimmed file heals itself on the next run.

use super::color;
use crate::client::DEFAULT_ENDPOINT;
use crate::error::{Result, TranError};
use crate::lang;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const DEFAULT_LIMIT_N_CHARS: usize = 4000;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSection {
    /// Empty means auto-detect
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    pub endpoint: String,
    pub limit_n_chars: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSection {
    pub info: String,
    pub state: String,
    pub error: String,
    pub result: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub default: DefaultSection,
    pub api: ApiSection,
    pub colors: ColorSection,
}

impl ConfigFile {
    /// Built-in defaults; the target follows the host locale.
    pub fn initial() -> Self {
        Self {
            default: DefaultSection {
                source: String::new(),
                target: lang::current_lang().code.to_string(),
            },
            api: ApiSection {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                limit_n_chars: DEFAULT_LIMIT_N_CHARS,
            },
            colors: ColorSection {
                info: color::INFO.to_string(),
                state: color::STATE.to_string(),
                error: color::ERROR.to_string(),
                result: color::RESULT.to_string(),
            },
        }
    }

    /// Fills every blank field from `initial`. Returns whether anything changed.
    pub fn complete(&mut self, initial: &ConfigFile) -> bool {
        let mut filled = false;
        for (field, default) in [
            (&mut self.default.source, &initial.default.source),
            (&mut self.default.target, &initial.default.target),
            (&mut self.api.endpoint, &initial.api.endpoint),
            (&mut self.colors.info, &initial.colors.info),
            (&mut self.colors.state, &initial.colors.state),
            (&mut self.colors.error, &initial.colors.error),
            (&mut self.colors.result, &initial.colors.result),
        ] {
            if field.trim().is_empty() && !default.is_empty() {
                field.clone_from(default);
                filled = true;
            }
        }
        if self.api.limit_n_chars == 0 && initial.api.limit_n_chars != 0 {
            self.api.limit_n_chars = initial.api.limit_n_chars;
            filled = true;
        }
        filled
    }

    /// Reads `path`, completing it from `initial`.
    ///
    /// A missing file is created from `initial`; a completed file is
    /// written back.
    pub fn load_from(path: &Path, initial: &ConfigFile) -> Result<ConfigFile> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file missing, writing defaults");
                initial.save_to(path)?;
                return Ok(initial.clone());
            }
            Err(err) => return Err(err.into()),
        };

        let mut loaded: ConfigFile = toml::from_str(&text).map_err(|source| TranError::Toml {
            path: path.to_path_buf(),
            source,
        })?;

        if loaded.complete(initial) {
            tracing::debug!(path = %path.display(), "filled blank config keys, rewriting");
            loaded.save_to(path)?;
        }
        Ok(loaded)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let text = toml::to_string(self)?;
        fs::write(path, text)?;
        Ok(())
    }
}
