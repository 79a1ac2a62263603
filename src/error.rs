// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error kinds shared by the resolver, the client and the config loader.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, TranError>;

#[derive(Debug, thiserror::Error)]
pub enum TranError {
    /// Language code or name could not be resolved
    #[error("{0:?} is not found")]
    NotFound(String),

    /// Persisted or overriding configuration value is unusable
    #[error("{0}")]
    InvalidConfig(String),

    /// The endpoint could not be reached
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-200 application code
    #[error("{0}")]
    Remote(String),

    /// The endpoint answered with something other than the expected JSON
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML write error: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("could not determine the user config directory")]
    ConfigDirNotFound,
}

impl TranError {
    pub fn not_found(input: impl Into<String>) -> Self {
        Self::NotFound(input.into())
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Builds a remote error, stripping the backend's `exception:` prefix.
    pub fn remote(message: &str) -> Self {
        const PREFIX: &str = "exception:";
        let stripped = match message.get(..PREFIX.len()) {
            Some(head) if head.eq_ignore_ascii_case(PREFIX) => message[PREFIX.len()..].trim(),
            _ => message,
        };
        Self::Remote(stripped.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_strips_exception_prefix() {
        let err = TranError::remote("Exception: bad target");
        assert_eq!(err.to_string(), "bad target");

        let err = TranError::remote("EXCEPTION:   spaced out  ");
        assert_eq!(err.to_string(), "spaced out");
    }

    #[test]
    fn remote_keeps_other_messages() {
        let err = TranError::remote("quota exceeded");
        assert_eq!(err.to_string(), "quota exceeded");

        // prefix must be at the start
        let err = TranError::remote("Runtime exception: x");
        assert_eq!(err.to_string(), "Runtime exception: x");
    }

    #[test]
    fn remote_handles_short_and_multibyte_messages() {
        assert_eq!(TranError::remote("").to_string(), "");
        assert_eq!(TranError::remote("例外").to_string(), "例外");
        assert_eq!(TranError::remote("exceptionés").to_string(), "exceptionés");
    }
}
