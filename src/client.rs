// SPDX-License-Identifier: PMPL-1.0-or-later

//! HTTP client for the remote translation endpoint.
//!
//! The endpoint takes a form-encoded POST with `text`, `srouce` and `target`
//! and answers `{"code": 200, "text": "...", "message": "..."}`. The source
//! field name is misspelled on purpose: deployed endpoints read it that way.

use crate::error::{Result, TranError};
use serde::Deserialize;

/// Public Apps Script deployment the tool ships with.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/\
AKfycbxCmg2CHtCFEzF5mYDwHX2iJS_BlVvEz52F-zcAMPu1jYhqS_E/exec";

/// Anything that can turn text from one language into another.
///
/// An empty `source` asks for auto-detection.
pub trait Translator {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct TransData {
    code: i64,
    #[serde(default)]
    text: String,
    #[serde(default)]
    message: String,
}

impl TransData {
    fn into_result(self) -> Result<String> {
        if self.code == 200 {
            Ok(self.text)
        } else {
            Err(TranError::remote(&self.message))
        }
    }
}

/// Blocking client bound to one endpoint URL.
#[derive(Debug, Clone)]
pub struct Endpoint {
    url: String,
    client: reqwest::blocking::Client,
}

impl Endpoint {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("tran/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Translator for Endpoint {
    fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        tracing::debug!(url = %self.url, source, target, chars = text.chars().count(), "POST translate");

        let body = self
            .client
            .post(&self.url)
            .form(&[("text", text), ("srouce", source), ("target", target)])
            .send()?
            .text()?;

        parse_response(&body)
    }
}

/// Decodes an endpoint reply into the translated text or the remote error.
pub fn parse_response(body: &str) -> Result<String> {
    let data: TransData = serde_json::from_str(body)?;
    data.into_result()
}
