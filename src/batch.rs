// SPDX-License-Identifier: PMPL-1.0-or-later

//! Non-interactive translation of files or piped stdin.
//!
//! The input is chunked by the configured character limit and every chunk is
//! sent as its own request, one after another. The first failure aborts the
//! run.

use crate::chunk;
use crate::client::Translator;
use crate::error::Result;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Settings for one batch run
#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Empty for auto-detection
    pub source: String,
    pub target: String,
    pub limit_n_chars: usize,
    /// Print each source chunk before its translation
    pub echo: bool,
}

/// Reads and concatenates `paths`, or all of stdin when `paths` is empty.
pub fn read_inputs(paths: &[PathBuf]) -> Result<String> {
    if paths.is_empty() {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        return Ok(decode(bytes));
    }

    let texts = paths
        .iter()
        .map(|path| read_file(path))
        .collect::<Result<Vec<_>>>()?;
    Ok(texts.join("\n"))
}

fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read input file");
    Ok(decode(bytes))
}

/// Decodes input bytes: BOM-marked encodings first, then UTF-8, then
/// Windows-1252 as a last resort.
pub fn decode(bytes: Vec<u8>) -> String {
    if let Some((encoding, bom_len)) = encoding_rs::Encoding::for_bom(&bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            let bytes = err.into_bytes();
            let (text, _, had_errors) = encoding_rs::WINDOWS_1252.decode(&bytes);
            if had_errors {
                tracing::warn!("input is neither UTF-8 nor Windows-1252, some characters were replaced");
            }
            text.into_owned()
        }
    }
}

/// Translates `text` chunk by chunk, writing results to `out`.
pub fn run<W: Write>(
    text: &str,
    options: &BatchOptions,
    translator: &dyn Translator,
    out: &mut W,
) -> Result<()> {
    let chunks = chunk::chunks(text, options.limit_n_chars);
    tracing::debug!(chunks = chunks.len(), limit = options.limit_n_chars, "batch translation");

    for piece in &chunks {
        let translated = translator.translate(piece, &options.source, &options.target)?;
        if options.echo {
            out.write_all(piece.as_bytes())?;
        }
        out.write_all(translated.as_bytes())?;
        if !translated.ends_with('\n') {
            out.write_all(b"\n")?;
        }
    }
    out.flush()?;
    Ok(())
}
