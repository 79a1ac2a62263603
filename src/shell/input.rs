// SPDX-License-Identifier: PMPL-1.0-or-later

//! Where shell lines come from: a line editor on a terminal, or any
//! `BufRead` when input is scripted.

use crate::batch;
use rustyline::config::{Behavior, Config};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{self, BufRead, Write};

pub trait LineReader {
    /// Shows `prompt` and returns the next line, or `None` at end of input.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>>;

    /// Remembers an accepted line so it can be recalled later.
    fn add_history(&mut self, _line: &str) {}
}

/// Plain lines from a reader. Bytes that are not UTF-8 are decoded the same
/// way batch input is, so a stray Latin-1 line does not end the session.
pub struct Piped<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> Piped<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> LineReader for Piped<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> io::Result<Option<String>> {
        write!(out, "{prompt}")?;
        out.flush()?;

        self.buf.clear();
        if self.reader.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(batch::decode(std::mem::take(&mut self.buf))))
    }
}

/// Terminal line editing with in-session history.
pub struct Editor {
    inner: DefaultEditor,
}

impl Editor {
    pub fn new() -> io::Result<Self> {
        // Talk to the tty directly so the prompt never lands in stdout.
        let config = Config::builder()
            .behavior(Behavior::PreferTerm)
            .auto_add_history(false)
            .build();
        let inner = DefaultEditor::with_config(config).map_err(into_io)?;
        Ok(Self { inner })
    }
}

impl LineReader for Editor {
    fn read_line(&mut self, prompt: &str, _out: &mut dyn Write) -> io::Result<Option<String>> {
        match self.inner.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            // Ctrl-C drops the current line only
            Err(ReadlineError::Interrupted) => Ok(Some(String::new())),
            Err(err) => Err(into_io(err)),
        }
    }

    fn add_history(&mut self, line: &str) {
        if let Err(err) = self.inner.add_history_entry(line) {
            tracing::warn!(%err, "failed to record history");
        }
    }
}

fn into_io(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(err) => err,
        other => io::Error::other(other),
    }
}
