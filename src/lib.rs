// SPDX-License-Identifier: PMPL-1.0-or-later

//! tran: translate text from the command line.
//!
//! Text comes from files, piped stdin, or an interactive shell and is sent
//! to a remote translation endpoint, one blocking request at a time.
//!
//! PIECES:
//! 1. **lang**: the ISO 639-1 table and host locale detection.
//! 2. **resolver**: turns codes, partial names, or foreign names into a
//!    table entry, asking the endpoint for an English rendering as a last
//!    resort.
//! 3. **client**: the HTTP endpoint and its `{code, text, message}` replies.
//! 4. **config**: defaults merged with a self-healing `config.toml`.
//! 5. **batch** / **shell**: the two front ends.

pub mod batch;
pub mod chunk;
pub mod client;
pub mod config;
pub mod error;
pub mod lang;
pub mod plang;
pub mod resolver;
pub mod script;
pub mod shell;

pub use client::{Endpoint, Translator};
pub use error::{Result, TranError};
pub use resolver::Resolver;
