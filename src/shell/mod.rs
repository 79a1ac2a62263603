// SPDX-License-Identifier: PMPL-1.0-or-later

//! Interactive translation shell.
//!
//! Reads one line at a time, either a command (see [`Command`]) or text to
//! translate. The transcript goes to the given writer, normally stderr, so
//! nothing interactive ends up in a redirected stdout. Errors are reported
//! and the prompt comes back; only `q` or end of input leave the loop.

pub mod command;
pub mod input;
pub mod render;

pub use command::Command;
pub use input::{Editor, LineReader, Piped};

use crate::client::Translator;
use crate::config::{Config, Rgb};
use crate::lang::{self, Language};
use crate::plang::{self, Plang};
use crate::resolver::Resolver;
use std::fmt;
use std::io::{self, IsTerminal, Write};

/// What the shell is currently translating into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Language(Language),
    /// Joke target rendered locally
    Program(Plang),
}

impl Target {
    pub fn code(&self) -> &'static str {
        match self {
            Target::Language(lang) => lang.code,
            Target::Program(plang) => plang.code,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Language(lang) => fmt::Display::fmt(lang, f),
            Target::Program(plang) => write!(f, "{} ({})", plang.name, plang.code),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<'a> {
    config: &'a Config,
    translator: &'a dyn Translator,
    source: Language,
    target: Target,
}

impl<'a> Shell<'a> {
    pub fn new(config: &'a Config, translator: &'a dyn Translator) -> Self {
        Self {
            config,
            translator,
            source: config.source,
            target: Target::Language(config.target),
        }
    }

    pub fn source(&self) -> Language {
        self.source
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// `<source>:<target>> `, with an empty source meaning auto-detect.
    pub fn prompt(&self) -> String {
        format!("{}:{}> ", self.source.code, self.target.code())
    }

    /// Runs the read-eval loop until `q` or end of input.
    pub fn run<L, W>(&mut self, input: &mut L, out: &mut W) -> io::Result<()>
    where
        L: LineReader + ?Sized,
        W: Write,
    {
        writeln!(out, "Welcome to TRAN!")?;
        self.info(out, &render::help())?;

        loop {
            let Some(line) = input.read_line(&self.prompt(), out)? else {
                writeln!(out)?;
                break;
            };
            let Some(command) = Command::parse(&line) else {
                continue;
            };
            input.add_history(line.trim());
            if self.execute(command, out)? == Flow::Quit {
                break;
            }
        }
        writeln!(out, "Leaving TRAN.")
    }

    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Flow> {
        tracing::debug!(?command, "shell command");
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => self.info(out, &render::help())?,
            Command::List(filter) => self.list(&filter, out)?,
            Command::SourceAuto => self.set_source(Language::AUTO, out)?,
            Command::Source(arg) => match self.resolver().resolve(&arg) {
                Ok(lang) => self.set_source(lang, out)?,
                Err(err) => self.error(out, &err.to_string())?,
            },
            Command::TargetDefault => self.set_target(Target::Language(lang::current_lang()), out)?,
            Command::Target(arg) => match self.resolve_target(&arg) {
                Some(target) => self.set_target(target, out)?,
                None => self.error(out, &format!("{arg:?} is not found"))?,
            },
            Command::Save => self.save(out)?,
            Command::Translate(text) => self.translate(&text, out)?,
        }
        Ok(Flow::Continue)
    }

    fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.translator)
    }

    fn resolve_target(&self, arg: &str) -> Option<Target> {
        self.resolver()
            .resolve(arg)
            .ok()
            .map(Target::Language)
            .or_else(|| plang::lookup(arg).map(Target::Program))
    }

    fn list<W: Write>(&self, filter: &str, out: &mut W) -> io::Result<()> {
        let langs = self.resolver().filter(filter);
        if langs.is_empty() {
            self.error(out, &format!("{filter:?} is not found"))
        } else {
            self.info(out, &render::language_table(&langs))
        }
    }

    fn set_source<W: Write>(&mut self, source: Language, out: &mut W) -> io::Result<()> {
        if self.source != source {
            self.source = source;
            self.state(out, &format!("Source changed: {source}"))?;
        }
        Ok(())
    }

    fn set_target<W: Write>(&mut self, target: Target, out: &mut W) -> io::Result<()> {
        if self.target != target {
            self.target = target;
            self.state(out, &format!("Target changed: {target}"))?;
        }
        Ok(())
    }

    fn save<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let Target::Language(target) = self.target else {
            return self.error(out, "a programming language cannot be saved as the default target");
        };
        match self.config.save_languages(self.source, target) {
            Ok(path) => self.state(out, &format!("Defaults saved to {}", path.display())),
            Err(err) => self.error(out, &err.to_string()),
        }
    }

    fn translate<W: Write>(&self, text: &str, out: &mut W) -> io::Result<()> {
        let result = match self.target {
            Target::Program(plang) => Ok(plang.render(text)),
            Target::Language(target) => {
                self.translator.translate(text, self.source.code, target.code)
            }
        };
        match result {
            Ok(translated) => self.paint(out, self.config.palette.result, &translated),
            Err(err) => self.error(out, &err.to_string()),
        }
    }

    fn info<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        self.paint(out, self.config.palette.info, text)
    }

    fn state<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        self.paint(out, self.config.palette.state, text)
    }

    fn error<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        self.paint(out, self.config.palette.error, text)
    }

    fn paint<W: Write>(&self, out: &mut W, color: Rgb, text: &str) -> io::Result<()> {
        writeln!(out, "{}", color.paint(text))
    }
}

/// Turns colors on when `stream` is a terminal. `colored` only looks at
/// stdout, but the shell transcript goes elsewhere.
pub fn color_for<T: IsTerminal>(stream: &T) -> bool {
    let enabled = stream.is_terminal();
    colored::control::set_override(enabled);
    enabled
}
