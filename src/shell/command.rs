// SPDX-License-Identifier: PMPL-1.0-or-later

//! Parsing of interactive input lines.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Quit,
    /// Persist the current languages as defaults
    Save,
    /// List languages matching the filter (empty for all)
    List(String),
    /// Bare `s`
    SourceAuto,
    Source(String),
    /// Bare `t`
    TargetDefault,
    Target(String),
    Translate(String),
}

impl Command {
    /// Parses one line of input. Blank lines yield `None`.
    ///
    /// Any other input of two bytes or less is shorthand for `t <input>`,
    /// so `ja` switches the target while `猫` is still translated.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let command = match line {
            "h" => Command::Help,
            "q" => Command::Quit,
            "w" => Command::Save,
            "l" => Command::List(String::new()),
            "s" => Command::SourceAuto,
            "t" => Command::TargetDefault,
            _ => {
                if let Some(arg) = argument(line, 'l') {
                    Command::List(arg)
                } else if let Some(arg) = argument(line, 's') {
                    Command::Source(arg)
                } else if let Some(arg) = argument(line, 't') {
                    Command::Target(arg)
                } else if line.len() <= 2 {
                    Command::Target(line.to_string())
                } else {
                    Command::Translate(line.to_string())
                }
            }
        };
        Some(command)
    }
}

/// `"<name> <arg>"` -> `arg`, trimmed.
fn argument(line: &str, name: char) -> Option<String> {
    let mut chars = line.chars();
    if chars.next() != Some(name) || chars.next() != Some(' ') {
        return None;
    }
    Some(chars.as_str().trim().to_string())
}
