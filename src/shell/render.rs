// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text tables for the shell and for `tran -l`.

use crate::lang::Language;

const NAME_WIDTH: usize = 20;

pub fn help() -> String {
    "\
┌─────┬──────────────────────┬────────────────────┐
│ Cmd │ Description          │ Examples           │
├─────┼──────────────────────┼──────┬─────────────┤
│ h   │ Show help            │ h    │             │
│ l   │ Show language codes  │ l en │ l nor       │
│ s   │ Source language      │ s en │ s french    │
│ t   │ Target language      │ t ja │ t italian   │
│ w   │ Save as defaults     │ w    │             │
│ q   │ Quit                 │ q    │             │
└─────┴──────────────────────┴──────┴─────────────┘"
        .to_string()
}

/// Boxed code/name table for the interactive shell.
pub fn language_table(langs: &[Language]) -> String {
    let rule = "─".repeat(NAME_WIDTH + 2);
    let mut out = String::new();
    out.push_str(&format!("┌──────┬{rule}┐\n"));
    out.push_str(&format!("│ Code │ {:<NAME_WIDTH$} │\n", "Language name"));
    out.push_str(&format!("├──────┼{rule}┤\n"));
    for lang in langs {
        out.push_str(&format!("│  {}  │ {:<NAME_WIDTH$} │\n", lang.code, lang.name));
    }
    out.push_str(&format!("└──────┴{rule}┘"));
    out
}

/// Plain listing for piping, as printed by `tran -l`.
pub fn language_list(langs: &[Language]) -> String {
    let mut out = String::from("Code Language name\n---- -------------\n");
    for lang in langs {
        out.push_str(&format!(" {}  {}\n", lang.code, lang.name));
    }
    out
}
