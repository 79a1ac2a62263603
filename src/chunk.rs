// SPDX-License-Identifier: PMPL-1.0-or-later

//! Splits long input into pieces the endpoint will accept in one request.

/// Groups the lines of `text` into chunks of at most `limit` characters.
///
/// Lines are never split: a line longer than `limit` becomes a chunk of its
/// own. Every line in the output ends with `'\n'`, and `\r\n` endings are
/// normalised to `'\n'`.
pub fn chunks(text: &str, limit: usize) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0;

    for line in text.lines() {
        let line_chars = line.chars().count() + 1;
        if !current.is_empty() && current_chars + line_chars > limit {
            out.push(std::mem::take(&mut current));
            current_chars = 0;
        }
        current.push_str(line);
        current.push('\n');
        current_chars += line_chars;
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}
