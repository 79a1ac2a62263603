// SPDX-License-Identifier: PMPL-1.0-or-later

//! Display colors for the interactive shell.

use colored::{ColoredString, Colorize};
use std::fmt;
use std::str::FromStr;

pub const INFO: &str = "#80a0d0";
pub const STATE: &str = "#60c060";
pub const ERROR: &str = "#d04040";
pub const RESULT: &str = "#ffc864";

/// A 24-bit color written as `#rrggbb` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn paint(&self, text: &str) -> ColoredString {
        text.truecolor(self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("invalid: {s:?}, want: #rrggbb");
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The four roles text can play in the shell transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Help and language tables
    pub info: Rgb,
    /// Source/target changes
    pub state: Rgb,
    pub error: Rgb,
    /// Translations
    pub result: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            info: Rgb::new(0x80, 0xa0, 0xd0),
            state: Rgb::new(0x60, 0xc0, 0x60),
            error: Rgb::new(0xd0, 0x40, 0x40),
            result: Rgb::new(0xff, 0xc8, 0x64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors() {
        assert_eq!("#ffeedd".parse::<Rgb>(), Ok(Rgb::new(0xff, 0xee, 0xdd)));
        assert_eq!("#AABBCC".parse::<Rgb>(), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
        assert_eq!("#000000".parse::<Rgb>(), Ok(Rgb::new(0, 0, 0)));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["", "#Z", "ffeedd", "#ffeed", "#ffeeddc", "#gg0000", "#+1+1+1", "#ééé"] {
            assert!(bad.parse::<Rgb>().is_err(), "{bad:?} parsed");
        }
    }

    #[test]
    fn default_palette_matches_default_strings() {
        let palette = Palette::default();
        assert_eq!(palette.info.to_string(), INFO);
        assert_eq!(palette.state.to_string(), STATE);
        assert_eq!(palette.error.to_string(), ERROR);
        assert_eq!(palette.result.to_string(), RESULT);
    }
}
