// SPDX-License-Identifier: PMPL-1.0-or-later

//! Host locale detection, used for the default target language.

use super::iso639::{self, Language};

const FALLBACK: &str = "en";

/// Language of the current user: `LANG` first, then the OS locale, then English.
pub fn current_lang() -> Language {
    let detected = std::env::var("LANG")
        .ok()
        .filter(|value| !value.is_empty())
        .or_else(sys_locale::get_locale);

    let lang = detected.as_deref().and_then(language_from_locale);
    tracing::debug!(locale = ?detected, resolved = ?lang.map(|l| l.code), "detected host locale");

    lang.or_else(|| iso639::lookup_code(FALLBACK))
        .unwrap_or(Language::AUTO)
}

/// Maps a POSIX or BCP 47 locale (`ja_JP.UTF-8`, `de-AT`) to its language.
pub fn language_from_locale(locale: &str) -> Option<Language> {
    let prefix = locale.trim().get(..2)?;
    iso639::lookup_code(prefix)
}
