// SPDX-License-Identifier: PMPL-1.0-or-later

//! Language resolution: turns whatever the user typed into a table entry.
//!
//! Three tiers, first hit wins:
//!
//! 1. a two-letter input is looked up as a code;
//! 2. a longer input is searched for in language names (name order decides ties);
//! 3. a longer input that matched no name is translated to English by the
//!    endpoint and searched for again, so `"Deutsch"` or `"日本語"` still resolve.
//!
//! One-letter inputs are too ambiguous and never resolve.

use crate::client::Translator;
use crate::error::{Result, TranError};
use crate::lang::{self, Language};

pub struct Resolver<'a> {
    translator: &'a dyn Translator,
}

impl<'a> Resolver<'a> {
    pub fn new(translator: &'a dyn Translator) -> Self {
        Self { translator }
    }

    pub fn resolve(&self, input: &str) -> Result<Language> {
        let input = input.trim();
        match input.len() {
            2 => lang::lookup_code(input).ok_or_else(|| TranError::not_found(input)),
            n if n >= 3 => lang::lookup_name(input)
                .or_else(|| {
                    let english = self.to_english(input)?;
                    lang::lookup_name(&english)
                })
                .ok_or_else(|| TranError::not_found(input)),
            _ => Err(TranError::not_found(input)),
        }
    }

    /// Table entries whose code or name contains `fragment`, in name order.
    ///
    /// Falls back to the English rendering of `fragment` when nothing
    /// matches directly; an unmatched fragment gives an empty list.
    pub fn filter(&self, fragment: &str) -> Vec<Language> {
        let direct = lang::list_contains(fragment);
        if !direct.is_empty() {
            return direct;
        }
        match self.to_english(fragment.trim()) {
            Some(english) => lang::list_contains(&english),
            None => Vec::new(),
        }
    }

    fn to_english(&self, text: &str) -> Option<String> {
        match self.translator.translate(text, "", "en") {
            Ok(english) => {
                tracing::debug!(input = text, english = %english, "retrying lookup in English");
                Some(english)
            }
            Err(err) => {
                tracing::debug!(input = text, error = %err, "English fallback failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Dictionary-backed translator that records every call.
    #[derive(Default)]
    struct Dictionary {
        entries: HashMap<&'static str, &'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl Dictionary {
        fn with(entries: &[(&'static str, &'static str)]) -> Self {
            Self {
                entries: entries.iter().copied().collect(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }
    }

    impl Translator for Dictionary {
        fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
            assert_eq!(source, "");
            assert_eq!(target, "en");
            self.calls.borrow_mut().push(text.to_string());
            self.entries
                .get(text)
                .map(|s| s.to_string())
                .ok_or_else(|| TranError::remote("Exception: unknown word"))
        }
    }

    #[test]
    fn code_tier_needs_no_network() {
        let dict = Dictionary::default();
        let resolver = Resolver::new(&dict);
        let lang = resolver.resolve("De").unwrap();
        assert_eq!((lang.code, lang.name), ("de", "German"));
        assert!(dict.calls().is_empty());
    }

    #[test]
    fn unknown_code_does_not_fall_back() {
        let dict = Dictionary::default();
        let resolver = Resolver::new(&dict);
        assert!(matches!(resolver.resolve("zz"), Err(TranError::NotFound(_))));
        assert!(dict.calls().is_empty());
    }

    #[test]
    fn name_tier_matches_fragments() {
        let dict = Dictionary::default();
        let resolver = Resolver::new(&dict);
        let lang = resolver.resolve("frisia").unwrap();
        assert_eq!((lang.code, lang.name), ("fy", "Western Frisian"));
        assert!(dict.calls().is_empty());
    }

    #[test]
    fn english_fallback_resolves_foreign_names() {
        let dict = Dictionary::with(&[("Deutsch", "German"), ("日本語", "Japanese")]);
        let resolver = Resolver::new(&dict);
        assert_eq!(resolver.resolve("Deutsch").unwrap().code, "de");
        assert_eq!(resolver.resolve("日本語").unwrap().code, "ja");
        assert_eq!(dict.calls(), vec!["Deutsch", "日本語"]);
    }

    #[test]
    fn failed_fallback_is_not_found() {
        let dict = Dictionary::default();
        let resolver = Resolver::new(&dict);
        let err = resolver.resolve("klingon").unwrap_err();
        assert_eq!(err.to_string(), "\"klingon\" is not found");
        assert_eq!(dict.calls(), vec!["klingon"]);
    }

    #[test]
    fn single_character_never_resolves() {
        let dict = Dictionary::with(&[("x", "English")]);
        let resolver = Resolver::new(&dict);
        for input in ["x", "e", " ", ""] {
            assert!(resolver.resolve(input).is_err(), "{input:?} resolved");
        }
        assert!(dict.calls().is_empty());
    }

    #[test]
    fn filter_empty_is_whole_table() {
        let dict = Dictionary::default();
        let resolver = Resolver::new(&dict);
        assert_eq!(resolver.filter(""), lang::all().to_vec());
        assert!(dict.calls().is_empty());
    }

    #[test]
    fn filter_falls_back_to_english() {
        let dict = Dictionary::with(&[("Français", "French")]);
        let resolver = Resolver::new(&dict);
        let found = resolver.filter("Français");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "fr");
        assert!(resolver.filter("zzzz").is_empty());
    }
}
