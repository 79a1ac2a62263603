// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language table.
//!
//! The table is kept in ascending name order. That order is what users see
//! in listings, and it decides which entry wins when a partial name matches
//! more than one language (`"nor"` finds "North Ndebele" before "Norwegian").
//!
//! Reference: <https://www.loc.gov/standards/iso639-2/php/code_list.php>

use std::fmt;

/// One ISO 639-1 language: two-letter code and English name.
///
/// [`Language::AUTO`] is the only value with an empty code; it stands for
/// "let the endpoint detect the source language".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

impl Language {
    pub const AUTO: Language = Language::new("", "Auto");

    const fn new(code: &'static str, name: &'static str) -> Self {
        Self { code, name }
    }

    pub fn is_auto(&self) -> bool {
        self.code.is_empty()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_auto() {
            f.write_str(self.name)
        } else {
            write!(f, "{} ({})", self.name, self.code)
        }
    }
}

static LANGUAGES: &[Language] = &[
    Language::new("ab", "Abkhazian"),
    Language::new("aa", "Afar"),
    Language::new("af", "Afrikaans"),
    Language::new("ak", "Akan"),
    Language::new("sq", "Albanian"),
    Language::new("am", "Amharic"),
    Language::new("ar", "Arabic"),
    Language::new("an", "Aragonese"),
    Language::new("hy", "Armenian"),
    Language::new("as", "Assamese"),
    Language::new("av", "Avaric"),
    Language::new("ae", "Avestan"),
    Language::new("ay", "Aymara"),
    Language::new("az", "Azerbaijani"),
    Language::new("bm", "Bambara"),
    Language::new("ba", "Bashkir"),
    Language::new("eu", "Basque"),
    Language::new("be", "Belarusian"),
    Language::new("bn", "Bengali"),
    Language::new("bh", "Bihari languages"),
    Language::new("bi", "Bislama"),
    Language::new("bs", "Bosnian"),
    Language::new("br", "Breton"),
    Language::new("bg", "Bulgarian"),
    Language::new("my", "Burmese"),
    Language::new("ca", "Catalan"),
    Language::new("km", "Central Khmer"),
    Language::new("ch", "Chamorro"),
    Language::new("ce", "Chechen"),
    Language::new("ny", "Chichewa"),
    Language::new("zh", "Chinese"),
    Language::new("cu", "Church Slavic"),
    Language::new("cv", "Chuvash"),
    Language::new("kw", "Cornish"),
    Language::new("co", "Corsican"),
    Language::new("cr", "Cree"),
    Language::new("hr", "Croatian"),
    Language::new("cs", "Czech"),
    Language::new("da", "Danish"),
    Language::new("dv", "Divehi"),
    Language::new("nl", "Dutch"),
    Language::new("dz", "Dzongkha"),
    Language::new("en", "English"),
    Language::new("eo", "Esperanto"),
    Language::new("et", "Estonian"),
    Language::new("ee", "Ewe"),
    Language::new("fo", "Faroese"),
    Language::new("fj", "Fijian"),
    Language::new("fi", "Finnish"),
    Language::new("fr", "French"),
    Language::new("ff", "Fulah"),
    Language::new("gd", "Gaelic"),
    Language::new("gl", "Galician"),
    Language::new("lg", "Ganda"),
    Language::new("ka", "Georgian"),
    Language::new("de", "German"),
    Language::new("el", "Greek"),
    Language::new("gn", "Guarani"),
    Language::new("gu", "Gujarati"),
    Language::new("ht", "Haitian"),
    Language::new("ha", "Hausa"),
    Language::new("he", "Hebrew"),
    Language::new("hz", "Herero"),
    Language::new("hi", "Hindi"),
    Language::new("ho", "Hiri Motu"),
    Language::new("hu", "Hungarian"),
    Language::new("is", "Icelandic"),
    Language::new("io", "Ido"),
    Language::new("ig", "Igbo"),
    Language::new("id", "Indonesian"),
    Language::new("ia", "Interlingua"),
    Language::new("ie", "Interlingue"),
    Language::new("iu", "Inuktitut"),
    Language::new("ik", "Inupiaq"),
    Language::new("ga", "Irish"),
    Language::new("it", "Italian"),
    Language::new("ja", "Japanese"),
    Language::new("jv", "Javanese"),
    Language::new("kl", "Kalaallisut"),
    Language::new("kn", "Kannada"),
    Language::new("kr", "Kanuri"),
    Language::new("ks", "Kashmiri"),
    Language::new("kk", "Kazakh"),
    Language::new("ki", "Kikuyu"),
    Language::new("rw", "Kinyarwanda"),
    Language::new("ky", "Kirghiz"),
    Language::new("kv", "Komi"),
    Language::new("kg", "Kongo"),
    Language::new("ko", "Korean"),
    Language::new("kj", "Kuanyama"),
    Language::new("ku", "Kurdish"),
    Language::new("lo", "Lao"),
    Language::new("la", "Latin"),
    Language::new("lv", "Latvian"),
    Language::new("li", "Limburgan"),
    Language::new("ln", "Lingala"),
    Language::new("lt", "Lithuanian"),
    Language::new("lu", "Luba-Katanga"),
    Language::new("lb", "Luxembourgish"),
    Language::new("mk", "Macedonian"),
    Language::new("mg", "Malagasy"),
    Language::new("ms", "Malay"),
    Language::new("ml", "Malayalam"),
    Language::new("mt", "Maltese"),
    Language::new("gv", "Manx"),
    Language::new("mi", "Maori"),
    Language::new("mr", "Marathi"),
    Language::new("mh", "Marshallese"),
    Language::new("mn", "Mongolian"),
    Language::new("na", "Nauru"),
    Language::new("nv", "Navajo"),
    Language::new("ng", "Ndonga"),
    Language::new("ne", "Nepali"),
    Language::new("nd", "North Ndebele"),
    Language::new("se", "Northern Sami"),
    Language::new("no", "Norwegian"),
    Language::new("nb", "Norwegian Bokmål"),
    Language::new("nn", "Norwegian Nynorsk"),
    Language::new("oc", "Occitan"),
    Language::new("oj", "Ojibwa"),
    Language::new("or", "Oriya"),
    Language::new("om", "Oromo"),
    Language::new("os", "Ossetian"),
    Language::new("pi", "Pali"),
    Language::new("ps", "Pashto"),
    Language::new("fa", "Persian"),
    Language::new("pl", "Polish"),
    Language::new("pt", "Portuguese"),
    Language::new("pa", "Punjabi"),
    Language::new("qu", "Quechua"),
    Language::new("ro", "Romanian"),
    Language::new("rm", "Romansh"),
    Language::new("rn", "Rundi"),
    Language::new("ru", "Russian"),
    Language::new("sm", "Samoan"),
    Language::new("sg", "Sango"),
    Language::new("sa", "Sanskrit"),
    Language::new("sc", "Sardinian"),
    Language::new("sr", "Serbian"),
    Language::new("sn", "Shona"),
    Language::new("ii", "Sichuan Yi"),
    Language::new("sd", "Sindhi"),
    Language::new("si", "Sinhala"),
    Language::new("sk", "Slovak"),
    Language::new("sl", "Slovenian"),
    Language::new("so", "Somali"),
    Language::new("nr", "South Ndebele"),
    Language::new("st", "Southern Sotho"),
    Language::new("es", "Spanish"),
    Language::new("su", "Sundanese"),
    Language::new("sw", "Swahili"),
    Language::new("ss", "Swati"),
    Language::new("sv", "Swedish"),
    Language::new("tl", "Tagalog"),
    Language::new("ty", "Tahitian"),
    Language::new("tg", "Tajik"),
    Language::new("ta", "Tamil"),
    Language::new("tt", "Tatar"),
    Language::new("te", "Telugu"),
    Language::new("th", "Thai"),
    Language::new("bo", "Tibetan"),
    Language::new("ti", "Tigrinya"),
    Language::new("to", "Tonga"),
    Language::new("ts", "Tsonga"),
    Language::new("tn", "Tswana"),
    Language::new("tr", "Turkish"),
    Language::new("tk", "Turkmen"),
    Language::new("tw", "Twi"),
    Language::new("ug", "Uighur"),
    Language::new("uk", "Ukrainian"),
    Language::new("ur", "Urdu"),
    Language::new("uz", "Uzbek"),
    Language::new("ve", "Venda"),
    Language::new("vi", "Vietnamese"),
    Language::new("vo", "Volapük"),
    Language::new("wa", "Walloon"),
    Language::new("cy", "Welsh"),
    Language::new("fy", "Western Frisian"),
    Language::new("wo", "Wolof"),
    Language::new("xh", "Xhosa"),
    Language::new("yi", "Yiddish"),
    Language::new("yo", "Yoruba"),
    Language::new("za", "Zhuang"),
    Language::new("zu", "Zulu"),
];

/// Every language, in name order.
pub fn all() -> &'static [Language] {
    LANGUAGES
}

/// Looks up a two-letter code, ignoring case and surrounding whitespace.
///
/// # Examples
/// ```
/// let ja = tran::lang::lookup_code("JA").unwrap();
/// assert_eq!(ja.name, "Japanese");
/// assert!(tran::lang::lookup_code("xx").is_none());
/// ```
pub fn lookup_code(code: &str) -> Option<Language> {
    let code = code.trim();
    LANGUAGES
        .iter()
        .find(|lang| lang.code.eq_ignore_ascii_case(code))
        .copied()
}

/// First language, in name order, whose name contains `fragment`
/// (case-insensitive).
pub fn lookup_name(fragment: &str) -> Option<Language> {
    let needle = fragment.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    LANGUAGES
        .iter()
        .find(|lang| lang.name.to_lowercase().contains(&needle))
        .copied()
}

/// All languages whose code or name contains `fragment` (case-insensitive).
/// An empty fragment selects the whole table.
pub fn list_contains(fragment: &str) -> Vec<Language> {
    let needle = fragment.trim().to_lowercase();
    if needle.is_empty() {
        return LANGUAGES.to_vec();
    }
    LANGUAGES
        .iter()
        .filter(|lang| lang.code.contains(&needle) || lang.name.to_lowercase().contains(&needle))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_is_sorted_by_name() {
        for pair in LANGUAGES.windows(2) {
            assert!(
                pair[0].name < pair[1].name,
                "{} should sort before {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn codes_are_unique_lowercase_pairs() {
        let mut seen = HashSet::new();
        for lang in LANGUAGES {
            assert_eq!(lang.code.len(), 2, "bad code {:?}", lang.code);
            assert_eq!(lang.code, lang.code.to_ascii_lowercase());
            assert!(seen.insert(lang.code), "duplicate code {}", lang.code);
        }
        assert_eq!(LANGUAGES.len(), 184);
    }

    #[test]
    fn code_lookup_ignores_case() {
        assert_eq!(lookup_code("en").map(|l| l.name), Some("English"));
        assert_eq!(lookup_code("De").map(|l| l.name), Some("German"));
        assert_eq!(lookup_code(" fy ").map(|l| l.name), Some("Western Frisian"));
        assert!(lookup_code("zz").is_none());
        assert!(lookup_code("").is_none());
    }

    #[test]
    fn name_lookup_takes_first_in_name_order() {
        assert_eq!(lookup_name("frisia").map(|l| l.code), Some("fy"));
        assert_eq!(lookup_name("NORWEGIAN").map(|l| l.code), Some("no"));
        assert_eq!(lookup_name("nor").map(|l| l.code), Some("nd"));
        assert_eq!(lookup_name("volapük").map(|l| l.code), Some("vo"));
        assert!(lookup_name("klingon").is_none());
        assert!(lookup_name("   ").is_none());
    }

    #[test]
    fn list_contains_matches_code_or_name() {
        let all = list_contains("");
        assert_eq!(all.len(), LANGUAGES.len());

        let en = list_contains("en");
        assert!(en.iter().any(|l| l.code == "en"));
        assert!(en.iter().any(|l| l.name == "Armenian"));
        assert!(en.iter().any(|l| l.name == "Slovenian"));

        assert!(list_contains("qqq").is_empty());
    }

    #[test]
    fn display_includes_code() {
        let ja = lookup_code("ja").unwrap();
        assert_eq!(ja.to_string(), "Japanese (ja)");
        assert_eq!(Language::AUTO.to_string(), "Auto");
    }
}
