// SPDX-License-Identifier: PMPL-1.0-or-later

//! Config loading: defaults, self-healing files, and overrides

use std::fs;
use tempfile::TempDir;
use tran::config::{self, paths, Config, ConfigFile, Overrides, Palette};
use tran::{lang, Result, TranError, Translator};

/// Knows a couple of foreign language names.
struct Glossary;

impl Translator for Glossary {
    fn translate(&self, text: &str, _source: &str, target: &str) -> Result<String> {
        assert_eq!(target, "en");
        match text {
            "Deutsch" => Ok("German".into()),
            "español" => Ok("Spanish".into()),
            _ => Err(TranError::remote("Exception: unknown")),
        }
    }
}

#[test]
fn fresh_file_equals_defaults_and_reloads_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let initial = ConfigFile::initial();

    let first = ConfigFile::load_from(&path, &initial).unwrap();
    assert_eq!(first, initial);
    let first = Config::from_file(&first, path.clone()).unwrap();
    assert!(first.source.is_auto());
    assert_eq!(first.target, lang::current_lang());
    assert_eq!(first.endpoint, tran::client::DEFAULT_ENDPOINT);
    assert_eq!(first.limit_n_chars, config::file::DEFAULT_LIMIT_N_CHARS);
    assert_eq!(first.palette, Palette::default());

    let second = ConfigFile::load_from(&path, &initial).unwrap();
    let second = Config::from_file(&second, path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn partial_file_is_healed_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[default]\nsource = \"\"\ntarget = \"fr\"\n\n[colors]\ninfo = \"\"\n",
    )
    .unwrap();

    let merged = ConfigFile::load_from(&path, &ConfigFile::initial()).unwrap();
    assert_eq!(merged.default.target, "fr");
    assert_eq!(merged.colors.info, config::color::INFO);
    assert_eq!(merged.api.limit_n_chars, config::file::DEFAULT_LIMIT_N_CHARS);

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("limit_n_chars = 4000"), "{written}");
    assert!(written.contains("[colors]"), "{written}");

    let again = ConfigFile::load_from(&path, &ConfigFile::initial()).unwrap();
    assert_eq!(again, merged);
}

#[test]
fn overrides_accept_codes_and_names() {
    let mut file = ConfigFile::initial();
    let overrides = Overrides {
        source: Some("Deutsch".into()),
        target: Some("frisian".into()),
    };
    config::apply_overrides(&mut file, &overrides, &Glossary).unwrap();
    assert_eq!(file.default.source, "de");
    assert_eq!(file.default.target, "fy");

    let overrides = Overrides {
        source: None,
        target: Some("ES".into()),
    };
    config::apply_overrides(&mut file, &overrides, &Glossary).unwrap();
    assert_eq!(file.default.source, "de");
    assert_eq!(file.default.target, "es");
}

#[test]
fn invalid_override_is_a_hard_error() {
    let mut file = ConfigFile::initial();
    let before = file.clone();
    let overrides = Overrides {
        source: None,
        target: Some("zz".into()),
    };
    let err = config::apply_overrides(&mut file, &overrides, &Glossary).unwrap_err();
    assert!(matches!(err, TranError::InvalidConfig(_)));
    assert!(err.to_string().contains("-t \"zz\""), "{err}");
    assert_eq!(file, before);
}

#[test]
fn blank_override_keeps_file_value() {
    let mut file = ConfigFile::initial();
    file.default.target = "ja".into();
    let overrides = Overrides {
        source: Some("  ".into()),
        target: Some(String::new()),
    };
    config::apply_overrides(&mut file, &overrides, &Glossary).unwrap();
    assert_eq!(file.default.source, "");
    assert_eq!(file.default.target, "ja");
}

#[test]
fn load_honours_config_env_and_saves_languages() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("tran.toml");
    std::env::set_var(paths::CONFIG_ENV, &path);

    let config = Config::load(&Overrides::default()).unwrap();
    assert_eq!(config.path, path);
    assert!(path.exists());

    let german = lang::lookup_code("de").unwrap();
    let korean = lang::lookup_code("ko").unwrap();
    config.save_languages(german, korean).unwrap();

    let reloaded = Config::load(&Overrides::default()).unwrap();
    std::env::remove_var(paths::CONFIG_ENV);

    assert_eq!(reloaded.source, german);
    assert_eq!(reloaded.target, korean);
    assert_eq!(reloaded.palette, config.palette);
}
