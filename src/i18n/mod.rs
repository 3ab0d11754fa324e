// src/i18n/mod.rs
//! Static display strings for the docs site.
//!
//! Tables live in `src/i18n/langs/*.json` and are compiled into the binary.
//! Lookups never fail: an unknown language code resolves to the English table.
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const DEFAULT_LANGUAGE: &str = "en";

pub const KEY_NOT_FOUND_TITLE: &str = "404_Docs_Not_Found";
pub const KEY_NOT_FOUND_MESSAGE: &str = "404_Docs_Not_Found_Contant";
pub const KEY_GO_HOME: &str = "404_Go_Home";
pub const KEY_RETURN_HOME: &str = "Content_Return_Home";

/// Display order of the language selector.
const LANGUAGE_ORDER: &[&str] = &["en", "zh-CN", "zh-TW", "ja"];

#[derive(RustEmbed)]
#[folder = "src/i18n/langs/"]
struct Langs;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    strings: BTreeMap<String, String>,
}

impl Translations {
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.strings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct LanguageFile {
    code: String,
    name: String,
    strings: Translations,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageInfo {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
struct Language {
    code: String,
    name: String,
    strings: Translations,
}

static LANGUAGES: LazyLock<Vec<Language>> = LazyLock::new(load_languages);

static EMPTY: LazyLock<Translations> = LazyLock::new(|| Translations {
    strings: BTreeMap::new(),
});

fn load_languages() -> Vec<Language> {
    LANGUAGE_ORDER
        .iter()
        .filter_map(|code| {
            let filename = format!("{}.json", code);
            let Some(file) = Langs::get(&filename) else {
                log::error!("Missing language table: {}", filename);
                return None;
            };
            match serde_json::from_slice::<LanguageFile>(file.data.as_ref()) {
                Ok(parsed) => Some(Language {
                    code: parsed.code,
                    name: parsed.name,
                    strings: parsed.strings,
                }),
                Err(e) => {
                    log::error!("Invalid language table {}: {}", filename, e);
                    None
                }
            }
        })
        .collect()
}

fn find(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Returns the table for `code`, or the English table when the code is unknown.
pub fn set_translations(code: &str) -> &'static Translations {
    find(code)
        .or_else(|| find(DEFAULT_LANGUAGE))
        .map(|lang| &lang.strings)
        .unwrap_or(&*EMPTY)
}

pub fn get_available_languages() -> Vec<LanguageInfo> {
    LANGUAGES
        .iter()
        .map(|lang| LanguageInfo {
            code: lang.code.as_str(),
            name: lang.name.as_str(),
        })
        .collect()
}

/// Every table in selector order as a JSON array of `{code, name, strings}`,
/// the shape the client-side `i18n.js` expects.
pub fn languages_json() -> String {
    serde_json::to_string(&*LANGUAGES).unwrap_or_else(|e| {
        log::error!("Failed to serialise language tables: {}", e);
        "[]".to_string()
    })
}

/// Maps a browser language tag (e.g. `navigator.language`) to a supported code.
///
/// Matches exactly or by `<code>-` prefix, case-insensitively. Any `ja`/`jp`
/// prefix maps to Japanese; everything else falls back to English.
pub fn get_browser_language(tag: Option<&str>) -> &'static str {
    tag.and_then(match_language).unwrap_or(DEFAULT_LANGUAGE)
}

fn match_language(tag: &str) -> Option<&'static str> {
    let lang_code = tag.trim().to_lowercase();
    if lang_code.is_empty() {
        return None;
    }

    let matched = LANGUAGES.iter().find(|lang| {
        let code = lang.code.to_lowercase();
        lang_code == code || lang_code.starts_with(&format!("{}-", code))
    });
    if let Some(lang) = matched {
        return Some(lang.code.as_str());
    }

    if lang_code.starts_with("ja") || lang_code.starts_with("jp") {
        return Some("ja");
    }

    None
}

/// Picks the best supported language from an `Accept-Language` header.
pub fn language_from_accept_header(header: Option<&str>) -> &'static str {
    let Some(header) = header else {
        return DEFAULT_LANGUAGE;
    };

    let mut candidates: Vec<(f32, &str)> = header
        .split(',')
        .filter_map(|part| {
            let mut pieces = part.trim().split(';');
            let tag = pieces.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }
            let quality = pieces
                .find_map(|p| p.trim().strip_prefix("q="))
                .and_then(|q| q.parse::<f32>().ok())
                .unwrap_or(1.0);
            Some((quality, tag))
        })
        .collect();
    // Stable sort keeps header order among equal weights.
    candidates.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .filter(|(q, _)| *q > 0.0)
        .find_map(|(_, tag)| match_language(tag))
        .unwrap_or(DEFAULT_LANGUAGE)
}
