//! Locale decomposition and rules-file language code normalization.
//!
//! A POSIX locale has the shape `language[_territory][.codeset][@modifier]`.
//! Two different views are derived from it:
//!
//! - [`LocaleComponents`] - the lower-cased pieces, used to expand package name
//!   patterns (`hunspell-` + `pt` + `br`, ...).
//! - [`lang_code`] - the key used to look up rules in the rules file. This is
//!   not the plain language: Chinese locales map to a script bucket
//!   (`zh-hans` / `zh-hant`).

/// Lang code for Simplified Chinese locales (`zh_CN`, `zh_SG`).
pub const ZH_HANS: &str = "zh-hans";
/// Lang code for every other Chinese locale.
pub const ZH_HANT: &str = "zh-hant";

/// The lower-cased components of a locale string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleComponents {
    pub language: String,
    pub territory: String,
    pub codeset: String,
    pub modifier: String,
}

impl LocaleComponents {
    /// Whether this locale uses Simplified Chinese script.
    pub fn is_simplified_chinese(&self) -> bool {
        self.language == "zh" && matches!(self.territory.as_str(), "cn" | "sg")
    }
}

/// Split a locale into its components.
///
/// Never fails. Missing pieces are empty; a string without any separator is
/// taken as the language.
///
/// ```
/// use langsupport::locale::decompose;
///
/// let c = decompose("zh_CN.UTF-8@variant");
/// assert_eq!(c.language, "zh");
/// assert_eq!(c.territory, "cn");
/// assert_eq!(c.codeset, "utf-8");
/// assert_eq!(c.modifier, "variant");
/// ```
pub fn decompose(locale: &str) -> LocaleComponents {
    let (rest, modifier) = match locale.split_once('@') {
        Some((rest, modifier)) => (rest, modifier),
        None => (locale, ""),
    };
    let (rest, codeset) = match rest.split_once('.') {
        Some((rest, codeset)) => (rest, codeset),
        None => (rest, ""),
    };
    let (language, territory) = match rest.split_once('_') {
        Some((language, territory)) => (language, territory),
        None => (rest, ""),
    };

    LocaleComponents {
        language: language.to_lowercase(),
        territory: territory.to_lowercase(),
        codeset: codeset.to_lowercase(),
        modifier: modifier.to_lowercase(),
    }
}

/// Normalize a raw locale into the lang code used as a rules-file key.
///
/// Matching is case sensitive on the raw string, so `zh_CN.UTF-8` is
/// Simplified but `zh_cn` falls through to Traditional.
pub fn lang_code(locale: &str) -> &str {
    if locale.starts_with("zh_CN") || locale.starts_with("zh_SG") {
        return ZH_HANS;
    }
    if locale.starts_with("zh_") {
        return ZH_HANT;
    }
    match locale.split_once('_') {
        Some((language, _)) => language,
        None => locale,
    }
}
