//! Expansion of package name patterns for a locale.
//!
//! A rule with an empty lang code carries a name prefix such as `hunspell-`
//! instead of a package name. The prefix is combined with the locale's
//! language, territory and modifier to produce the names a distribution is
//! likely to use for that locale's language pack.

use crate::locale::{self, ZH_HANS, ZH_HANT};

/// Expand `pattern` into candidate package names for `locale`.
///
/// For `hunspell-` and `pt_BR` this yields `hunspell-`, `hunspell-pt`,
/// `hunspell-ptbr` and `hunspell-pt-br`. Chinese locales additionally get the
/// script-specific name (`hunspell-zh-hans` / `hunspell-zh-hant`).
///
/// The result may contain duplicates; callers collect into a set.
pub fn expand(pattern: &str, locale: &str) -> Vec<String> {
    let components = locale::decompose(locale);
    let lang = components.language.as_str();
    let territory = components.territory.as_str();
    let variant = components.modifier.as_str();

    let mut names = vec![pattern.to_string(), format!("{pattern}{lang}")];

    if !territory.is_empty() {
        names.push(format!("{pattern}{lang}{territory}"));
        names.push(format!("{pattern}{lang}-{territory}"));
    }

    if !variant.is_empty() {
        names.push(format!("{pattern}{lang}-{variant}"));
    }

    if !territory.is_empty() && !variant.is_empty() {
        names.push(format!("{pattern}{lang}-{territory}-{variant}"));
    }

    if lang == "zh" {
        let script = if components.is_simplified_chinese() {
            ZH_HANS
        } else {
            ZH_HANT
        };
        names.push(format!("{pattern}{script}"));
    }

    names
}
