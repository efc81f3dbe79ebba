//! Line parser for the rules file.
//!
//! Format: one record per line, `category:langcode:trigger:dependency`.
//! Lines starting with `#` and blank lines are skipped. Leading whitespace of
//! every field is trimmed.

use super::RulesError;

/// One record of the rules file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub category: String,
    pub lang_code: String,
    pub trigger: String,
    pub dependency: String,
}

/// Parse a single line.
///
/// Returns `Ok(None)` for comments and blank lines. `line_no` is 1-based and
/// only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Rule>, RulesError> {
    if line.starts_with('#') || line.trim().is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(':').map(str::trim_start).collect();
    let [category, lang_code, trigger, dependency] = fields.as_slice() else {
        return Err(RulesError::FieldCount {
            line: line_no,
            found: fields.len(),
        });
    };

    Ok(Some(Rule {
        category: category.to_string(),
        lang_code: lang_code.to_string(),
        trigger: trigger.to_string(),
        dependency: dependency.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_record() {
        let rule = parse_line("spell:zh-hans:libreoffice:hunspell-zh-cn", 1)
            .unwrap()
            .unwrap();
        assert_eq!(rule.category, "spell");
        assert_eq!(rule.lang_code, "zh-hans");
        assert_eq!(rule.trigger, "libreoffice");
        assert_eq!(rule.dependency, "hunspell-zh-cn");
    }

    #[test]
    fn test_parse_line_empty_fields() {
        let rule = parse_line("im:::fcitx-", 1).unwrap().unwrap();
        assert_eq!(rule.category, "im");
        assert!(rule.lang_code.is_empty());
        assert!(rule.trigger.is_empty());
        assert_eq!(rule.dependency, "fcitx-");
    }

    #[test]
    fn test_parse_line_trims_leading_whitespace() {
        let rule = parse_line("spell: de:  libreoffice:\thunspell-de", 1)
            .unwrap()
            .unwrap();
        assert_eq!(rule.lang_code, "de");
        assert_eq!(rule.trigger, "libreoffice");
        assert_eq!(rule.dependency, "hunspell-de");
    }

    #[test]
    fn test_parse_line_skips_comments_and_blanks() {
        assert!(parse_line("# category:langcode:trigger:dependency", 1).unwrap().is_none());
        assert!(parse_line("#", 1).unwrap().is_none());
        assert!(parse_line("", 1).unwrap().is_none());
        assert!(parse_line("   ", 1).unwrap().is_none());
    }

    #[test]
    fn test_parse_line_wrong_field_count() {
        let err = parse_line("spell:de:libreoffice", 7).unwrap_err();
        assert!(matches!(err, RulesError::FieldCount { line: 7, found: 3 }));

        let err = parse_line("a:b:c:d:e", 2).unwrap_err();
        assert!(matches!(err, RulesError::FieldCount { line: 2, found: 5 }));
    }
}
