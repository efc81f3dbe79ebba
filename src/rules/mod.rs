//! Rule store for language support dependencies.
//!
//! The rules file lists records as `category:langcode:trigger:dependency`,
//! but lookups always start from the trigger package, so the index is keyed
//! `trigger -> langcode -> category -> [dependency]`.
//!
//! An empty trigger applies whether or not any package is installed. An empty
//! lang code applies to every locale, and its dependencies are name patterns
//! (see [`crate::pattern`]) rather than literal package names.

mod error;
mod parse;

use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::runtime::Runtime;

pub use error::RulesError;
pub use parse::{Rule, parse_line};

/// Category -> ordered dependency specs.
pub type Categories = BTreeMap<String, Vec<String>>;

/// Reserved trigger / lang code meaning "applies regardless".
pub const WILDCARD: &str = "";

/// Immutable index of dependency rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RulesIndex {
    triggers: BTreeMap<String, BTreeMap<String, Categories>>,
    records: usize,
}

impl RulesIndex {
    /// Parse rules from a line reader.
    pub fn parse<B: BufRead>(reader: B) -> Result<Self, RulesError> {
        let mut index = RulesIndex::default();
        for (n, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(rule) = parse_line(&line, n + 1)? {
                index.insert(rule);
            }
        }
        debug!(
            "Parsed {} rule(s) for {} trigger(s)",
            index.records,
            index.triggers.len()
        );
        Ok(index)
    }

    /// Load and parse a rules file.
    #[tracing::instrument(skip(runtime))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self, RulesError> {
        let content = runtime
            .read_to_string(path)
            .map_err(|e| RulesError::Read {
                path: path.to_path_buf(),
                reason: format!("{:#}", e),
            })?;
        content.parse()
    }

    fn insert(&mut self, rule: Rule) {
        self.triggers
            .entry(rule.trigger)
            .or_default()
            .entry(rule.lang_code)
            .or_default()
            .entry(rule.category)
            .or_default()
            .push(rule.dependency);
        self.records += 1;
    }

    /// All trigger packages, including the wildcard trigger if present.
    pub fn triggers(&self) -> impl Iterator<Item = &str> {
        self.triggers.keys().map(String::as_str)
    }

    /// Lang codes that have rules for `trigger`.
    pub fn lang_codes(&self, trigger: &str) -> impl Iterator<Item = &str> {
        self.triggers
            .get(trigger)
            .into_iter()
            .flat_map(|langs| langs.keys().map(String::as_str))
    }

    /// Categories for `(trigger, lang_code)`; `None` when nothing matches.
    pub fn categories(&self, trigger: &str, lang_code: &str) -> Option<&Categories> {
        self.triggers.get(trigger)?.get(lang_code)
    }

    /// Dependency specs for an exact key, in file order.
    pub fn dependencies(&self, trigger: &str, lang_code: &str, category: &str) -> &[String] {
        self.categories(trigger, lang_code)
            .and_then(|categories| categories.get(category))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every dependency spec for `(trigger, lang_code)` across all categories.
    pub fn specs(&self, trigger: &str, lang_code: &str) -> impl Iterator<Item = &str> {
        self.categories(trigger, lang_code)
            .into_iter()
            .flat_map(|categories| categories.values().flatten().map(String::as_str))
    }

    /// Number of records parsed.
    pub fn len(&self) -> usize {
        self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}

impl FromStr for RulesIndex {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.as_bytes())
    }
}
