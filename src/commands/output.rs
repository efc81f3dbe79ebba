use anyhow::Result;
use std::io::Write;

use crate::{resolver::PackageSet, rules::RulesIndex};

/// Print packages one per line, or as a JSON array.
pub fn write_packages<W: Write>(out: &mut W, packages: &PackageSet, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, packages)?;
        writeln!(out)?;
        return Ok(());
    }
    for pkg in packages {
        writeln!(out, "{}", pkg)?;
    }
    Ok(())
}

/// Print the rules grouped by trigger, lang code and category.
pub fn write_rules<W: Write>(out: &mut W, rules: &RulesIndex) -> Result<()> {
    if rules.is_empty() {
        writeln!(out, "No rules defined.")?;
        return Ok(());
    }

    for trigger in rules.triggers() {
        writeln!(out, "{}", display_key(trigger))?;
        for lang_code in rules.lang_codes(trigger) {
            let Some(categories) = rules.categories(trigger, lang_code) else {
                continue;
            };
            for (category, deps) in categories {
                writeln!(
                    out,
                    "  {} {}: {}",
                    display_key(lang_code),
                    category,
                    deps.join(" ")
                )?;
            }
        }
    }
    Ok(())
}

fn display_key(key: &str) -> &str {
    if key.is_empty() { "*" } else { key }
}
