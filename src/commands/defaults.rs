use anyhow::Result;
use log::debug;

use crate::runtime::Runtime;

/// Locale variables in precedence order.
const LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Pick the locale to resolve for.
///
/// An explicit locale wins; otherwise the first non-empty of `LC_ALL`,
/// `LC_MESSAGES` and `LANG`.
#[tracing::instrument(skip(runtime))]
pub fn resolve_locale<R: Runtime>(runtime: &R, explicit: Option<String>) -> Result<String> {
    if let Some(locale) = explicit {
        return Ok(locale);
    }

    for var in LOCALE_VARS {
        if let Some(value) = runtime.env_var(var).ok().filter(|v| !v.is_empty()) {
            debug!("Using locale {} from {}", value, var);
            return Ok(value);
        }
    }

    anyhow::bail!("No locale given and none of LC_ALL, LC_MESSAGES, LANG is set. Use --locale.")
}
