use anyhow::Result;
use log::{debug, info};
use std::io::{self, Write};

use crate::{
    backend::PackageBackend,
    resolver::{PackageSet, Resolver},
    rules::RulesIndex,
    runtime::Runtime,
};

pub mod config;
mod defaults;
mod output;

pub use config::{Config, DEFAULT_RULES_FILE, Options};
pub use defaults::resolve_locale;
pub use output::{write_packages, write_rules};

/// Print the language support packages for one trigger package.
#[tracing::instrument(skip(runtime, options))]
pub async fn package<R: Runtime>(
    runtime: R,
    trigger: &str,
    locale: Option<String>,
    include_installed: bool,
    options: &Options,
) -> Result<()> {
    let locale = resolve_locale(&runtime, locale)?;
    let config = Config::new(runtime, options)?;

    let packages = by_package(&config.resolver, trigger, &locale, include_installed).await;
    write_packages(&mut io::stdout().lock(), &packages, config.json)
}

/// Print the language support packages for a whole locale.
#[tracing::instrument(skip(runtime, options))]
pub async fn locale<R: Runtime>(
    runtime: R,
    locale: Option<String>,
    include_installed: bool,
    options: &Options,
) -> Result<()> {
    let locale = resolve_locale(&runtime, locale)?;
    let config = Config::new(runtime, options)?;

    let packages = by_locale(&config.resolver, &locale, include_installed).await;
    write_packages(&mut io::stdout().lock(), &packages, config.json)
}

/// Print the parsed rules file.
#[tracing::instrument(skip(runtime, options))]
pub fn rules<R: Runtime>(runtime: R, options: &Options) -> Result<()> {
    let rules = RulesIndex::load(&runtime, &options.rules)?;
    debug!("Loaded {} rule(s)", rules.len());

    let mut stdout = io::stdout().lock();
    write_rules(&mut stdout, &rules)?;
    stdout.flush()?;
    Ok(())
}

pub async fn by_package<B: PackageBackend, R: Runtime>(
    resolver: &Resolver<B, R>,
    trigger: &str,
    locale: &str,
    include_installed: bool,
) -> PackageSet {
    info!("Resolving language support for {} in {}", trigger, locale);
    let packages = resolver
        .resolve_for_package(trigger, locale, include_installed)
        .await;
    info!("Found {} package(s)", packages.len());
    packages
}

pub async fn by_locale<B: PackageBackend, R: Runtime>(
    resolver: &Resolver<B, R>,
    locale: &str,
    include_installed: bool,
) -> PackageSet {
    info!("Resolving language support for locale {}", locale);
    let packages = resolver.resolve_for_locale(locale, include_installed).await;
    info!("Found {} package(s)", packages.len());
    packages
}
