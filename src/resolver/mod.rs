//! Language support package resolution.
//!
//! For a trigger package and a locale the resolver:
//!
//! 1. collects the literal dependencies filed under the locale's lang code,
//! 2. expands the wildcard lang code's patterns for the locale,
//! 3. keeps the candidates the backend reports installable,
//! 4. optionally drops the ones already installed,
//! 5. applies the desktop and conflict exclusions.
//!
//! Backend queries run concurrently, bounded by `jobs`. A failed query never
//! fails the resolution: an unanswered "installable" drops the candidate, an
//! unanswered "installed" keeps it.

mod aggregate;
pub mod exclusion;

use anyhow::Result;
use futures_util::{StreamExt, stream};
use log::debug;
use std::collections::BTreeSet;
use std::env::VarError;
use std::sync::Arc;

use crate::backend::PackageBackend;
use crate::locale;
use crate::pattern;
use crate::rules::{RulesIndex, WILDCARD};
use crate::runtime::Runtime;

use exclusion::DESKTOP_ENV;

/// Resolved package names, iterated in sorted order.
pub type PackageSet = BTreeSet<String>;

/// Default bound on concurrent backend queries.
pub const DEFAULT_JOBS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Query {
    Installed,
    Installable,
}

pub struct Resolver<B: PackageBackend, R: Runtime> {
    rules: Arc<RulesIndex>,
    backend: B,
    runtime: R,
    jobs: usize,
}

impl<B: PackageBackend, R: Runtime> Resolver<B, R> {
    pub fn new(rules: Arc<RulesIndex>, backend: B, runtime: R) -> Self {
        Self {
            rules,
            backend,
            runtime,
            jobs: DEFAULT_JOBS,
        }
    }

    /// Bound the number of backend queries in flight (at least 1).
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    pub fn rules(&self) -> &RulesIndex {
        &self.rules
    }

    /// Candidate package names for `(trigger, locale)` before any backend query.
    pub fn candidates(&self, trigger: &str, locale: &str) -> PackageSet {
        let mut candidates: PackageSet = self
            .rules
            .specs(trigger, locale::lang_code(locale))
            .map(str::to_string)
            .collect();

        for pattern in self.rules.specs(trigger, WILDCARD) {
            candidates.extend(pattern::expand(pattern, locale));
        }

        candidates
    }

    /// Language support packages for one trigger package and locale.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_for_package(
        &self,
        trigger: &str,
        locale: &str,
        include_installed: bool,
    ) -> PackageSet {
        let candidates = self.candidates(trigger, locale);
        if candidates.is_empty() {
            debug!("No rules for trigger {:?} and locale {:?}", trigger, locale);
            return PackageSet::new();
        }
        debug!("Checking {} candidate(s) for {:?}", candidates.len(), trigger);

        let mut packages = PackageSet::new();
        for (pkg, answer) in self.query(candidates, Query::Installable).await {
            match answer {
                Ok(true) => {
                    packages.insert(pkg);
                }
                Ok(false) => {}
                Err(e) => debug!("Skipping {}: installable query failed: {:#}", pkg, e),
            }
        }

        if !include_installed {
            let installed = self.query(packages.clone(), Query::Installed).await;
            for (pkg, answer) in installed {
                match answer {
                    Ok(true) => {
                        packages.remove(&pkg);
                    }
                    Ok(false) => {}
                    Err(e) => debug!("Keeping {}: installed query failed: {:#}", pkg, e),
                }
            }
        }

        exclusion::exclude_for_desktop(&mut packages, &self.desktop());
        exclusion::exclude_conflicts(&mut packages);

        packages
    }

    /// The desktop session list; non-UTF-8 bytes are replaced, not dropped.
    fn desktop(&self) -> String {
        match self.runtime.env_var(DESKTOP_ENV) {
            Ok(desktop) => desktop,
            Err(VarError::NotUnicode(raw)) => raw.to_string_lossy().into_owned(),
            Err(VarError::NotPresent) => String::new(),
        }
    }

    /// Ask the backend about every package, at most `jobs` at a time.
    ///
    /// Results come back in completion order.
    async fn query<I>(&self, packages: I, query: Query) -> Vec<(String, Result<bool>)>
    where
        I: IntoIterator<Item = String>,
    {
        let backend = &self.backend;
        stream::iter(packages)
            .map(|pkg| async move {
                let answer = match query {
                    Query::Installed => backend.is_installed(&pkg).await,
                    Query::Installable => backend.is_installable(&pkg).await,
                };
                (pkg, answer)
            })
            .buffer_unordered(self.jobs)
            .collect()
            .await
    }
}
