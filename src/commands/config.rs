use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

use crate::{
    backend::{AptBackend, PackageBackend, SnapshotBackend},
    resolver::{DEFAULT_JOBS, Resolver},
    rules::RulesIndex,
    runtime::Runtime,
};

/// Rules file shipped with the desktop's language support data.
pub const DEFAULT_RULES_FILE: &str = "/usr/share/dde-api/data/pkg_depends";

/// Options shared by every query command.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub rules: PathBuf,
    /// Answer from a JSON package snapshot instead of apt/dpkg.
    pub snapshot: Option<PathBuf>,
    pub jobs: usize,
    pub json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rules: PathBuf::from(DEFAULT_RULES_FILE),
            snapshot: None,
            jobs: DEFAULT_JOBS,
            json: false,
        }
    }
}

pub struct Config<R: Runtime> {
    pub resolver: Resolver<Box<dyn PackageBackend>, R>,
    pub json: bool,
}

impl<R: Runtime> Config<R> {
    pub fn new(runtime: R, options: &Options) -> Result<Self> {
        let rules = RulesIndex::load(&runtime, &options.rules)?;
        debug!(
            "Loaded {} rule(s) from {}",
            rules.len(),
            options.rules.display()
        );

        let backend: Box<dyn PackageBackend> = match &options.snapshot {
            Some(path) => {
                debug!("Using package snapshot {}", path.display());
                Box::new(
                    SnapshotBackend::load(&runtime, path)
                        .context("Failed to load package snapshot")?,
                )
            }
            None => Box::new(AptBackend::default()),
        };

        Ok(Self {
            resolver: Resolver::new(Arc::new(rules), backend, runtime).with_jobs(options.jobs),
            json: options.json,
        })
    }
}
