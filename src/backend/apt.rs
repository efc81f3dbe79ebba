//! Live package state from dpkg and apt.

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::process::{Output, Stdio};
use tokio::process::Command;

use super::PackageBackend;

/// Backend that shells out to `dpkg-query` and `apt-cache`.
///
/// Package names are passed as plain arguments, never through a shell.
#[derive(Debug, Clone)]
pub struct AptBackend {
    dpkg_query: String,
    apt_cache: String,
}

impl Default for AptBackend {
    fn default() -> Self {
        Self::new("dpkg-query", "apt-cache")
    }
}

impl AptBackend {
    /// Create a backend using the given `dpkg-query` and `apt-cache` programs.
    pub fn new(dpkg_query: impl Into<String>, apt_cache: impl Into<String>) -> Self {
        Self {
            dpkg_query: dpkg_query.into(),
            apt_cache: apt_cache.into(),
        }
    }

    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        Command::new(program)
            .args(args)
            .env("LC_ALL", "C")
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("Failed to run {}", program))
    }
}

#[async_trait]
impl PackageBackend for AptBackend {
    #[tracing::instrument(skip(self))]
    async fn is_installed(&self, package: &str) -> Result<bool> {
        validate_package_name(package)?;
        let output = self
            .run(&self.dpkg_query, &["-W", "-f=${db:Status-Status}", package])
            .await?;

        match output.status.code() {
            Some(0) => Ok(parse_dpkg_status(&String::from_utf8_lossy(&output.stdout))),
            // dpkg-query exits 1 when no package matches
            Some(1) => {
                debug!("dpkg-query does not know {}", package);
                Ok(false)
            }
            _ => anyhow::bail!(
                "{} failed for {}: {}",
                self.dpkg_query,
                package,
                String::from_utf8_lossy(&output.stderr).trim()
            ),
        }
    }

    #[tracing::instrument(skip(self))]
    async fn is_installable(&self, package: &str) -> Result<bool> {
        validate_package_name(package)?;
        let output = self.run(&self.apt_cache, &["policy", package]).await?;

        if !output.status.success() {
            anyhow::bail!(
                "{} policy failed for {}: {}",
                self.apt_cache,
                package,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(parse_apt_policy(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Interpret `dpkg-query -f=${db:Status-Status}` output.
fn parse_dpkg_status(stdout: &str) -> bool {
    stdout.trim() == "installed"
}

/// Interpret `apt-cache policy` output.
///
/// Unknown packages produce no output at all; known packages without a
/// candidate report `Candidate: (none)`.
fn parse_apt_policy(stdout: &str) -> bool {
    stdout
        .lines()
        .find_map(|line| line.trim().strip_prefix("Candidate:"))
        .map(|candidate| {
            let candidate = candidate.trim();
            !candidate.is_empty() && candidate != "(none)"
        })
        .unwrap_or(false)
}

/// Reject names that cannot be Debian package names.
///
/// Names must start with an alphanumeric and contain only `[a-z0-9+.-]`;
/// uppercase is accepted since apt matches names case-insensitively.
fn validate_package_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphanumeric())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid {
        anyhow::bail!("Invalid package name: {:?}", name);
    }
    Ok(())
}
