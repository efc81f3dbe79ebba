//! Package-management backend abstraction.
//!
//! The resolver only ever asks two questions about a package: is it installed,
//! and could it be installed. Implementations:
//!
//! - [`AptBackend`] - queries the live system through `dpkg-query` / `apt-cache`
//! - [`SnapshotBackend`] - answers from a recorded JSON package state

mod apt;
mod snapshot;

use anyhow::Result;
use async_trait::async_trait;

pub use apt::AptBackend;
pub use snapshot::{PackageSnapshot, SnapshotBackend};

/// Read-only queries against the package manager.
///
/// Errors are per package; callers decide how to treat an unanswered query.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PackageBackend: Send + Sync {
    /// Whether `package` is currently installed.
    async fn is_installed(&self, package: &str) -> Result<bool>;

    /// Whether `package` is known to the package manager and has an
    /// installation candidate.
    async fn is_installable(&self, package: &str) -> Result<bool>;
}

#[async_trait]
impl<T: PackageBackend + ?Sized> PackageBackend for Box<T> {
    async fn is_installed(&self, package: &str) -> Result<bool> {
        (**self).is_installed(package).await
    }

    async fn is_installable(&self, package: &str) -> Result<bool> {
        (**self).is_installable(package).await
    }
}
