//! Package state loaded from a JSON snapshot.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use super::PackageBackend;
use crate::runtime::Runtime;

/// Recorded package manager state.
///
/// ```json
/// { "installed": ["libreoffice"], "installable": ["hunspell-de-frami"] }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PackageSnapshot {
    #[serde(default)]
    pub installed: BTreeSet<String>,
    #[serde(default)]
    pub installable: BTreeSet<String>,
}

/// Backend answering from a [`PackageSnapshot`].
///
/// Installed packages are also reported installable, matching how apt keeps
/// a candidate for packages it has installed.
#[derive(Debug, Clone, Default)]
pub struct SnapshotBackend {
    snapshot: PackageSnapshot,
}

impl SnapshotBackend {
    pub fn new(snapshot: PackageSnapshot) -> Self {
        Self { snapshot }
    }

    #[tracing::instrument(skip(runtime, path))]
    pub fn load<R: Runtime>(runtime: &R, path: &Path) -> Result<Self> {
        let content = runtime.read_to_string(path)?;
        let snapshot: PackageSnapshot = serde_json::from_str(&content)
            .with_context(|| format!("Invalid package snapshot {}", path.display()))?;
        Ok(Self::new(snapshot))
    }
}

#[async_trait]
impl PackageBackend for SnapshotBackend {
    async fn is_installed(&self, package: &str) -> Result<bool> {
        Ok(self.snapshot.installed.contains(package))
    }

    async fn is_installable(&self, package: &str) -> Result<bool> {
        Ok(self.snapshot.installable.contains(package) || self.snapshot.installed.contains(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockall::predicate::eq;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_snapshot_answers() {
        let backend = SnapshotBackend::new(PackageSnapshot {
            installed: ["libreoffice".to_string()].into(),
            installable: ["hunspell-de-frami".to_string()].into(),
        });

        assert!(backend.is_installed("libreoffice").await.unwrap());
        assert!(!backend.is_installed("hunspell-de-frami").await.unwrap());
        assert!(backend.is_installable("hunspell-de-frami").await.unwrap());
        assert!(backend.is_installable("libreoffice").await.unwrap());
        assert!(!backend.is_installable("hunspell-fr").await.unwrap());
    }

    #[tokio::test]
    async fn test_snapshot_load() {
        let mut runtime = MockRuntime::new();
        let path = PathBuf::from("/tmp/state.json");

        runtime
            .expect_read_to_string()
            .with(eq(path.clone()))
            .returning(|_| Ok(r#"{"installable": ["fcitx-sunpinyin"]}"#.to_string()));

        let backend = SnapshotBackend::load(&runtime, &path).unwrap();
        assert!(backend.is_installable("fcitx-sunpinyin").await.unwrap());
        assert!(!backend.is_installed("fcitx-sunpinyin").await.unwrap());
    }

    #[test]
    fn test_snapshot_load_invalid_json() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_read_to_string()
            .returning(|_| Ok("not json".to_string()));

        let err = SnapshotBackend::load(&runtime, Path::new("/tmp/state.json")).unwrap_err();
        assert!(err.to_string().contains("Invalid package snapshot"));
    }
}
