//! Manifest-driven partition resolver.
//!
//! Resolution rules:
//!
//! 1. Read and parse the target's manifest (`<start_dir>/<basename>.json`).
//!    A missing or malformed manifest is a rejection - the pipeline for that
//!    root terminates with no files written.
//! 2. Walk the source roots in precedence order, listing each root's
//!    immediate subdirectories (sorted, so resolution is deterministic across
//!    platforms). A basename is owned by the first source containing it.
//! 3. Basenames listed in the manifest's `exclude` array are never owned.
//!
//! Rule 2 upholds the invariant the core assumes: a basename appears under at
//! most one source per target.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use barrelgen_core::{
    application::{ApplicationError, ports::PartitionResolver},
    domain::PartitionedImports,
    error::BarrelResult,
};

/// Per-root manifest file content.
///
/// ```json
/// { "exclude": ["legacy", "experimental"] }
/// ```
#[derive(Debug, Default, Deserialize)]
struct Manifest {
    #[serde(default)]
    exclude: Vec<String>,
}

/// Production partition resolver driven by a JSON exclusion manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManifestPartitionResolver;

impl ManifestPartitionResolver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PartitionResolver for ManifestPartitionResolver {
    async fn resolve(
        &self,
        sources: &[PathBuf],
        manifest_path: &Path,
    ) -> BarrelResult<PartitionedImports> {
        let raw = tokio::fs::read_to_string(manifest_path)
            .await
            .map_err(|e| rejection(manifest_path, format!("unreadable manifest: {e}")))?;
        let manifest: Manifest = serde_json::from_str(&raw)
            .map_err(|e| rejection(manifest_path, format!("malformed manifest: {e}")))?;

        let excluded: HashSet<&str> = manifest.exclude.iter().map(String::as_str).collect();
        let mut claimed: HashSet<String> = HashSet::new();
        let mut partitioned = PartitionedImports::new();

        for source in sources {
            let mut owned: Vec<String> = Vec::new();
            for name in subdirectories(source) {
                if excluded.contains(name.as_str()) || claimed.contains(&name) {
                    continue;
                }
                claimed.insert(name.clone());
                owned.push(name);
            }
            debug!(
                source = %source.display(),
                owned = owned.len(),
                "Source partition resolved"
            );
            partitioned.insert(source.clone(), owned);
        }

        Ok(partitioned)
    }
}

/// Immediate subdirectory basenames of one source root, sorted.
///
/// A source root that does not exist (yet) simply owns nothing; that is not
/// an error because sources are configured project-wide while any single
/// project may only use a subset of them.
fn subdirectories(source: &Path) -> Vec<String> {
    let Ok(read_dir) = std::fs::read_dir(source) else {
        debug!(source = %source.display(), "Source root not listable, owns nothing");
        return Vec::new();
    };

    let mut names: Vec<String> = read_dir
        .flatten()
        .filter(|item| item.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .map(|item| item.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

fn rejection(manifest: &Path, reason: String) -> barrelgen_core::error::BarrelError {
    ApplicationError::ResolverFailed {
        manifest: manifest.to_path_buf(),
        reason,
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch_dir(root: &Path, name: &str) {
        std::fs::create_dir_all(root.join(name)).unwrap();
    }

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("index.json");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn first_source_in_precedence_order_wins() {
        let temp = tempfile::tempdir().unwrap();
        let a = temp.path().join("a");
        let b = temp.path().join("b");
        touch_dir(&a, "widgets");
        touch_dir(&b, "widgets");
        touch_dir(&b, "gadgets");
        let manifest = write_manifest(temp.path(), "{}");

        let partitioned = ManifestPartitionResolver::new()
            .resolve(&[a.clone(), b.clone()], &manifest)
            .await
            .unwrap();

        assert_eq!(
            partitioned,
            PartitionedImports::from_iter([
                (a, vec!["widgets".to_string()]),
                (b, vec!["gadgets".to_string()]),
            ])
        );
    }

    #[tokio::test]
    async fn excluded_basenames_are_never_owned() {
        let temp = tempfile::tempdir().unwrap();
        let a = temp.path().join("a");
        touch_dir(&a, "widgets");
        touch_dir(&a, "legacy");
        let manifest = write_manifest(temp.path(), r#"{ "exclude": ["legacy"] }"#);

        let partitioned = ManifestPartitionResolver::new()
            .resolve(std::slice::from_ref(&a), &manifest)
            .await
            .unwrap();

        assert_eq!(
            partitioned,
            PartitionedImports::from_iter([(a, vec!["widgets".to_string()])])
        );
    }

    #[tokio::test]
    async fn missing_manifest_is_a_rejection() {
        let temp = tempfile::tempdir().unwrap();
        let result = ManifestPartitionResolver::new()
            .resolve(&[temp.path().to_path_buf()], &temp.path().join("index.json"))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn malformed_manifest_is_a_rejection() {
        let temp = tempfile::tempdir().unwrap();
        let manifest = write_manifest(temp.path(), "not json");

        let result = ManifestPartitionResolver::new()
            .resolve(&[temp.path().to_path_buf()], &manifest)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_source_root_owns_nothing() {
        let temp = tempfile::tempdir().unwrap();
        let manifest = write_manifest(temp.path(), "{}");
        let ghost = temp.path().join("ghost");

        let partitioned = ManifestPartitionResolver::new()
            .resolve(std::slice::from_ref(&ghost), &manifest)
            .await
            .unwrap();

        assert_eq!(partitioned.candidate_count(), 0);
    }

    #[tokio::test]
    async fn files_in_source_roots_are_not_candidates() {
        let temp = tempfile::tempdir().unwrap();
        let a = temp.path().join("a");
        touch_dir(&a, "widgets");
        std::fs::write(a.join("loose.tsx"), "").unwrap();
        let manifest = write_manifest(temp.path(), "{}");

        let partitioned = ManifestPartitionResolver::new()
            .resolve(std::slice::from_ref(&a), &manifest)
            .await
            .unwrap();

        assert_eq!(partitioned.candidate_count(), 1);
    }
}
