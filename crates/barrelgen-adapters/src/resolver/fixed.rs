//! Canned partition resolver for testing and previews.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use barrelgen_core::{
    application::{ApplicationError, ports::PartitionResolver},
    domain::PartitionedImports,
    error::BarrelResult,
};

/// A resolver that always returns the same collection (or the same
/// rejection), regardless of sources and manifest path.
#[derive(Debug, Clone)]
pub struct FixedPartitionResolver {
    outcome: Result<PartitionedImports, String>,
}

impl FixedPartitionResolver {
    /// Always resolve to the given collection.
    pub fn new(partitioned: PartitionedImports) -> Self {
        Self { outcome: Ok(partitioned) }
    }

    /// Always reject with the given reason.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self { outcome: Err(reason.into()) }
    }

    /// Parse the collection from a JSON mapping of source root to basenames.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }
}

#[async_trait]
impl PartitionResolver for FixedPartitionResolver {
    async fn resolve(
        &self,
        _sources: &[PathBuf],
        manifest_path: &Path,
    ) -> BarrelResult<PartitionedImports> {
        match &self.outcome {
            Ok(partitioned) => Ok(partitioned.clone()),
            Err(reason) => Err(ApplicationError::ResolverFailed {
                manifest: manifest_path.to_path_buf(),
                reason: reason.clone(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_the_canned_collection() {
        let partitioned = PartitionedImports::from_iter([("/a", vec!["widgets"])]);
        let resolver = FixedPartitionResolver::new(partitioned.clone());

        let resolved = resolver.resolve(&[], Path::new("/out/index.json")).await.unwrap();
        assert_eq!(resolved, partitioned);
    }

    #[tokio::test]
    async fn failing_variant_rejects_with_the_manifest_path() {
        let resolver = FixedPartitionResolver::failing("boom");
        let err = resolver
            .resolve(&[], Path::new("/out/index.json"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("/out/index.json"));
    }

    #[test]
    fn from_json_parses_a_plain_mapping() {
        let resolver = FixedPartitionResolver::from_json(r#"{"/a": ["widgets", "nav"]}"#).unwrap();
        assert!(resolver.outcome.is_ok());
    }
}
