//! The precedence-resolved import collection and its flattener.
//!
//! `PartitionedImports` is produced by the partition resolver (an external
//! collaborator behind the [`PartitionResolver`] port). The core only
//! consumes it: [`PartitionedImports::flatten`] turns it into the ordered
//! candidate-directory list the classifier works on.
//!
//! [`PartitionResolver`]: crate::application::ports::PartitionResolver

use std::path::PathBuf;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

/// Mapping from each source root to the set of directory basenames it owns
/// for one target.
///
/// Invariant (enforced by the resolver, not here): a basename appears under
/// at most one source root per target. Iteration order is insertion order,
/// which for a well-behaved resolver is source precedence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartitionedImports {
    owners: IndexMap<PathBuf, IndexSet<String>>,
}

impl PartitionedImports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the basenames owned by one source root.
    ///
    /// Sources should be inserted in precedence order; `flatten` preserves it.
    pub fn insert<I, S>(&mut self, source: impl Into<PathBuf>, basenames: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.owners
            .entry(source.into())
            .or_default()
            .extend(basenames.into_iter().map(Into::into));
    }

    /// Flatten into a single ordered list of full candidate-directory paths.
    ///
    /// For each source root (collection iteration order), each owned basename
    /// becomes `join(source, basename)`. No sorting happens here; dedup is
    /// the renderer's job.
    pub fn flatten(&self) -> Vec<PathBuf> {
        self.owners
            .iter()
            .flat_map(|(source, basenames)| basenames.iter().map(|name| source.join(name)))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &IndexSet<String>)> {
        self.owners.iter()
    }

    /// Total number of owned basenames across all sources.
    pub fn candidate_count(&self) -> usize {
        self.owners.values().map(IndexSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.values().all(IndexSet::is_empty)
    }
}

impl<S, I, N> FromIterator<(S, I)> for PartitionedImports
where
    S: Into<PathBuf>,
    I: IntoIterator<Item = N>,
    N: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        let mut partitioned = Self::new();
        for (source, basenames) in iter {
            partitioned.insert(source, basenames);
        }
        partitioned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_preserves_source_then_basename_order() {
        let partitioned =
            PartitionedImports::from_iter([("/b", vec!["gadgets"]), ("/a", vec!["widgets", "nav"])]);

        assert_eq!(
            partitioned.flatten(),
            vec![
                PathBuf::from("/b/gadgets"),
                PathBuf::from("/a/widgets"),
                PathBuf::from("/a/nav"),
            ]
        );
    }

    #[test]
    fn flatten_of_empty_collection_is_empty() {
        assert!(PartitionedImports::new().flatten().is_empty());
    }

    #[test]
    fn insert_merges_repeated_sources() {
        let mut partitioned = PartitionedImports::new();
        partitioned.insert("/a", ["widgets"]);
        partitioned.insert("/a", ["nav", "widgets"]);

        assert_eq!(partitioned.candidate_count(), 2);
        assert_eq!(
            partitioned.flatten(),
            vec![PathBuf::from("/a/widgets"), PathBuf::from("/a/nav")]
        );
    }

    #[test]
    fn serde_round_trips_as_plain_mapping() {
        let partitioned = PartitionedImports::from_iter([("/a", vec!["widgets"])]);
        let json = serde_json::to_string(&partitioned).unwrap();
        assert_eq!(json, r#"{"/a":["widgets"]}"#);
        let back: PartitionedImports = serde_json::from_str(&json).unwrap();
        assert_eq!(back, partitioned);
    }
}
