//! Per-root classification state.
//!
//! One `ImportMap` exists per start directory per generation run. It is owned
//! exclusively by that root's pipeline, passed through the stages as a value,
//! populated once by the classifier, consumed by the renderer, then dropped.
//! It is never shared between pipelines or looked up globally.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Mapping from file extension (leading dot included) to the candidate
/// directories that contain at least one file of that extension.
///
/// Duplicates are expected: a directory appears once per matching file, and
/// may appear under several extensions. Deduplication happens at render time,
/// preserving first occurrence.
#[derive(Debug, Clone, Default)]
pub struct ImportMap {
    by_ext: IndexMap<String, Vec<PathBuf>>,
}

impl ImportMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a candidate directory under an extension, lazily creating the
    /// list on first sight of that extension.
    pub fn record(&mut self, ext: impl Into<String>, dir: impl Into<PathBuf>) {
        self.by_ext.entry(ext.into()).or_default().push(dir.into());
    }

    /// All candidates recorded for one extension, duplicates included.
    /// Unknown extensions yield an empty slice.
    pub fn candidates(&self, ext: &str) -> &[PathBuf] {
        self.by_ext.get(ext).map_or(&[], Vec::as_slice)
    }

    /// Candidates for one extension, deduplicated with first-occurrence order
    /// preserved.
    pub fn unique_candidates(&self, ext: &str) -> Vec<&Path> {
        let mut seen = indexmap::IndexSet::new();
        for dir in self.candidates(ext) {
            seen.insert(dir.as_path());
        }
        seen.into_iter().collect()
    }

    /// Extensions observed during classification, in first-seen order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.by_ext.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_ext.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_appends_duplicates() {
        let mut map = ImportMap::new();
        map.record(".tsx", "/a/widgets");
        map.record(".tsx", "/a/widgets");
        map.record(".tsx", "/b/gadgets");

        assert_eq!(map.candidates(".tsx").len(), 3);
    }

    #[test]
    fn unique_candidates_dedups_preserving_first_occurrence() {
        let mut map = ImportMap::new();
        map.record(".tsx", "/b/gadgets");
        map.record(".tsx", "/a/widgets");
        map.record(".tsx", "/b/gadgets");

        assert_eq!(
            map.unique_candidates(".tsx"),
            vec![Path::new("/b/gadgets"), Path::new("/a/widgets")]
        );
    }

    #[test]
    fn unknown_extension_yields_empty() {
        let map = ImportMap::new();
        assert!(map.candidates(".scss").is_empty());
        assert!(map.unique_candidates(".scss").is_empty());
    }

    #[test]
    fn directory_may_appear_under_several_extensions() {
        let mut map = ImportMap::new();
        map.record(".tsx", "/a/widgets");
        map.record(".scss", "/a/widgets");

        assert_eq!(map.extensions().collect::<Vec<_>>(), [".tsx", ".scss"]);
        assert_eq!(map.candidates(".tsx"), [PathBuf::from("/a/widgets")]);
        assert_eq!(map.candidates(".scss"), [PathBuf::from("/a/widgets")]);
    }
}
