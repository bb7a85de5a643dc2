//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `barrelgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::PartitionedImports;
use crate::error::BarrelResult;

/// Kind of a directory entry, as reported by [`Filesystem::list_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks, sockets, devices - carries no import signal.
    Other,
}

/// One immediate entry of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::File }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self { name: name.into(), kind: EntryKind::Directory }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `barrelgen_adapters::filesystem::LocalFilesystem` (production)
/// - `barrelgen_adapters::filesystem::MemoryFilesystem` (testing, dry runs)
///
/// ## Design Notes
///
/// - `list_dir` is synchronous: classification happens inline within its
///   pipeline stage, with no suspension point.
/// - `write_file` is asynchronous and callers in the writer stage treat it as
///   fire-and-forget: the outcome is logged at debug level and dropped.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// List the immediate entries of a directory.
    fn list_dir(&self, path: &Path) -> BarrelResult<Vec<DirEntry>>;

    /// Write content to a file, creating or truncating it.
    async fn write_file(&self, path: &Path, content: &str) -> BarrelResult<()>;
}

/// Port for the external partition resolver.
///
/// Given the full source list (precedence order) and the path of the target's
/// manifest file, the resolver decides which source root owns each candidate
/// basename. It guarantees that no basename is duplicated across sources -
/// the core relies on that invariant and never re-checks it.
///
/// Implemented by:
/// - `barrelgen_adapters::resolver::ManifestPartitionResolver` (production)
/// - `barrelgen_adapters::resolver::FixedPartitionResolver` (testing)
#[async_trait]
pub trait PartitionResolver: Send + Sync {
    /// Resolve the partitioned import collection for one target.
    async fn resolve(
        &self,
        sources: &[PathBuf],
        manifest_path: &Path,
    ) -> BarrelResult<PartitionedImports>;
}
