//! In-memory filesystem adapter for testing and dry runs.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use async_trait::async_trait;

use barrelgen_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, EntryKind, Filesystem},
    },
    error::BarrelResult,
};

/// In-memory filesystem for testing and `--dry-run`.
///
/// Clones share the same backing store, so a test (or the dry-run command)
/// can hand one clone to the service and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, String>,
    directories: BTreeSet<PathBuf>,
    fail_writes: bool,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating all ancestor directories (testing helper).
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut inner = self.inner.write().unwrap();
        if let Some(parent) = path.parent() {
            add_dir_chain(&mut inner.directories, parent);
        }
        inner.files.insert(path, content.into());
    }

    /// Seed an empty directory (testing helper).
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let mut inner = self.inner.write().unwrap();
        add_dir_chain(&mut inner.directories, &path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// All file paths currently present, in sorted order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        inner.files.keys().cloned().collect()
    }

    /// Make every subsequent `write_file` fail (testing helper for the
    /// fire-and-forget write contract).
    pub fn fail_writes(&self, fail: bool) {
        self.inner.write().unwrap().fail_writes = fail;
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
    }
}

fn add_dir_chain(directories: &mut BTreeSet<PathBuf>, path: &Path) {
    let mut current = PathBuf::new();
    for component in path.components() {
        current.push(component);
        directories.insert(current.clone());
    }
}

#[async_trait]
impl Filesystem for MemoryFilesystem {
    fn list_dir(&self, path: &Path) -> BarrelResult<Vec<DirEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| poisoned(path))?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Directory does not exist".into(),
            }
            .into());
        }

        let mut entries: Vec<DirEntry> = inner
            .files
            .keys()
            .filter(|p| p.parent() == Some(path))
            .map(|p| DirEntry {
                name: file_name(p),
                kind: EntryKind::File,
            })
            .chain(
                inner
                    .directories
                    .iter()
                    .filter(|p| p.parent() == Some(path))
                    .map(|p| DirEntry {
                        name: file_name(p),
                        kind: EntryKind::Directory,
                    }),
            )
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn write_file(&self, path: &Path, content: &str) -> BarrelResult<()> {
        let mut inner = self.inner.write().map_err(|_| poisoned(path))?;

        if inner.fail_writes {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Simulated write failure".into(),
            }
            .into());
        }

        if let Some(parent) = path.parent() {
            add_dir_chain(&mut inner.directories, parent);
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn poisoned(path: &Path) -> barrelgen_core::error::BarrelError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Filesystem lock poisoned".into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_immediate_entries_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/a/widgets/widgets.tsx", "");
        fs.add_file("/a/widgets/deep/inner.tsx", "");

        let entries = fs.list_dir(Path::new("/a/widgets")).unwrap();
        assert_eq!(
            entries,
            vec![DirEntry::directory("deep"), DirEntry::file("widgets.tsx")]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let fs = MemoryFilesystem::new();
        assert!(fs.list_dir(Path::new("/absent")).is_err());
    }

    #[tokio::test]
    async fn writes_are_readable_through_clones() {
        let fs = MemoryFilesystem::new();
        let handle = fs.clone();

        fs.write_file(Path::new("/out/index.tsx"), "import x;")
            .await
            .unwrap();

        assert_eq!(
            handle.read_file(Path::new("/out/index.tsx")),
            Some("import x;".into())
        );
    }

    #[tokio::test]
    async fn fail_writes_rejects_subsequent_writes() {
        let fs = MemoryFilesystem::new();
        fs.fail_writes(true);
        assert!(fs.write_file(Path::new("/out/index.tsx"), "").await.is_err());

        fs.fail_writes(false);
        assert!(fs.write_file(Path::new("/out/index.tsx"), "").await.is_ok());
    }
}
