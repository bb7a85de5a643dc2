//! Local filesystem adapter: std::fs for listing, tokio::fs for writes.

use std::io;
use std::path::Path;

use async_trait::async_trait;

use barrelgen_core::{
    application::ports::{DirEntry, EntryKind, Filesystem},
    error::BarrelResult,
};

/// Production filesystem implementation.
///
/// Directory listing is synchronous (`std::fs::read_dir`) - classification
/// runs inline within its pipeline stage. Writes go through `tokio::fs` so
/// concurrent pipelines can interleave at the write suspension point.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Filesystem for LocalFilesystem {
    fn list_dir(&self, path: &Path) -> BarrelResult<Vec<DirEntry>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "list directory"))?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let file_type = item
                .file_type()
                .map_err(|e| map_io_error(path, e, "read file type"))?;

            let kind = if file_type.is_file() {
                EntryKind::File
            } else if file_type.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::Other
            };

            entries.push(DirEntry {
                name: item.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }

        Ok(entries)
    }

    async fn write_file(&self, path: &Path, content: &str) -> BarrelResult<()> {
        tokio::fs::write(path, content)
            .await
            .map_err(|e| map_io_error(path, e, "write file"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> barrelgen_core::error::BarrelError {
    use barrelgen_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_files_and_directories() {
        let temp = tempfile::tempdir().unwrap();
        std::fs::write(temp.path().join("widgets.tsx"), "").unwrap();
        std::fs::create_dir(temp.path().join("nested")).unwrap();

        let mut entries = LocalFilesystem::new().list_dir(temp.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(
            entries,
            vec![DirEntry::directory("nested"), DirEntry::file("widgets.tsx")]
        );
    }

    #[test]
    fn listing_a_missing_directory_fails() {
        let temp = tempfile::tempdir().unwrap();
        let result = LocalFilesystem::new().list_dir(&temp.path().join("absent"));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn writes_and_truncates() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("index.tsx");
        let fs = LocalFilesystem::new();

        fs.write_file(&path, "first").await.unwrap();
        fs.write_file(&path, "second").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }
}
