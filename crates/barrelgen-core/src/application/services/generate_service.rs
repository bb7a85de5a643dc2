//! Generate Service - main application orchestrator.
//!
//! One generation pipeline runs per configured start directory:
//!
//! 1. Resolve the partitioned import collection (async, via port)
//! 2. Flatten it into a candidate-directory list
//! 3. Classify candidates by the extensions of the files they contain
//! 4. Render one text blob per registered extension
//! 5. Write the blobs (async, fire-and-forget)
//!
//! Pipelines are logically concurrent: they interleave at the two suspension
//! points but never run on parallel threads and never share mutable state.
//! Each pipeline owns its `ImportMap`; isolation is by construction, not by
//! synchronization. A failure in one pipeline is caught at the end of that
//! root's chain, logged, and never aborts siblings.

use std::path::{Path, PathBuf};

use futures::future;
use serde::Serialize;
use tracing::{debug, error, info, instrument};

use crate::{
    application::ports::{EntryKind, Filesystem, PartitionResolver},
    domain::{
        BarrelConfig, ImportMap, file_extension, is_manifest_file, manifest_path,
        output_file_name, render_import_texts,
    },
    error::BarrelResult,
};

/// What one successful pipeline produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RootOutcome {
    pub start_dir: PathBuf,
    /// Destination paths handed to the writer, in generator order.
    pub files: Vec<PathBuf>,
}

/// Aggregate result of one `generate_all` run, for display only.
///
/// Per-root failures are logged and swallowed inside the service; the summary
/// records which roots failed but not why.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerateSummary {
    pub outcomes: Vec<RootOutcome>,
    pub failed: Vec<PathBuf>,
}

impl GenerateSummary {
    pub fn files_written(&self) -> usize {
        self.outcomes.iter().map(|o| o.files.len()).sum()
    }
}

/// Main generation service.
///
/// Owns the configuration and fans out one independent pipeline per start
/// directory through the injected adapters.
pub struct GenerateService {
    config: BarrelConfig,
    resolver: Box<dyn PartitionResolver>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        config: BarrelConfig,
        resolver: Box<dyn PartitionResolver>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self { config, resolver, filesystem }
    }

    pub fn config(&self) -> &BarrelConfig {
        &self.config
    }

    /// Run every root's pipeline to completion.
    ///
    /// This is the main use case. Pipelines interleave on the current task;
    /// no relative completion order between roots is guaranteed. Errors never
    /// escape this method - they are logged per root and reflected only as an
    /// entry in [`GenerateSummary::failed`].
    #[instrument(skip_all, fields(roots = self.config.start_dirs().len()))]
    pub async fn generate_all(&self) -> GenerateSummary {
        let pipelines = self
            .config
            .start_dirs()
            .iter()
            .map(|start_dir| self.generate_root(start_dir));

        let mut summary = GenerateSummary::default();
        for (start_dir, result) in future::join_all(pipelines).await {
            match result {
                Ok(outcome) => summary.outcomes.push(outcome),
                Err(()) => summary.failed.push(start_dir),
            }
        }

        info!(
            files = summary.files_written(),
            failed_roots = summary.failed.len(),
            "Generation run finished"
        );
        summary
    }

    /// One root's pipeline plus its terminal error handler.
    async fn generate_root(&self, start_dir: &Path) -> (PathBuf, Result<RootOutcome, ()>) {
        let result = match self.run_pipeline(start_dir).await {
            Ok(outcome) => {
                info!(
                    start_dir = %start_dir.display(),
                    files = outcome.files.len(),
                    "Barrel files generated"
                );
                Ok(outcome)
            }
            Err(e) => {
                // Per-root isolation: log and swallow, siblings keep running.
                error!(
                    start_dir = %start_dir.display(),
                    error = %e,
                    "Generation pipeline failed; no files written for this root"
                );
                Err(())
            }
        };
        (start_dir.to_path_buf(), result)
    }

    /// The five pipeline stages, strictly in sequence.
    #[instrument(skip_all, fields(start_dir = %start_dir.display()))]
    async fn run_pipeline(&self, start_dir: &Path) -> BarrelResult<RootOutcome> {
        let manifest = manifest_path(start_dir, self.config.basename());

        let partitioned = self
            .resolver
            .resolve(self.config.sources(), &manifest)
            .await?;
        debug!(candidates = partitioned.candidate_count(), "Partition resolved");

        let candidate_dirs = partitioned.flatten();
        let import_map = self.classify(&candidate_dirs)?;

        let texts = render_import_texts(
            &import_map,
            self.config.generators(),
            self.config.without_ext(),
        );

        let files = self.write_outputs(start_dir, texts).await;
        Ok(RootOutcome { start_dir: start_dir.to_path_buf(), files })
    }

    /// Classification stage: bucket candidate directories by the extensions
    /// of the files they contain, skipping the reserved manifest file.
    fn classify(&self, candidate_dirs: &[PathBuf]) -> BarrelResult<ImportMap> {
        let mut import_map = ImportMap::new();

        for dir in candidate_dirs {
            for entry in self.filesystem.list_dir(dir)? {
                if entry.kind != EntryKind::File {
                    continue;
                }
                let Some(ext) = file_extension(&entry.name) else {
                    continue;
                };
                if is_manifest_file(&entry.name, self.config.basename()) {
                    continue;
                }
                import_map.record(ext, dir.clone());
            }
        }

        Ok(import_map)
    }

    /// Writer stage: persist every rendered blob, empty or not.
    ///
    /// The always-write rule is a published contract - external code imports
    /// the generated file and expects it to exist regardless of content.
    /// Writes are at-least-once and fire-and-forget: failures are logged at
    /// debug level and dropped, never retried or surfaced.
    async fn write_outputs(
        &self,
        start_dir: &Path,
        texts: indexmap::IndexMap<String, String>,
    ) -> Vec<PathBuf> {
        let mut files = Vec::with_capacity(texts.len());

        for (ext, text) in &texts {
            let path = start_dir.join(output_file_name(self.config.basename(), ext));
            if let Err(e) = self.filesystem.write_file(&path, text.trim_start()).await {
                debug!(path = %path.display(), error = %e, "Write dropped");
            }
            files.push(path);
        }

        files
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
