//! `barrelgen generate` — run the generation pipelines.
//!
//! Pipelines run on a current-thread tokio runtime: they interleave at their
//! suspension points but never execute in parallel, which is all the
//! isolation the core's disjoint-state model needs.

use std::path::Path;

use async_trait::async_trait;

use barrelgen_adapters::{LocalFilesystem, ManifestPartitionResolver, MemoryFilesystem};
use barrelgen_core::{
    application::{
        GenerateService, GenerateSummary,
        ports::{DirEntry, Filesystem},
    },
    error::BarrelResult,
};

use crate::{
    cli::GenerateArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Run barrel-file generation for every configured root.
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let barrel_config = config.to_barrel_config()?;

    if barrel_config.generators().is_empty() {
        output.warning("No generators configured; nothing will be written")?;
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::from)?;

    if args.dry_run {
        let preview = PreviewFilesystem::default();
        let sink = preview.sink.clone();
        let service = GenerateService::new(
            barrel_config,
            Box::new(ManifestPartitionResolver::new()),
            Box::new(preview),
        );
        let summary = runtime.block_on(service.generate_all());

        report(&output, &summary, true)?;
        for path in sink.list_files() {
            output.print(&format!("--- {}", path.display()))?;
            if let Some(content) = sink.read_file(&path) {
                for line in content.lines() {
                    output.detail(line)?;
                }
            }
        }
        return Ok(());
    }

    let service = GenerateService::new(
        barrel_config,
        Box::new(ManifestPartitionResolver::new()),
        Box::new(LocalFilesystem::new()),
    );
    let summary = runtime.block_on(service.generate_all());
    report(&output, &summary, false)
}

/// Print the per-root results of one run.
fn report(output: &OutputManager, summary: &GenerateSummary, dry_run: bool) -> CliResult<()> {
    let verb = if dry_run { "Would write" } else { "Wrote" };

    for outcome in &summary.outcomes {
        output.success(&format!(
            "{verb} {} file(s) under {}",
            outcome.files.len(),
            outcome.start_dir.display()
        ))?;
        for file in &outcome.files {
            output.detail(&file.display().to_string())?;
        }
    }

    // Per-root failures are already logged by the core with full detail;
    // here they only surface as a warning so siblings' results stay visible.
    for failed in &summary.failed {
        output.warning(&format!(
            "Skipped {} (see log for the reason)",
            failed.display()
        ))?;
    }

    Ok(())
}

/// Dry-run filesystem: real directory listings, captured writes.
#[derive(Debug, Clone, Default)]
struct PreviewFilesystem {
    local: LocalFilesystem,
    sink: MemoryFilesystem,
}

#[async_trait]
impl Filesystem for PreviewFilesystem {
    fn list_dir(&self, path: &Path) -> BarrelResult<Vec<DirEntry>> {
        self.local.list_dir(path)
    }

    async fn write_file(&self, path: &Path, content: &str) -> BarrelResult<()> {
        self.sink.write_file(path, content).await
    }
}
