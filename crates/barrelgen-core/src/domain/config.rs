//! The `BarrelConfig` aggregate and its builder.
//!
//! A `BarrelConfig` is the fully-validated description of one generation run:
//! where to look (`sources`, precedence order), where to write (`start_dirs`),
//! what to call the generated files (`basename`), and how to render each
//! extension (`GeneratorMap`). Once built it is immutable and guaranteed
//! consistent.
//!
//! # Domain purity
//!
//! This module must not import `tracing`. Observability is the responsibility
//! of the application and CLI layers, not the domain.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::domain::error::DomainError;

// ── Generator capability map ──────────────────────────────────────────────────

/// A pure function mapping a canonical import path to rendered
/// import-expression text. The generator owns separators and newlines.
pub type ImportExprGenerator = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Capability map from file extension to its rendering function.
///
/// Deliberately a plain mapping, not a trait hierarchy - there is no dynamic
/// behavior beyond the closure itself. Insertion order is preserved and
/// determines the order of generated files.
#[derive(Clone, Default)]
pub struct GeneratorMap {
    inner: IndexMap<String, ImportExprGenerator>,
}

impl GeneratorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generator for an extension.
    ///
    /// The extension is normalized to carry a leading dot (`tsx` and `.tsx`
    /// register the same key). Re-registering an extension replaces the
    /// previous generator.
    pub fn register(
        &mut self,
        ext: impl AsRef<str>,
        generator: impl Fn(&str) -> String + Send + Sync + 'static,
    ) {
        self.inner
            .insert(normalize_ext(ext.as_ref()), Arc::new(generator));
    }

    pub fn get(&self, ext: &str) -> Option<&ImportExprGenerator> {
        self.inner.get(ext)
    }

    /// Registered extensions in insertion order.
    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImportExprGenerator)> {
        self.inner.iter().map(|(ext, g)| (ext.as_str(), g))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for GeneratorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Closures are opaque; show the registered extensions only.
        f.debug_tuple("GeneratorMap")
            .field(&self.inner.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Normalize an extension key to include the leading dot.
pub fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

// ── Aggregate root ────────────────────────────────────────────────────────────

/// Fully-validated configuration for barrel-file generation.
///
/// Guaranteed on construction:
/// - at least one source root and one start directory
/// - `basename` is a bare file stem (non-empty, no separators, no dots)
/// - every generator key is a single dot-prefixed extension segment
#[derive(Debug, Clone)]
pub struct BarrelConfig {
    sources: Vec<PathBuf>,
    start_dirs: Vec<PathBuf>,
    basename: String,
    generators: GeneratorMap,
    without_ext: bool,
}

impl BarrelConfig {
    /// Start building a new `BarrelConfig`.
    pub fn builder() -> BarrelConfigBuilder {
        BarrelConfigBuilder::default()
    }

    /// Source roots in precedence order (first wins).
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Output root directories; one generation pipeline runs per entry.
    pub fn start_dirs(&self) -> &[PathBuf] {
        &self.start_dirs
    }

    /// Filename stem shared by the generated files and the per-root manifest.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    pub fn generators(&self) -> &GeneratorMap {
        &self.generators
    }

    /// Whether canonical import paths omit the extension.
    pub fn without_ext(&self) -> bool {
        self.without_ext
    }

    /// Validate internal consistency.
    ///
    /// Called automatically by the builder. Available for re-validation after
    /// external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.sources.is_empty() {
            return Err(DomainError::NoSources);
        }
        if self.start_dirs.is_empty() {
            return Err(DomainError::NoStartDirs);
        }
        validate_basename(&self.basename)?;
        for ext in self.generators.extensions() {
            validate_extension(ext)?;
        }
        Ok(())
    }
}

fn validate_basename(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidBasename {
            name: name.into(),
            reason: "must not be empty".into(),
        });
    }
    if name.contains(['/', '\\']) {
        return Err(DomainError::InvalidBasename {
            name: name.into(),
            reason: "must not contain path separators".into(),
        });
    }
    if name.contains('.') {
        return Err(DomainError::InvalidBasename {
            name: name.into(),
            reason: "must be a bare stem without an extension".into(),
        });
    }
    Ok(())
}

/// Generator keys are normalized (leading dot) before this runs; the body
/// after the dot must be one plain segment. The classifier extracts only a
/// file's final extension, so a multi-segment key like `.d.ts` could never
/// match anything.
fn validate_extension(ext: &str) -> Result<(), DomainError> {
    let body = ext.strip_prefix('.').unwrap_or(ext);
    if body.is_empty() {
        return Err(DomainError::InvalidExtension {
            ext: ext.into(),
            reason: "must name an extension after the dot".into(),
        });
    }
    if body.contains(['/', '\\', '.']) || body.chars().any(char::is_whitespace) {
        return Err(DomainError::InvalidExtension {
            ext: ext.into(),
            reason: "must be a single extension segment".into(),
        });
    }
    Ok(())
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`BarrelConfig`].
#[derive(Debug, Default)]
pub struct BarrelConfigBuilder {
    sources: Vec<PathBuf>,
    start_dirs: Vec<PathBuf>,
    basename: Option<String>,
    generators: GeneratorMap,
    without_ext: bool,
}

impl BarrelConfigBuilder {
    /// Append one source root (precedence = insertion order).
    pub fn source(mut self, source: impl Into<PathBuf>) -> Self {
        self.sources.push(source.into());
        self
    }

    /// Append several source roots at once.
    pub fn sources<I, P>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    /// Append one output root directory.
    pub fn start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dirs.push(dir.into());
        self
    }

    /// Append several output root directories at once.
    pub fn start_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.start_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Set the shared filename stem (e.g. `index`).
    pub fn basename(mut self, basename: impl Into<String>) -> Self {
        self.basename = Some(basename.into());
        self
    }

    /// Register a generator function for one extension.
    pub fn generator(
        mut self,
        ext: impl AsRef<str>,
        generator: impl Fn(&str) -> String + Send + Sync + 'static,
    ) -> Self {
        self.generators.register(ext, generator);
        self
    }

    /// Omit extensions from canonical import paths.
    pub fn without_ext(mut self, without_ext: bool) -> Self {
        self.without_ext = without_ext;
        self
    }

    /// Validate and construct the configuration.
    pub fn build(self) -> Result<BarrelConfig, DomainError> {
        let config = BarrelConfig {
            sources: self.sources,
            start_dirs: self.start_dirs,
            basename: self
                .basename
                .ok_or(DomainError::MissingRequiredField { field: "basename" })?,
            generators: self.generators,
            without_ext: self.without_ext,
        };
        config.validate()?;
        Ok(config)
    }
}

/// The manifest path for one start directory: `<start_dir>/<basename>.json`.
pub fn manifest_path(start_dir: &Path, basename: &str) -> PathBuf {
    start_dir.join(crate::domain::paths::manifest_file_name(basename))
}
