//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it — it receives a
//! validated [`BarrelConfig`] built from this.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `--config <FILE>` (must exist)
//! 2. `./barrelgen.toml` (optional)
//! 3. Built-in defaults (empty — `generate` rejects them with a hint)

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use barrelgen_core::domain::BarrelConfig;

use crate::error::{CliError, CliResult};

/// Default config file name, resolved against the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "barrelgen.toml";

/// Application configuration, as declared in `barrelgen.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Source roots, precedence order (first wins).
    #[serde(default)]
    pub sources: Vec<PathBuf>,
    /// Output roots; one generation pipeline per entry.
    #[serde(default)]
    pub start_dirs: Vec<PathBuf>,
    /// Shared stem for generated files and the per-root manifest.
    #[serde(default = "default_basename")]
    pub basename: String,
    /// Omit extensions from canonical import paths.
    #[serde(default)]
    pub without_ext: bool,
    /// Extension → import-expression template. `{path}` is replaced with the
    /// canonical import path; the template owns separators and newlines.
    #[serde(default)]
    pub generators: IndexMap<String, String>,
}

fn default_basename() -> String {
    "index".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sources: Vec::new(),
            start_dirs: Vec::new(),
            basename: default_basename(),
            without_ext: false,
            generators: IndexMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an explicit path or the default location.
    ///
    /// An explicit `--config` path must exist; the default `barrelgen.toml`
    /// is optional and falls back to (empty) defaults.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        match explicit {
            Some(path) => Self::read(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::read(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("Failed to read '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?;
        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("Failed to parse '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// A populated example configuration, written by `barrelgen init`.
    pub fn starter() -> Self {
        Self {
            sources: vec![
                PathBuf::from("src/shared/components"),
                PathBuf::from("src/app/components"),
            ],
            start_dirs: vec![PathBuf::from("src/app")],
            basename: default_basename(),
            without_ext: false,
            generators: IndexMap::from_iter([
                (".tsx".to_string(), "import './{path}';\n".to_string()),
                (".scss".to_string(), "@import '{path}';\n".to_string()),
            ]),
        }
    }

    /// Build the validated core configuration.
    ///
    /// Each generator template becomes a pure closure over `{path}`.
    pub fn to_barrel_config(&self) -> CliResult<BarrelConfig> {
        let mut builder = BarrelConfig::builder()
            .sources(self.sources.iter().cloned())
            .start_dirs(self.start_dirs.iter().cloned())
            .basename(self.basename.clone())
            .without_ext(self.without_ext);

        for (ext, template) in &self.generators {
            let template = template.clone();
            builder = builder.generator(ext, move |path| template.replace("{path}", path));
        }

        builder.build().map_err(|e| CliError::Core(e.into()))
    }
}
