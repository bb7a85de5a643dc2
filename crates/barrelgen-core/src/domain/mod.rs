//! Core domain layer for barrelgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns (directory listing, file writes, partition resolution)
//! are handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable configuration**: `BarrelConfig` is built once, then read-only
//! - **Owned pipeline state**: each generation pipeline owns its `ImportMap`

pub mod config;
pub mod error;
pub mod import_map;
pub mod partition;
pub mod paths;
pub mod render;

// Re-exports for convenience
pub use config::{
    BarrelConfig, BarrelConfigBuilder, GeneratorMap, ImportExprGenerator, manifest_path,
    normalize_ext,
};
pub use error::{DomainError, ErrorCategory};
pub use import_map::ImportMap;
pub use partition::PartitionedImports;
pub use paths::{
    canonical_import_path, file_extension, is_manifest_file, manifest_file_name, output_file_name,
};
pub use render::render_import_texts;
