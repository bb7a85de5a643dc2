//! Barrelgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the barrelgen
//! barrel-file generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          barrelgen-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │    Per-root Generation Pipelines        │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Filesystem, PartitionResolver)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    barrelgen-adapters (Infrastructure)  │
//! │ (LocalFilesystem, ManifestResolver, etc)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (BarrelConfig, ImportMap, Renderer)     │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use barrelgen_core::{
//!     application::GenerateService,
//!     domain::BarrelConfig,
//! };
//!
//! // 1. Build the configuration
//! let config = BarrelConfig::builder()
//!     .source("src/shared/components")
//!     .source("src/app/components")
//!     .start_dir("src/app")
//!     .basename("index")
//!     .generator(".tsx", |path| format!("import './{path}';\n"))
//!     .build()
//!     .unwrap();
//!
//! // 2. Use the application service (with injected adapters)
//! let service = GenerateService::new(config, resolver, filesystem);
//! let summary = service.generate_all().await;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService, GenerateSummary, RootOutcome,
        ports::{DirEntry, EntryKind, Filesystem, PartitionResolver},
    };
    pub use crate::domain::{
        BarrelConfig, BarrelConfigBuilder, GeneratorMap, ImportMap, PartitionedImports,
        canonical_import_path, manifest_file_name, output_file_name, render_import_texts,
    };
    pub use crate::error::{BarrelError, BarrelResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
