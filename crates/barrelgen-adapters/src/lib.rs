//! Infrastructure adapters for barrelgen.
//!
//! This crate implements the ports defined in
//! `barrelgen-core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod resolver;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use resolver::{FixedPartitionResolver, ManifestPartitionResolver};
