//! Partition resolver adapters.

mod fixed;
mod manifest;

pub use fixed::FixedPartitionResolver;
pub use manifest::ManifestPartitionResolver;
