//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case: "generate barrel files for every configured root".

pub mod generate_service;

pub use generate_service::{GenerateService, GenerateSummary, RootOutcome};
