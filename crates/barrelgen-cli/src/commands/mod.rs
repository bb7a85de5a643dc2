//! Command handlers.
//!
//! Each submodule implements one subcommand: argument structs live in
//! `crate::cli`, orchestration lives here, and all real work happens in
//! `barrelgen-core` behind injected adapters.

pub mod completions;
pub mod generate;
pub mod init;
