//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "barrelgen",
    bin_name = "barrelgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f6e2} Automatic barrel-file generation",
    long_about = "barrelgen discovers importable directories under configured \
                  source roots and writes one aggregated import module per \
                  registered file extension.",
    after_help = "EXAMPLES:\n\
        \x20 barrelgen generate\n\
        \x20 barrelgen generate --dry-run\n\
        \x20 barrelgen init\n\
        \x20 barrelgen completions bash > /usr/share/bash-completion/completions/barrelgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate barrel files for every configured root.
    #[command(
        visible_alias = "gen",
        about = "Generate barrel files",
        after_help = "EXAMPLES:\n\
            \x20 barrelgen generate\n\
            \x20 barrelgen generate --dry-run\n\
            \x20 barrelgen generate --config tools/barrelgen.toml"
    )]
    Generate(GenerateArgs),

    /// Initialise a barrelgen configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 barrelgen init           # ./barrelgen.toml\n\
            \x20 barrelgen init --force   # overwrite existing"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 barrelgen completions bash > ~/.local/share/bash-completion/completions/barrelgen\n\
            \x20 barrelgen completions zsh  > ~/.zfunc/_barrelgen\n\
            \x20 barrelgen completions fish > ~/.config/fish/completions/barrelgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `barrelgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Preview the generated files without writing anything to disk.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `barrelgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `barrelgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn generate_accepts_dry_run() {
        let cli = Cli::try_parse_from(["barrelgen", "generate", "--dry-run"]).unwrap();
        match cli.command {
            Commands::Generate(args) => assert!(args.dry_run),
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn gen_alias_resolves_to_generate() {
        let cli = Cli::try_parse_from(["barrelgen", "gen"]).unwrap();
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["barrelgen", "generate", "-v", "-q"]).is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli =
            Cli::try_parse_from(["barrelgen", "generate", "--config", "custom.toml"]).unwrap();
        assert_eq!(
            cli.global.config,
            Some(std::path::PathBuf::from("custom.toml"))
        );
    }
}
