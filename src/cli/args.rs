//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::discovery::VersionRange;

/// libscout - Find a usable copy of a C library, or help install one.
#[derive(Debug, Parser)]
#[command(name = "libscout")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ./.libscout.yml and the built-in config)
    #[arg(short, long, global = true, env = "LIBSCOUT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Extra directories to search for commands (colon-separated)
    #[arg(long, global = true, env = "LIBSCOUT_EXTRA_PATH", value_name = "DIRS")]
    pub extra_path: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find the library, pick a provider, and install if needed (default)
    Advise(AdviseArgs),

    /// Show what every provider finds on this system
    Probe(ProbeArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `advise` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AdviseArgs {
    /// Run the install command without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Print the install command instead of running it
    #[arg(long)]
    pub dry_run: bool,

    /// Use defaults, no prompts
    #[arg(long)]
    pub non_interactive: bool,

    /// Accepted library versions for every provider (e.g. 5..6, 5.., ..6, any)
    #[arg(long, value_name = "RANGE")]
    pub accept: Option<VersionRange>,
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Accepted library versions for every provider
    #[arg(long, value_name = "RANGE")]
    pub accept: Option<VersionRange>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
