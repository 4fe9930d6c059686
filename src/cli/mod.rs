//! Command-line interface for libscout.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{AdviseArgs, Cli, Commands, CompletionsArgs, ProbeArgs};
pub use commands::{Command, CommandDispatcher, CommandResult, ScoutContext};
