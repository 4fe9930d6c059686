//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that look at the system
//! share a [`ScoutContext`] for config loading and probing.

pub mod advise;
pub mod completions;
pub mod context;
pub mod dispatcher;
pub mod probe;

pub use advise::AdviseCommand;
pub use context::{ProbedSystem, ScoutContext};
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
pub use probe::{ProbeCommand, ProviderStatus};
