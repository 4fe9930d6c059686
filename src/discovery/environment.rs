//! Command search path used while probing.
//!
//! Required commands are looked up on the inherited `PATH` plus any extra
//! directories from config or `--extra-path`. The process environment is
//! only read; extra directories affect this crate's own lookups and never
//! the environment handed to child processes.

use super::path_set::PathSet;

/// Environment captured once per run and shared by every provider probe.
#[derive(Debug, Clone, Default)]
pub struct ProbeEnv {
    command_path: PathSet,
}

impl ProbeEnv {
    /// Capture the process `PATH` followed by `extra` directories.
    pub fn from_process(extra: &PathSet) -> Self {
        Self::from_env_fn(extra, |key: &str| std::env::var(key))
    }

    /// Capture using a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn from_env_fn<F>(extra: &PathSet, env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let mut command_path = env_fn("PATH")
            .map(|p| PathSet::from_joined(&p))
            .unwrap_or_default();
        command_path.extend_from(extra);
        tracing::debug!("command search path: {}", command_path);
        Self { command_path }
    }

    /// Use exactly the given command search path.
    pub fn with_command_path(command_path: PathSet) -> Self {
        Self { command_path }
    }

    /// Directories searched for required commands, in priority order.
    pub fn command_path(&self) -> &PathSet {
        &self.command_path
    }
}
