//! Shell command execution.
//!
//! Install commands are run verbatim through `sh -c` so that pipelines and
//! `&&` chains in configured commands behave as they would at a prompt.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{LibscoutError, Result};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

/// Execute a shell command with the terminal attached.
///
/// Returns `CommandFailed` only when the shell cannot be started. A command
/// that runs and exits non-zero is reported through [`CommandResult`].
pub fn execute(command: &str) -> Result<CommandResult> {
    let start = Instant::now();

    tracing::debug!("sh -c {}", command);
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| {
            tracing::warn!("failed to start shell: {}", e);
            LibscoutError::CommandFailed {
                command: command.to_string(),
                code: None,
            }
        })?;

    Ok(CommandResult {
        exit_code: status.code(),
        duration: start.elapsed(),
        success: status.success(),
    })
}

/// Run an install command with the terminal attached.
///
/// Used as the runner handed to `LibraryProbe::run_install`.
pub fn run_install(command: &str) -> bool {
    match execute(command) {
        Ok(result) if result.success => {
            tracing::info!("install finished in {:.1?}", result.duration);
            true
        }
        Ok(result) => {
            tracing::warn!("install exited with {:?}", result.exit_code);
            false
        }
        Err(e) => {
            tracing::warn!("{}", e);
            false
        }
    }
}
