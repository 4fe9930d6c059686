//! Shell command execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{execute, run_install, CommandResult};
pub use platform::{is_ci, is_ci_with};
