//! Non-interactive UI for CI/headless environments.
//!
//! Prompts are answered from `LIBSCOUT_PROMPT_<KEY>` environment variables
//! when present, otherwise from the prompt's default. A choice with neither
//! is an error rather than a silent guess.

use std::collections::HashMap;

use crate::error::{LibscoutError, Result};

use super::{parse_answer, OutputMode, Prompt, PromptResult, UserInterface};

const OVERRIDE_PREFIX: &str = "LIBSCOUT_PROMPT_";

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(OVERRIDE_PREFIX))
            .collect();

        Self {
            mode,
            env_overrides,
        }
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            env_overrides: overrides,
        }
    }

    fn override_for(&self, key: &str) -> Option<&String> {
        let env_key = format!("{}{}", OVERRIDE_PREFIX, key.to_uppercase());
        self.env_overrides.get(&env_key)
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_progress() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult> {
        if let Some(value) = self.override_for(&prompt.key) {
            return parse_answer(prompt, value).ok_or_else(|| {
                LibscoutError::ConfigValidationError {
                    message: format!(
                        "{}{} has invalid value '{}'",
                        OVERRIDE_PREFIX,
                        prompt.key.to_uppercase(),
                        value
                    ),
                }
            });
        }

        if let Some(answer) = prompt.default.as_deref().and_then(|d| parse_answer(prompt, d)) {
            return Ok(answer);
        }

        Err(LibscoutError::ConfigValidationError {
            message: format!(
                "Cannot prompt for '{}' in non-interactive mode (no default value)",
                prompt.key
            ),
        })
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_progress() {
            println!("\n{}\n", title);
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }
}
