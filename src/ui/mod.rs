//! User interface components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for interactive terminal usage
//! - [`NonInteractiveUI`] for CI/headless environments
//! - [`MockUI`] for tests
//! - [`ChoiceDialog`], the numbered menu read from standard input
//!
//! Status text goes to stdout. Prompts, warnings and errors go to stderr.
//!
//! # Example
//!
//! ```
//! use libscout::ui::{create_ui, OutputMode};
//!
//! // Use non-interactive mode for testability
//! let mut ui = create_ui(false, OutputMode::Quiet);
//! ui.show_header("libscout");
//! ui.success("Library found");
//! ```

pub mod dialog;
pub mod mock;
pub mod non_interactive;
pub mod output;
pub mod prompts;
pub mod table;
pub mod terminal;
pub mod theme;

pub use dialog::ChoiceDialog;
pub use mock::MockUI;
pub use non_interactive::NonInteractiveUI;
pub use output::OutputMode;
pub use prompts::prompt_user;
pub use table::Table;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ScoutTheme};

use crate::error::Result;

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a status message.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning on the diagnostic stream.
    fn warning(&mut self, msg: &str);

    /// Display an error on the diagnostic stream.
    fn error(&mut self, msg: &str);

    /// Show a prompt and get user input.
    fn prompt(&mut self, prompt: &Prompt) -> Result<PromptResult>;

    /// Show a header/banner.
    fn show_header(&mut self, title: &str);

    /// Check if running in interactive mode.
    fn is_interactive(&self) -> bool;
}

/// A prompt to show to the user.
#[derive(Debug, Clone)]
pub struct Prompt {
    /// Unique key for the prompt (used for overrides and test responses).
    pub key: String,
    /// The question to display. For choices, names what is being chosen.
    pub question: String,
    /// The type of prompt.
    pub prompt_type: PromptType,
    /// Default value used when nobody can answer.
    pub default: Option<String>,
}

/// The type of prompt.
#[derive(Debug, Clone)]
pub enum PromptType {
    /// Yes/no confirmation.
    Confirm,
    /// Pick one of several labelled entries by 1-based number.
    Choice { options: Vec<String> },
}

/// Result of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    /// Boolean result from confirm.
    Bool(bool),
    /// Zero-based index from a choice.
    Index(usize),
}

impl PromptResult {
    /// Get as bool if this is a Bool result.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as index if this is an Index result.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(i) => Some(*i),
            _ => None,
        }
    }
}

/// Interpret a textual answer for `prompt`.
///
/// Confirm answers accept `yes`/`y`/`true`/`1`. Choice answers are 1-based
/// numbers and must fall inside the option list.
pub(crate) fn parse_answer(prompt: &Prompt, answer: &str) -> Option<PromptResult> {
    let answer = answer.trim();
    match &prompt.prompt_type {
        PromptType::Confirm => Some(PromptResult::Bool(matches!(
            answer.to_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ))),
        PromptType::Choice { options } => match answer.parse::<usize>() {
            Ok(n) if (1..=options.len()).contains(&n) => Some(PromptResult::Index(n - 1)),
            _ => None,
        },
    }
}
