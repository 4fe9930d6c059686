//! Interactive prompts.

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Confirm;

use crate::error::{LibscoutError, Result};

use super::dialog::ChoiceDialog;
use super::{Prompt, PromptResult, PromptType};

/// Convert dialoguer errors to LibscoutError.
fn map_dialoguer_err(e: dialoguer::Error) -> LibscoutError {
    LibscoutError::Io(e.into())
}

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Prompt the user for input on `term`.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    match &prompt.prompt_type {
        PromptType::Confirm => prompt_confirm(prompt, term),
        PromptType::Choice { options } => prompt_choice(prompt, options, term),
    }
}

fn prompt_confirm(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let default = prompt
        .default
        .as_ref()
        .map(|s| s.to_lowercase() == "true" || s == "y" || s == "yes")
        .unwrap_or(false);

    let result = Confirm::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .default(default)
        .interact_on(term)
        .map_err(map_dialoguer_err)?;

    Ok(PromptResult::Bool(result))
}

// Line-based rather than a dialoguer Select so that piped answers work.
fn prompt_choice(prompt: &Prompt, options: &[String], term: &Term) -> Result<PromptResult> {
    let mut dialog = ChoiceDialog::new(std::io::stdin().lock(), term.clone());
    let index = dialog.choose(options, &prompt.question, |label| label.clone())?;
    Ok(PromptResult::Index(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_has_no_prefix() {
        let theme = prompt_theme();
        assert_eq!(theme.prompt_prefix.to_string(), "");
    }

    #[test]
    fn dialoguer_errors_map_to_io() {
        let err = map_dialoguer_err(dialoguer::Error::IO(std::io::Error::other("closed")));
        assert!(matches!(err, LibscoutError::Io(_)));
    }
}
