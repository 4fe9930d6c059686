//! Provider selection.
//!
//! The advisor first looks for providers whose library is already present
//! and accepted. Only when there are none does it fall back to providers
//! that can install the library. At either stage a single candidate is
//! taken as is and several candidates are offered to the user as a
//! numbered choice, in registry order.

use serde::Serialize;

use crate::error::Result;
use crate::ui::{Prompt, PromptType, UserInterface};

use super::library::LibraryProbe;
use super::registry::ToolRegistry;

/// Prompt key for choosing between installed copies.
pub const LIBRARY_PROMPT_KEY: &str = "library";
/// Prompt key for choosing between installers.
pub const INSTALLER_PROMPT_KEY: &str = "installer";

/// Outcome of [`SelectionAdvisor::advise`].
#[derive(Debug, Clone)]
pub enum Advice<'a> {
    /// One provider was chosen. With `install_pending`, the library is not
    /// present yet and the provider's install command should be run.
    Selected {
        probe: &'a LibraryProbe,
        install_pending: bool,
    },
    /// Nothing is installed and nothing can install it.
    Failed { missing: Vec<MissingReport> },
}

/// Why a provider cannot install the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingReport {
    /// Provider name.
    pub provider: String,
    /// Required commands not found when the provider was probed.
    pub missing_commands: Vec<String>,
    /// Whether the provider has an install command at all.
    pub has_install_command: bool,
}

impl MissingReport {
    fn for_probe(probe: &LibraryProbe) -> Self {
        Self {
            provider: probe.name().to_string(),
            missing_commands: probe.resolved().missing_commands.clone(),
            has_install_command: probe.provider().install_command.is_some(),
        }
    }

    /// One-line explanation, e.g. `fink: missing fink, curl`.
    pub fn describe(&self) -> String {
        match (self.missing_commands.is_empty(), self.has_install_command) {
            (false, _) => format!(
                "{}: missing {}",
                self.provider,
                self.missing_commands.join(", ")
            ),
            (true, false) => format!("{}: no install command configured", self.provider),
            (true, true) => format!("{}: unavailable", self.provider),
        }
    }
}

/// Picks one provider from a registry.
pub struct SelectionAdvisor<'a> {
    registry: &'a ToolRegistry,
    library: String,
}

impl<'a> SelectionAdvisor<'a> {
    /// Create an advisor for `library` over `registry`.
    pub fn new(registry: &'a ToolRegistry, library: &str) -> Self {
        Self {
            registry,
            library: library.to_string(),
        }
    }

    /// Run the selection, prompting through `ui` when candidates tie.
    pub fn advise(&self, ui: &mut dyn UserInterface) -> Result<Advice<'a>> {
        let found = self.registry.fully_ok();
        if let Some(probe) = self.pick(&found, ui, LIBRARY_PROMPT_KEY, "the library", |p| {
            format!("Use {} (managed by {})", library_label(p), p.name())
        })? {
            tracing::info!("selected existing library from {}", probe.name());
            return Ok(Advice::Selected {
                probe,
                install_pending: false,
            });
        }

        ui.message(&format!(
            "Cannot find any proper version of {} library.",
            self.library
        ));
        ui.message("I'll try to assist you in building or installing one.");

        let usable = self.registry.usable();
        if usable.len() == 1 {
            ui.message(&format!(
                "The only available method to install {} is to use {}.",
                self.library,
                usable[0].name()
            ));
        }
        let library = self.library.clone();
        if let Some(probe) = self.pick(&usable, ui, INSTALLER_PROMPT_KEY, "building tool", |p| {
            format!(
                "Use {} (installs {} in {})",
                p.name(),
                library,
                p.preferred_install_directory().unwrap_or("an unknown location")
            )
        })? {
            tracing::info!("selected installer {}", probe.name());
            return Ok(Advice::Selected {
                probe,
                install_pending: true,
            });
        }

        let missing: Vec<MissingReport> = self.registry.iter().map(MissingReport::for_probe).collect();
        tracing::info!("no provider available for {}", self.library);
        Ok(Advice::Failed { missing })
    }

    fn pick(
        &self,
        candidates: &[&'a LibraryProbe],
        ui: &mut dyn UserInterface,
        key: &str,
        what: &str,
        label: impl Fn(&LibraryProbe) -> String,
    ) -> Result<Option<&'a LibraryProbe>> {
        match candidates {
            [] => Ok(None),
            [only] => Ok(Some(*only)),
            _ => {
                let prompt = Prompt {
                    key: key.to_string(),
                    question: what.to_string(),
                    prompt_type: PromptType::Choice {
                        options: candidates.iter().map(|p| label(*p)).collect(),
                    },
                    default: Some("1".to_string()),
                };
                let answer = ui.prompt(&prompt)?;
                let index = answer.as_index().unwrap_or(0).min(candidates.len() - 1);
                Ok(Some(candidates[index]))
            }
        }
    }
}

fn library_label(probe: &LibraryProbe) -> String {
    probe
        .resolved()
        .library_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_default()
}
