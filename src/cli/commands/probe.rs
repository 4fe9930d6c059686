//! Probe command implementation.
//!
//! The `libscout probe` command shows what every configured provider finds,
//! without selecting or installing anything.

use serde::Serialize;

use crate::cli::args::ProbeArgs;
use crate::discovery::{LibraryProbe, ToolRegistry};
use crate::error::{LibscoutError, Result};
use crate::ui::{Table, UserInterface};

use super::context::ScoutContext;
use super::dispatcher::{Command, CommandResult};

/// Summary state of one provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderStatus {
    /// Header and library present with an accepted version.
    Ok,
    /// Library present but its version is outside the accepted range.
    WrongVersion,
    /// Not present, but every required command is available to install it.
    Installable,
    /// Neither present nor installable.
    Unavailable,
}

impl ProviderStatus {
    pub fn of(probe: &LibraryProbe) -> Self {
        if probe.fully_ok() {
            ProviderStatus::Ok
        } else if probe.is_usable() {
            ProviderStatus::Installable
        } else if probe.lib_found() && !probe.version_accepted() {
            ProviderStatus::WrongVersion
        } else {
            ProviderStatus::Unavailable
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProviderStatus::Ok => "ok",
            ProviderStatus::WrongVersion => "wrong version",
            ProviderStatus::Installable => "installable",
            ProviderStatus::Unavailable => "unavailable",
        }
    }
}

/// One entry of the JSON report.
#[derive(Debug, Serialize)]
pub struct ProbeReport<'a> {
    pub status: ProviderStatus,
    #[serde(flatten)]
    pub probe: &'a LibraryProbe,
}

/// Build the report rows in registry order.
pub fn build_report(registry: &ToolRegistry) -> Vec<ProbeReport<'_>> {
    registry
        .iter()
        .map(|probe| ProbeReport {
            status: ProviderStatus::of(probe),
            probe,
        })
        .collect()
}

fn render_table(registry: &ToolRegistry) -> Table {
    let mut table = Table::new(&["Provider", "Status", "Version", "Library", "Header", "Missing"]);
    for probe in registry.iter() {
        let resolved = probe.resolved();
        let show = |p: Option<&std::path::Path>| {
            p.map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string())
        };
        table.add_row(&[
            probe.name().to_string(),
            ProviderStatus::of(probe).label().to_string(),
            resolved
                .version
                .map(|v| v.to_string())
                .unwrap_or_else(|| "-".to_string()),
            show(resolved.library_path.as_deref()),
            show(resolved.header_path.as_deref()),
            resolved.missing_commands.join(", "),
        ]);
    }
    table
}

/// The probe command implementation.
pub struct ProbeCommand {
    context: ScoutContext,
    args: ProbeArgs,
}

impl ProbeCommand {
    /// Create a new probe command.
    pub fn new(context: ScoutContext, args: ProbeArgs) -> Self {
        Self { context, args }
    }
}

impl Command for ProbeCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let system = self.context.probe(self.args.accept)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&build_report(&system.registry))
                .map_err(|e| LibscoutError::Other(e.into()))?;
            println!("{}", json);
        } else {
            ui.show_header(&format!("{} providers ({})", system.config.library, system.source));
            ui.message(&render_table(&system.registry).render());
        }

        Ok(CommandResult::success())
    }
}
