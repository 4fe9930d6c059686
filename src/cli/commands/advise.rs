//! Advise command implementation.
//!
//! The `libscout advise` command finds a usable copy of the library, or
//! picks a provider to install one, then prints the directories and flags
//! needed to build against it.

use crate::cli::args::AdviseArgs;
use crate::discovery::{Advice, LibraryProbe, ProbeEnv, SelectionAdvisor};
use crate::error::Result;
use crate::shell::run_install;
use crate::ui::{Prompt, PromptType, UserInterface};

use super::context::ScoutContext;
use super::dispatcher::{Command, CommandResult};

/// Prompt key for the install confirmation.
pub const INSTALL_PROMPT_KEY: &str = "install";

/// The advise command implementation.
pub struct AdviseCommand {
    context: ScoutContext,
    args: AdviseArgs,
    runner: fn(&str) -> bool,
}

impl AdviseCommand {
    /// Create a new advise command.
    pub fn new(context: ScoutContext, args: AdviseArgs) -> Self {
        Self {
            context,
            args,
            runner: run_install,
        }
    }

    /// Replace the function that runs install commands.
    pub fn with_runner(mut self, runner: fn(&str) -> bool) -> Self {
        self.runner = runner;
        self
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AdviseArgs {
        &self.args
    }

    fn confirm_install(&self, ui: &mut dyn UserInterface, command: &str) -> Result<bool> {
        if self.args.yes {
            return Ok(true);
        }
        let answer = ui.prompt(&Prompt {
            key: INSTALL_PROMPT_KEY.to_string(),
            question: format!("Run `{}` now?", command),
            prompt_type: PromptType::Confirm,
            default: Some("no".to_string()),
        })?;
        Ok(answer.as_bool().unwrap_or(false))
    }

    /// Run the selected provider's install command and probe again.
    ///
    /// Returns the fresh probe when the library is now usable.
    fn install(
        &self,
        ui: &mut dyn UserInterface,
        probe: &LibraryProbe,
        env: &ProbeEnv,
    ) -> Result<Option<LibraryProbe>> {
        let Some(command) = probe.provider().install_command.as_deref() else {
            return Ok(None);
        };

        if self.args.dry_run {
            ui.message(&format!("Would run: {}", command));
            return Ok(None);
        }

        if !self.confirm_install(ui, command)? {
            ui.warning("Install skipped.");
            ui.message(&format!("To install manually, run: {}", command));
            return Ok(None);
        }

        ui.message(&format!("Running: {}", command));
        if !probe.run_install(&self.runner) {
            return Ok(None);
        }

        let fresh = probe.reprobe(env);
        if fresh.fully_ok() {
            ui.success(&format!(
                "{} installed by {}",
                probe.provider().library,
                probe.name()
            ));
            Ok(Some(fresh))
        } else {
            ui.error(&format!(
                "{} still not usable after running the {} install command",
                probe.provider().library,
                probe.name()
            ));
            Ok(None)
        }
    }

    fn show_patch(&self, ui: &mut dyn UserInterface, probe: &LibraryProbe) {
        let resolved = probe.resolved();
        ui.message("PHASE 2: Generating patch");

        if let Some(path) = &resolved.library_path {
            ui.message(&format!("Library path:\t{}", path.display()));
        }
        if let Some(dir) = resolved.library_dir() {
            ui.message(&format!("Library dir:\t{}", dir.display()));
            ui.message(&format!("Linker flags:\t-L{}", dir.display()));
        }
        if let Some(dir) = resolved.header_dir() {
            ui.message(&format!("Include dir:\t{}", dir.display()));
            ui.message(&format!("Compiler flags:\t-I{}", dir.display()));
        }
        if let Some(version) = resolved.version {
            ui.message(&format!("Version:\t{}", version));
        }
        if let Some(tool) = probe.detected_tool() {
            if ui.output_mode().shows_detail() {
                ui.message(&format!("Provider tool:\t{}", tool.display()));
            }
        }
        ui.success(&format!("Use {} from {}", probe.provider().library, probe.name()));
    }
}

impl Command for AdviseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let system = self.context.probe(self.args.accept)?;
        let library = system.config.library.clone();

        ui.message(&format!("PHASE 1: Looking for {} library.", library));
        if ui.output_mode().shows_detail() {
            ui.message(&format!("Config: {}", system.source));
        }

        let advisor = SelectionAdvisor::new(&system.registry, &library);
        let (probe, install_pending) = match advisor.advise(ui)? {
            Advice::Selected {
                probe,
                install_pending,
            } => (probe, install_pending),
            Advice::Failed { missing } => {
                ui.error(&format!("No provider can supply {}.", library));
                for report in &missing {
                    ui.error(&report.describe());
                }
                return Ok(CommandResult::failure(1));
            }
        };

        ui.message(&format!("I will use {} to integrate library.", probe.name()));

        if !install_pending {
            self.show_patch(ui, probe);
            return Ok(CommandResult::success());
        }

        match self.install(ui, probe, &system.env)? {
            Some(fresh) => {
                self.show_patch(ui, &fresh);
                Ok(CommandResult::success())
            }
            None if self.args.dry_run => Ok(CommandResult::success()),
            None => Ok(CommandResult::failure(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::PathSet;
    use crate::ui::MockUI;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_config(root: &Path, body: &str) {
        fs::write(root.join(".libscout.yml"), body).unwrap();
    }

    fn context(root: &Path) -> ScoutContext {
        ScoutContext::new(root).with_probe_env(ProbeEnv::with_command_path(PathSet::new()))
    }

    fn installed_config(root: &Path) -> String {
        let lib = root.join("lib");
        let include = root.join("include");
        fs::create_dir_all(&lib).unwrap();
        fs::create_dir_all(&include).unwrap();
        fs::write(lib.join("libreadline.5.2.dylib"), "").unwrap();
        fs::write(include.join("readline.h"), "").unwrap();
        format!(
            "library_file: libreadline.5.2.dylib\nversion: {{ min: 5 }}\nproviders:\n  - name: local\n    library_paths: {}\n    header_paths: {}\n",
            lib.display(),
            include.display()
        )
    }

    #[test]
    fn existing_library_prints_patch() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), &installed_config(temp.path()));

        let mut ui = MockUI::new();
        let result = AdviseCommand::new(context(temp.path()), AdviseArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("PHASE 1: Looking for readline library."));
        assert!(ui.has_message("I will use local to integrate library."));
        assert!(ui.has_message("PHASE 2: Generating patch"));
        assert!(ui.has_message("Version:\t5"));
        let lib_dir = temp.path().join("lib");
        assert!(ui.has_message(&format!("-L{}", lib_dir.display())));
    }

    #[test]
    fn verbose_mode_reports_config_source() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), &installed_config(temp.path()));

        let mut quiet = MockUI::new();
        AdviseCommand::new(context(temp.path()), AdviseArgs::default())
            .execute(&mut quiet)
            .unwrap();
        assert!(!quiet.has_message("Config: "));

        let mut verbose = MockUI::new();
        verbose.set_output_mode(crate::ui::OutputMode::Verbose);
        AdviseCommand::new(context(temp.path()), AdviseArgs::default())
            .execute(&mut verbose)
            .unwrap();
        assert!(verbose.has_message("Config: "));
    }

    #[test]
    fn accept_range_can_reject_existing_library() {
        let temp = TempDir::new().unwrap();
        write_config(temp.path(), &installed_config(temp.path()));

        let args = AdviseArgs {
            accept: Some(crate::discovery::VersionRange::at_least(6)),
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let result = AdviseCommand::new(context(temp.path()), args)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_message("Cannot find any proper version of readline library."));
        assert!(ui.has_error("local: no install command configured"));
    }

    #[test]
    fn nothing_usable_lists_missing_commands() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "providers:\n  - name: fink\n    commands: fink:curl\n    install_command: fink install readline5\n",
        );

        let mut ui = MockUI::new();
        let result = AdviseCommand::new(context(temp.path()), AdviseArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("No provider can supply readline."));
        assert!(ui.has_error("fink: missing fink, curl"));
    }

    #[test]
    fn dry_run_prints_install_command() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "providers:\n  - name: script\n    install_command: make install\n",
        );

        let args = AdviseArgs {
            dry_run: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let result = AdviseCommand::new(context(temp.path()), args)
            .with_runner(|_| panic!("dry run must not execute"))
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("The only available method to install readline is to use script."));
        assert!(ui.has_message("Would run: make install"));
    }

    #[test]
    fn declined_install_does_not_run() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "providers:\n  - name: script\n    install_command: make install\n",
        );

        let mut ui = MockUI::new();
        ui.set_prompt_response(INSTALL_PROMPT_KEY, "n");
        let result = AdviseCommand::new(context(temp.path()), AdviseArgs::default())
            .with_runner(|_| panic!("declined install must not execute"))
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_warning("Install skipped."));
    }

    #[test]
    fn install_then_reprobe_reports_new_library() {
        let temp = TempDir::new().unwrap();
        let lib = temp.path().join("lib");
        let include = temp.path().join("include");
        fs::create_dir_all(&lib).unwrap();
        fs::create_dir_all(&include).unwrap();
        let command = format!(
            "touch {}/libreadline.6.0.dylib {}/readline.h",
            lib.display(),
            include.display()
        );
        write_config(
            temp.path(),
            &format!(
                "library_file: libreadline.6.0.dylib\nproviders:\n  - name: script\n    install_command: {}\n    library_paths: {}\n    header_paths: {}\n",
                command,
                lib.display(),
                include.display()
            ),
        );

        let args = AdviseArgs {
            yes: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let result = AdviseCommand::new(context(temp.path()), args)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.successes().iter().any(|s| s == "readline installed by script"));
        assert!(ui.has_message("PHASE 2: Generating patch"));
    }

    #[test]
    fn failed_install_is_reported() {
        let temp = TempDir::new().unwrap();
        write_config(
            temp.path(),
            "providers:\n  - name: script\n    install_command: exit 1\n",
        );

        let args = AdviseArgs {
            yes: true,
            ..Default::default()
        };
        let mut ui = MockUI::new();
        let result = AdviseCommand::new(context(temp.path()), args)
            .with_runner(|_| false)
            .execute(&mut ui)
            .unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("still not usable"));
    }
}
