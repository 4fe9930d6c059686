//! Library probe for a single provider.
//!
//! A `LibraryProbe` looks at the live filesystem once, when it is built,
//! and records what it saw in a [`ResolvedLibrary`]. To check again after
//! an install, build a new probe with [`LibraryProbe::reprobe`].
//!
//! The library version is read from the file name the library symlink
//! points at: `libreadline.dylib -> libreadline.5.2.dylib` gives version 5.
//! A real file name without at least two dot-separated segments, or whose
//! second segment is not a number, counts as "library not found".

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::environment::ProbeEnv;
use super::provider::Provider;
use super::tool::{locate, locate_command, resolve_link};

/// What probing one provider found on this system.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedLibrary {
    /// Absolute path of the header, if found.
    pub header_path: Option<PathBuf>,
    /// Absolute path of the library after one level of symlink.
    pub library_path: Option<PathBuf>,
    /// Major version read from the library's real file name.
    pub version: Option<u32>,
    /// Required commands absent from the command search path.
    pub missing_commands: Vec<String>,
    /// Location of the provider's detection command.
    pub tool_path: Option<PathBuf>,
}

impl ResolvedLibrary {
    /// Whether the header was found.
    pub fn header_found(&self) -> bool {
        self.header_path.is_some()
    }

    /// Whether the library was found with a readable version.
    pub fn lib_found(&self) -> bool {
        self.library_path.is_some() && self.version.is_some()
    }

    /// Directory holding the library.
    pub fn library_dir(&self) -> Option<&Path> {
        self.library_path.as_deref().and_then(Path::parent)
    }

    /// Directory holding the header.
    pub fn header_dir(&self) -> Option<&Path> {
        self.header_path.as_deref().and_then(Path::parent)
    }
}

/// A provider together with the result of probing it.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryProbe {
    provider: Provider,
    resolved: ResolvedLibrary,
}

impl LibraryProbe {
    /// Probe `provider` against the filesystem and `env`.
    pub fn probe(provider: Provider, env: &ProbeEnv) -> Self {
        let _span = tracing::debug_span!("probe", provider = %provider.name).entered();

        let missing_commands: Vec<String> = provider
            .commands
            .iter()
            .filter(|cmd| locate_command(cmd, env.command_path()).is_none())
            .cloned()
            .collect();
        if !missing_commands.is_empty() {
            tracing::debug!("missing commands: {}", missing_commands.join(", "));
        }

        let tool_path = provider
            .detect_command
            .as_deref()
            .and_then(|cmd| locate_command(cmd, env.command_path()));

        let header_path = locate(&provider.header_file, &provider.header_paths, true);

        let (library_path, version) = match resolve_library(&provider) {
            Some((path, version)) => (Some(path), Some(version)),
            None => (None, None),
        };

        let resolved = ResolvedLibrary {
            header_path,
            library_path,
            version,
            missing_commands,
            tool_path,
        };
        tracing::debug!(
            header = resolved.header_found(),
            library = resolved.lib_found(),
            version = ?resolved.version,
            "probe finished"
        );

        Self { provider, resolved }
    }

    /// Probe the same provider again.
    pub fn reprobe(&self, env: &ProbeEnv) -> Self {
        Self::probe(self.provider.clone(), env)
    }

    /// The provider this probe describes.
    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    /// Provider display name.
    pub fn name(&self) -> &str {
        &self.provider.name
    }

    /// Probe results.
    pub fn resolved(&self) -> &ResolvedLibrary {
        &self.resolved
    }

    /// True when the header was found on a header path.
    pub fn header_found(&self) -> bool {
        self.resolved.header_found()
    }

    /// True when a library candidate resolved to a file with a version.
    pub fn lib_found(&self) -> bool {
        self.resolved.lib_found()
    }

    /// True with no configured range, or when the detected version is in it.
    pub fn version_accepted(&self) -> bool {
        match (&self.provider.version, self.resolved.version) {
            (None, _) => true,
            (Some(range), Some(version)) => range.contains(version),
            (Some(_), None) => false,
        }
    }

    /// Header and library present, and the version accepted.
    pub fn fully_ok(&self) -> bool {
        self.header_found() && self.lib_found() && self.version_accepted()
    }

    /// Every required command is present and an install command exists.
    pub fn is_usable(&self) -> bool {
        self.resolved.missing_commands.is_empty() && self.provider.install_command.is_some()
    }

    /// Where this provider would install the library.
    pub fn preferred_install_directory(&self) -> Option<&str> {
        self.provider.library_paths.first()
    }

    /// Path of the provider's detection command, if configured and found.
    pub fn detected_tool(&self) -> Option<&Path> {
        self.resolved.tool_path.as_deref()
    }

    /// Run the install command through `run_command` if the provider is usable.
    ///
    /// Returns whether an install was attempted. The command's own outcome
    /// is left to `run_command` to report.
    pub fn run_install(&self, run_command: &dyn Fn(&str) -> bool) -> bool {
        if !self.is_usable() {
            return false;
        }
        let Some(command) = self.provider.install_command.as_deref() else {
            return false;
        };

        tracing::info!("installing {} via {}", self.provider.library, self.provider.name);
        if !run_command(command) {
            tracing::warn!("install command for {} did not succeed", self.provider.name);
        }
        true
    }
}

/// Library filenames to try, in order: as configured, without a leading
/// `lib`, with a leading `lib`. Repeats are skipped.
pub fn library_candidates(filename: &str) -> Vec<String> {
    let mut candidates = vec![filename.to_string()];
    let mut push = |name: String| {
        if !name.is_empty() && !candidates.contains(&name) {
            candidates.push(name);
        }
    };
    if let Some(stripped) = filename.strip_prefix("lib") {
        push(stripped.to_string());
    }
    push(format!("lib{}", filename));
    candidates
}

/// Major version from a library's real file name.
///
/// `libreadline.5.2.dylib` gives 5. Names with fewer than two
/// dot-separated segments, or a non-numeric second segment, give `None`.
pub fn parse_library_version(file_name: &str) -> Option<u32> {
    let mut segments = file_name.split('.');
    segments.next()?;
    segments.next()?.parse().ok()
}

fn resolve_library(provider: &Provider) -> Option<(PathBuf, u32)> {
    library_candidates(&provider.library_file)
        .iter()
        .find_map(|candidate| resolve_library_file(candidate, provider))
}

fn resolve_library_file(filename: &str, provider: &Provider) -> Option<(PathBuf, u32)> {
    let found = locate(filename, &provider.library_paths, false)?;
    let target = resolve_link(&found)?;

    let dir = found.parent().unwrap_or_else(|| Path::new("/"));
    let full = dir.join(&target);
    let full = std::path::absolute(&full).unwrap_or(full);

    let real_name = full.file_name()?.to_str()?;
    let version = parse_library_version(real_name)?;
    tracing::debug!("{} resolves to {} (version {})", found.display(), full.display(), version);
    Some((full, version))
}
