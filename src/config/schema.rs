//! Configuration schema definitions.
//!
//! These types map directly to the YAML configuration file structure.
//! [`ScoutConfig::providers`] turns the loose file form into typed
//! [`Provider`] values with every default filled in.

use serde::{Deserialize, Serialize};

use crate::discovery::{PathSet, Provider, VersionRange};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoutConfig {
    /// Target library name.
    #[serde(default = "default_library")]
    pub library: String,

    /// Default header filename; `<library>.h` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Default library filename; `lib<library>.dylib` when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_file: Option<String>,

    /// Default accepted version range; omitted accepts any version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionRange>,

    /// Directories appended to `PATH` for command lookups.
    #[serde(default)]
    pub extra_command_paths: PathSet,

    /// Providers in preference order.
    #[serde(default)]
    pub providers: Vec<ProviderConfig>,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            library: default_library(),
            header: None,
            library_file: None,
            version: None,
            extra_command_paths: PathSet::new(),
            providers: Vec::new(),
        }
    }
}

fn default_library() -> String {
    "readline".to_string()
}

/// One provider entry as written in the file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    pub name: String,

    /// Required commands, `:`-joined or as a list.
    #[serde(default)]
    pub commands: PathSet,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_command: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detect_command: Option<String>,

    #[serde(default)]
    pub header_paths: PathSet,

    #[serde(default)]
    pub library_paths: PathSet,

    /// Overrides the top-level `header`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,

    /// Overrides the top-level `library_file`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_file: Option<String>,

    /// Overrides the top-level `version`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionRange>,
}

impl ScoutConfig {
    /// Header filename used when a provider does not set its own.
    pub fn default_header(&self) -> String {
        self.header
            .clone()
            .unwrap_or_else(|| format!("{}.h", self.library))
    }

    /// Library filename used when a provider does not set its own.
    pub fn default_library_file(&self) -> String {
        self.library_file
            .clone()
            .unwrap_or_else(|| format!("lib{}.dylib", self.library))
    }

    /// Build typed providers in file order.
    pub fn providers(&self) -> Vec<Provider> {
        self.providers_with_range(None)
    }

    /// Build typed providers, replacing every accepted range with `accept`.
    ///
    /// An `any` range clears the version requirement entirely.
    pub fn providers_with_range(&self, accept: Option<VersionRange>) -> Vec<Provider> {
        let header = self.default_header();
        let library_file = self.default_library_file();

        self.providers
            .iter()
            .map(|p| {
                let mut provider = Provider::new(
                    &p.name,
                    &self.library,
                    p.header.as_deref().unwrap_or(&header),
                    p.library_file.as_deref().unwrap_or(&library_file),
                )
                .with_header_paths(p.header_paths.clone())
                .with_library_paths(p.library_paths.clone());

                provider.commands = p.commands.iter().map(String::from).collect();
                provider.install_command = p.install_command.clone();
                provider.detect_command = p.detect_command.clone();
                provider.version = match accept {
                    Some(range) => Some(range),
                    None => p.version.or(self.version),
                }
                .filter(|range| !range.is_any());

                provider
            })
            .collect()
    }
}
