//! Provider definitions.
//!
//! A provider is one way of obtaining the target library: a package
//! manager, a source build, or the copy bundled with the operating system.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::path_set::PathSet;

/// Inclusive range of accepted major versions. Missing bounds are open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionRange {
    /// Lowest accepted version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    /// Highest accepted version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl VersionRange {
    /// Range with both bounds set.
    pub fn between(min: u32, max: u32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Range with only a lower bound.
    pub fn at_least(min: u32) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Whether `version` falls inside the range.
    pub fn contains(&self, version: u32) -> bool {
        self.min.is_none_or(|min| version >= min) && self.max.is_none_or(|max| version <= max)
    }

    /// Whether both bounds are open.
    pub fn is_any(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.min, self.max) {
            (None, None) => write!(f, "any"),
            (Some(min), None) => write!(f, "{}..", min),
            (None, Some(max)) => write!(f, "..{}", max),
            (Some(min), Some(max)) => write!(f, "{}..{}", min, max),
        }
    }
}

impl FromStr for VersionRange {
    type Err = String;

    /// Parse `5..6`, `5..`, `..6`, `5` or `any`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("any") || s == ".." {
            return Ok(Self::default());
        }

        let bound = |part: &str| -> Result<Option<u32>, String> {
            if part.is_empty() {
                Ok(None)
            } else {
                part.parse()
                    .map(Some)
                    .map_err(|_| format!("invalid version bound '{}'", part))
            }
        };

        let range = match s.split_once("..") {
            Some((lo, hi)) => Self {
                min: bound(lo)?,
                max: bound(hi)?,
            },
            None => {
                let exact = bound(s)?;
                Self {
                    min: exact,
                    max: exact,
                }
            }
        };

        match (range.min, range.max) {
            (Some(min), Some(max)) if min > max => {
                Err(format!("version range {} has min above max", range))
            }
            _ => Ok(range),
        }
    }
}

/// A fully-resolved provider definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provider {
    /// Display name (e.g., "fink", "port", "shell script").
    pub name: String,
    /// Target library name (e.g., "readline").
    pub library: String,
    /// Commands that must be on the command search path to install.
    pub commands: Vec<String>,
    /// Install command run verbatim through the shell.
    pub install_command: Option<String>,
    /// Command whose presence identifies this provider.
    pub detect_command: Option<String>,
    /// Directories searched for the header.
    pub header_paths: PathSet,
    /// Directories searched for the shared library.
    pub library_paths: PathSet,
    /// Expected header filename.
    pub header_file: String,
    /// Expected library filename.
    pub library_file: String,
    /// Accepted versions; `None` accepts anything.
    pub version: Option<VersionRange>,
}

impl Provider {
    /// Create a provider with no search paths and no install command.
    pub fn new(name: &str, library: &str, header_file: &str, library_file: &str) -> Self {
        Self {
            name: name.to_string(),
            library: library.to_string(),
            commands: Vec::new(),
            install_command: None,
            detect_command: None,
            header_paths: PathSet::new(),
            library_paths: PathSet::new(),
            header_file: header_file.to_string(),
            library_file: library_file.to_string(),
            version: None,
        }
    }

    /// Set the required commands from a `:`-separated list.
    pub fn with_commands(mut self, commands: &str) -> Self {
        self.commands = PathSet::from_joined(commands)
            .iter()
            .map(String::from)
            .collect();
        self
    }

    /// Set the install command.
    pub fn with_install_command(mut self, command: &str) -> Self {
        self.install_command = Some(command.to_string());
        self
    }

    /// Set the detection command.
    pub fn with_detect_command(mut self, command: &str) -> Self {
        self.detect_command = Some(command.to_string());
        self
    }

    /// Set the header search paths.
    pub fn with_header_paths(mut self, paths: PathSet) -> Self {
        self.header_paths = paths;
        self
    }

    /// Set the library search paths.
    pub fn with_library_paths(mut self, paths: PathSet) -> Self {
        self.library_paths = paths;
        self
    }

    /// Set the accepted version range.
    pub fn with_version(mut self, range: VersionRange) -> Self {
        self.version = Some(range);
        self
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
