//! Configuration file discovery and loading.
//!
//! Exactly one source is used per run, in this priority order:
//! 1. An explicit path (`--config` or `LIBSCOUT_CONFIG`)
//! 2. Project config (`./.libscout.yml`)
//! 3. The built-in readline configuration

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ScoutConfig;
use crate::error::{LibscoutError, Result};

/// Project config filename looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".libscout.yml";

const BUILTIN_CONFIG: &str = include_str!("default.yml");

/// Where a loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path given on the command line or through the environment.
    Explicit(PathBuf),
    /// `.libscout.yml` found in the project root.
    Project(PathBuf),
    /// Embedded defaults.
    Builtin,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::Project(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Builtin => f.write_str("built-in"),
        }
    }
}

/// A parsed configuration together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: ScoutConfig,
    pub source: ConfigSource,
}

/// Load the configuration for a run.
///
/// An explicit path must exist. Without one, `project_root/.libscout.yml`
/// is used when present, and the built-in configuration otherwise.
pub fn load_config(explicit: Option<&Path>, project_root: &Path) -> Result<LoadedConfig> {
    if let Some(path) = explicit {
        tracing::debug!("loading config from {}", path.display());
        return Ok(LoadedConfig {
            config: load_config_file(path)?,
            source: ConfigSource::Explicit(path.to_path_buf()),
        });
    }

    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        tracing::debug!("loading project config {}", project.display());
        return Ok(LoadedConfig {
            config: load_config_file(&project)?,
            source: ConfigSource::Project(project),
        });
    }

    tracing::debug!("using built-in config");
    Ok(LoadedConfig {
        config: builtin_config()?,
        source: ConfigSource::Builtin,
    })
}

/// Load a single config file and parse it into ScoutConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ScoutConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LibscoutError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            LibscoutError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into ScoutConfig.
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<ScoutConfig> {
    serde_yaml::from_str(content).map_err(|e| LibscoutError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The embedded readline configuration.
pub fn builtin_config() -> Result<ScoutConfig> {
    parse_config(BUILTIN_CONFIG, Path::new("<built-in>"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::VersionRange;
    use tempfile::TempDir;

    const MINIMAL: &str = "providers:\n  - name: system\n    library_paths: /usr/lib\n";

    #[test]
    fn builtin_config_parses() {
        let config = builtin_config().unwrap();
        assert_eq!(config.library, "readline");
        let names: Vec<_> = config.providers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["fink", "port", "shell script", "system"]);
        assert_eq!(config.version, Some(VersionRange::at_least(5)));
        assert!(config.extra_command_paths.contains("/sw/bin"));
    }

    #[test]
    fn builtin_install_commands_match_their_providers() {
        let config = builtin_config().unwrap();
        let fink = &config.providers[0];
        let port = &config.providers[1];
        assert!(fink.install_command.as_deref().unwrap().starts_with("fink "));
        assert!(port.install_command.as_deref().unwrap().contains("port install"));
    }

    #[test]
    fn explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("custom.yml");
        fs::write(&explicit, "library: ncurses\n".to_string() + MINIMAL).unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), MINIMAL).unwrap();

        let loaded = load_config(Some(&explicit), temp.path()).unwrap();
        assert_eq!(loaded.config.library, "ncurses");
        assert_eq!(loaded.source, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn project_config_found_in_root() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(PROJECT_CONFIG_FILE), MINIMAL).unwrap();

        let loaded = load_config(None, temp.path()).unwrap();
        assert!(matches!(loaded.source, ConfigSource::Project(_)));
        assert_eq!(loaded.config.providers.len(), 1);
    }

    #[test]
    fn falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();
        let loaded = load_config(None, temp.path()).unwrap();
        assert_eq!(loaded.source, ConfigSource::Builtin);
        assert_eq!(loaded.source.to_string(), "built-in");
    }

    #[test]
    fn missing_explicit_file_is_not_found() {
        let result = load_config(Some(Path::new("/nonexistent/libscout.yml")), Path::new("."));
        assert!(matches!(result, Err(LibscoutError::ConfigNotFound { .. })));
    }

    #[test]
    fn parse_config_returns_parse_error_for_invalid_yaml() {
        let result = parse_config("providers: [", Path::new("test.yml"));
        assert!(matches!(result, Err(LibscoutError::ConfigParseError { .. })));
    }
}
