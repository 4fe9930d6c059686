//! Shared setup for commands that probe providers.

use std::path::{Path, PathBuf};

use crate::config::{load_config, validate, ConfigSource, ScoutConfig};
use crate::discovery::{PathSet, ProbeEnv, ToolRegistry, VersionRange};
use crate::error::Result;

/// Where to find configuration and commands for one run.
#[derive(Debug, Clone)]
pub struct ScoutContext {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    extra_path: PathSet,
    env: Option<ProbeEnv>,
}

/// Everything a command needs after probing.
#[derive(Debug)]
pub struct ProbedSystem {
    pub config: ScoutConfig,
    pub source: ConfigSource,
    pub env: ProbeEnv,
    pub registry: ToolRegistry,
}

impl ScoutContext {
    pub fn new(project_root: &Path) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            extra_path: PathSet::new(),
            env: None,
        }
    }

    /// Use this config file instead of discovery.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Directories searched for commands after `PATH` and the config's own.
    pub fn with_extra_path(mut self, extra: PathSet) -> Self {
        self.extra_path = extra;
        self
    }

    /// Replace the process environment with a fixed command search path.
    pub fn with_probe_env(mut self, env: ProbeEnv) -> Self {
        self.env = Some(env);
        self
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load and validate config, then probe every provider.
    pub fn probe(&self, accept: Option<VersionRange>) -> Result<ProbedSystem> {
        let loaded = load_config(self.config_path.as_deref(), &self.project_root)?;
        validate(&loaded.config)?;

        let env = match &self.env {
            Some(env) => env.clone(),
            None => {
                let mut extra = loaded.config.extra_command_paths.clone();
                extra.extend_from(&self.extra_path);
                ProbeEnv::from_process(&extra)
            }
        };

        let registry =
            ToolRegistry::from_providers(loaded.config.providers_with_range(accept), &env);

        Ok(ProbedSystem {
            config: loaded.config,
            source: loaded.source,
            env,
            registry,
        })
    }
}
