//! Library discovery and provider selection.
//!
//! This module provides the probing core: search paths, filesystem lookup,
//! per-provider library probes, the provider registry, and the advisor that
//! picks one provider for the run.
//!
//! # Modules
//!
//! - [`path_set`] - Ordered, de-duplicated search paths
//! - [`tool`] - File lookup and one-level symlink resolution
//! - [`environment`] - Command search path captured for a run
//! - [`provider`] - Provider definitions and accepted version ranges
//! - [`library`] - Library probe for a single provider
//! - [`registry`] - Ordered collection of probed providers
//! - [`advisor`] - Selection between satisfied and installable providers

pub mod advisor;
pub mod environment;
pub mod library;
pub mod path_set;
pub mod provider;
pub mod registry;
pub mod tool;

pub use advisor::{Advice, MissingReport, SelectionAdvisor};
pub use environment::ProbeEnv;
pub use library::{LibraryProbe, ResolvedLibrary};
pub use path_set::PathSet;
pub use provider::{Provider, VersionRange};
pub use registry::ToolRegistry;
