//! libscout - Find a usable copy of a C library, or help install one.
//!
//! libscout probes a list of providers (package managers, source builds,
//! the operating system) for a library's header and shared object, checks
//! the version read from the library's file name, and picks one provider.
//! When nothing suitable is installed it picks a provider that can install
//! the library instead.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`discovery`] - Search paths, probes, the registry and the advisor
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution
//! - [`ui`] - Prompts, choice menus, and terminal output
//!
//! # Example
//!
//! ```
//! use libscout::discovery::{Advice, ProbeEnv, Provider, SelectionAdvisor, ToolRegistry};
//! use libscout::ui::MockUI;
//!
//! let script = Provider::new("script", "readline", "readline.h", "libreadline.dylib")
//!     .with_install_command("make install");
//! let registry = ToolRegistry::from_providers(vec![script], &ProbeEnv::default());
//!
//! let mut ui = MockUI::new();
//! let advice = SelectionAdvisor::new(&registry, "readline").advise(&mut ui).unwrap();
//! assert!(matches!(advice, Advice::Selected { install_pending: true, .. }));
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod shell;
pub mod ui;

pub use error::{LibscoutError, Result};
