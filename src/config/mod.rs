//! Configuration loading, parsing, and validation for libscout.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use libscout::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".libscout.yml"),
//!     "library: ncurses\nproviders:\n  - name: system\n    library_paths: /usr/lib\n",
//! )
//! .unwrap();
//!
//! let loaded = load_config(None, temp.path()).unwrap();
//! validate(&loaded.config).unwrap();
//! assert_eq!(loaded.config.library, "ncurses");
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{
    builtin_config, load_config, load_config_file, parse_config, ConfigSource, LoadedConfig,
    PROJECT_CONFIG_FILE,
};
pub use schema::{ProviderConfig, ScoutConfig};
pub use validator::{validate, validate_config, ValidationError};
