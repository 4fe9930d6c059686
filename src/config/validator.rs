//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - At least one provider must be configured
//! - Library, provider, header and library file names must be non-empty
//! - Version ranges must have `min <= max`

use std::collections::HashSet;

use crate::config::schema::ScoutConfig;
use crate::discovery::VersionRange;
use crate::error::{LibscoutError, Result};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Provider name if error is provider-specific
    pub provider: Option<String>,
}

impl ValidationError {
    fn global(rule: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            provider: None,
        }
    }

    fn for_provider(rule: &str, provider: &str, message: String) -> Self {
        Self {
            rule: rule.to_string(),
            message,
            provider: Some(provider.to_string()),
        }
    }
}

/// Validate a configuration and return all errors.
///
/// Collects every error instead of stopping at the first one.
pub fn validate_config(config: &ScoutConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    errors.extend(validate_globals(config));
    errors.extend(validate_providers(config));

    errors
}

fn validate_globals(config: &ScoutConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.library.trim().is_empty() {
        errors.push(ValidationError::global(
            "empty-library",
            "'library' must not be empty".to_string(),
        ));
    }
    if config.header.as_deref().is_some_and(|h| h.trim().is_empty()) {
        errors.push(ValidationError::global(
            "empty-header",
            "'header' must not be empty".to_string(),
        ));
    }
    if config
        .library_file
        .as_deref()
        .is_some_and(|f| f.trim().is_empty())
    {
        errors.push(ValidationError::global(
            "empty-library-file",
            "'library_file' must not be empty".to_string(),
        ));
    }
    if let Some(range) = config.version.filter(inverted) {
        errors.push(ValidationError::global(
            "inverted-range",
            format!("Version range {} has min greater than max", range_bounds(&range)),
        ));
    }
    if config.providers.is_empty() {
        errors.push(ValidationError::global(
            "no-providers",
            "At least one provider must be configured".to_string(),
        ));
    }

    errors
}

fn validate_providers(config: &ScoutConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for (index, provider) in config.providers.iter().enumerate() {
        let name = provider.name.trim();
        if name.is_empty() {
            errors.push(ValidationError::global(
                "empty-provider-name",
                format!("Provider #{} has an empty name", index + 1),
            ));
            continue;
        }
        if !seen.insert(name) {
            errors.push(ValidationError::for_provider(
                "duplicate-provider",
                name,
                format!("Provider '{}' is defined more than once", name),
            ));
        }
        if provider.header.as_deref().is_some_and(|h| h.trim().is_empty()) {
            errors.push(ValidationError::for_provider(
                "empty-header",
                name,
                format!("Provider '{}' has an empty 'header'", name),
            ));
        }
        if provider
            .library_file
            .as_deref()
            .is_some_and(|f| f.trim().is_empty())
        {
            errors.push(ValidationError::for_provider(
                "empty-library-file",
                name,
                format!("Provider '{}' has an empty 'library_file'", name),
            ));
        }
        if let Some(range) = provider.version.filter(inverted) {
            errors.push(ValidationError::for_provider(
                "inverted-range",
                name,
                format!(
                    "Provider '{}' version range {} has min greater than max",
                    name,
                    range_bounds(&range)
                ),
            ));
        }
    }

    errors
}

fn inverted(range: &VersionRange) -> bool {
    matches!((range.min, range.max), (Some(min), Some(max)) if min > max)
}

fn range_bounds(range: &VersionRange) -> String {
    format!(
        "{}..{}",
        range.min.unwrap_or_default(),
        range.max.unwrap_or_default()
    )
}

/// Validate and return an error if invalid.
///
/// Convenience function that returns the first error as a
/// `ConfigValidationError`, or Ok if valid.
pub fn validate(config: &ScoutConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(LibscoutError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::loader::builtin_config;
    use crate::config::schema::ProviderConfig;

    fn provider(name: &str) -> ProviderConfig {
        ProviderConfig {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn config_with(providers: Vec<ProviderConfig>) -> ScoutConfig {
        ScoutConfig {
            providers,
            ..Default::default()
        }
    }

    #[test]
    fn builtin_config_is_valid() {
        assert!(validate(&builtin_config().unwrap()).is_ok());
    }

    #[test]
    fn no_providers_is_an_error() {
        let errors = validate_config(&ScoutConfig::default());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "no-providers");
    }

    #[test]
    fn empty_provider_name_is_an_error() {
        let errors = validate_config(&config_with(vec![provider("  ")]));
        assert!(errors.iter().any(|e| e.rule == "empty-provider-name"));
    }

    #[test]
    fn duplicate_provider_is_an_error() {
        let errors = validate_config(&config_with(vec![provider("fink"), provider("fink")]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].provider.as_deref(), Some("fink"));
    }

    #[test]
    fn inverted_range_carries_provider_name() {
        let mut bad = provider("port");
        bad.version = Some(VersionRange {
            min: Some(7),
            max: Some(5),
        });
        let errors = validate_config(&config_with(vec![bad]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].rule, "inverted-range");
        assert!(errors[0].message.contains("port"));
        assert!(errors[0].message.contains("7..5"));
    }

    #[test]
    fn empty_filenames_are_errors() {
        let mut bad = provider("custom");
        bad.header = Some(String::new());
        bad.library_file = Some(" ".to_string());
        let mut config = config_with(vec![bad]);
        config.library = String::new();

        let rules: Vec<_> = validate_config(&config)
            .into_iter()
            .map(|e| e.rule)
            .collect();
        assert_eq!(rules, ["empty-library", "empty-header", "empty-library-file"]);
    }

    #[test]
    fn validate_joins_messages() {
        let err = validate(&config_with(vec![provider(""), provider("")])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Provider #1"));
        assert!(msg.contains("Provider #2"));
    }
}
