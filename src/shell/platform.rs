//! Platform detection.

/// Environment variables set by common CI services.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    is_ci_with(|key| std::env::var(key).ok())
}

/// [`is_ci`] against an arbitrary environment lookup.
pub fn is_ci_with<F>(env_fn: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    CI_VARS.iter().any(|key| env_fn(key).is_some())
}
