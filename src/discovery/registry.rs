//! Ordered collection of probed providers.
//!
//! Insertion order matters: it is the tie-break and menu order used by the
//! [`SelectionAdvisor`](super::advisor::SelectionAdvisor).

use super::environment::ProbeEnv;
use super::library::LibraryProbe;
use super::provider::Provider;

/// Registry of probed providers for one run.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    probes: Vec<LibraryProbe>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe every provider against `env` and collect the results in order.
    pub fn from_providers(providers: impl IntoIterator<Item = Provider>, env: &ProbeEnv) -> Self {
        providers
            .into_iter()
            .map(|provider| LibraryProbe::probe(provider, env))
            .collect()
    }

    /// Append a probe. Duplicates are kept.
    pub fn add(&mut self, probe: LibraryProbe) {
        self.probes.push(probe);
    }

    /// Remove the first probe with the given provider name.
    pub fn remove(&mut self, name: &str) -> Option<LibraryProbe> {
        let index = self.probes.iter().position(|p| p.name() == name)?;
        Some(self.probes.remove(index))
    }

    /// First probe with the given provider name.
    pub fn get(&self, name: &str) -> Option<&LibraryProbe> {
        self.probes.iter().find(|p| p.name() == name)
    }

    /// Providers that can install the library, in insertion order.
    pub fn usable(&self) -> Vec<&LibraryProbe> {
        self.probes.iter().filter(|p| p.is_usable()).collect()
    }

    /// Providers whose library is already present and accepted.
    pub fn fully_ok(&self) -> Vec<&LibraryProbe> {
        self.probes.iter().filter(|p| p.fully_ok()).collect()
    }

    /// All probes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LibraryProbe> {
        self.probes.iter()
    }

    /// Number of probes, duplicates included.
    pub fn len(&self) -> usize {
        self.probes.len()
    }

    /// True when no provider was registered.
    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }
}

impl FromIterator<LibraryProbe> for ToolRegistry {
    fn from_iter<I: IntoIterator<Item = LibraryProbe>>(iter: I) -> Self {
        Self {
            probes: iter.into_iter().collect(),
        }
    }
}
