//! Provider registry
//!
//! Holds the set of registered content providers and aggregates
//! cross-provider operations (search). The registry is an explicitly
//! constructed instance, passed to whichever component needs it, so
//! tests get a fresh isolated registry instead of shared process
//! state.

use crate::error::Result;
use crate::traits::MediaProvider;
use crate::types::Track;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry of content providers, keyed by provider name
#[derive(Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn MediaProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under its own name
    ///
    /// Registering a second provider with the same name replaces the
    /// first one.
    pub fn register(&mut self, provider: Arc<dyn MediaProvider>) {
        debug!(provider = provider.name(), "registering provider");
        self.providers.insert(provider.name().to_string(), provider);
    }

    /// Remove a provider by name, returning whether it was present
    pub fn unregister(&mut self, name: &str) -> bool {
        debug!(provider = name, "unregistering provider");
        self.providers.remove(name).is_some()
    }

    /// Look up a provider by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn MediaProvider>> {
        self.providers.get(name).cloned()
    }

    /// Names of all registered providers
    pub fn provider_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.providers.keys().cloned().collect();
        names.sort();
        names
    }

    /// Number of registered providers
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// Check if no providers are registered
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Search all providers and aggregate their results.
    ///
    /// A provider that fails is skipped, not fatal: partial results
    /// from the healthy providers are still returned.
    pub fn search(&self, query: &str, limit_per_provider: usize) -> Result<Vec<Track>> {
        let mut results = Vec::new();
        for provider in self.providers.values() {
            match provider.search(query, limit_per_provider) {
                Ok(tracks) => results.extend(tracks),
                Err(err) => {
                    warn!(provider = provider.name(), %err, "provider search failed");
                }
            }
        }
        Ok(results)
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.provider_names())
            .finish()
    }
}
