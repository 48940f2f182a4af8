use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use super::hash::{DigestEngine, DigestProvider, Sha256Provider};
use crate::error::DigestError;

/// Named digest providers, owned by whoever builds the engines.
///
/// Lookup ignores ASCII case, so `"sha-256"` finds the `"SHA-256"` provider.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn DigestProvider>>,
}

impl ProviderRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register(Arc::new(Sha256Provider));
        registry
    }

    /// Adds a provider under its own algorithm name, replacing any previous one.
    pub fn register(&mut self, provider: Arc<dyn DigestProvider>) {
        let key = normalize(provider.algorithm());
        debug!("registering digest provider {key}");
        self.providers.insert(key, provider);
    }

    pub fn lookup(&self, name: &str) -> Result<Arc<dyn DigestProvider>, DigestError> {
        match self.providers.get(&normalize(name)) {
            Some(provider) => Ok(Arc::clone(provider)),
            None => {
                warn!("no digest provider registered for {name}");
                Err(DigestError::UnavailableAlgorithm(name.to_string()))
            }
        }
    }

    pub fn engine(&self, name: &str) -> Result<DigestEngine<Arc<dyn DigestProvider>>, DigestError> {
        self.lookup(name).map(DigestEngine::new)
    }

    pub fn algorithms(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.values().map(|p| p.algorithm()).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("algorithms", &self.algorithms())
            .finish()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_uppercase()
}
