//! Named provider factories.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::provider::SchemaModelProvider;
use crate::{Error, Result};

/// Zero-argument provider constructor.
pub type ProviderFactory =
    Arc<dyn Fn() -> anyhow::Result<Arc<dyn SchemaModelProvider>> + Send + Sync>;

/// Maps well-known identifiers to provider constructors.
pub struct FactoryTable {
    factories: RwLock<HashMap<String, ProviderFactory>>,
}

impl FactoryTable {
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Register (or replace) the factory for `id`.
    pub fn register<F>(&self, id: impl Into<String>, factory: F)
    where
        F: Fn() -> anyhow::Result<Arc<dyn SchemaModelProvider>> + Send + Sync + 'static,
    {
        let id = id.into();
        let previous = self
            .factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), Arc::new(factory));
        if previous.is_some() {
            tracing::debug!(identifier = %id, "replaced provider factory");
        } else {
            tracing::debug!(identifier = %id, "registered provider factory");
        }
    }

    /// Register a provider type constructed through `Default`.
    pub fn register_default<P>(&self, id: impl Into<String>)
    where
        P: SchemaModelProvider + Default + 'static,
    {
        self.register(id, || Ok(Arc::new(P::default()) as Arc<dyn SchemaModelProvider>));
    }

    pub fn unregister(&self, id: &str) -> bool {
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(id)
            .is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }

    /// Registered identifiers, sorted.
    pub fn identifiers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    /// Construct a fresh provider for `id`.
    ///
    /// The factory runs outside the table lock, so it may itself touch the table.
    pub fn resolve(&self, id: &str) -> Result<Arc<dyn SchemaModelProvider>> {
        let factory = self
            .factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned();
        let Some(factory) = factory else {
            return Err(Error::provider_unavailable(
                id,
                anyhow::anyhow!("no factory registered under '{}'", id),
            ));
        };
        tracing::debug!(identifier = %id, "resolving provider factory");
        factory().map_err(|e| Error::provider_unavailable(id, e))
    }
}

impl Default for FactoryTable {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_FACTORIES: once_cell::sync::Lazy<Arc<FactoryTable>> =
    once_cell::sync::Lazy::new(|| Arc::new(FactoryTable::new()));

/// Process-wide factory table consulted by the global registry.
pub fn global_factories() -> &'static Arc<FactoryTable> {
    &GLOBAL_FACTORIES
}
