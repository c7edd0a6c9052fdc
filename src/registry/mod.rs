//! Provider registry: resolves the configured provider once and shares it.
//!
//! The shared slot is an [`ArcSwapOption`]: readers load it without locking,
//! and only construction, injection and reset take the registry's init lock.
//! A failed construction stores nothing, so the next caller retries.

mod config;
mod factory;

pub use config::{RegistryConfig, DEFAULT_PROVIDER_ID, PROVIDER_ENV_VAR};
pub use factory::{global_factories, FactoryTable, ProviderFactory};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use arc_swap::ArcSwapOption;

use crate::knowledge::{KnowledgeBase, KnowledgeBuilder};
use crate::options::GeneratorOptions;
use crate::provider::{MarshallingContext, Properties, ProviderHandle};
use crate::resource::Resource;
use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// Providers successfully built by a factory.
    pub constructions: u64,
    /// Factory lookups or constructions that failed, including factories that panicked.
    pub failures: u64,
    /// Calls to `set_provider`.
    pub injections: u64,
}

struct AtomicStats {
    constructions: AtomicU64,
    failures: AtomicU64,
    injections: AtomicU64,
}

impl AtomicStats {
    fn new() -> Self {
        Self {
            constructions: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            injections: AtomicU64::new(0),
        }
    }

    fn to_stats(&self) -> RegistryStats {
        RegistryStats {
            constructions: self.constructions.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
            injections: self.injections.load(Ordering::Relaxed),
        }
    }
}

/// Lazily initialized holder of the single active provider.
pub struct ProviderRegistry {
    config: RegistryConfig,
    // shared with every handle this registry constructs
    identifier: Arc<str>,
    factories: Arc<FactoryTable>,
    current: ArcSwapOption<ProviderHandle>,
    init_lock: Mutex<()>,
    stats: AtomicStats,
}

impl ProviderRegistry {
    pub fn new(config: RegistryConfig, factories: Arc<FactoryTable>) -> Self {
        let identifier = Arc::from(config.identifier.as_str());
        Self {
            config,
            identifier,
            factories,
            current: ArcSwapOption::empty(),
            init_lock: Mutex::new(()),
            stats: AtomicStats::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.config.identifier
    }

    pub fn factories(&self) -> &Arc<FactoryTable> {
        &self.factories
    }

    pub fn stats(&self) -> RegistryStats {
        self.stats.to_stats()
    }

    /// The active provider, if one has been constructed or injected.
    pub fn current(&self) -> Option<ProviderHandle> {
        self.current.load_full().map(|h| (*h).clone())
    }

    /// Return the shared provider, constructing it on first use.
    pub fn get_provider(&self) -> Result<ProviderHandle> {
        if let Some(handle) = self.current() {
            return Ok(handle);
        }

        // A factory that panicked poisoned the lock, but the slot is still empty.
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = self.current() {
            return Ok(handle);
        }

        let identifier = self.config.identifier.as_str();
        tracing::debug!(identifier, "provider not initialized, constructing");
        let attempt = ConstructionAttempt {
            failures: &self.stats.failures,
            identifier,
            succeeded: false,
        };
        match self.factories.resolve(identifier) {
            Ok(provider) => {
                let handle = ProviderHandle::new(self.identifier.clone(), provider);
                self.current.store(Some(Arc::new(handle.clone())));
                self.stats.constructions.fetch_add(1, Ordering::Relaxed);
                attempt.succeed();
                tracing::info!(identifier, "provider constructed");
                Ok(handle)
            }
            Err(e) => {
                tracing::warn!(identifier, error = %e, "provider construction failed");
                Err(e)
            }
        }
    }

    /// Replace the shared provider; later lookups return it without constructing.
    pub fn set_provider(&self, handle: ProviderHandle) {
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        tracing::info!(identifier = handle.identifier(), "provider injected");
        self.current.store(Some(Arc::new(handle)));
        self.stats.injections.fetch_add(1, Ordering::Relaxed);
    }

    /// Clear the shared provider, returning the previous one.
    pub fn reset(&self) -> Option<ProviderHandle> {
        let _guard = self.init_lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.current.swap(None).map(|h| (*h).clone())
    }

    /// Generate model types from a schema through the active provider.
    pub fn add_xsd_model(
        &self,
        resource: &Resource,
        builder: &mut dyn KnowledgeBuilder,
        options: &GeneratorOptions,
        system_id: &str,
    ) -> Result<Vec<String>> {
        self.get_provider()?
            .add_xsd_model(resource, builder, options, system_id)
    }

    /// Marshalling context with no extra properties.
    pub fn new_marshalling_context(
        &self,
        type_names: &[String],
        kbase: &dyn KnowledgeBase,
    ) -> Result<Arc<dyn MarshallingContext>> {
        self.new_marshalling_context_with_properties(type_names, &Properties::new(), kbase)
    }

    pub fn new_marshalling_context_with_properties(
        &self,
        type_names: &[String],
        properties: &Properties,
        kbase: &dyn KnowledgeBase,
    ) -> Result<Arc<dyn MarshallingContext>> {
        self.get_provider()?
            .new_marshalling_context(type_names, properties, kbase)
    }
}

/// Counts a failure on drop unless construction succeeded, so a factory that
/// panics is recorded the same way as one that returns `Err`.
struct ConstructionAttempt<'a> {
    failures: &'a AtomicU64,
    identifier: &'a str,
    succeeded: bool,
}

impl ConstructionAttempt<'_> {
    fn succeed(mut self) {
        self.succeeded = true;
    }
}

impl Drop for ConstructionAttempt<'_> {
    fn drop(&mut self) {
        if self.succeeded {
            return;
        }
        self.failures.fetch_add(1, Ordering::Relaxed);
        if std::thread::panicking() {
            tracing::warn!(identifier = self.identifier, "provider factory panicked");
        }
    }
}

static GLOBAL_REGISTRY: once_cell::sync::Lazy<ProviderRegistry> =
    once_cell::sync::Lazy::new(|| {
        ProviderRegistry::new(RegistryConfig::from_env(), global_factories().clone())
    });

/// Process-wide registry, configured from the environment on first use.
pub fn global_registry() -> &'static ProviderRegistry {
    &GLOBAL_REGISTRY
}
