//! Capability interface implemented by schema/marshalling providers.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::knowledge::{KnowledgeBase, KnowledgeBuilder};
use crate::options::GeneratorOptions;
use crate::resource::Resource;
use crate::Result;

/// Marshaller/unmarshaller properties.
pub type Properties = HashMap<String, serde_json::Value>;

/// A context from which marshallers and unmarshallers are created.
pub trait MarshallingContext: Send + Sync {
    /// Type names bound into this context, in binding order.
    fn type_names(&self) -> Vec<String>;

    fn properties(&self) -> &Properties;
}

/// The two operations the facade exposes.
pub trait SchemaModelProvider: Send + Sync {
    /// Compile the schema in `resource`, register the generated types with
    /// `builder` and return their names.
    fn add_xsd_model(
        &self,
        resource: &Resource,
        builder: &mut dyn KnowledgeBuilder,
        options: &GeneratorOptions,
        system_id: &str,
    ) -> Result<Vec<String>>;

    /// Build a marshalling context able to handle `type_names`, resolved against `kbase`.
    fn new_marshalling_context(
        &self,
        type_names: &[String],
        properties: &Properties,
        kbase: &dyn KnowledgeBase,
    ) -> Result<Arc<dyn MarshallingContext>>;
}

/// Shared handle to the active provider.
#[derive(Clone)]
pub struct ProviderHandle {
    identifier: Arc<str>,
    provider: Arc<dyn SchemaModelProvider>,
}

impl ProviderHandle {
    pub fn new(identifier: impl Into<Arc<str>>, provider: Arc<dyn SchemaModelProvider>) -> Self {
        Self {
            identifier: identifier.into(),
            provider,
        }
    }

    /// Identifier the provider was resolved (or injected) under.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn provider(&self) -> &Arc<dyn SchemaModelProvider> {
        &self.provider
    }

    /// Identity comparison: true when both handles share the same provider instance.
    pub fn ptr_eq(&self, other: &ProviderHandle) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.provider) as *const (),
            Arc::as_ptr(&other.provider) as *const (),
        )
    }

    pub fn add_xsd_model(
        &self,
        resource: &Resource,
        builder: &mut dyn KnowledgeBuilder,
        options: &GeneratorOptions,
        system_id: &str,
    ) -> Result<Vec<String>> {
        self.provider
            .add_xsd_model(resource, builder, options, system_id)
    }

    pub fn new_marshalling_context(
        &self,
        type_names: &[String],
        properties: &Properties,
        kbase: &dyn KnowledgeBase,
    ) -> Result<Arc<dyn MarshallingContext>> {
        self.provider
            .new_marshalling_context(type_names, properties, kbase)
    }
}

impl fmt::Debug for ProviderHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderHandle")
            .field("identifier", &self.identifier)
            .field("provider", &(Arc::as_ptr(&self.provider) as *const ()))
            .finish()
    }
}
