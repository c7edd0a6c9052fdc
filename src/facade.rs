//! Static facade over the process-wide provider registry.
//!
//! ```rust,no_run
//! use schema_bridge::facade;
//! use schema_bridge::{GeneratorOptions, Resource, SchemaLanguage, TypeCatalog};
//!
//! # fn main() -> schema_bridge::Result<()> {
//! let options = GeneratorOptions::new().with_schema_language(SchemaLanguage::XmlSchema);
//! let mut builder = TypeCatalog::new();
//! let type_names = facade::add_xsd_model(
//!     &Resource::classpath("order.xsd"),
//!     &mut builder,
//!     &options,
//!     "xsd",
//! )?;
//! let context = facade::new_marshalling_context(&type_names, &builder)?;
//! # let _ = context;
//! # Ok(())
//! # }
//! ```
//!
//! The provider is resolved from [`global_factories`](crate::registry::global_factories)
//! under the identifier in `SCHEMA_BRIDGE_PROVIDER` (or
//! [`DEFAULT_PROVIDER_ID`](crate::registry::DEFAULT_PROVIDER_ID)).

use std::sync::Arc;

use crate::knowledge::{KnowledgeBase, KnowledgeBuilder};
use crate::options::GeneratorOptions;
use crate::provider::{MarshallingContext, Properties, ProviderHandle};
use crate::registry::global_registry;
use crate::resource::Resource;
use crate::Result;

/// Generate types for the schema in `resource` and add them to `builder`.
///
/// Returns the names of the generated types.
pub fn add_xsd_model(
    resource: &Resource,
    builder: &mut dyn KnowledgeBuilder,
    options: &GeneratorOptions,
    system_id: &str,
) -> Result<Vec<String>> {
    global_registry().add_xsd_model(resource, builder, options, system_id)
}

/// Create a marshalling context for `type_names` with no extra properties.
pub fn new_marshalling_context(
    type_names: &[String],
    kbase: &dyn KnowledgeBase,
) -> Result<Arc<dyn MarshallingContext>> {
    global_registry().new_marshalling_context(type_names, kbase)
}

pub fn new_marshalling_context_with_properties(
    type_names: &[String],
    properties: &Properties,
    kbase: &dyn KnowledgeBase,
) -> Result<Arc<dyn MarshallingContext>> {
    global_registry().new_marshalling_context_with_properties(type_names, properties, kbase)
}

/// The active provider, constructing it on first use.
pub fn provider() -> Result<ProviderHandle> {
    global_registry().get_provider()
}

pub fn set_provider(handle: ProviderHandle) {
    global_registry().set_provider(handle)
}

pub fn reset_provider() -> Option<ProviderHandle> {
    global_registry().reset()
}
