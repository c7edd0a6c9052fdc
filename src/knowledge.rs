//! Knowledge builder/base seams.
//!
//! Generated types are registered into a [`KnowledgeBuilder`]; marshalling
//! contexts resolve type names against a [`KnowledgeBase`]. Both are owned by
//! the caller's rule engine; [`TypeCatalog`] is a plain in-memory version.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Description of a type produced by schema compilation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Fully qualified type name.
    pub name: String,
    #[serde(default)]
    pub fields: Vec<String>,
    /// System id of the schema the type was generated from.
    #[serde(default)]
    pub source_system_id: Option<String>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            source_system_id: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn with_source_system_id(mut self, system_id: impl Into<String>) -> Self {
        self.source_system_id = Some(system_id.into());
        self
    }
}

/// Target that receives generated types.
pub trait KnowledgeBuilder: Send {
    fn add_type(&mut self, descriptor: TypeDescriptor) -> crate::Result<()>;
}

/// Read-only view used to resolve type names.
pub trait KnowledgeBase: Send + Sync {
    fn resolve_type(&self, name: &str) -> Option<TypeDescriptor>;

    fn type_names(&self) -> Vec<String>;
}

/// In-memory type registry usable as both builder and base.
#[derive(Debug, Clone, Default)]
pub struct TypeCatalog {
    types: BTreeMap<String, TypeDescriptor>,
}

impl TypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl KnowledgeBuilder for TypeCatalog {
    fn add_type(&mut self, descriptor: TypeDescriptor) -> crate::Result<()> {
        if descriptor.name.trim().is_empty() {
            return Err(crate::Error::schema_generation(
                "generated type has an empty name",
                crate::ErrorContext::new()
                    .with_details(descriptor.source_system_id.unwrap_or_default())
                    .with_source("type_catalog"),
            ));
        }
        if let Some(prev) = self.types.insert(descriptor.name.clone(), descriptor) {
            tracing::debug!(type_name = %prev.name, "replaced previously registered type");
        }
        Ok(())
    }
}

impl KnowledgeBase for TypeCatalog {
    fn resolve_type(&self, name: &str) -> Option<TypeDescriptor> {
        self.types.get(name).cloned()
    }

    fn type_names(&self) -> Vec<String> {
        self.types.keys().cloned().collect()
    }
}
