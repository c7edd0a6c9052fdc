//! # schema-bridge
//!
//! Facade for generating model types from XML schemas and building
//! marshalling contexts, delegating both to a provider resolved by name.
//!
//! ## Overview
//!
//! The schema compiler and the marshalling engine live outside this crate.
//! They are plugged in as a [`SchemaModelProvider`] registered under a
//! well-known identifier in a [`FactoryTable`]. The [`ProviderRegistry`]
//! constructs that provider on first use, exactly once, and shares it with
//! every caller; [`facade`] exposes the operations as free functions bound to
//! the process-wide registry.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use schema_bridge::{facade, global_factories, DEFAULT_PROVIDER_ID, SchemaModelProvider};
//! # fn compiler() -> Arc<dyn SchemaModelProvider> { unimplemented!() }
//!
//! global_factories().register(DEFAULT_PROVIDER_ID, || Ok(compiler()));
//! let provider = facade::provider().expect("provider registered");
//! assert_eq!(provider.identifier(), DEFAULT_PROVIDER_ID);
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`facade`] | Free functions over the global registry |
//! | [`registry`] | Provider registry, factory table and configuration |
//! | [`provider`] | Capability interface and provider handle |
//! | [`knowledge`] | Knowledge builder/base seams and an in-memory catalog |
//! | [`options`] | Schema compiler options |
//! | [`resource`] | Schema document locators |

pub mod facade;
pub mod knowledge;
pub mod options;
pub mod provider;
pub mod registry;
pub mod resource;

pub use knowledge::{KnowledgeBase, KnowledgeBuilder, TypeCatalog, TypeDescriptor};
pub use options::{GeneratorOptions, SchemaLanguage};
pub use provider::{MarshallingContext, Properties, ProviderHandle, SchemaModelProvider};
pub use registry::{
    global_factories, global_registry, FactoryTable, ProviderFactory, ProviderRegistry,
    RegistryConfig, RegistryStats, DEFAULT_PROVIDER_ID, PROVIDER_ENV_VAR,
};
pub use resource::Resource;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{BoxError, Error, ErrorContext};
