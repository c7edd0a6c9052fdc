//! Stub providers shared by the integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use schema_bridge::{
    Error, ErrorContext, GeneratorOptions, KnowledgeBase, KnowledgeBuilder, MarshallingContext,
    Properties, Resource, SchemaModelProvider, TypeDescriptor,
};

/// Install a test log writer once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Arguments seen by `RecordingProvider::add_xsd_model`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateCall {
    pub resource: Resource,
    pub options: GeneratorOptions,
    pub system_id: String,
}

/// Arguments seen by `RecordingProvider::new_marshalling_context`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextCall {
    pub type_names: Vec<String>,
    pub properties: Properties,
}

/// Provider that records every call and answers with canned data.
pub struct RecordingProvider {
    pub declared: Vec<String>,
    pub generate_calls: Mutex<Vec<GenerateCall>>,
    pub context_calls: Mutex<Vec<ContextCall>>,
}

impl RecordingProvider {
    pub fn new(declared: &[&str]) -> Self {
        Self {
            declared: declared.iter().map(|s| s.to_string()).collect(),
            generate_calls: Mutex::new(Vec::new()),
            context_calls: Mutex::new(Vec::new()),
        }
    }
}

impl SchemaModelProvider for RecordingProvider {
    fn add_xsd_model(
        &self,
        resource: &Resource,
        builder: &mut dyn KnowledgeBuilder,
        options: &GeneratorOptions,
        system_id: &str,
    ) -> schema_bridge::Result<Vec<String>> {
        self.generate_calls.lock().unwrap().push(GenerateCall {
            resource: resource.clone(),
            options: options.clone(),
            system_id: system_id.to_string(),
        });
        for name in &self.declared {
            builder.add_type(TypeDescriptor::new(name.clone()).with_source_system_id(system_id))?;
        }
        Ok(self.declared.clone())
    }

    fn new_marshalling_context(
        &self,
        type_names: &[String],
        properties: &Properties,
        kbase: &dyn KnowledgeBase,
    ) -> schema_bridge::Result<Arc<dyn MarshallingContext>> {
        self.context_calls.lock().unwrap().push(ContextCall {
            type_names: type_names.to_vec(),
            properties: properties.clone(),
        });
        for (i, name) in type_names.iter().enumerate() {
            if kbase.resolve_type(name).is_none() {
                return Err(Error::marshalling_context(
                    format!("{} is not known to the knowledge base", name),
                    ErrorContext::new()
                        .with_field_path(format!("type_names[{}]", i))
                        .with_source("recording_provider"),
                ));
            }
        }
        Ok(Arc::new(StubContext {
            type_names: type_names.to_vec(),
            properties: properties.clone(),
        }))
    }
}

pub struct StubContext {
    pub type_names: Vec<String>,
    pub properties: Properties,
}

impl MarshallingContext for StubContext {
    fn type_names(&self) -> Vec<String> {
        self.type_names.clone()
    }

    fn properties(&self) -> &Properties {
        &self.properties
    }
}

/// Factory closure that counts how often it runs.
pub fn counting_factory(
    counter: Arc<AtomicUsize>,
) -> impl Fn() -> anyhow::Result<Arc<dyn SchemaModelProvider>> + Send + Sync + 'static {
    move || {
        counter.fetch_add(1, Ordering::SeqCst);
        // widen the race window for concurrent first calls
        std::thread::sleep(std::time::Duration::from_millis(20));
        Ok(Arc::new(RecordingProvider::new(&["org.acme.Order"])) as Arc<dyn SchemaModelProvider>)
    }
}
