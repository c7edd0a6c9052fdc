//! Facade functions over the process-wide registry.
//!
//! All tests share the global registry, so they serialize on `GLOBAL_LOCK`.

mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use schema_bridge::{
    facade, global_factories, global_registry, GeneratorOptions, ProviderHandle, Resource,
    SchemaModelProvider, TypeCatalog,
};
use support::{counting_factory, init_tracing, RecordingProvider};

static GLOBAL_LOCK: Mutex<()> = Mutex::new(());

fn clean_global_state() {
    facade::reset_provider();
    global_factories().unregister(global_registry().identifier());
}

#[test]
fn test_facade_resolves_registered_factory() {
    let _guard = GLOBAL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    init_tracing();
    clean_global_state();

    let counter = Arc::new(AtomicUsize::new(0));
    global_factories().register(global_registry().identifier(), counting_factory(counter.clone()));

    let mut catalog = TypeCatalog::new();
    let names = facade::add_xsd_model(
        &Resource::bytes("order.xsd", b"<xs:schema/>".to_vec()),
        &mut catalog,
        &GeneratorOptions::default(),
        "xsd",
    )
    .unwrap();
    assert_eq!(names, vec!["org.acme.Order".to_string()]);

    let context = facade::new_marshalling_context(&names, &catalog).unwrap();
    assert_eq!(context.type_names(), names);

    let a = facade::provider().unwrap();
    let b = facade::provider().unwrap();
    assert!(a.ptr_eq(&b));
    assert_eq!(counter.load(Ordering::SeqCst), 1);

    clean_global_state();
}

#[test]
fn test_facade_without_factory_is_unavailable() {
    let _guard = GLOBAL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clean_global_state();

    let err = facade::provider().err().unwrap();
    assert!(err.is_provider_unavailable());
    assert!(err.to_string().contains(global_registry().identifier()));

    let err = facade::new_marshalling_context(&[], &TypeCatalog::new())
        .err()
        .unwrap();
    assert!(err.is_provider_unavailable());
}

#[test]
fn test_facade_injection_and_reset() {
    let _guard = GLOBAL_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    clean_global_state();

    let injected = ProviderHandle::new(
        "injected",
        Arc::new(RecordingProvider::new(&["org.acme.Invoice"])) as Arc<dyn SchemaModelProvider>,
    );
    facade::set_provider(injected.clone());
    assert!(facade::provider().unwrap().ptr_eq(&injected));

    let previous = facade::reset_provider().unwrap();
    assert!(previous.ptr_eq(&injected));
    assert!(facade::provider().err().unwrap().is_provider_unavailable());
}
