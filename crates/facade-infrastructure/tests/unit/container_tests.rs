//! Service Container Tests

use crate::test_utils::{FixedClock, Numbered, numbered_factory};
use facade_domain::error::Error;
use facade_domain::ports::{Service, ServiceContainer};
use facade_domain::value_objects::AccessorKey;
use facade_infrastructure::container::Container;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[test]
fn test_singleton_builds_once() {
    let builds = Arc::new(AtomicUsize::new(0));
    let container = Container::new();
    container.singleton("numbered", numbered_factory(builds.clone()));

    let a = container.resolve(&"numbered".into()).unwrap().unwrap();
    let b = container.resolve(&"numbered".into()).unwrap().unwrap();

    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(builds.load(Ordering::SeqCst), 1);
}

#[test]
fn test_factory_builds_every_time() {
    let builds = Arc::new(AtomicUsize::new(0));
    let container = Container::new();
    container.factory("numbered", numbered_factory(builds.clone()));

    let a = container.resolve(&"numbered".into()).unwrap().unwrap();
    let b = container.resolve(&"numbered".into()).unwrap().unwrap();

    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(builds.load(Ordering::SeqCst), 2);
}

#[test]
fn test_unbound_key_resolves_to_none() {
    let container = Container::new();
    assert!(container.resolve(&"nothing".into()).unwrap().is_none());
    assert!(!container.bound(&"nothing".into()));
}

#[test]
fn test_registered_instance_counts_as_resolved() {
    let container = Container::new();
    let key = AccessorKey::named("clock");
    container.instance(key.clone(), Arc::new(FixedClock::at("t")));

    assert!(container.bound(&key));
    assert!(container.resolved(&key));
}

#[test]
fn test_type_keys_bind_independently_of_names() {
    let container = Container::new();
    container.singleton(AccessorKey::of::<FixedClock>(), |_| {
        Ok(Arc::new(FixedClock::at("typed")) as Arc<dyn Service>)
    });

    let clock = container
        .resolve(&AccessorKey::of::<FixedClock>())
        .unwrap()
        .unwrap();
    assert_eq!(clock.call("now", &[]).unwrap(), json!("typed"));
    assert!(container.resolve(&"FixedClock".into()).unwrap().is_none());
}

#[test]
fn test_swap_shadows_binding_until_forgotten() {
    let container = Container::new();
    let key = AccessorKey::named("numbered");
    container.instance(key.clone(), Arc::new(Numbered(1)));

    container.swap_instance(key.clone(), Arc::new(Numbered(2)));
    let swapped = container.resolve(&key).unwrap().unwrap();
    assert_eq!(swapped.call("id", &[]).unwrap(), json!(2));

    container.forget_swapped(&key);
    let original = container.resolve(&key).unwrap().unwrap();
    assert_eq!(original.call("id", &[]).unwrap(), json!(1));
}

#[test]
fn test_forget_all_swapped() {
    let container = Container::new();
    container.swap_instance("a".into(), Arc::new(Numbered(1)));
    container.swap_instance("b".into(), Arc::new(Numbered(2)));

    container.forget_all_swapped();

    assert!(!container.bound(&"a".into()));
    assert!(!container.bound(&"b".into()));
}

#[test]
fn test_after_resolving_runs_for_each_build() {
    let builds = Arc::new(AtomicUsize::new(0));
    let container = Container::new();
    container.factory("numbered", numbered_factory(builds));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    container.after_resolving(
        "numbered".into(),
        Arc::new(move |service: &Arc<dyn Service>| {
            sink.lock().unwrap().push(service.call("id", &[]).unwrap());
        }),
    );

    container.resolve(&"numbered".into()).unwrap();
    container.resolve(&"numbered".into()).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![json!(0), json!(1)]);
}

#[test]
fn test_factory_can_resolve_dependencies() {
    let container = Container::new();
    container.singleton("clock", |_| Ok(Arc::new(FixedClock::at("dep")) as Arc<dyn Service>));
    container.factory("wrapper", |c: &dyn ServiceContainer| {
        let clock = c
            .resolve(&"clock".into())?
            .ok_or_else(|| Error::unbound_accessor("clock"))?;
        let now = clock.call("now", &[])?;
        Ok(Arc::new(FixedClock::at(now.as_str().unwrap_or_default())) as Arc<dyn Service>)
    });

    let wrapper = container.resolve(&"wrapper".into()).unwrap().unwrap();
    assert_eq!(wrapper.call("now", &[]).unwrap(), json!("dep"));
}
