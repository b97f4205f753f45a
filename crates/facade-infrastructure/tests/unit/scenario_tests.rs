//! End-to-end facade scenarios

use crate::test_utils::{FixedClock, RecordingLogger, app_with_clock, bootstrapped};
use facade_domain::error::Error;
use facade_domain::ports::ServiceContainer;
use facade_infrastructure::container::Container;
use facade_infrastructure::facade::Instance;
use serde_json::{Value, json};
use std::sync::Arc;

#[test]
fn test_unbound_cache_get_fails_naming_cache() {
    let (app, _container) = bootstrapped(Container::new());

    let err = app.proxy("cache").forward("get", &[json!("key")]).unwrap_err();

    assert!(matches!(err, Error::UnboundAccessor { ref key } if key == "cache"));
    assert!(err.to_string().contains("cache"));
}

#[test]
fn test_clock_singleton_is_identical_across_resolves() {
    let (app, container) = app_with_clock("2024-05-01T12:00:00Z");

    let first = app.proxy("clock").resolve().unwrap();
    let second = app.proxy("clock").resolve().unwrap();
    assert!(first.same_as(&second));

    let direct_a = container.resolve(&"clock".into()).unwrap().unwrap();
    let direct_b = container.resolve(&"clock".into()).unwrap().unwrap();
    assert!(Arc::ptr_eq(&direct_a, &direct_b));
}

#[test]
fn test_swapped_clock_answers_forwarded_calls() {
    let (app, _container) = app_with_clock("real");
    let proxy = app.proxy("clock");

    proxy.swap(Instance::real(FixedClock::at("mocked")));

    assert_eq!(proxy.forward("now", &[]).unwrap(), json!("mocked"));
}

#[test]
fn test_clear_resolved_clock_rebuilds_from_original_binding() {
    let (app, container) = app_with_clock("real");
    let proxy = app.proxy("clock");
    proxy.swap(Instance::real(FixedClock::at("mocked")));
    assert!(container.is_swapped(&"clock".into()));

    proxy.clear_resolved();

    assert!(!container.is_swapped(&"clock".into()));
    assert_eq!(proxy.forward("now", &[]).unwrap(), json!("real"));
}

#[test]
fn test_partial_logger_stubs_error_and_delegates_info() {
    let logger = Arc::new(RecordingLogger::default());
    let container = Container::new();
    container.instance("logger".into(), logger.clone());
    let (app, _container) = bootstrapped(container);
    let proxy = app.proxy("logger");

    let mock = proxy.partial_mock().unwrap();
    mock.should_receive("error")
        .with_args([json!("boom")])
        .and_return_null()
        .once();

    assert_eq!(proxy.forward("error", &[json!("boom")]).unwrap(), Value::Null);
    assert_eq!(
        proxy.forward("info", &[json!("hi")]).unwrap(),
        json!("info: hi")
    );

    assert_eq!(mock.calls_to("error"), vec![vec![json!("boom")]]);
    assert_eq!(
        logger.entries(),
        vec![("info".to_string(), "hi".to_string())]
    );
    mock.verify().unwrap();
}
