//! Default Service Tests

use facade_domain::error::Error;
use facade_domain::ports::Service;
use facade_infrastructure::services::{ArrayCache, LogService, SystemClock};
use serde_json::{Value, json};

#[test]
fn test_array_cache_operations() {
    let cache = ArrayCache::new();

    assert_eq!(cache.call("get", &[json!("k")]).unwrap(), Value::Null);
    assert_eq!(cache.call("get", &[json!("k"), json!("fallback")]).unwrap(), json!("fallback"));

    cache.call("put", &[json!("k"), json!([1, 2])]).unwrap();
    assert_eq!(cache.call("get", &[json!("k")]).unwrap(), json!([1, 2]));
    assert_eq!(cache.call("has", &[json!("k")]).unwrap(), json!(true));

    assert_eq!(cache.call("forget", &[json!("k")]).unwrap(), json!(true));
    assert_eq!(cache.call("forget", &[json!("k")]).unwrap(), json!(false));

    cache.call("put", &[json!("a"), json!(1)]).unwrap();
    cache.call("flush", &[]).unwrap();
    assert!(cache.is_empty());
}

#[test]
fn test_array_cache_requires_key() {
    let cache = ArrayCache::new();
    assert!(matches!(
        cache.call("get", &[]),
        Err(Error::InvalidArgument { .. })
    ));
    assert!(matches!(
        cache.call("get", &[json!(5)]),
        Err(Error::InvalidArgument { .. })
    ));
}

#[test]
fn test_log_service_records_levels() {
    let log = LogService::new();

    log.call("info", &[json!("started")]).unwrap();
    log.call("error", &[json!("failed"), json!({"code": 7})]).unwrap();

    let entries = log.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].level, "info");
    assert_eq!(entries[0].context, Value::Null);
    assert_eq!(entries[1].message, "failed");

    let listed = log.call("entries", &[]).unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(2));
}

#[test]
fn test_system_clock_methods() {
    let clock = SystemClock::new();

    let now = clock.call("now", &[]).unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(now.as_str().unwrap()).is_ok());
    assert!(clock.call("timestamp", &[]).unwrap().as_i64().unwrap() > 0);
    assert_eq!(clock.methods(), &["now", "timestamp"]);
}

#[test]
fn test_unknown_method_reports_service() {
    let err = SystemClock::new().call("tick", &[]).unwrap_err();
    assert!(matches!(err, Error::MethodNotFound { ref service, .. } if service == "SystemClock"));
}
