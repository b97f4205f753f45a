//! Shared-State Concurrency Tests

use crate::test_utils::{FixedClock, app_with_clock, bootstrapped, numbered_factory};
use facade_domain::error::Result;
use facade_domain::ports::{ResolvingCallback, Service, ServiceContainer, ServiceFactory};
use facade_domain::value_objects::AccessorKey;
use facade_infrastructure::container::Container;
use facade_infrastructure::facade::{FacadeApplication, Instance};
use std::sync::atomic::AtomicUsize;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

const THREADS: usize = 8;

fn resolve_from_threads(app: &Arc<FacadeApplication>, key: &'static str) -> Vec<Instance> {
    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| scope.spawn(|| app.proxy(key).resolve().unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    })
}

#[test]
fn test_concurrent_resolution_of_singleton_agrees() {
    let (app, _container) = app_with_clock("shared");

    let instances = resolve_from_threads(&app, "clock");

    assert!(instances.iter().all(|i| i.same_as(&instances[0])));
}

#[test]
fn test_concurrent_resolution_caches_one_factory_result() {
    let container = Container::new();
    container.factory("numbered", numbered_factory(Arc::new(AtomicUsize::new(0))));
    let (app, _container) = bootstrapped(container);

    let instances = resolve_from_threads(&app, "numbered");

    assert!(instances.iter().all(|i| i.same_as(&instances[0])));
    assert_eq!(app.registry().len(), 1);
}

#[test]
fn test_concurrent_swaps_leave_one_winner() {
    let (app, _container) = app_with_clock("real");

    thread::scope(|scope| {
        for n in 0..THREADS {
            let app = &app;
            scope.spawn(move || {
                app.proxy("clock")
                    .swap(Instance::real(crate::test_utils::Numbered(n)));
            });
        }
    });

    let winner = app.proxy("clock").resolve().unwrap();
    assert_eq!(winner.service_name(), "Numbered");
    assert_eq!(app.registry().len(), 1);
}

/// Container that stops once inside `resolve`, after the inner container answered
struct PausingContainer {
    inner: Container,
    pause: Mutex<Option<(Sender<()>, Receiver<()>)>>,
}

impl PausingContainer {
    fn new(inner: Container) -> Self {
        Self {
            inner,
            pause: Mutex::new(None),
        }
    }

    /// Pause the next resolution: signal `reached`, then wait on `release`
    fn pause_next(&self, reached: Sender<()>, release: Receiver<()>) {
        *self.pause.lock().unwrap() = Some((reached, release));
    }
}

impl ServiceContainer for PausingContainer {
    fn bind(&self, key: AccessorKey, factory: ServiceFactory, shared: bool) {
        self.inner.bind(key, factory, shared);
    }

    fn instance(&self, key: AccessorKey, service: Arc<dyn Service>) {
        self.inner.instance(key, service);
    }

    fn swap_instance(&self, key: AccessorKey, service: Arc<dyn Service>) {
        self.inner.swap_instance(key, service);
    }

    fn forget_swapped(&self, key: &AccessorKey) {
        self.inner.forget_swapped(key);
    }

    fn forget_all_swapped(&self) {
        self.inner.forget_all_swapped();
    }

    fn resolve(&self, key: &AccessorKey) -> Result<Option<Arc<dyn Service>>> {
        let resolved = self.inner.resolve(key)?;
        let pause = self.pause.lock().unwrap().take();
        if let Some((reached, release)) = pause {
            reached.send(()).unwrap();
            release.recv().unwrap();
        }
        Ok(resolved)
    }

    fn bound(&self, key: &AccessorKey) -> bool {
        self.inner.bound(key)
    }

    fn resolved(&self, key: &AccessorKey) -> bool {
        self.inner.resolved(key)
    }

    fn after_resolving(&self, key: AccessorKey, callback: ResolvingCallback) {
        self.inner.after_resolving(key, callback);
    }
}

#[test]
fn test_clear_during_resolution_does_not_cache_stale_mock() {
    let inner = Container::new();
    inner.singleton("clock", |_| {
        Ok(Arc::new(FixedClock::at("real")) as Arc<dyn Service>)
    });
    let container = Arc::new(PausingContainer::new(inner));
    let app = FacadeApplication::new();
    app.set_application(container.clone()).unwrap();
    let clock = app.proxy("clock");
    let key = AccessorKey::from("clock");

    // Mock reaches both layers; drop the registry entry so the next
    // resolution goes to the container and finds the swapped mock
    clock.spy().unwrap();
    app.registry().remove(&key);
    assert!(container.inner.is_swapped(&key));

    let (reached_tx, reached_rx) = mpsc::channel();
    let (release_tx, release_rx) = mpsc::channel();
    container.pause_next(reached_tx, release_rx);

    let resolved = thread::scope(|scope| {
        let resolver = scope.spawn(|| clock.resolve().unwrap());
        reached_rx.recv().unwrap();
        clock.clear_resolved();
        release_tx.send(()).unwrap();
        resolver.join().unwrap()
    });

    assert!(!resolved.is_mock());
    assert_eq!(resolved.service_name(), "FixedClock");
    assert!(!clock.is_mock());
    assert!(!container.inner.is_swapped(&key));
    assert!(app.registry().get(&key).is_some_and(|i| !i.is_mock()));
}
