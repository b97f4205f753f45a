//! Mock Instances
//!
//! A [`MockInstance`] stands in for a real service behind a facade. It
//! records every call and answers from its expectations. Methods without
//! expectations are delegated (partial mocks), ignored (spies) or rejected
//! (full mocks).

use super::expectation::{Expectation, ExpectationBuilder, Reply};
use facade_domain::error::{Error, Result};
use facade_domain::ports::Service;
use facade_domain::value_objects::arguments::render;
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, warn};

/// Flavor of test double
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockKind {
    /// Calls without an expectation fail immediately
    Full,
    /// Calls without an expectation are recorded and return null
    Spy,
}

/// One call received by a mock
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Method name
    pub method: String,
    /// Positional arguments
    pub args: Vec<Value>,
}

#[derive(Debug, Default)]
struct MockState {
    expectations: Vec<Expectation>,
    calls: Vec<RecordedCall>,
    unmatched: Vec<RecordedCall>,
}

enum Dispatch {
    Reply(Reply),
    Delegate(Arc<dyn Service>),
    Null,
    Unexpected,
}

/// Test double installed in place of a real service
pub struct MockInstance {
    name: String,
    kind: MockKind,
    delegate: Option<Arc<dyn Service>>,
    partial: AtomicBool,
    state: Mutex<MockState>,
}

impl MockInstance {
    /// Create a mock named `name`
    pub fn new(name: impl Into<String>, kind: MockKind) -> Self {
        Self {
            name: name.into(),
            kind,
            delegate: None,
            partial: AtomicBool::new(false),
            state: Mutex::new(MockState::default()),
        }
    }

    /// Wrap `delegate`, the instance partial and passthru calls reach
    pub fn with_delegate(mut self, delegate: Option<Arc<dyn Service>>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Name the mock reports as its service name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Flavor of this mock
    pub fn kind(&self) -> MockKind {
        self.kind
    }

    /// Wrapped instance, if any
    pub fn delegate(&self) -> Option<&Arc<dyn Service>> {
        self.delegate.as_ref()
    }

    /// Delegate methods without expectations to the wrapped instance
    pub fn make_partial(&self) -> &Self {
        self.partial.store(true, Ordering::SeqCst);
        self
    }

    /// Whether unstubbed methods delegate to the wrapped instance
    pub fn is_partial(&self) -> bool {
        self.partial.load(Ordering::SeqCst)
    }

    /// Open a new expectation for `method`
    pub fn should_receive(self: &Arc<Self>, method: &str) -> ExpectationBuilder {
        let index = {
            let mut state = self.lock();
            state.expectations.push(Expectation::new(method));
            state.expectations.len() - 1
        };
        debug!(mock = %self.name, method, "Expectation opened");
        ExpectationBuilder::new(Arc::clone(self), index)
    }

    pub(crate) fn update_expectation(&self, index: usize, edit: impl FnOnce(&mut Expectation)) {
        if let Some(expectation) = self.lock().expectations.get_mut(index) {
            edit(expectation);
        }
    }

    // ====
    // Verification
    // ====

    /// Check every call-count constraint and report calls that matched nothing
    pub fn verify(&self) -> Result<()> {
        let failures: Vec<String> = {
            let state = self.lock();
            let violations = state.expectations.iter().filter_map(Expectation::violation);
            let unmatched = state.unmatched.iter().map(|call| {
                format!(
                    "{}({}) did not match any expectation",
                    call.method,
                    render(&call.args)
                )
            });
            violations.chain(unmatched).collect()
        };

        if failures.is_empty() {
            return Ok(());
        }
        warn!(mock = %self.name, failures = failures.len(), "Mock expectations not met");
        Err(self.verification_error(failures))
    }

    /// Assert `method` was called at least once
    pub fn should_have_received(&self, method: &str) -> Result<()> {
        if self.calls_to(method).is_empty() {
            return Err(self.verification_error(vec![format!(
                "{method}() should have been called at least once, but was not called"
            )]));
        }
        Ok(())
    }

    /// Assert `method` was called with exactly `args` at least once
    pub fn should_have_received_with(&self, method: &str, args: &[Value]) -> Result<()> {
        let calls = self.calls_to(method);
        if calls.iter().any(|call| call.as_slice() == args) {
            return Ok(());
        }
        Err(self.verification_error(vec![format!(
            "{method}({}) should have been called, received {} call(s) with other arguments",
            render(args),
            calls.len()
        )]))
    }

    /// Assert `method` was never called
    pub fn should_not_have_received(&self, method: &str) -> Result<()> {
        let count = self.calls_to(method).len();
        if count > 0 {
            return Err(self.verification_error(vec![format!(
                "{method}() should not have been called, but was called {count} time(s)"
            )]));
        }
        Ok(())
    }

    /// Arguments of every call to `method`, in call order
    pub fn calls_to(&self, method: &str) -> Vec<Vec<Value>> {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.method == method)
            .map(|call| call.args.clone())
            .collect()
    }

    /// Every call received, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    fn verification_error(&self, failures: Vec<String>) -> Error {
        Error::MockVerification {
            mock: self.name.clone(),
            failures,
        }
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ====
    // Dispatch
    // ====

    fn dispatch(&self, method: &str, args: &[Value]) -> Dispatch {
        let mut state = self.lock();
        state.calls.push(RecordedCall {
            method: method.to_string(),
            args: args.to_vec(),
        });

        // First live match wins; an exhausted match still answers so the
        // excess call shows up at verification
        let matching: Vec<usize> = state
            .expectations
            .iter()
            .enumerate()
            .filter(|(_, e)| e.matches(method, args))
            .map(|(i, _)| i)
            .collect();
        let selected = matching
            .iter()
            .copied()
            .find(|&i| !state.expectations[i].is_exhausted())
            .or_else(|| matching.last().copied());

        if let Some(index) = selected {
            return Dispatch::Reply(state.expectations[index].record_call());
        }

        if state.expectations.iter().any(|e| e.method == method) {
            state.unmatched.push(RecordedCall {
                method: method.to_string(),
                args: args.to_vec(),
            });
            return Dispatch::Null;
        }

        match (&self.delegate, self.kind) {
            (Some(delegate), _) if self.is_partial() => Dispatch::Delegate(Arc::clone(delegate)),
            (_, MockKind::Spy) => Dispatch::Null,
            _ => Dispatch::Unexpected,
        }
    }

    fn passthru(&self, method: &str, args: &[Value]) -> Result<Value> {
        match &self.delegate {
            Some(delegate) => delegate.call(method, args),
            None => Err(Error::service(
                &self.name,
                format!("cannot pass {method}() through: the mock wraps no instance"),
            )),
        }
    }
}

impl Service for MockInstance {
    fn service_name(&self) -> &str {
        &self.name
    }

    fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        match self.dispatch(method, args) {
            Dispatch::Reply(Reply::Value(value)) => Ok(value),
            Dispatch::Reply(Reply::Using(callback)) => callback(args),
            Dispatch::Reply(Reply::Fail(message)) => Err(Error::service(&self.name, message)),
            Dispatch::Reply(Reply::Passthru) => self.passthru(method, args),
            Dispatch::Delegate(delegate) => delegate.call(method, args),
            Dispatch::Null => Ok(Value::Null),
            Dispatch::Unexpected => Err(Error::UnexpectedCall {
                mock: self.name.clone(),
                method: method.to_string(),
                args: render(args),
            }),
        }
    }
}

impl fmt::Debug for MockInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("MockInstance")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("partial", &self.is_partial())
            .field("expectations", &state.expectations.len())
            .field("calls", &state.calls.len())
            .finish()
    }
}
