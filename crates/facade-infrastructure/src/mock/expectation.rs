//! Call Expectations
//!
//! An expectation pairs a method name and an argument matcher with a
//! response and a call-count constraint. Expectations are stored on the
//! mock; [`ExpectationBuilder`] edits one in place.

use super::instance::MockInstance;
use facade_domain::error::Result;
use facade_domain::value_objects::arguments::render;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type ArgumentPredicate = Arc<dyn Fn(&[Value]) -> bool + Send + Sync>;
type ResponseCallback = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// How many times an expectation may be met
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallCount {
    /// Any number of calls, including none
    Any,
    /// Exactly `n` calls
    Exactly(usize),
    /// `n` calls or more
    AtLeast(usize),
    /// `n` calls or fewer
    AtMost(usize),
    /// Between `min` and `max` calls, inclusive
    Between(usize, usize),
}

impl CallCount {
    /// Whether `calls` satisfies the constraint
    pub fn is_satisfied(self, calls: usize) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(n) => calls == n,
            Self::AtLeast(n) => calls >= n,
            Self::AtMost(n) => calls <= n,
            Self::Between(min, max) => (min..=max).contains(&calls),
        }
    }

    /// Whether another call would exceed the constraint
    pub fn is_exhausted(self, calls: usize) -> bool {
        match self {
            Self::Any | Self::AtLeast(_) => false,
            Self::Exactly(max) | Self::AtMost(max) | Self::Between(_, max) => calls >= max,
        }
    }
}

impl fmt::Display for CallCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any number of times"),
            Self::Exactly(n) => write!(f, "exactly {n} time(s)"),
            Self::AtLeast(n) => write!(f, "at least {n} time(s)"),
            Self::AtMost(n) => write!(f, "at most {n} time(s)"),
            Self::Between(min, max) => write!(f, "between {min} and {max} times"),
        }
    }
}

#[derive(Clone)]
pub(crate) enum ArgumentMatcher {
    Any,
    NoArgs,
    Exact(Vec<Value>),
    Predicate(ArgumentPredicate),
}

impl ArgumentMatcher {
    fn matches(&self, args: &[Value]) -> bool {
        match self {
            Self::Any => true,
            Self::NoArgs => args.is_empty(),
            Self::Exact(expected) => expected.as_slice() == args,
            Self::Predicate(predicate) => predicate(args),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Any => "*".to_string(),
            Self::NoArgs => String::new(),
            Self::Exact(expected) => render(expected),
            Self::Predicate(_) => "<predicate>".to_string(),
        }
    }
}

#[derive(Clone)]
pub(crate) enum Response {
    Null,
    Value(Value),
    Values(Vec<Value>),
    Using(ResponseCallback),
    Fail(String),
    Passthru,
}

/// What a matched expectation asks the mock to do
pub(crate) enum Reply {
    Value(Value),
    Using(ResponseCallback),
    Fail(String),
    Passthru,
}

#[derive(Clone)]
pub(crate) struct Expectation {
    pub(crate) method: String,
    matcher: ArgumentMatcher,
    response: Response,
    count: CallCount,
    calls: usize,
}

impl Expectation {
    pub(crate) fn new(method: &str) -> Self {
        Self {
            method: method.to_string(),
            matcher: ArgumentMatcher::Any,
            response: Response::Null,
            count: CallCount::Any,
            calls: 0,
        }
    }

    pub(crate) fn matches(&self, method: &str, args: &[Value]) -> bool {
        self.method == method && self.matcher.matches(args)
    }

    pub(crate) fn is_exhausted(&self) -> bool {
        self.count.is_exhausted(self.calls)
    }

    /// Record one call and produce the reply for it
    pub(crate) fn record_call(&mut self) -> Reply {
        self.calls += 1;
        match &self.response {
            Response::Null => Reply::Value(Value::Null),
            Response::Value(value) => Reply::Value(value.clone()),
            // The last value repeats once the sequence runs out
            Response::Values(values) => {
                let index = (self.calls - 1).min(values.len().saturating_sub(1));
                Reply::Value(values.get(index).cloned().unwrap_or(Value::Null))
            }
            Response::Using(callback) => Reply::Using(Arc::clone(callback)),
            Response::Fail(message) => Reply::Fail(message.clone()),
            Response::Passthru => Reply::Passthru,
        }
    }

    /// Failure message if the call-count constraint is not met
    pub(crate) fn violation(&self) -> Option<String> {
        if self.count.is_satisfied(self.calls) {
            return None;
        }
        Some(format!(
            "{}({}) should be called {}, but was called {} time(s)",
            self.method,
            self.matcher.describe(),
            self.count,
            self.calls
        ))
    }
}

impl fmt::Debug for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expectation")
            .field("method", &self.method)
            .field("args", &self.matcher.describe())
            .field("count", &self.count)
            .field("calls", &self.calls)
            .finish_non_exhaustive()
    }
}

/// Fluent editor for one expectation on a mock
///
/// # Example
///
/// ```ignore
/// proxy
///     .should_receive("get")?
///     .with_args([json!("key")])
///     .and_return(json!("value"))
///     .once();
/// ```
#[derive(Debug, Clone)]
pub struct ExpectationBuilder {
    mock: Arc<MockInstance>,
    index: usize,
}

impl ExpectationBuilder {
    pub(crate) fn new(mock: Arc<MockInstance>, index: usize) -> Self {
        Self { mock, index }
    }

    /// Mock the expectation belongs to
    pub fn mock(&self) -> &Arc<MockInstance> {
        &self.mock
    }

    fn update(self, edit: impl FnOnce(&mut Expectation)) -> Self {
        self.mock.update_expectation(self.index, edit);
        self
    }

    // ====
    // Argument matchers
    // ====

    /// Match only calls with exactly these arguments
    pub fn with_args(self, args: impl IntoIterator<Item = Value>) -> Self {
        let args = args.into_iter().collect();
        self.update(|e| e.matcher = ArgumentMatcher::Exact(args))
    }

    /// Match only calls without arguments
    pub fn with_no_args(self) -> Self {
        self.update(|e| e.matcher = ArgumentMatcher::NoArgs)
    }

    /// Match calls with any arguments
    pub fn with_any_args(self) -> Self {
        self.update(|e| e.matcher = ArgumentMatcher::Any)
    }

    /// Match calls whose arguments satisfy `predicate`
    pub fn with_args_matching<F>(self, predicate: F) -> Self
    where
        F: Fn(&[Value]) -> bool + Send + Sync + 'static,
    {
        self.update(|e| e.matcher = ArgumentMatcher::Predicate(Arc::new(predicate)))
    }

    // ====
    // Responses
    // ====

    /// Return `value` on every matching call
    pub fn and_return(self, value: Value) -> Self {
        self.update(|e| e.response = Response::Value(value))
    }

    /// Return `values` in order; the last one repeats
    pub fn and_return_values(self, values: impl IntoIterator<Item = Value>) -> Self {
        let values = values.into_iter().collect();
        self.update(|e| e.response = Response::Values(values))
    }

    /// Compute the result from the call arguments
    pub fn and_return_using<F>(self, callback: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        self.update(|e| e.response = Response::Using(Arc::new(callback)))
    }

    /// Return null on every matching call
    pub fn and_return_null(self) -> Self {
        self.update(|e| e.response = Response::Null)
    }

    /// Fail every matching call with a service error carrying `message`
    pub fn and_fail(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.update(|e| e.response = Response::Fail(message))
    }

    /// Forward matching calls to the wrapped instance
    pub fn passthru(self) -> Self {
        self.update(|e| e.response = Response::Passthru)
    }

    // ====
    // Call counts
    // ====

    /// Expect exactly one call
    pub fn once(self) -> Self {
        self.times(1)
    }

    /// Expect exactly two calls
    pub fn twice(self) -> Self {
        self.times(2)
    }

    /// Expect exactly `n` calls
    pub fn times(self, n: usize) -> Self {
        self.update(|e| e.count = CallCount::Exactly(n))
    }

    /// Expect no calls
    pub fn never(self) -> Self {
        self.times(0)
    }

    /// Expect `n` calls or more
    pub fn at_least(self, n: usize) -> Self {
        self.update(|e| {
            e.count = match e.count {
                CallCount::AtMost(max) | CallCount::Between(_, max) => CallCount::Between(n, max),
                _ => CallCount::AtLeast(n),
            }
        })
    }

    /// Expect `n` calls or fewer
    pub fn at_most(self, n: usize) -> Self {
        self.update(|e| {
            e.count = match e.count {
                CallCount::AtLeast(min) | CallCount::Between(min, _) => CallCount::Between(min, n),
                _ => CallCount::AtMost(n),
            }
        })
    }
}
