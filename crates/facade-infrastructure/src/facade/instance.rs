//! Resolved Instances
//!
//! Real services and mocks live side by side in the registry as a tagged
//! variant, so the mock layer can tell them apart without asking the
//! service itself.

use crate::mock::MockInstance;
use facade_domain::error::Result;
use facade_domain::ports::Service;
use serde_json::Value;
use std::sync::Arc;

/// Instance a facade forwards to
#[derive(Debug, Clone)]
pub enum Instance {
    /// A real service built by the container or swapped in by a caller
    Real(Arc<dyn Service>),
    /// A test double installed by the mock layer
    Mock(Arc<MockInstance>),
}

impl Instance {
    /// Wrap a concrete service
    pub fn real<S: Service>(service: S) -> Self {
        Self::Real(Arc::new(service))
    }

    /// Forward `method` with `args` to the underlying instance
    pub fn call(&self, method: &str, args: &[Value]) -> Result<Value> {
        match self {
            Self::Real(service) => service.call(method, args),
            Self::Mock(mock) => mock.call(method, args),
        }
    }

    /// Name of the underlying service
    pub fn service_name(&self) -> &str {
        match self {
            Self::Real(service) => service.service_name(),
            Self::Mock(mock) => mock.service_name(),
        }
    }

    /// The instance as a plain service trait object
    pub fn as_service(&self) -> Arc<dyn Service> {
        match self {
            Self::Real(service) => Arc::clone(service),
            Self::Mock(mock) => Arc::clone(mock) as Arc<dyn Service>,
        }
    }

    /// Whether this is the mock variant
    pub fn is_mock(&self) -> bool {
        matches!(self, Self::Mock(_))
    }

    /// The mock behind this instance, if any
    pub fn as_mock(&self) -> Option<&Arc<MockInstance>> {
        match self {
            Self::Mock(mock) => Some(mock),
            Self::Real(_) => None,
        }
    }

    /// Identity comparison: true when both refer to the same allocation
    pub fn same_as(&self, other: &Instance) -> bool {
        match (self, other) {
            (Self::Real(a), Self::Real(b)) => Arc::ptr_eq(a, b),
            (Self::Mock(a), Self::Mock(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Borrow the concrete service type behind a real instance
    pub fn downcast_ref<T: Service>(&self) -> Option<&T> {
        match self {
            Self::Real(service) => service.downcast_ref::<T>(),
            Self::Mock(_) => None,
        }
    }
}

impl From<Arc<dyn Service>> for Instance {
    /// Mocks handed back by the container keep their mock tag
    fn from(service: Arc<dyn Service>) -> Self {
        match service.downcast_arc::<MockInstance>() {
            Ok(mock) => Self::Mock(mock),
            Err(service) => Self::Real(service),
        }
    }
}

impl From<Arc<MockInstance>> for Instance {
    fn from(mock: Arc<MockInstance>) -> Self {
        Self::Mock(mock)
    }
}
