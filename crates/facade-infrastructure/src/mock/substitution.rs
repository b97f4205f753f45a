//! Mock Substitution
//!
//! Proxy operations that install a [`MockInstance`] in place of the real
//! instance. A facade that is already mocked keeps its mock; expectations
//! accumulate on it until the registry entry is cleared.

use super::expectation::ExpectationBuilder;
use super::instance::{MockInstance, MockKind};
use crate::facade::FacadeProxy;
use facade_domain::error::Result;
use std::sync::Arc;
use tracing::debug;

impl FacadeProxy {
    /// Install a recording spy, or return the existing mock
    pub fn spy(&self) -> Result<Arc<MockInstance>> {
        match self.mock() {
            Some(mock) => Ok(mock),
            None => self.create_fresh_mock_instance(MockKind::Spy),
        }
    }

    /// Install a mock delegating unstubbed methods to the current root
    pub fn partial_mock(&self) -> Result<Arc<MockInstance>> {
        let mock = match self.mock() {
            Some(mock) => mock,
            None => self.create_fresh_mock_instance(MockKind::Full)?,
        };
        mock.make_partial();
        Ok(mock)
    }

    /// Open an expectation for `method`, installing a full mock if needed
    pub fn should_receive(&self, method: &str) -> Result<ExpectationBuilder> {
        let mock = match self.mock() {
            Some(mock) => mock,
            None => self.create_fresh_mock_instance(MockKind::Full)?,
        };
        Ok(mock.should_receive(method))
    }

    /// Expect exactly one call to `method`
    pub fn expects(&self, method: &str) -> Result<ExpectationBuilder> {
        Ok(self.should_receive(method)?.once())
    }

    /// Whether the registry entry for this facade is a mock
    pub fn is_mock(&self) -> bool {
        self.mock().is_some()
    }

    /// Mock currently installed for this facade
    pub fn mock(&self) -> Option<Arc<MockInstance>> {
        self.facade_application()
            .registry()
            .get(self.accessor())
            .and_then(|instance| instance.as_mock().cloned())
    }

    fn create_fresh_mock_instance(&self, kind: MockKind) -> Result<Arc<MockInstance>> {
        let (name, delegate) = match self.root()? {
            Some(root) => (root.service_name().to_string(), Some(root.as_service())),
            None => (self.accessor().to_string(), None),
        };

        let mock = Arc::new(MockInstance::new(name, kind).with_delegate(delegate));
        debug!(accessor = %self.accessor(), mock = mock.name(), ?kind, "Installing mock");
        self.swap(Arc::clone(&mock));
        Ok(mock)
    }
}
