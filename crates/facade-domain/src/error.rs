//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the facade service locator
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Generic string-based error
    #[error("String error: {0}")]
    String(String),

    /// Invalid argument provided to a function or forwarded call
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A facade accessor has no binding in the container
    #[error("Configuration error: no binding registered for facade accessor '{key}'")]
    UnboundAccessor {
        /// The accessor key that could not be resolved
        key: String,
    },

    /// No facade root could be produced
    ///
    /// Raised when the container handle has not been installed yet, or when
    /// resolution produced no instance and the caller required one.
    #[error("A facade root has not been set: {message}")]
    UnresolvedRoot {
        /// Description of why no root is available
        message: String,
    },

    /// The resolved instance does not support the forwarded method
    #[error("Method '{method}' is not supported by service '{service}'")]
    MethodNotFound {
        /// Name of the service that received the call
        service: String,
        /// Name of the unsupported method
        method: String,
    },

    /// Failure raised by a service while handling a forwarded call
    #[error("Service '{service}' failed: {message}")]
    Service {
        /// Name of the failing service
        service: String,
        /// Description of the failure
        message: String,
    },

    /// A mock received a call it has no expectation or delegate for
    #[error("Unexpected call to {mock}::{method}({args})")]
    UnexpectedCall {
        /// Name of the mock
        mock: String,
        /// Method that was called
        method: String,
        /// Rendered call arguments
        args: String,
    },

    /// Mock expectations were not met at verification time
    #[error("Mock verification failed for {mock}: {}", .failures.join("; "))]
    MockVerification {
        /// Name of the mock
        mock: String,
        /// One entry per violated expectation
        failures: Vec<String>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an error for an accessor key without a binding
    pub fn unbound_accessor<S: ToString>(key: S) -> Self {
        Self::UnboundAccessor {
            key: key.to_string(),
        }
    }

    /// Whether this error reports a configuration mistake
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::Configuration { .. } | Self::UnboundAccessor { .. }
        )
    }
}

// Facade resolution and dispatch error creation methods
impl Error {
    /// Create an unresolved root error
    pub fn unresolved_root<S: Into<String>>(message: S) -> Self {
        Self::UnresolvedRoot {
            message: message.into(),
        }
    }

    /// Create a method not found error
    pub fn method_not_found<S: Into<String>, M: Into<String>>(service: S, method: M) -> Self {
        Self::MethodNotFound {
            service: service.into(),
            method: method.into(),
        }
    }

    /// Create a service failure error
    pub fn service<S: Into<String>, M: Into<String>>(service: S, message: M) -> Self {
        Self::Service {
            service: service.into(),
            message: message.into(),
        }
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}
