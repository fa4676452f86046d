//! Dispatcher module
//!
//! Looks up the route, binds the arguments and invokes the handler,
//! producing either a response body or a structured failure. A handler
//! panic is caught and reported as a handler fault; it never tears down
//! the worker.

use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;

use super::binder::{bind, BindError};
use super::query::QueryParams;
use super::registry::RouteRegistry;

#[derive(Debug, Error)]
pub enum DispatchError {
    /// Unknown dynamic path
    #[error("no route registered for `{0}`")]
    RouteNotFound(String),
    /// Numeric coercion failed for a supplied parameter
    #[error(transparent)]
    Binding(#[from] BindError),
    /// The handler body returned an error or panicked
    #[error("handler failed: {0}")]
    Handler(String),
}

/// Owns the frozen route registry and performs one synchronous handler
/// invocation per request. No retries.
pub struct Dispatcher {
    registry: RouteRegistry,
}

impl Dispatcher {
    #[must_use]
    pub fn new(registry: RouteRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    pub fn dispatch(&self, path: &str, params: &QueryParams) -> Result<String, DispatchError> {
        let descriptor = self
            .registry
            .lookup(path)
            .ok_or_else(|| DispatchError::RouteNotFound(path.to_owned()))?;

        let args = bind(&descriptor.params, params)?;

        match catch_unwind(AssertUnwindSafe(|| (descriptor.handler)(&args))) {
            Ok(Ok(body)) => Ok(body),
            Ok(Err(err)) => Err(DispatchError::Handler(err.to_string())),
            Err(_) => Err(DispatchError::Handler("handler panicked".to_owned())),
        }
    }
}
