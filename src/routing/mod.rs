//! Routing module
//!
//! The request dispatch core:
//! - query-string parsing into key/value pairs
//! - the route registry populated from controller route tables
//! - binding of query parameters to typed handler arguments
//! - the dispatcher that ties lookup, binding and invocation together

pub mod binder;
pub mod dispatcher;
pub mod query;
pub mod registry;

// Re-export commonly used types
pub use binder::{BindError, ParamSpec, ParamType, Value};
pub use dispatcher::{DispatchError, Dispatcher};
pub use query::{parse_target, QueryParams};
pub use registry::{Controller, HandlerError, HandlerFn, HandlerResult, RouteDef, RouteRegistry};
