//! Route registry module
//!
//! Maps exact URL paths to handler descriptors. Controllers declare their
//! routes through an explicit table rather than runtime introspection: each
//! controller exposes a list of (path, parameter specs, handler closure)
//! entries, built once when the controller is registered.
//!
//! The registry is populated entirely before the server starts accepting,
//! so concurrent lookups during serving need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use super::binder::{ParamSpec, Value};

/// Failure raised by a handler body. Mapped to an internal error by the
/// dispatcher.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct HandlerError(pub String);

impl From<&str> for HandlerError {
    fn from(msg: &str) -> Self {
        Self(msg.to_owned())
    }
}

impl From<String> for HandlerError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

pub type HandlerResult = Result<String, HandlerError>;

/// A registered handler callable. Receives the bound arguments in
/// declaration order and returns the response body.
pub type HandlerFn = Arc<dyn Fn(&[Value]) -> HandlerResult + Send + Sync>;

/// One route table entry as declared by a controller.
pub struct RouteDef {
    pub path: &'static str,
    pub params: Vec<ParamSpec>,
    pub handler: HandlerFn,
}

/// Registry entry combining a handler callable with its parameter specs
/// and the name of the controller that declared it.
pub struct HandlerDescriptor {
    pub controller: &'static str,
    pub params: Vec<ParamSpec>,
    pub handler: HandlerFn,
}

/// A controller owns a set of GET routes. Exactly one instance is created
/// per registration and shared by all concurrent requests through the
/// handler closures, so implementations must be stateless or internally
/// synchronized.
pub trait Controller: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    /// Declarative route table. Handler closures capture clones of the
    /// shared controller instance.
    fn routes(self: Arc<Self>) -> Vec<RouteDef>;
}

/// Mapping from exact path to handler descriptor. Exact string equality
/// only; no patterns, no path parameters.
#[derive(Default)]
pub struct RouteRegistry {
    routes: HashMap<String, HandlerDescriptor>,
}

impl RouteRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate the controller once and insert every route it declares.
    /// A duplicate path silently replaces the earlier registration.
    pub fn register<C: Controller>(&mut self, controller: C) {
        let controller = Arc::new(controller);
        let name = controller.name();
        for def in Arc::clone(&controller).routes() {
            self.routes.insert(
                def.path.to_owned(),
                HandlerDescriptor {
                    controller: name,
                    params: def.params,
                    handler: def.handler,
                },
            );
        }
    }

    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&HandlerDescriptor> {
        self.routes.get(path)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered paths with their controller names, for startup logging.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &'static str)> {
        self.routes
            .iter()
            .map(|(path, desc)| (path.as_str(), desc.controller))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestController {
        routes: Vec<(&'static str, &'static str)>,
    }

    impl Controller for TestController {
        fn name(&self) -> &'static str {
            "TestController"
        }

        fn routes(self: Arc<Self>) -> Vec<RouteDef> {
            self.routes
                .iter()
                .copied()
                .map(|(path, reply)| RouteDef {
                    path,
                    params: vec![],
                    handler: {
                        let reply = reply.to_owned();
                        Arc::new(move |_| Ok(reply.clone()))
                    },
                })
                .collect()
        }
    }

    #[test]
    fn test_lookup_registered_paths() {
        let mut registry = RouteRegistry::new();
        registry.register(TestController {
            routes: vec![("/app/a", "a"), ("/app/b", "b")],
        });

        assert_eq!(registry.len(), 2);
        let desc = registry.lookup("/app/a").unwrap();
        assert_eq!(desc.controller, "TestController");
        assert_eq!((desc.handler)(&[]).unwrap(), "a");
        assert!(registry.lookup("/app/b").is_some());
    }

    #[test]
    fn test_lookup_unregistered_path() {
        let mut registry = RouteRegistry::new();
        registry.register(TestController {
            routes: vec![("/app/a", "a")],
        });

        assert!(registry.lookup("/app/missing").is_none());
        assert!(registry.lookup("/app/a/").is_none()); // exact match only
    }

    #[test]
    fn test_duplicate_registration_last_wins() {
        let mut registry = RouteRegistry::new();
        registry.register(TestController {
            routes: vec![("/app/a", "first")],
        });
        registry.register(TestController {
            routes: vec![("/app/a", "second")],
        });

        assert_eq!(registry.len(), 1);
        let desc = registry.lookup("/app/a").unwrap();
        assert_eq!((desc.handler)(&[]).unwrap(), "second");
    }
}
