//! Built-in controllers
//!
//! Business handlers registered into the route registry at startup. Each
//! controller declares its routes, parameter names, defaults and target
//! types in an explicit table; the dispatch core stays generic.

mod clock;
mod greeting;
mod math;

pub use clock::ClockService;
pub use greeting::GreetingService;
pub use math::SqrtService;

use crate::routing::registry::RouteRegistry;

/// Build the registry with every built-in controller registered
#[must_use]
pub fn build_registry() -> RouteRegistry {
    let mut registry = RouteRegistry::new();
    registry.register(GreetingService::new());
    registry.register(ClockService::new());
    registry.register(SqrtService::new());
    registry
}
