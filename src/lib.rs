//! rutas - a minimal HTTP server with static files and declarative GET routes
//!
//! Requests under the configured dynamic prefix (default `/app`) are dispatched
//! to handler functions registered through controller route tables, with
//! query-string parameters bound to typed arguments. Everything else is served
//! from the document root as static bytes. One request per connection, GET only.

pub mod config;
pub mod controllers;
pub mod handler;
pub mod http;
pub mod logger;
pub mod routing;
pub mod server;
