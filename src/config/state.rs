// Application state module
// Read-only runtime state shared by every connection

use std::sync::atomic::AtomicBool;

use super::types::Config;
use crate::routing::dispatcher::Dispatcher;

/// Application state. Built once before the server starts accepting and
/// never mutated afterwards, so concurrent reads need no locking.
pub struct AppState {
    pub config: Config,
    pub dispatcher: Dispatcher,

    // Cached config value for fast access on the request path
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: Config, dispatcher: Dispatcher) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config,
            dispatcher,
            cached_access_log,
        }
    }
}
