//! Clock controller
//!
//! `/app/timeCurrent` returns the local time as `yyyy-MM-dd HH:mm:ss`;
//! `/app/currentDayOfWeek` the full English weekday name.

use std::sync::Arc;

use chrono::Local;

use crate::routing::registry::{Controller, HandlerResult, RouteDef};

pub struct ClockService;

impl ClockService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[allow(clippy::unused_self)]
    fn time_current(&self) -> HandlerResult {
        Ok(Local::now().format("%Y-%m-%d %H:%M:%S").to_string())
    }

    #[allow(clippy::unused_self)]
    fn current_day_of_week(&self) -> HandlerResult {
        Ok(Local::now().format("%A").to_string())
    }
}

impl Default for ClockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for ClockService {
    fn name(&self) -> &'static str {
        "ClockService"
    }

    fn routes(self: Arc<Self>) -> Vec<RouteDef> {
        let time = Arc::clone(&self);
        let day = self;
        vec![
            RouteDef {
                path: "/app/timeCurrent",
                params: vec![],
                handler: Arc::new(move |_| time.time_current()),
            },
            RouteDef {
                path: "/app/currentDayOfWeek",
                params: vec![],
                handler: Arc::new(move |_| day.current_day_of_week()),
            },
        ]
    }
}
