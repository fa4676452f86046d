//! Greeting controller
//!
//! `/app/hello` greets the caller by name with a randomly chosen greeting
//! word; `/app/randomGreeting` returns just the word.

use std::sync::Arc;

use rand::Rng;

use crate::routing::binder::{ParamSpec, Value};
use crate::routing::registry::{Controller, HandlerResult, RouteDef};

const GREETINGS: [&str; 7] = [
    "Hello",
    "Hi",
    "Greetings",
    "Salutations",
    "Howdy",
    "Hola",
    "Bonjour",
];

pub struct GreetingService;

impl GreetingService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn hello(&self, args: &[Value]) -> HandlerResult {
        let name = args
            .first()
            .and_then(Value::as_str)
            .ok_or("missing `name` argument")?;
        Ok(format!("{} {name}", Self::pick_greeting()))
    }

    #[allow(clippy::unused_self)]
    fn random_greeting(&self) -> HandlerResult {
        Ok(Self::pick_greeting().to_owned())
    }

    fn pick_greeting() -> &'static str {
        GREETINGS[rand::thread_rng().gen_range(0..GREETINGS.len())]
    }
}

impl Default for GreetingService {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller for GreetingService {
    fn name(&self) -> &'static str {
        "GreetingService"
    }

    fn routes(self: Arc<Self>) -> Vec<RouteDef> {
        let hello = Arc::clone(&self);
        let random = self;
        vec![
            RouteDef {
                path: "/app/hello",
                params: vec![ParamSpec::string("name", "Estimad@")],
                handler: Arc::new(move |args| hello.hello(args)),
            },
            RouteDef {
                path: "/app/randomGreeting",
                params: vec![],
                handler: Arc::new(move |_| random.random_greeting()),
            },
        ]
    }
}
