use std::sync::Arc;

use rutas::config::{AppState, Config};
use rutas::controllers;
use rutas::logger;
use rutas::routing::dispatcher::Dispatcher;
use rutas::server::{signal, Server};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;

    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    runtime_builder.worker_threads(cfg.server.workers);

    let runtime = runtime_builder.build()?;
    runtime.block_on(run(cfg))
}

async fn run(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    // The registry and controller instances are built once here, before
    // the server starts accepting; they are read-only from then on.
    let registry = controllers::build_registry();
    let state = Arc::new(AppState::new(cfg, Dispatcher::new(registry)));

    let server = Server::bind(Arc::clone(&state))?;
    let addr = server.local_addr()?;
    logger::log_server_start(&addr, &state.config, state.dispatcher.registry());

    let shutdown = Arc::new(tokio::sync::Notify::new());
    signal::start_signal_handler(Arc::clone(&shutdown));

    server.serve(shutdown).await?;
    Ok(())
}
