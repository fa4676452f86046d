//! End-to-end tests: run a real server on an ephemeral port and speak raw
//! HTTP over plain TCP sockets, one request per connection.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::Notify;

use rutas::config::{AppState, Config};
use rutas::controllers;
use rutas::routing::dispatcher::Dispatcher;
use rutas::server::Server;

const INDEX_HTML: &[u8] = b"<html><body><h1>Bienvenido</h1></body></html>";
const STYLE_CSS: &[u8] = b"h1 { color: steelblue; }";

struct TestServer {
    addr: SocketAddr,
    shutdown: Arc<Notify>,
    handle: tokio::task::JoinHandle<()>,
    _docroot: tempfile::TempDir,
}

impl TestServer {
    async fn start() -> Self {
        Self::start_with_workers(10).await
    }

    async fn start_with_workers(workers: usize) -> Self {
        let docroot = tempfile::TempDir::new().unwrap();
        std::fs::write(docroot.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(docroot.path().join("style.css"), STYLE_CSS).unwrap();

        let mut cfg = Config::load_from("no-such-config-file").unwrap();
        cfg.server.port = 0;
        cfg.server.workers = workers;
        cfg.logging.access_log = false;
        cfg.routing.document_root = docroot.path().display().to_string();

        let registry = controllers::build_registry();
        let state = Arc::new(AppState::new(cfg, Dispatcher::new(registry)));
        let server = Server::bind(state).unwrap();
        let addr = server.local_addr().unwrap();

        let shutdown = Arc::new(Notify::new());
        let serve_shutdown = Arc::clone(&shutdown);
        let handle = tokio::spawn(async move {
            server.serve(serve_shutdown).await.unwrap();
        });

        Self {
            addr,
            shutdown,
            handle,
            _docroot: docroot,
        }
    }

    async fn request(&self, method: &str, target: &str) -> String {
        let mut stream = TcpStream::connect(self.addr).await.unwrap();
        let raw = format!("{method} {target} HTTP/1.0\r\nHost: localhost\r\n\r\n");
        stream.write_all(raw.as_bytes()).await.unwrap();

        let mut response = Vec::new();
        stream.read_to_end(&mut response).await.unwrap();
        String::from_utf8_lossy(&response).into_owned()
    }

    async fn stop(self) {
        self.shutdown.notify_one();
        self.handle.await.unwrap();
    }
}

fn body_of(response: &str) -> &str {
    response
        .split_once("\r\n\r\n")
        .map_or("", |(_, body)| body)
}

#[tokio::test]
async fn test_static_file_with_content_length() {
    let server = TestServer::start().await;

    let response = server.request("GET", "/index.html").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("Content-type: text/html"));
    assert!(response.contains(&format!("Content-length: {}", INDEX_HTML.len())));
    assert_eq!(body_of(&response).as_bytes(), INDEX_HTML);

    let response = server.request("GET", "/style.css").await;
    assert!(response.contains("Content-type: text/css"));
    assert!(response.contains(&format!("Content-length: {}", STYLE_CSS.len())));

    server.stop().await;
}

#[tokio::test]
async fn test_missing_static_file_is_404() {
    let server = TestServer::start().await;

    let response = server.request("GET", "/missing.html").await;
    assert!(response.starts_with("HTTP/1.1 404 Not Found"));
    assert_eq!(body_of(&response), "");

    server.stop().await;
}

#[tokio::test]
async fn test_non_get_method_is_405() {
    let server = TestServer::start().await;

    for target in ["/index.html", "/app/hello"] {
        let response = server.request("DELETE", target).await;
        assert!(
            response.starts_with("HTTP/1.1 405 Method Not Allowed"),
            "target {target}: {response}"
        );
    }

    server.stop().await;
}

#[tokio::test]
async fn test_hello_route_binds_name() {
    let server = TestServer::start().await;
    let greetings = [
        "Hello",
        "Hi",
        "Greetings",
        "Salutations",
        "Howdy",
        "Hola",
        "Bonjour",
    ];

    let response = server.request("GET", "/app/hello?name=JohnDoe").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("Content-type: text/plain"));
    let body = body_of(&response);
    assert!(body.contains("JohnDoe"), "body: {body}");
    assert!(greetings.iter().any(|g| body.contains(g)), "body: {body}");

    // Without the parameter the declared default applies
    let response = server.request("GET", "/app/hello").await;
    assert!(body_of(&response).contains("Estimad@"));

    server.stop().await;
}

#[tokio::test]
async fn test_sqrt_route() {
    let server = TestServer::start().await;

    let response = server.request("GET", "/app/sqrt?number=16").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(body_of(&response).contains("4.0"));

    let response = server.request("GET", "/app/sqrt?number=-5").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(body_of(&response).contains("negativo"));

    let response = server.request("GET", "/app/sqrt?number=abc").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(body_of(&response).contains("v\u{e1}lido"));

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_dynamic_route_is_404() {
    let server = TestServer::start().await;

    let response = server.request("GET", "/app/no-such-service").await;
    assert!(response.starts_with("HTTP/1.1 404 Not Found"));

    server.stop().await;
}

#[tokio::test]
async fn test_dynamic_response_omits_content_length() {
    let server = TestServer::start().await;

    let response = server.request("GET", "/app/randomGreeting").await;
    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(!response.contains("Content-length"));

    server.stop().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_shutdown_is_prompt_when_pool_is_saturated() {
    let server = TestServer::start_with_workers(1).await;
    let addr = server.addr;

    // Occupy the only worker with a request that never finishes its headers
    let mut busy = TcpStream::connect(addr).await.unwrap();
    busy.write_all(b"GET /index.html HTTP/1.0\r\n")
        .await
        .unwrap();

    // A second connection gets accepted and then queues for a free worker
    let queued = TcpStream::connect(addr).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    // Shutdown must not wait for the stalled worker's read timeout
    server.shutdown.notify_one();
    tokio::time::timeout(std::time::Duration::from_secs(2), server.handle)
        .await
        .expect("accept loop did not exit after shutdown")
        .unwrap();

    drop(queued);
    drop(busy);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_static_requests_are_isolated() {
    let server = TestServer::start().await;
    let addr = server.addr;

    let mut tasks = Vec::new();
    for _ in 0..8 {
        tasks.push(tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream
                .write_all(b"GET /index.html HTTP/1.0\r\nHost: localhost\r\n\r\n")
                .await
                .unwrap();
            let mut response = Vec::new();
            stream.read_to_end(&mut response).await.unwrap();
            String::from_utf8_lossy(&response).into_owned()
        }));
    }

    let mut responses = Vec::new();
    for task in tasks {
        responses.push(task.await.unwrap());
    }

    for response in &responses {
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert_eq!(body_of(response).as_bytes(), INDEX_HTML);
    }
    assert!(responses.windows(2).all(|w| w[0] == w[1]));

    server.stop().await;
}
