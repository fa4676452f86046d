// Connection handling module
// Serves exactly one request/response exchange per accepted connection

use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedReadHalf;
use tokio::net::TcpStream;
use tokio::time::timeout;

use crate::config::AppState;
use crate::handler::{self, Request};
use crate::logger::{self, AccessLogEntry};

/// Serve one connection: read the request line, drain the headers, produce
/// the response, write it and close. I/O faults abort this connection only.
///
/// The whole read phase runs under the configured read timeout so a
/// stalled client cannot pin a worker indefinitely.
pub async fn serve_connection(stream: TcpStream, peer_addr: std::net::SocketAddr, state: &AppState) {
    let read_timeout = Duration::from_secs(state.config.performance.read_timeout);
    let write_timeout = Duration::from_secs(state.config.performance.write_timeout);

    let (read_half, mut write_half) = stream.into_split();
    let mut reader = BufReader::new(read_half);

    let request = match timeout(read_timeout, read_request(&mut reader)).await {
        // Stream closed before a request line arrived: not an error
        Ok(Ok(None)) => return,
        Ok(Ok(Some(request))) => request,
        Ok(Err(err)) => {
            logger::log_error(&format!("Failed to read request from {peer_addr}: {err}"));
            return;
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Read timeout after {}s from {peer_addr}",
                read_timeout.as_secs()
            ));
            return;
        }
    };

    let started = Instant::now();
    let reply = handler::handle_request(&request, state).await;

    if state.cached_access_log.load(Ordering::Relaxed) {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            request.method.clone(),
            request.target.clone(),
        );
        entry.status = reply.status;
        entry.body_bytes = reply.body_len;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    match timeout(write_timeout, write_half.write_all(reply.as_bytes())).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            logger::log_error(&format!("Failed to write response to {peer_addr}: {err}"));
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Write timeout after {}s to {peer_addr}",
                write_timeout.as_secs()
            ));
        }
    }

    // Close unconditionally: one exchange per connection, no keep-alive
    let _ = write_half.shutdown().await;
}

/// Read the request line and drain header lines until a blank line or end
/// of input. Headers are discarded unparsed; no body is ever read.
///
/// Returns `Ok(None)` for a closed/empty stream or a request line that
/// does not carry both a method and a target.
async fn read_request(reader: &mut BufReader<OwnedReadHalf>) -> std::io::Result<Option<Request>> {
    let mut line = String::new();
    if reader.read_line(&mut line).await? == 0 {
        return Ok(None);
    }

    let mut tokens = line.split_whitespace();
    let (Some(method), Some(target)) = (tokens.next(), tokens.next()) else {
        return Ok(None);
    };
    let request = Request {
        method: method.to_owned(),
        target: target.to_owned(),
    };

    // Drain headers
    loop {
        let mut header = String::new();
        let n = reader.read_line(&mut header).await?;
        if n == 0 || header == "\r\n" || header == "\n" {
            break;
        }
    }

    Ok(Some(request))
}
