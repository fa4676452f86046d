//! HTTP response building module
//!
//! Builds the raw bytes for every response the server emits. Static file
//! responses carry a Content-length header equal to the file's byte count;
//! dynamic responses omit it and rely on connection close to delimit the
//! body.

/// A fully rendered response, plus the status and body size for access
/// logging.
pub struct Reply {
    pub status: u16,
    pub body_len: usize,
    bytes: Vec<u8>,
}

impl Reply {
    /// 200 OK for a static file: Content-type from the extension and
    /// Content-length equal to the file's byte count, then the raw bytes.
    #[must_use]
    pub fn static_ok(content_type: &str, body: &[u8]) -> Self {
        let mut bytes = format!(
            "HTTP/1.1 200 OK\r\nContent-type: {content_type}\r\nContent-length: {}\r\n\r\n",
            body.len()
        )
        .into_bytes();
        bytes.extend_from_slice(body);
        Self {
            status: 200,
            body_len: body.len(),
            bytes,
        }
    }

    /// 200 OK for a dispatched handler result: plain text, no
    /// Content-length.
    #[must_use]
    pub fn dynamic_ok(body: &str) -> Self {
        let bytes = format!("HTTP/1.1 200 OK\r\nContent-type: text/plain\r\n\r\n{body}").into_bytes();
        Self {
            status: 200,
            body_len: body.len(),
            bytes,
        }
    }

    /// 404 Not Found, empty body
    #[must_use]
    pub fn not_found() -> Self {
        Self::empty(404, "Not Found")
    }

    /// 405 Method Not Allowed, empty body
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::empty(405, "Method Not Allowed")
    }

    /// 500 Internal Server Error with a generic text body
    #[must_use]
    pub fn internal_error() -> Self {
        let body = "Internal Server Error";
        let bytes = format!(
            "HTTP/1.1 500 Internal Server Error\r\nContent-type: text/plain\r\n\r\n{body}"
        )
        .into_bytes();
        Self {
            status: 500,
            body_len: body.len(),
            bytes,
        }
    }

    fn empty(status: u16, reason: &str) -> Self {
        Self {
            status,
            body_len: 0,
            bytes: format!("HTTP/1.1 {status} {reason}\r\n\r\n").into_bytes(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
