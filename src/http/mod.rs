//! HTTP protocol layer module
//!
//! Wire-level response building and content-type detection, decoupled from
//! routing and business logic. Responses are HTTP/1.1-framed but follow the
//! one-request-per-connection contract: the connection is closed after the
//! body, so dynamic responses need no Content-length.

pub mod mime;
pub mod response;

// Re-export commonly used types
pub use mime::get_content_type;
pub use response::Reply;
