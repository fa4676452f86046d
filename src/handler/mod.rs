//! Request handler module
//!
//! Classifies each parsed request as dynamic or static and produces the
//! response: dynamic-prefix paths go through the dispatcher, everything
//! else is resolved against the document root.

pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::{handle_request, Request};
