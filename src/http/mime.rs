//! MIME type detection module
//!
//! Returns the Content-type for a static file based on its extension.
//! Anything without a known extension is served as plain text.

/// Get the Content-type for a file extension
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        _ => "text/plain",
    }
}
