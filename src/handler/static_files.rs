//! Static file serving module
//!
//! Resolves request paths against the document root and serves the file
//! bytes verbatim. Resolution is canonicalized and checked for containment
//! under the document root, so `..` segments cannot escape it.

use crate::config::RoutingConfig;
use crate::http::{mime, Reply};
use crate::logger;
use std::path::Path;
use tokio::fs;

/// Serve a static file for the given base path (query already stripped)
pub async fn serve(path: &str, routing: &RoutingConfig) -> Reply {
    match load_from_root(&routing.document_root, path, &routing.index_files).await {
        Some((content, content_type)) => Reply::static_ok(content_type, &content),
        None => Reply::not_found(),
    }
}

/// Load a file from the document root with index file support.
/// Returns None when the file does not exist or resolves outside the root.
pub async fn load_from_root(
    document_root: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    let relative_path = path.trim_start_matches('/');
    let mut file_path = Path::new(document_root).join(relative_path);

    let root_canonical = match Path::new(document_root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Document root not found or inaccessible '{document_root}': {e}"
            ));
            return None;
        }
    };

    // Directory targets fall back to index files
    if file_path.is_dir() || relative_path.is_empty() || relative_path.ends_with('/') {
        for index_file in index_files {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    // A missing file is an ordinary 404, not worth a warning
    let Ok(file_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_canonical.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}
