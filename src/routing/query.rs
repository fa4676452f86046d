//! Query string parsing module
//!
//! Turns a raw request target into a base path plus query parameters.
//! No percent-decoding is performed; values are passed through verbatim.

use std::collections::HashMap;

/// Query parameters keyed by name. Duplicate keys keep the last occurrence.
pub type QueryParams = HashMap<String, String>;

/// Split a raw request target (e.g. `/app/hello?name=John&x=1`) into its
/// base path and query parameters.
///
/// The target is split on the first `?` only; the remainder is split on `&`,
/// and each segment on the first `=`. A segment without `=` maps to the
/// empty string.
pub fn parse_target(raw: &str) -> (String, QueryParams) {
    let mut params = QueryParams::new();

    let Some((path, query)) = raw.split_once('?') else {
        return (raw.to_owned(), params);
    };

    for segment in query.split('&') {
        match segment.split_once('=') {
            Some((key, value)) => params.insert(key.to_owned(), value.to_owned()),
            None => params.insert(segment.to_owned(), String::new()),
        };
    }

    (path.to_owned(), params)
}
