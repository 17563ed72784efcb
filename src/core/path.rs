//! Relative path construction for entity endpoints.

use std::fmt::Display;

/// Builds `endpoint/seg1/seg2/...` from an entity endpoint and path segments.
///
/// Segments are rendered with `Display` and joined verbatim: nothing is
/// escaped or stripped, so callers must pass URL-safe tokens. Without
/// segments the endpoint is returned as-is.
pub fn build_path<I>(endpoint: &str, segments: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut path = endpoint.to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&segment.to_string());
    }
    path
}
