//! Rendering of failures for display to tool callers.

use crate::error::ClientError;

/// Format an error into a single human-readable string.
///
/// An upstream [`crate::ApiError`] (even behind a context tag) renders its
/// full status/form/field breakdown; any other error renders its own
/// message; an absent error falls back to a safe default.
pub fn format_error(err: Option<&ClientError>) -> String {
    match err {
        None => "Unknown error occurred".to_string(),
        Some(err) => match err.as_api() {
            Some(api_err) => api_err.to_string(),
            None => err.to_string(),
        },
    }
}

/// Truncate caller-provided free text to at most `max_len` characters,
/// appending an ellipsis marker only when truncation occurs. Operates on
/// char boundaries, never splitting a multi-byte character.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let mut truncated: String = s.chars().take(max_len - 3).collect();
    truncated.push_str("...");
    truncated
}
