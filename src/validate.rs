//! Standalone post payload validation.
//!
//! Operates on loose JSON rather than a typed struct so it can report type
//! errors (tags that are not an array, non-string tag elements) that a serde
//! model would reject before validation could see them. Not wired into the
//! dispatch handlers; available for callers that want accumulated
//! human-readable errors instead of the handlers' single required-fields
//! check.

use serde_json::Value;

/// Validates a post payload, returning a list of human-readable errors.
/// An empty list means the payload is valid.
///
/// Title and content checks accumulate independently. The tag checks are a
/// priority chain: only the first violated rule among array-type,
/// element-type, and element-length is reported.
pub fn validate_post(data: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    match data.get("title").and_then(Value::as_str) {
        None | Some("") => errors.push("Title is required".to_string()),
        Some(title) if title.chars().count() > 200 => {
            errors.push("Title must be less than 200 characters".to_string());
        }
        Some(_) => {}
    }

    match data.get("content").and_then(Value::as_str) {
        None | Some("") => errors.push("Content is required".to_string()),
        Some(_) => {}
    }

    if let Some(tags) = data.get("tags") {
        match tags.as_array() {
            None => errors.push("Tags must be an array".to_string()),
            Some(tags) => {
                if tags.iter().any(|t| !t.is_string()) {
                    errors.push("All tags must be strings".to_string());
                } else if tags
                    .iter()
                    .filter_map(Value::as_str)
                    .any(|t| t.chars().count() > 50)
                {
                    errors.push("Tags must be less than 50 characters".to_string());
                }
            }
        }
    }

    if let Some(author) = data.get("author").and_then(Value::as_str) {
        if author.chars().count() > 100 {
            errors.push("Author name must be less than 100 characters".to_string());
        }
    }

    errors
}
