//! HTML views.
//!
//! Thin askama templates over the normalized records. Raw JSON values are
//! turned into text through the filters below so templates never deal with
//! quoting or `null`.

use askama::Template;
use serde_json::Value;

use crate::models::{MovieRecord, PersonRecord, NOT_AVAILABLE};

// =============================================================================
// Templates
// =============================================================================

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

#[derive(Template)]
#[template(path = "search_results.html")]
pub struct SearchResultsTemplate {
    pub query: String,
    /// Raw `docs` entries from the search endpoint.
    pub movies: Vec<Value>,
}

#[derive(Template)]
#[template(path = "movie_details.html")]
pub struct MovieDetailsTemplate {
    pub movie: MovieRecord,
}

#[derive(Template)]
#[template(path = "actor_details.html")]
pub struct ActorDetailsTemplate {
    pub actor: PersonRecord,
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub message: String,
}

// =============================================================================
// Value rendering
// =============================================================================

/// Text form of a JSON value: strings unquoted, `null` as the sentinel,
/// everything else as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Follows a dotted path (`"rating.kp"`) through nested objects.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.get(segment))
}

mod filters {
    use super::{display_value, lookup_path};
    use crate::models::NOT_AVAILABLE;
    use serde_json::Value;

    /// `{{ value|text }}`
    pub fn text(value: &Value) -> askama::Result<String> {
        Ok(display_value(value))
    }

    /// `{{ doc|lookup("rating.kp") }}`; the sentinel when the path is missing.
    pub fn lookup(value: &Value, path: &str) -> askama::Result<String> {
        Ok(lookup_path(value, path)
            .map(display_value)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()))
    }

    /// True unless the value is `null`, empty, or the sentinel.
    pub fn available(value: &Value) -> askama::Result<bool> {
        Ok(match value {
            Value::Null => false,
            Value::String(s) => !s.is_empty() && s != NOT_AVAILABLE,
            Value::Array(items) => !items.is_empty(),
            _ => true,
        })
    }

    /// Comma-separated `name`s of an array of objects, e.g. spouses.
    pub fn names(value: &Value) -> askama::Result<String> {
        Ok(match value {
            Value::Array(items) => items
                .iter()
                .map(|item| match item.get("name") {
                    Some(name) => display_value(name),
                    None => display_value(item),
                })
                .collect::<Vec<_>>()
                .join(", "),
            other => display_value(other),
        })
    }
}
