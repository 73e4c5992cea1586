//! Normalized records handed to the detail views.
//!
//! Scalar fields keep the raw upstream JSON value (string, number or `null`)
//! and hold the `"N/A"` sentinel when the upstream key is absent. Field names
//! serialize with the upstream camelCase spelling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder substituted for any field missing upstream.
pub const NOT_AVAILABLE: &str = "N/A";

/// Profession tag value that marks an acting credit.
pub const ACTOR_PROFESSION: &str = "actor";

/// Returns the sentinel as a JSON value.
pub fn not_available() -> Value {
    Value::String(NOT_AVAILABLE.to_string())
}

/// Flattened movie detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub name: Value,
    pub year: Value,
    pub description: Value,
    /// Kinopoisk rating, taken from `rating.kp`.
    pub rating: Value,
    pub url: Value,
    pub genres: Vec<Value>,
    pub countries: Vec<Value>,
    pub actors: Vec<ActorCredit>,
}

/// A person credited as an actor on a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActorCredit {
    pub id: Value,
    pub name: Value,
    pub photo: Value,
}

/// Flattened person detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub name: Value,
    pub en_name: Value,
    pub photo: Value,
    pub sex: Value,
    /// Height in centimetres.
    pub growth: Value,
    pub birthday: Value,
    pub age: Value,
    pub birth_place: Vec<Value>,
    /// Passed through untouched from upstream.
    pub spouses: Value,
    pub facts: Vec<Value>,
    pub movies: Vec<FilmographyEntry>,
}

/// A movie in a person's filmography where they appeared as an actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmographyEntry {
    pub id: Value,
    pub name: Value,
    pub alternative_name: Value,
    pub rating: Value,
    pub description: Value,
}
