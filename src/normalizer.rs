//! Field normalization for upstream movie and person payloads.
//!
//! Both entry points are pure: they only read the raw JSON and build a fresh
//! record, so the same input always produces the same output.

use crate::models::{
    not_available, ActorCredit, FilmographyEntry, MovieRecord, PersonRecord, ACTOR_PROFESSION,
};
use serde_json::Value;

const PROFESSION_KEY: &str = "enProfession";

/// Normalizes a `GET /movie/{id}` body into a [`MovieRecord`].
pub fn normalize_movie(raw: &Value) -> MovieRecord {
    MovieRecord {
        name: scalar(raw, "name"),
        year: scalar(raw, "year"),
        description: scalar(raw, "description"),
        rating: kp_rating(raw),
        url: scalar(raw, "url"),
        genres: nested_list(raw, "genres", "name"),
        countries: nested_list(raw, "countries", "name"),
        actors: actor_entries(raw, "persons")
            .map(|person| ActorCredit {
                id: scalar(person, "id"),
                name: scalar(person, "name"),
                photo: scalar(person, "photo"),
            })
            .collect(),
    }
}

/// Normalizes a `GET /person/{id}` body into a [`PersonRecord`].
pub fn normalize_person(raw: &Value) -> PersonRecord {
    PersonRecord {
        name: scalar(raw, "name"),
        en_name: scalar(raw, "enName"),
        photo: scalar(raw, "photo"),
        sex: scalar(raw, "sex"),
        growth: scalar(raw, "growth"),
        birthday: scalar(raw, "birthday"),
        age: scalar(raw, "age"),
        birth_place: nested_list(raw, "birthPlace", "value"),
        spouses: raw
            .get("spouses")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())),
        facts: nested_list(raw, "facts", "value"),
        movies: actor_entries(raw, "movies")
            .map(|movie| FilmographyEntry {
                id: scalar(movie, "id"),
                name: scalar(movie, "name"),
                alternative_name: scalar(movie, "alternativeName"),
                rating: scalar(movie, "rating"),
                description: scalar(movie, "description"),
            })
            .collect(),
    }
}

/// Value under `key`, or the sentinel when the key is absent.
///
/// A present `null` is returned as `null`.
fn scalar(raw: &Value, key: &str) -> Value {
    raw.get(key).cloned().unwrap_or_else(not_available)
}

/// `rating.kp`, treating a missing or non-object `rating` as `{}`.
fn kp_rating(raw: &Value) -> Value {
    match raw.get("rating") {
        Some(rating @ Value::Object(_)) => scalar(rating, "kp"),
        _ => not_available(),
    }
}

/// Items of the array under `outer`; empty when absent, `null` or not an array.
fn list_items<'a>(raw: &'a Value, outer: &str) -> &'a [Value] {
    match raw.get(outer) {
        Some(Value::Array(items)) => items,
        _ => &[],
    }
}

/// `[item[inner] for item in raw[outer]]` with the sentinel for missing `inner`.
fn nested_list(raw: &Value, outer: &str, inner: &str) -> Vec<Value> {
    list_items(raw, outer)
        .iter()
        .map(|item| scalar(item, inner))
        .collect()
}

/// Entries of `raw[outer]` whose profession tag is exactly `"actor"`.
fn actor_entries<'a>(raw: &'a Value, outer: &str) -> impl Iterator<Item = &'a Value> {
    list_items(raw, outer).iter().filter(|entry| {
        entry
            .get(PROFESSION_KEY)
            .and_then(Value::as_str)
            .is_some_and(|tag| tag == ACTOR_PROFESSION)
    })
}
