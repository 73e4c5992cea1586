use crate::config::Config;
use crate::errors::{AppError, FETCH_ERROR_MESSAGE};
use crate::normalizer::{normalize_movie, normalize_person};
use crate::upstream_client::KinopoiskClient;
use crate::views::{
    ActorDetailsTemplate, ErrorTemplate, IndexTemplate, MovieDetailsTemplate,
    SearchResultsTemplate,
};
use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// Shared application state injected into handlers.
///
/// Immutable after start-up; every request gets its own outbound call.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Client for the upstream metadata API.
    pub client: KinopoiskClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, AppError> {
        let client = KinopoiskClient::new(&config)?;
        Ok(Self { config, client })
    }
}

/// Query string of `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

/// Health check endpoint.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// GET /
pub async fn index() -> IndexTemplate {
    IndexTemplate
}

/// GET /favicon.ico
///
/// Always an empty 204 so browsers stop asking.
pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// GET /search?query=...
///
/// Forwards the query verbatim and renders the raw `docs` summaries.
///
/// # Returns
///
/// * `Result<SearchResultsTemplate, AppError>` - The results page, or the JSON
///   error payload carrying the upstream status.
pub async fn search_movie(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<SearchResultsTemplate, AppError> {
    let query = params.query.unwrap_or_default();
    tracing::info!("GET /search - query: {:?}", query);

    let data = state.client.search_movies(&query).await?;
    let movies = match data.get("docs") {
        Some(Value::Array(docs)) => docs.clone(),
        _ => Vec::new(),
    };

    tracing::info!("Search for {:?} returned {} movies", query, movies.len());
    Ok(SearchResultsTemplate { query, movies })
}

/// GET /movie/:id
///
/// # Arguments
///
/// * `state` - The application state.
/// * `movie_id` - Non-negative integer id; anything else is a 404 without an upstream call.
pub async fn get_movie(
    State(state): State<Arc<AppState>>,
    movie_id: Result<Path<u64>, PathRejection>,
) -> Response {
    let Ok(Path(movie_id)) = movie_id else {
        return not_found_page();
    };
    tracing::info!("GET /movie/{}", movie_id);

    match state.client.movie(movie_id).await {
        Ok(raw) => MovieDetailsTemplate {
            movie: normalize_movie(&raw),
        }
        .into_response(),
        Err(e) => error_page(e),
    }
}

/// GET /actor/:id
///
/// Same flow as [`get_movie`], using the person endpoint and normalizer.
pub async fn get_actor(
    State(state): State<Arc<AppState>>,
    actor_id: Result<Path<u64>, PathRejection>,
) -> Response {
    let Ok(Path(actor_id)) = actor_id else {
        return not_found_page();
    };
    tracing::info!("GET /actor/{}", actor_id);

    match state.client.person(actor_id).await {
        Ok(raw) => ActorDetailsTemplate {
            actor: normalize_person(&raw),
        }
        .into_response(),
        Err(e) => error_page(e),
    }
}

/// HTML error view for the detail routes, with the mirrored status.
fn error_page(err: AppError) -> Response {
    err.log();
    (
        err.status_code(),
        ErrorTemplate {
            message: FETCH_ERROR_MESSAGE.to_string(),
        },
    )
        .into_response()
}

fn not_found_page() -> Response {
    (
        StatusCode::NOT_FOUND,
        ErrorTemplate {
            message: "Not Found".to_string(),
        },
    )
        .into_response()
}
