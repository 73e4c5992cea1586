//! Kinopoisk search proxy library.
//!
//! Forwards search and detail requests to the kinopoisk.dev metadata API and
//! reshapes the JSON answers into flat records rendered as HTML pages.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Normalized movie and person records.
//! - `normalizer`: Raw upstream JSON to record mapping.
//! - `server`: Router assembly.
//! - `upstream_client`: kinopoisk.dev API client.
//! - `views`: HTML templates.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod normalizer;
pub mod server;
pub mod upstream_client;
pub mod views;
