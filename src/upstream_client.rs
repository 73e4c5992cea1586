use crate::config::Config;
use crate::errors::AppError;
use reqwest::StatusCode;
use serde_json::Value;

/// Page and page size sent with every search call.
pub const SEARCH_PAGE: &str = "1";
pub const SEARCH_LIMIT: &str = "10";

/// Raw outcome of one upstream call: the status and the undecoded body.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Client for the kinopoisk.dev metadata API.
///
/// Every call is a single GET with the API key and `accept` headers and the
/// configured timeout. There are no retries.
#[derive(Clone)]
pub struct KinopoiskClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl KinopoiskClient {
    /// Creates a new `KinopoiskClient` from the process configuration.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                AppError::UpstreamUnavailable(format!("Failed to create upstream client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues one GET to `path` (relative to the base URL) with `query` pairs.
    ///
    /// Any HTTP status is returned as-is; only transport failures are errors.
    pub async fn fetch(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<UpstreamResponse, AppError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::info!("Fetching {} from upstream", url);

        let mut request = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .header("X-API-KEY", &self.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();

        let body = if status == StatusCode::OK {
            response.text().await?
        } else {
            response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string())
        };

        tracing::debug!("Upstream {} answered {}", path, status);
        Ok(UpstreamResponse { status, body })
    }

    /// Fetches `path` and decodes the body, accepting only status 200.
    pub async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, AppError> {
        let response = self.fetch(path, query).await?;

        if response.status != StatusCode::OK {
            return Err(AppError::UpstreamStatus(response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| {
            AppError::InvalidUpstreamBody(format!("Failed to parse upstream response: {}", e))
        })
    }

    /// `GET /movie/search?page=1&limit=10&query=<query>`.
    ///
    /// The query string is forwarded verbatim, empty included.
    pub async fn search_movies(&self, query: &str) -> Result<Value, AppError> {
        self.get_json(
            "/movie/search",
            &[
                ("page", SEARCH_PAGE),
                ("limit", SEARCH_LIMIT),
                ("query", query),
            ],
        )
        .await
    }

    /// `GET /movie/{id}`.
    pub async fn movie(&self, id: u64) -> Result<Value, AppError> {
        self.get_json(&format!("/movie/{}", id), &[]).await
    }

    /// `GET /person/{id}`.
    pub async fn person(&self, id: u64) -> Result<Value, AppError> {
        self.get_json(&format!("/person/{}", id), &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn test_config() -> Config {
        Config {
            port: 0,
            api_key: "token".to_string(),
            api_base_url: "https://example.com/v1.4".to_string(),
            request_timeout: Duration::from_millis(500),
        }
    }

    #[tokio::test]
    async fn test_client_creation() {
        let client = KinopoiskClient::new(&test_config());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://example.com/v1.4");
    }

    #[tokio::test]
    async fn test_connection_refused_is_unavailable() {
        // Port 9 (discard) is closed on loopback in test environments.
        let mut config = test_config();
        config.api_base_url = "http://127.0.0.1:9".to_string();
        let client = KinopoiskClient::new(&config).unwrap();

        let err = client.movie(1).await.unwrap_err();
        assert!(
            matches!(
                err,
                AppError::UpstreamUnavailable(_) | AppError::UpstreamTimeout(_)
            ),
            "unexpected error: {:?}",
            err
        );
    }
}
