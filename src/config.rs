use serde::Deserialize;
use std::time::Duration;

/// Public kinopoisk.dev endpoint used when `KINOPOISK_BASE_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "https://api.kinopoisk.dev/v1.4";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TIMEOUT_MS: u64 = 1000;

/// Process configuration, built once in `main` and handed to the client and server.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Value of the `X-API-KEY` header sent upstream.
    pub api_key: String,
    pub api_base_url: String,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    ///
    /// `from_env` delegates here; tests pass a closure over a fixed map.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            port: match lookup("PORT") {
                Some(port) => port
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
                None => DEFAULT_PORT,
            },
            api_key: lookup("KINOTOKEN").unwrap_or_default(),
            api_base_url: {
                let url = lookup("KINOPOISK_BASE_URL")
                    .filter(|url| !url.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    anyhow::bail!("KINOPOISK_BASE_URL must start with http:// or https://");
                }
                url.trim_end_matches('/').to_string()
            },
            request_timeout: match lookup("UPSTREAM_TIMEOUT_MS") {
                Some(ms) => {
                    let ms: u64 = ms.trim().parse().map_err(|_| {
                        anyhow::anyhow!("UPSTREAM_TIMEOUT_MS must be a whole number of milliseconds")
                    })?;
                    if ms == 0 {
                        anyhow::bail!("UPSTREAM_TIMEOUT_MS must be greater than zero");
                    }
                    Duration::from_millis(ms)
                }
                None => Duration::from_millis(DEFAULT_TIMEOUT_MS),
            },
        };

        if config.api_key.trim().is_empty() {
            tracing::warn!("KINOTOKEN is not set; upstream requests will be rejected");
        }
        tracing::debug!("Upstream base URL: {}", config.api_base_url);
        tracing::debug!("Upstream timeout: {:?}", config.request_timeout);
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
