use crate::error::{ClientError, ClientResult};
use std::env;

/// Default reconciliation poll period, matching the embedded web client.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Backend base URL, e.g. `https://ads.example.com`.
    pub base_url: String,
    /// Telegram identity sent with guarded mutation requests.
    pub telegram_id: i64,
    pub poll_interval_ms: u64,
    pub http_timeout_secs: u64,
}

impl MarketConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> ClientResult<Self> {
        // Try to load .env file if it exists (ignore if it doesn't)
        let _ = dotenvy::dotenv();

        let base_url = env::var("ADGRAM_API_URL")
            .map_err(|_| ClientError::Config("ADGRAM_API_URL not set".to_string()))?;

        let telegram_id = env::var("ADGRAM_TELEGRAM_ID")
            .map_err(|_| ClientError::Config("ADGRAM_TELEGRAM_ID not set".to_string()))?
            .parse()
            .map_err(|_| ClientError::Config("ADGRAM_TELEGRAM_ID is not a number".to_string()))?;

        let poll_interval_ms = env::var("ADGRAM_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        let http_timeout_secs = env::var("ADGRAM_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            telegram_id,
            poll_interval_ms,
            http_timeout_secs,
        })
    }

    /// Create a configuration with explicit values.
    pub fn new(base_url: impl Into<String>, telegram_id: i64) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            telegram_id,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            http_timeout_secs: 30,
        }
    }
}
