use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables
///
/// Built once at startup and handed to the provider and services; nothing
/// downstream reads the environment on its own.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB v4 read access token, sent as a bearer credential
    pub tmdb_api_token: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_base_url")]
    pub tmdb_base_url: String,

    /// TMDB image service base URL
    #[serde(default = "default_tmdb_image_url")]
    pub tmdb_image_url: String,

    /// Language tag passed to list and detail endpoints
    #[serde(default = "default_tmdb_language")]
    pub tmdb_language: String,

    /// Image returned when a title has no poster
    #[serde(default = "default_poster_placeholder")]
    pub poster_placeholder: String,

    /// Quiet period before typed search text triggers a lookup
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Per-request timeout for provider calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_tmdb_image_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_tmdb_language() -> String {
    "en-US".to_string()
}

fn default_poster_placeholder() -> String {
    "/no-poster.png".to_string()
}

fn default_search_debounce_ms() -> u64 {
    350
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Configuration with every default applied and the given token
    pub fn with_token(tmdb_api_token: impl Into<String>) -> Self {
        Self {
            tmdb_api_token: tmdb_api_token.into(),
            tmdb_base_url: default_tmdb_base_url(),
            tmdb_image_url: default_tmdb_image_url(),
            tmdb_language: default_tmdb_language(),
            poster_placeholder: default_poster_placeholder(),
            search_debounce_ms: default_search_debounce_ms(),
            request_timeout_secs: default_request_timeout_secs(),
            host: default_host(),
            port: default_port(),
        }
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
