use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_API_URL: &str = "http://localhost:3001/api";
const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 500;

/// Application configuration
/// In debug builds: loads from .env file first, then environment variables
/// In release builds: loads from environment variables only
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the loads API, without a trailing slash
    pub api_base_url: String,
    /// How long search input must be idle before a fetch fires
    pub search_debounce: Duration,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        {
            // Try to load .env file
            if dotenvy::dotenv().is_ok() {
                debug!("Config: Dev mode activated - loaded .env file");
            } else {
                debug!("Config: No .env file found, using environment as-is");
            }
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    fn from_env() -> Self {
        let api_base_url = std::env::var("LOADBOARD_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let search_debounce = match std::env::var("LOADBOARD_SEARCH_DEBOUNCE_MS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    warn!(
                        "Config: LOADBOARD_SEARCH_DEBOUNCE_MS={} is not a number, using {}ms",
                        raw, DEFAULT_SEARCH_DEBOUNCE_MS
                    );
                    Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS)
                }
            },
            Err(_) => Duration::from_millis(DEFAULT_SEARCH_DEBOUNCE_MS),
        };

        debug!(
            "Config: API at {}, search debounce {:?}",
            api_base_url, search_debounce
        );

        Self {
            api_base_url,
            search_debounce,
        }
    }
}
