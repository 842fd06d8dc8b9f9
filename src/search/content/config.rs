//! Configuration for content fetching
//!
//! Defines limits for page enrichment.

use std::env;

/// Configuration for content fetching
#[derive(Debug, Clone)]
pub struct ContentFetchConfig {
    /// Maximum characters kept per page before the ellipsis (default: 1000)
    pub max_chars_per_page: usize,
    /// Navigation bound per page in seconds (default: 60)
    pub navigation_timeout_secs: u64,
    /// Maximum pages fetched at the same time (default: 20)
    pub max_concurrent_fetches: usize,
}

impl ContentFetchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_chars_per_page: env::var("CONTENT_FETCH_MAX_CHARS_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_chars_per_page),
            navigation_timeout_secs: env::var("CONTENT_FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.navigation_timeout_secs),
            max_concurrent_fetches: env::var("CONTENT_FETCH_MAX_CONCURRENT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_concurrent_fetches),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.max_chars_per_page == 0 {
            return Err("max_chars_per_page must be at least 1".to_string());
        }
        if self.navigation_timeout_secs == 0 {
            return Err("navigation_timeout_secs must be at least 1".to_string());
        }
        if self.max_concurrent_fetches == 0 {
            return Err("max_concurrent_fetches must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for ContentFetchConfig {
    fn default() -> Self {
        Self {
            max_chars_per_page: 1000,
            navigation_timeout_secs: 60,
            max_concurrent_fetches: 20,
        }
    }
}
