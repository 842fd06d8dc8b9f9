// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the net-search plugin
//!
//! Read once when the service is constructed and never mutated afterwards.

use std::collections::HashMap;
use std::env;

use url::Url;

use super::content::ContentFetchConfig;
use super::provider::ProviderId;

const DEFAULT_WEATHER_URL: &str = "http://t.weather.itboy.net";
const DEFAULT_BROWSERLESS_URL: &str = "http://localhost:3000";

/// Configuration for the net-search plugin
#[derive(Debug, Clone)]
pub struct NetSearchConfig {
    /// Skip content enrichment entirely
    pub quick_search: bool,
    /// Per-provider base URL overrides; missing entries use the provider default
    pub provider_base_urls: HashMap<ProviderId, String>,
    /// Forecast API base URL
    pub weather_base_url: String,
    /// Headless browser backend
    pub render: RenderConfig,
    /// Page content fetching
    pub content: ContentFetchConfig,
}

/// Browserless connection settings
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Browserless base URL
    pub base_url: String,
    /// Optional Browserless API token
    pub token: Option<String>,
}

impl NetSearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let provider_base_urls = ProviderId::ALL
            .iter()
            .filter_map(|id| {
                env::var(id.base_url_env())
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (*id, v))
            })
            .collect();

        Self {
            quick_search: env::var("ENABLE_QUICK_SEARCH")
                .map(|v| v == "true")
                .unwrap_or(false),
            provider_base_urls,
            weather_base_url: env::var("WEATHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_URL.to_string()),
            render: RenderConfig {
                base_url: env::var("BROWSERLESS_URL")
                    .unwrap_or_else(|_| DEFAULT_BROWSERLESS_URL.to_string()),
                token: env::var("BROWSERLESS_TOKEN").ok(),
            },
            content: ContentFetchConfig::from_env(),
        }
    }

    /// Base URL for a provider, falling back to its built-in default
    pub fn base_url(&self, provider: ProviderId) -> &str {
        self.provider_base_urls
            .get(&provider)
            .map(|s| s.as_str())
            .unwrap_or_else(|| provider.default_base_url())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        for id in ProviderId::ALL {
            let base = self.base_url(id);
            Url::parse(base).map_err(|e| format!("Invalid base URL for {}: {}", id.name(), e))?;
        }
        Url::parse(&self.weather_base_url)
            .map_err(|e| format!("Invalid weather API URL: {}", e))?;
        Url::parse(&self.render.base_url)
            .map_err(|e| format!("Invalid Browserless URL: {}", e))?;
        self.content.validate()
    }
}

impl Default for NetSearchConfig {
    fn default() -> Self {
        Self {
            quick_search: false,
            provider_base_urls: HashMap::new(),
            weather_base_url: DEFAULT_WEATHER_URL.to_string(),
            render: RenderConfig {
                base_url: DEFAULT_BROWSERLESS_URL.to_string(),
                token: None,
            },
            content: ContentFetchConfig::default(),
        }
    }
}
