// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Search provider trait definition

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::layout::ResultsLayout;
use super::types::{RawSearchResult, SearchError};
use super::{bing, duckduckgo, google, sogou};

/// Maximum entries any provider returns for one query
pub const MAX_RESULTS_PER_PROVIDER: usize = 5;

/// The closed set of web-search engines the cascade knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Bing,
    Sogou,
    DuckDuckGo,
    Google,
}

impl ProviderId {
    /// Every provider, in cascade priority order
    pub const ALL: [ProviderId; 4] = [
        ProviderId::Bing,
        ProviderId::Sogou,
        ProviderId::DuckDuckGo,
        ProviderId::Google,
    ];

    /// Name used for logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bing => "bing",
            Self::Sogou => "sogou",
            Self::DuckDuckGo => "duckduckgo",
            Self::Google => "google",
        }
    }

    pub fn default_base_url(&self) -> &'static str {
        match self {
            Self::Bing => "https://cn.bing.com",
            Self::Sogou => "https://www.sogou.com",
            Self::DuckDuckGo => "https://duckduckgo.com",
            Self::Google => "https://www.google.com.hk",
        }
    }

    /// Environment variable that overrides the base URL
    pub fn base_url_env(&self) -> &'static str {
        match self {
            Self::Bing => "BING_URL",
            Self::Sogou => "SOGOU_URL",
            Self::DuckDuckGo => "DUCKDUCKGO_URL",
            Self::Google => "GOOGLE_URL",
        }
    }

    /// Results-page layout for this engine
    pub fn layout(&self) -> &'static ResultsLayout {
        match self {
            Self::Bing => &bing::LAYOUT,
            Self::Sogou => &sogou::LAYOUT,
            Self::DuckDuckGo => &duckduckgo::LAYOUT,
            Self::Google => &google::LAYOUT,
        }
    }
}

/// Trait for implementing search providers
///
/// The cascade only ever sees this interface; adding an engine means adding
/// an implementation, never touching the cascade.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Search for `query`, returning at most [`MAX_RESULTS_PER_PROVIDER`]
    /// results in page order
    async fn search(&self, query: &str) -> Result<Vec<RawSearchResult>, SearchError>;

    /// Get the provider name for logging
    fn name(&self) -> &'static str;
}
