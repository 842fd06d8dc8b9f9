// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Net-search plugin
//!
//! Answers a free-text query with a single citation-ready text block:
//! - Weather queries (query names a known city) are answered from a
//!   forecast API
//! - Everything else cascades through ranked web-search engines until
//!   three results are collected, enriches each result with page text,
//!   and renders an instruction payload for a downstream model
//!
//! Key features:
//! - Four scraped providers (Bing, Sogou, DuckDuckGo, Google), table-driven
//! - Scoped browser sessions with guaranteed release
//! - Parallel, order-preserving content enrichment (skippable in quick mode)
//! - Graceful degradation: failures fall back to the original query

pub mod bing;
pub mod cascade;
pub mod config;
pub mod content;
pub mod duckduckgo;
pub mod formatter;
pub mod google;
pub mod layout;
pub mod provider;
pub mod render;
pub mod router;
pub mod service;
pub mod sogou;
pub mod types;
pub mod weather;

// Re-export commonly used types
pub use cascade::{CascadeOutcome, SearchCascade, QUORUM};
pub use config::{NetSearchConfig, RenderConfig};
pub use layout::ScrapingProvider;
pub use provider::{ProviderId, SearchProvider, MAX_RESULTS_PER_PROVIDER};
pub use render::{NavigateOptions, RenderError, RenderSession, Renderer, SessionGuard, WaitUntil};
pub use service::NetSearchService;
pub use types::{EnrichedSearchResult, Intent, RawSearchResult, SearchBundle, SearchError};

// Re-export content fetching types
pub use content::{
    enrich_results, ContentFetchConfig, ContentFetcher, PageFetcher, FETCH_FAILED, NO_CONTENT,
};
pub use weather::{CityGazetteer, ForecastEntry, ForecastSource, WeatherClient};
