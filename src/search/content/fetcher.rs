//! Page content fetching through browser sessions
//!
//! Loads each search result's page and attaches its visible text. Fetching
//! never fails from the caller's point of view: problems degrade to a fixed
//! marker string.

use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::config::ContentFetchConfig;
use super::extractor::{truncate_content, visible_text};
use crate::search::render::{NavigateOptions, RenderError, Renderer, SessionGuard, WaitUntil};
use crate::search::types::{EnrichedSearchResult, RawSearchResult};

/// Content used when the page loaded but had no visible text
pub const NO_CONTENT: &str = "no content";
/// Content used when navigation or extraction failed
pub const FETCH_FAILED: &str = "unable to fetch content";

/// Content fetch error types
#[derive(Debug, Clone)]
pub enum FetchError {
    /// Navigation timed out
    Timeout(String),
    /// Navigation or extraction failed
    Navigation(String),
    /// No browser session available
    SessionUnavailable(String),
    /// Link is not an absolute http(s) URL
    UnsupportedUrl(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timeout(url) => write!(f, "Timeout fetching: {}", url),
            Self::Navigation(msg) => write!(f, "Navigation error: {}", msg),
            Self::SessionUnavailable(msg) => write!(f, "Session unavailable: {}", msg),
            Self::UnsupportedUrl(url) => write!(f, "Unsupported URL: {:?}", url),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<RenderError> for FetchError {
    fn from(err: RenderError) -> Self {
        match err {
            RenderError::Timeout { url, .. } => Self::Timeout(url),
            RenderError::SessionUnavailable(msg) => Self::SessionUnavailable(msg),
            other => Self::Navigation(other.to_string()),
        }
    }
}

/// Something that turns a link into bounded page text
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Never fails; see [`NO_CONTENT`] and [`FETCH_FAILED`]
    async fn fetch(&self, href: &str) -> String;
}

/// Browser-backed content fetcher
pub struct ContentFetcher {
    renderer: Arc<dyn Renderer>,
    config: ContentFetchConfig,
}

impl ContentFetcher {
    /// Create a new content fetcher
    pub fn new(renderer: Arc<dyn Renderer>, config: ContentFetchConfig) -> Self {
        Self { renderer, config }
    }

    /// Navigation settings for article pages
    pub fn navigate_options(&self) -> NavigateOptions {
        NavigateOptions::new()
            .wait_until(WaitUntil::DomContentLoaded)
            .timeout(Duration::from_secs(self.config.navigation_timeout_secs))
    }

    async fn try_fetch(&self, href: &str) -> Result<String, FetchError> {
        if !Self::is_fetchable_url(href) {
            return Err(FetchError::UnsupportedUrl(href.to_string()));
        }

        debug!("Fetching content from: {}", href);

        let mut session = SessionGuard::acquire(self.renderer.as_ref()).await?;
        let page = session.navigate(href, &self.navigate_options()).await;
        session.release().await;

        Ok(visible_text(&page?))
    }

    /// Only absolute http/https links are worth a browser session
    pub fn is_fetchable_url(href: &str) -> bool {
        match Url::parse(href) {
            Ok(u) => ["http", "https"].contains(&u.scheme()),
            Err(_) => false,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentFetchConfig {
        &self.config
    }
}

#[async_trait]
impl PageFetcher for ContentFetcher {
    async fn fetch(&self, href: &str) -> String {
        match self.try_fetch(href).await {
            Ok(text) if text.is_empty() => NO_CONTENT.to_string(),
            Ok(text) => {
                let content = truncate_content(&text, self.config.max_chars_per_page);
                info!("Fetched {} chars from: {}", content.chars().count(), href);
                content
            }
            Err(e) => {
                warn!("Failed to fetch {}, using fallback content: {}", href, e);
                FETCH_FAILED.to_string()
            }
        }
    }
}

/// Fetch every result's page concurrently and pair content back by index
///
/// Output order is the input order regardless of completion order. Dropping
/// the returned future cancels all in-flight fetches.
pub async fn enrich_results(
    fetcher: &dyn PageFetcher,
    results: Vec<RawSearchResult>,
    max_concurrent: usize,
) -> Vec<EnrichedSearchResult> {
    let fetches: Vec<_> = results.iter().map(|r| fetcher.fetch(&r.href)).collect();
    let contents: Vec<String> = stream::iter(fetches)
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    results
        .into_iter()
        .zip(contents)
        .map(|(raw, content)| EnrichedSearchResult::from_raw(raw, content))
        .collect()
}
