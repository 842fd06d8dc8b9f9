// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Table-driven results-page scraping
//!
//! Each engine describes where its results live in a [`ResultsLayout`]
//! (see `bing.rs`, `sogou.rs`, `duckduckgo.rs`, `google.rs`).
//! [`ScrapingProvider`] renders the page through a browser session and
//! applies the layout with `scraper`. Markup changes on an engine only ever
//! touch that engine's table.

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

use super::provider::{ProviderId, SearchProvider, MAX_RESULTS_PER_PROVIDER};
use super::render::{NavigateOptions, Renderer, SessionGuard};
use super::types::{RawSearchResult, SearchError};

/// Where a result's title comes from
#[derive(Debug, Clone, Copy)]
pub enum TitleRule {
    /// Text of the link element
    LinkText,
    /// Text of the first match of this selector inside the link element
    WithinLink(&'static str),
}

/// Which elements are result entries
#[derive(Debug, Clone, Copy)]
pub enum ItemRule {
    /// Every match of the selector, in page order
    Each(&'static str),
    /// Element children of the first match only
    ChildrenOfFirst(&'static str),
}

/// Where a result's abstract comes from
#[derive(Debug, Clone, Copy)]
pub enum AbstractRule {
    /// Text of the first match inside the entry
    First(&'static str),
    /// Concatenated text of every match inside the entry
    Concat(&'static str),
}

/// Structural description of one engine's results page
#[derive(Debug)]
pub struct ResultsLayout {
    pub provider: ProviderId,
    /// Builds the results URL from a base URL and a percent-encoded query
    pub search_url: fn(&str, &str) -> String,
    /// Must be present before extraction starts
    pub container: &'static str,
    /// Result entries, in page order
    pub items: ItemRule,
    /// Link element inside an entry
    pub link: &'static str,
    pub title: TitleRule,
    pub abstract_rule: AbstractRule,
}

impl ResultsLayout {
    /// Results URL for a raw (not yet encoded) query
    pub fn url_for(&self, base_url: &str, query: &str) -> String {
        (self.search_url)(base_url.trim_end_matches('/'), &urlencoding::encode(query))
    }
}

/// Extract up to [`MAX_RESULTS_PER_PROVIDER`] entries from a rendered page
///
/// Fails only when the results container is absent. Missing fields inside an
/// entry become empty strings.
pub fn extract_results(
    html: &str,
    layout: &ResultsLayout,
    base_url: &str,
) -> Result<Vec<RawSearchResult>, SearchError> {
    let fault = |message: String| SearchError::ProviderFault {
        provider: layout.provider.name().to_string(),
        message,
    };
    let parse = |s: &str| Selector::parse(s).map_err(|e| fault(format!("bad selector {}: {}", s, e)));

    let document = Html::parse_document(html);

    let container = parse(layout.container)?;
    if document.select(&container).next().is_none() {
        return Err(fault(format!("results container {} not found", layout.container)));
    }

    let entries: Vec<ElementRef> = match layout.items {
        ItemRule::Each(s) => {
            let items = parse(s)?;
            document
                .select(&items)
                .take(MAX_RESULTS_PER_PROVIDER)
                .collect()
        }
        ItemRule::ChildrenOfFirst(s) => {
            let parent = parse(s)?;
            document
                .select(&parent)
                .next()
                .map(|p| {
                    p.children()
                        .filter_map(ElementRef::wrap)
                        .take(MAX_RESULTS_PER_PROVIDER)
                        .collect()
                })
                .unwrap_or_default()
        }
    };

    let link = parse(layout.link)?;
    let title_within = match layout.title {
        TitleRule::WithinLink(s) => Some(parse(s)?),
        TitleRule::LinkText => None,
    };
    let abstract_selector = match layout.abstract_rule {
        AbstractRule::First(s) | AbstractRule::Concat(s) => parse(s)?,
    };

    let results = entries
        .into_iter()
        .map(|item| {
            let link_el = item.select(&link).next();

            let href = link_el
                .and_then(|a| a.value().attr("href"))
                .map(|h| resolve_href(base_url, h))
                .unwrap_or_default();

            let title = match (&title_within, link_el) {
                (Some(sel), Some(a)) => a.select(sel).next().map(text_of).unwrap_or_default(),
                (None, Some(a)) => text_of(a),
                (_, None) => String::new(),
            };

            let abstract_text = match layout.abstract_rule {
                AbstractRule::First(_) => item
                    .select(&abstract_selector)
                    .next()
                    .map(text_of)
                    .unwrap_or_default(),
                AbstractRule::Concat(_) => item
                    .select(&abstract_selector)
                    .map(|el| el.text().collect::<String>())
                    .collect::<String>()
                    .trim()
                    .to_string(),
            };

            RawSearchResult {
                href,
                title,
                abstract_text,
            }
        })
        .collect();

    Ok(results)
}

fn text_of(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Resolve relative result links against the engine's base URL
fn resolve_href(base_url: &str, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    match Url::parse(href) {
        Ok(absolute) => absolute.to_string(),
        Err(_) => Url::parse(base_url)
            .and_then(|base| base.join(href))
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string()),
    }
}

/// A provider that scrapes an engine's results page through a browser session
pub struct ScrapingProvider {
    layout: &'static ResultsLayout,
    base_url: String,
    renderer: Arc<dyn Renderer>,
}

impl ScrapingProvider {
    pub fn new(id: ProviderId, base_url: impl Into<String>, renderer: Arc<dyn Renderer>) -> Self {
        Self {
            layout: id.layout(),
            base_url: base_url.into(),
            renderer,
        }
    }

    pub fn id(&self) -> ProviderId {
        self.layout.provider
    }

    pub fn search_url(&self, query: &str) -> String {
        self.layout.url_for(&self.base_url, query)
    }
}

#[async_trait]
impl SearchProvider for ScrapingProvider {
    async fn search(&self, query: &str) -> Result<Vec<RawSearchResult>, SearchError> {
        let name = self.name();
        info!("Searching {} for query: {}", name, query);

        let url = self.search_url(query);
        let options = NavigateOptions::new().wait_for(self.layout.container);

        let mut session = SessionGuard::acquire(self.renderer.as_ref()).await?;
        let page = session.navigate(&url, &options).await;
        session.release().await;

        let html = page?;
        debug!("Navigated to {} results page", name);

        let results = extract_results(&html, self.layout, &self.base_url)?;

        info!("Parsed {} results from {}", results.len(), name);
        for result in &results {
            debug!(
                "Title: {} | Link: {} | Abstract: {}",
                result.title, result.href, result.abstract_text
            );
        }

        Ok(results)
    }

    fn name(&self) -> &'static str {
        self.layout.provider.name()
    }
}
