// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Test doubles shared by the net-search integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use fabstir_net_search::search::{
    NavigateOptions, PageFetcher, RawSearchResult, RenderError, RenderSession, Renderer,
    SearchError, SearchProvider,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

const NAMES: [&str; 4] = ["bing", "sogou", "duckduckgo", "google"];

/// Provider returning a fixed number of results, or failing
pub struct ScriptedProvider {
    pub name: &'static str,
    pub outcome: Result<usize, String>,
    pub calls: Arc<AtomicUsize>,
}

impl ScriptedProvider {
    pub fn returning(name: &'static str, count: usize) -> Self {
        Self {
            name,
            outcome: Ok(count),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(name: &'static str, message: &str) -> Self {
        Self {
            name,
            outcome: Err(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl SearchProvider for ScriptedProvider {
    async fn search(&self, query: &str) -> Result<Vec<RawSearchResult>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            Ok(count) => Ok((0..*count)
                .map(|i| {
                    RawSearchResult::new(
                        format!("https://{}.example/{}", self.name, i),
                        format!("{} result {} for {}", self.name, i, query),
                        format!("{} abstract {}", self.name, i),
                    )
                })
                .collect()),
            Err(message) => Err(SearchError::ProviderFault {
                provider: self.name.to_string(),
                message: message.clone(),
            }),
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

/// Boxed providers from per-provider result counts, plus their call counters
pub fn providers_with_counts(
    counts: &[usize],
) -> (Vec<Box<dyn SearchProvider>>, Vec<Arc<AtomicUsize>>) {
    let mut providers: Vec<Box<dyn SearchProvider>> = Vec::new();
    let mut calls = Vec::new();
    for (i, count) in counts.iter().enumerate() {
        let provider = ScriptedProvider::returning(NAMES[i % NAMES.len()], *count);
        calls.push(provider.calls.clone());
        providers.push(Box::new(provider));
    }
    (providers, calls)
}

/// Fetcher that records how often it was asked
pub struct CountingFetcher {
    pub calls: Arc<AtomicUsize>,
}

impl CountingFetcher {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl PageFetcher for CountingFetcher {
    async fn fetch(&self, href: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        format!("content of {}", href)
    }
}

/// Renderer serving canned HTML per URL; unknown URLs fail navigation
pub struct HtmlRenderer {
    pub pages: Arc<HashMap<String, String>>,
    pub opened: Arc<AtomicUsize>,
    pub closed: Arc<AtomicUsize>,
}

impl HtmlRenderer {
    pub fn new(pages: &[(&str, String)]) -> Self {
        Self {
            pages: Arc::new(
                pages
                    .iter()
                    .map(|(url, html)| (url.to_string(), html.clone()))
                    .collect(),
            ),
            opened: Arc::new(AtomicUsize::new(0)),
            closed: Arc::new(AtomicUsize::new(0)),
        }
    }
}

struct HtmlSession {
    pages: Arc<HashMap<String, String>>,
    closed: Arc<AtomicUsize>,
}

#[async_trait]
impl RenderSession for HtmlSession {
    async fn navigate(
        &mut self,
        url: &str,
        _options: &NavigateOptions,
    ) -> Result<String, RenderError> {
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| RenderError::Navigation {
                url: url.to_string(),
                message: "net::ERR_NAME_NOT_RESOLVED".to_string(),
            })
    }

    async fn close(&mut self) {
        self.closed.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl Renderer for HtmlRenderer {
    async fn open(&self) -> Result<Box<dyn RenderSession>, RenderError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(HtmlSession {
            pages: self.pages.clone(),
            closed: self.closed.clone(),
        }))
    }
}

/// Wrap text in a minimal page
pub fn page(body: &str) -> String {
    format!(
        "<html><head><title>t</title></head><body><p>{}</p></body></html>",
        body
    )
}
