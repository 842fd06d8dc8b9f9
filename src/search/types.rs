// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core types for the net-search pipeline

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::render::RenderError;

/// A single entry scraped from a provider's results page
///
/// `href` is empty when the entry had no link element, `abstract_text`
/// is empty when it had no snippet. Entries are never dropped for
/// missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSearchResult {
    pub href: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

impl RawSearchResult {
    pub fn new(
        href: impl Into<String>,
        title: impl Into<String>,
        abstract_text: impl Into<String>,
    ) -> Self {
        Self {
            href: href.into(),
            title: title.into(),
            abstract_text: abstract_text.into(),
        }
    }
}

/// A raw result with the fetched page text attached
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichedSearchResult {
    pub href: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Page extract, a fixed marker, or empty in quick mode
    pub content: String,
}

impl EnrichedSearchResult {
    /// Attach fetched content to a raw result
    pub fn from_raw(raw: RawSearchResult, content: String) -> Self {
        Self {
            href: raw.href,
            title: raw.title,
            abstract_text: raw.abstract_text,
            content,
        }
    }
}

/// Results handed to the formatter, in cascade order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBundle {
    pub results: Vec<EnrichedSearchResult>,
}

impl SearchBundle {
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// How a query is routed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Gazetteer hit; carries the forecast API city code
    Weather(String),
    /// Plain web search
    General,
}

/// Errors that can occur while answering a query
#[derive(Debug, Error)]
pub enum SearchError {
    /// A single provider failed (navigation, selector, session)
    #[error("Provider {provider} failed: {message}")]
    ProviderFault {
        /// Name of the failing provider
        provider: String,
        /// Error message
        message: String,
    },

    /// Rendering backend failure
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Request timed out
    #[error("Timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds
        timeout_ms: u64,
    },

    /// Weather API transport or status failure
    #[error("Weather API error: {status} - {message}")]
    WeatherApi {
        /// HTTP status code (0 when the request never completed)
        status: u16,
        /// Error message
        message: String,
    },

    /// Weather API answered without `data.forecast`
    #[error("Invalid response shape: {reason}")]
    InvalidResponseShape {
        /// What was missing
        reason: String,
    },

    /// The cascade has nothing to run
    #[error("No search providers configured")]
    NoProviders,

    /// Invalid search query
    #[error("Invalid query: {reason}")]
    InvalidQuery {
        /// Reason the query is invalid
        reason: String,
    },
}
