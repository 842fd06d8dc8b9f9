// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Provider cascade
//!
//! Providers are consulted strictly one at a time in priority order. Each
//! provider's results are appended in page order; the cascade stops as soon
//! as the accumulated count reaches [`QUORUM`] or providers run out. The
//! provider that completes the quorum keeps all of its results.

use tracing::{debug, info, warn};

use super::provider::SearchProvider;
use super::types::{RawSearchResult, SearchError};

/// Minimum accumulated results before the cascade stops early
pub const QUORUM: usize = 3;

/// What a cascade run produced
#[derive(Debug, Clone, Default)]
pub struct CascadeOutcome {
    /// Accumulated results, provider order then page order
    pub results: Vec<RawSearchResult>,
    /// Number of providers consulted
    pub consulted: usize,
}

impl CascadeOutcome {
    pub fn quorum_met(&self) -> bool {
        self.results.len() >= QUORUM
    }
}

/// Ordered, early-stopping sequence of providers
pub struct SearchCascade {
    providers: Vec<Box<dyn SearchProvider>>,
}

impl SearchCascade {
    /// `providers` must already be in priority order
    pub fn new(providers: Vec<Box<dyn SearchProvider>>) -> Self {
        Self { providers }
    }

    /// Provider names in priority order
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Run the cascade for `query`
    ///
    /// A failing provider counts as zero results. Only an empty provider
    /// list is an error.
    pub async fn run(&self, query: &str) -> Result<CascadeOutcome, SearchError> {
        if self.providers.is_empty() {
            return Err(SearchError::NoProviders);
        }

        let mut outcome = CascadeOutcome::default();

        for provider in &self.providers {
            outcome.consulted += 1;
            debug!("Trying search provider: {}", provider.name());

            match provider.search(query).await {
                Ok(results) => {
                    info!("{} returned {} results", provider.name(), results.len());
                    outcome.results.extend(results);
                }
                Err(e) => {
                    warn!(
                        "Search provider {} failed: {}, counting as zero results",
                        provider.name(),
                        e
                    );
                }
            }

            if outcome.quorum_met() {
                break;
            }
            debug!(
                "{} results after {}, below quorum of {}",
                outcome.results.len(),
                provider.name(),
                QUORUM
            );
        }

        if !outcome.quorum_met() {
            info!(
                "All {} providers exhausted with {} results",
                outcome.consulted,
                outcome.results.len()
            );
        }

        Ok(outcome)
    }
}
