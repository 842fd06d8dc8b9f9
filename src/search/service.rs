// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Net-search orchestration
//!
//! Routes a query to the weather branch or the web-search cascade, enriches
//! results with page content, and renders the final instruction payload.
//! [`NetSearchService::handle`] never fails: the worst case is the original
//! query echoed back.

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::cascade::SearchCascade;
use super::config::NetSearchConfig;
use super::content::{enrich_results, ContentFetcher, PageFetcher};
use super::formatter::{format_search_bundle, format_weather};
use super::layout::ScrapingProvider;
use super::provider::{ProviderId, SearchProvider};
use super::render::{BrowserlessRenderer, Renderer};
use super::router::classify;
use super::types::{EnrichedSearchResult, Intent, SearchBundle, SearchError};
use super::weather::{CityGazetteer, ForecastSource, WeatherClient};

/// Result of trying the weather branch
enum WeatherOutcome {
    /// No gazetteer city in the query
    NotWeather,
    /// Rendered forecast
    Answered(String),
    /// City matched but the forecast could not be produced
    Failed(SearchError),
}

/// Main service behind the plugin's single entry point
pub struct NetSearchService {
    gazetteer: CityGazetteer,
    weather: Arc<dyn ForecastSource>,
    cascade: SearchCascade,
    fetcher: Arc<dyn PageFetcher>,
    quick_search: bool,
    max_concurrent_fetches: usize,
}

impl NetSearchService {
    /// Create the production service: Browserless-backed providers and
    /// fetcher, HTTP forecast client, built-in gazetteer
    pub fn new(config: NetSearchConfig) -> Self {
        let renderer: Arc<dyn Renderer> = Arc::new(BrowserlessRenderer::new(&config.render));

        let providers: Vec<Box<dyn SearchProvider>> = ProviderId::ALL
            .iter()
            .map(|id| {
                debug!("{} provider enabled at {}", id.name(), config.base_url(*id));
                Box::new(ScrapingProvider::new(
                    *id,
                    config.base_url(*id),
                    renderer.clone(),
                )) as Box<dyn SearchProvider>
            })
            .collect();

        let weather = Arc::new(WeatherClient::new(&config.weather_base_url));
        let fetcher = Arc::new(ContentFetcher::new(renderer, config.content.clone()));

        Self::from_parts(&config, providers, weather, fetcher)
    }

    /// Assemble a service from explicit collaborators
    pub fn from_parts(
        config: &NetSearchConfig,
        providers: Vec<Box<dyn SearchProvider>>,
        weather: Arc<dyn ForecastSource>,
        fetcher: Arc<dyn PageFetcher>,
    ) -> Self {
        Self {
            gazetteer: CityGazetteer::builtin(),
            weather,
            cascade: SearchCascade::new(providers),
            fetcher,
            quick_search: config.quick_search,
            max_concurrent_fetches: config.content.max_concurrent_fetches,
        }
    }

    /// Replace the gazetteer
    pub fn with_gazetteer(mut self, gazetteer: CityGazetteer) -> Self {
        self.gazetteer = gazetteer;
        self
    }

    /// Route a query without running it
    pub fn classify(&self, query: &str) -> Intent {
        classify(query, &self.gazetteer)
    }

    /// Answer `query` with an instruction payload, or echo it back
    pub async fn handle(&self, query: &str) -> String {
        let start = Instant::now();
        info!("Starting net search for query: {}", query);
        info!("Quick search enabled: {}", self.quick_search);

        match self.try_weather(query).await {
            WeatherOutcome::Answered(forecast) => {
                info!("Weather answer ready in {}ms", start.elapsed().as_millis());
                return format_weather(&forecast);
            }
            WeatherOutcome::Failed(e) => {
                warn!("Weather lookup failed, falling through to web search: {}", e);
            }
            WeatherOutcome::NotWeather => {}
        }

        let bundle = match self.general_search(query).await {
            Ok(bundle) => bundle,
            Err(e) => {
                warn!("Error while searching for \"{}\": {}", query, e);
                return query.to_string();
            }
        };

        if bundle.is_empty() {
            info!("No search results for \"{}\", returning the original query", query);
            return query.to_string();
        }

        info!(
            "Search answer with {} results ready in {}ms",
            bundle.len(),
            start.elapsed().as_millis()
        );
        format_search_bundle(&bundle)
    }

    async fn try_weather(&self, query: &str) -> WeatherOutcome {
        let city_code = match self.classify(query) {
            Intent::Weather(code) => code,
            Intent::General => return WeatherOutcome::NotWeather,
        };

        info!("Weather query detected, city code {}", city_code);
        match self.weather.forecast(&city_code).await {
            Ok(forecast) => WeatherOutcome::Answered(forecast),
            Err(e) => WeatherOutcome::Failed(e),
        }
    }

    /// Cascade plus enrichment, skipping the fetch stage in quick mode
    pub async fn general_search(&self, query: &str) -> Result<SearchBundle, SearchError> {
        let outcome = self.cascade.run(query).await?;

        let results = if self.quick_search {
            outcome
                .results
                .into_iter()
                .map(|raw| EnrichedSearchResult::from_raw(raw, String::new()))
                .collect()
        } else {
            enrich_results(
                self.fetcher.as_ref(),
                outcome.results,
                self.max_concurrent_fetches,
            )
            .await
        };

        info!(
            "Received {} search results for \"{}\" from {} providers",
            results.len(),
            query,
            outcome.consulted
        );

        Ok(SearchBundle { results })
    }

    pub fn is_quick_search(&self) -> bool {
        self.quick_search
    }

    /// Provider names in cascade order
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.cascade.provider_names()
    }
}
