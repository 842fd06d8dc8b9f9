// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route tests for POST /v1/plugins/net-search and GET /health
//!
//! The service behind the router is assembled from in-memory providers so
//! no browser or network is needed.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    extract::{Json, State},
    http::{Method, Request, StatusCode},
};
use fabstir_net_search::{
    api::{router, search::net_search_handler, AppState, NetSearchRequest, NetSearchResponse},
    search::{
        ForecastSource, NetSearchConfig, NetSearchService, PageFetcher, RawSearchResult,
        SearchError, SearchProvider,
    },
};
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

struct ThreeResults;

#[async_trait]
impl SearchProvider for ThreeResults {
    async fn search(&self, _query: &str) -> Result<Vec<RawSearchResult>, SearchError> {
        Ok((0..3)
            .map(|i| {
                RawSearchResult::new(
                    format!("https://r{}.example/", i),
                    format!("Result {}", i),
                    format!("abstract {}", i),
                )
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "fixed"
    }
}

struct SunnyForecast;

#[async_trait]
impl ForecastSource for SunnyForecast {
    async fn forecast(&self, _city_code: &str) -> Result<String, SearchError> {
        Ok("date: 19, type: 晴".to_string())
    }
}

struct StaticFetcher;

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, _href: &str) -> String {
        "page text".to_string()
    }
}

/// Helper: Create test AppState backed by in-memory collaborators
fn setup_state(providers: Vec<Box<dyn SearchProvider>>) -> AppState {
    let service = NetSearchService::from_parts(
        &NetSearchConfig::default(),
        providers,
        Arc::new(SunnyForecast),
        Arc::new(StaticFetcher),
    );
    AppState {
        search_service: Arc::new(service),
    }
}

fn post_prompt(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/v1/plugins/net-search")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_response(response: axum::response::Response) -> NetSearchResponse {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_route() {
    let app = router(setup_state(vec![Box::new(ThreeResults)]));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_search_prompt_returns_payload() {
    let app = router(setup_state(vec![Box::new(ThreeResults)]));

    let response = app
        .oneshot(post_prompt(r#"{"prompt": "rust async"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_response(response).await;
    assert_eq!(body.result.matches("Link: ").count(), 3);
    assert!(body.result.contains("Content: page text"));
}

#[tokio::test]
async fn test_weather_prompt_returns_forecast() {
    let app = router(setup_state(vec![Box::new(ThreeResults)]));

    let response = app
        .oneshot(post_prompt(r#"{"prompt": "北京天气"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_response(response).await;
    assert!(body.result.ends_with("date: 19, type: 晴"));
}

#[tokio::test]
async fn test_prompt_echoed_when_nothing_found() {
    let app = router(setup_state(Vec::new()));

    let response = app
        .oneshot(post_prompt(r#"{"prompt": "rust async"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_response(response).await.result, "rust async");
}

#[tokio::test]
async fn test_empty_prompt_rejected() {
    let state = setup_state(vec![Box::new(ThreeResults)]);
    let request = NetSearchRequest {
        prompt: String::new(),
    };

    let result = net_search_handler(State(state), Json(request)).await;

    match result {
        Err((status, message)) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(message.contains("empty"));
        }
        Ok(_) => panic!("empty prompt should be rejected"),
    }
}

#[tokio::test]
async fn test_get_not_allowed_on_plugin_route() {
    let app = router(setup_state(vec![Box::new(ThreeResults)]));

    let request = Request::builder()
        .method(Method::GET)
        .uri("/v1/plugins/net-search")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
