// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Provider cascade tests

use super::mocks::{providers_with_counts, ScriptedProvider};
use fabstir_net_search::search::{SearchCascade, SearchError, SearchProvider, QUORUM};
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_cascade_stops_after_quorum() {
    let (providers, calls) = providers_with_counts(&[2, 2, 0, 5]);
    let cascade = SearchCascade::new(providers);

    let outcome = cascade.run("rust async").await.unwrap();

    assert_eq!(outcome.consulted, 2);
    assert_eq!(outcome.results.len(), 4);
    assert!(outcome.quorum_met());
    assert_eq!(calls[2].load(Ordering::SeqCst), 0);
    assert_eq!(calls[3].load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_cascade_keeps_provider_order() {
    let (providers, _) = providers_with_counts(&[2, 2, 0, 5]);
    let cascade = SearchCascade::new(providers);

    let outcome = cascade.run("q").await.unwrap();
    let hrefs: Vec<_> = outcome.results.iter().map(|r| r.href.as_str()).collect();

    assert_eq!(
        hrefs,
        vec![
            "https://bing.example/0",
            "https://bing.example/1",
            "https://sogou.example/0",
            "https://sogou.example/1",
        ]
    );
}

#[tokio::test]
async fn test_cascade_all_empty_consults_everyone() {
    let (providers, calls) = providers_with_counts(&[0, 0, 0, 0]);
    let cascade = SearchCascade::new(providers);

    let outcome = cascade.run("nothing here").await.unwrap();

    assert_eq!(outcome.consulted, 4);
    assert!(outcome.results.is_empty());
    assert!(!outcome.quorum_met());
    assert!(calls.iter().all(|c| c.load(Ordering::SeqCst) == 1));
}

#[tokio::test]
async fn test_cascade_failure_counts_as_zero() {
    let providers: Vec<Box<dyn SearchProvider>> = vec![
        Box::new(ScriptedProvider::failing("bing", "results container missing")),
        Box::new(ScriptedProvider::returning("sogou", QUORUM)),
        Box::new(ScriptedProvider::returning("duckduckgo", 5)),
    ];
    let cascade = SearchCascade::new(providers);

    let outcome = cascade.run("q").await.unwrap();

    assert_eq!(outcome.consulted, 2);
    assert_eq!(outcome.results.len(), QUORUM);
    assert!(outcome.results.iter().all(|r| r.href.contains("sogou")));
}

#[tokio::test]
async fn test_cascade_without_providers_is_error() {
    let cascade = SearchCascade::new(Vec::new());
    let result = cascade.run("q").await;
    assert!(matches!(result, Err(SearchError::NoProviders)));
}
