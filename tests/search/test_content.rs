// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Content enrichment tests

use super::mocks::{page, HtmlRenderer};
use fabstir_net_search::search::{
    enrich_results, ContentFetchConfig, ContentFetcher, PageFetcher, RawSearchResult,
    FETCH_FAILED, NO_CONTENT,
};
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn fetcher(renderer: Arc<HtmlRenderer>) -> ContentFetcher {
    ContentFetcher::new(renderer, ContentFetchConfig::default())
}

#[tokio::test]
async fn test_long_page_truncated_to_limit() {
    let long = "a".repeat(1500);
    let renderer = Arc::new(HtmlRenderer::new(&[("https://long.example/", page(&long))]));

    let content = fetcher(renderer).fetch("https://long.example/").await;

    assert_eq!(content.chars().count(), 1003);
    assert!(content.ends_with("..."));
    assert_eq!(&content[..1000], &long[..1000]);
}

#[tokio::test]
async fn test_short_page_returned_whole() {
    let short = "b".repeat(800);
    let renderer = Arc::new(HtmlRenderer::new(&[("https://short.example/", page(&short))]));

    let content = fetcher(renderer).fetch("https://short.example/").await;

    assert_eq!(content, short);
}

#[tokio::test]
async fn test_cjk_page_truncated_by_characters() {
    let text = "天".repeat(1200);
    let renderer = Arc::new(HtmlRenderer::new(&[("https://cjk.example/", page(&text))]));

    let content = fetcher(renderer).fetch("https://cjk.example/").await;

    assert_eq!(content.chars().count(), 1003);
    assert!(content.starts_with("天天天"));
}

#[tokio::test]
async fn test_blank_page_gives_no_content_marker() {
    let renderer = Arc::new(HtmlRenderer::new(&[(
        "https://blank.example/",
        "<html><body><script>var x = 1;</script></body></html>".to_string(),
    )]));

    let content = fetcher(renderer).fetch("https://blank.example/").await;

    assert_eq!(content, NO_CONTENT);
}

#[tokio::test]
async fn test_one_failed_fetch_does_not_affect_others() {
    let renderer = Arc::new(HtmlRenderer::new(&[
        ("https://one.example/", page("first page")),
        ("https://three.example/", page("third page")),
    ]));
    let fetcher = fetcher(renderer.clone());

    let results = vec![
        RawSearchResult::new("https://one.example/", "One", "a1"),
        RawSearchResult::new("https://two.example/", "Two", "a2"),
        RawSearchResult::new("https://three.example/", "Three", "a3"),
    ];

    let enriched = enrich_results(&fetcher, results, 20).await;

    assert_eq!(enriched.len(), 3);
    assert_eq!(enriched[0].content, "first page");
    assert_eq!(enriched[1].content, FETCH_FAILED);
    assert_eq!(enriched[2].content, "third page");
    assert_eq!(enriched[1].abstract_text, "a2");

    // Every session opened for a fetch is closed again
    assert_eq!(renderer.opened.load(Ordering::SeqCst), 3);
    assert_eq!(renderer.closed.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_enrichment_keeps_order_with_low_concurrency() {
    let pages: Vec<(String, String)> = (0..6)
        .map(|i| {
            (
                format!("https://p{}.example/", i),
                page(&format!("page {}", i)),
            )
        })
        .collect();
    let refs: Vec<(&str, String)> = pages
        .iter()
        .map(|(u, h)| (u.as_str(), h.clone()))
        .collect();
    let renderer = Arc::new(HtmlRenderer::new(&refs));
    let fetcher = fetcher(renderer);

    let results = (0..6)
        .map(|i| RawSearchResult::new(format!("https://p{}.example/", i), "t", "a"))
        .collect();

    let enriched = enrich_results(&fetcher, results, 2).await;
    let contents: Vec<_> = enriched.iter().map(|r| r.content.as_str()).collect();

    assert_eq!(
        contents,
        vec!["page 0", "page 1", "page 2", "page 3", "page 4", "page 5"]
    );
}

#[tokio::test]
async fn test_relative_link_never_opens_session() {
    let renderer = Arc::new(HtmlRenderer::new(&[]));
    let fetcher = fetcher(renderer.clone());

    assert_eq!(fetcher.fetch("/relative/path").await, FETCH_FAILED);
    assert_eq!(fetcher.fetch("").await, FETCH_FAILED);
    assert_eq!(renderer.opened.load(Ordering::SeqCst), 0);
}
