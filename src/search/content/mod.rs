//! Content fetching for search results
//!
//! Loads result pages so the downstream model sees real page text instead
//! of just snippets.
//!
//! ## Architecture
//!
//! ```text
//! RawSearchResult.href → ContentFetcher → Renderer session → HTML
//!                                              ↓
//!                              visible_text → truncate_content → content
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let fetcher = ContentFetcher::new(renderer, ContentFetchConfig::from_env());
//! let enriched = enrich_results(&fetcher, raw_results, 20).await;
//! ```

pub mod config;
pub mod extractor;
pub mod fetcher;

pub use config::ContentFetchConfig;
pub use extractor::{truncate_content, visible_text};
pub use fetcher::{enrich_results, ContentFetcher, FetchError, PageFetcher, FETCH_FAILED, NO_CONTENT};
