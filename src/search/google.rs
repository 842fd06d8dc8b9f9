// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Google results page
//!
//! Last-resort provider. Google has no stable result class names, so entries
//! are the children of the first `#search > div > div`, the title is the `h3` inside
//! the first link, and the snippet is every deeply nested `span` joined.

use super::layout::{AbstractRule, ItemRule, ResultsLayout, TitleRule};
use super::provider::ProviderId;

pub const LAYOUT: ResultsLayout = ResultsLayout {
    provider: ProviderId::Google,
    search_url,
    container: "#search",
    items: ItemRule::ChildrenOfFirst("#search > div > div"),
    link: "a",
    title: TitleRule::WithinLink("h3"),
    abstract_rule: AbstractRule::Concat("div > div > div > div > div > div > span"),
};

fn search_url(base: &str, query: &str) -> String {
    format!(
        "{base}/search?q={query}&oq={query}&hl=en&gl=us&sourceid=chrome&ie=UTF-8",
        base = base,
        query = query
    )
}
