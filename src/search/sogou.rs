// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Sogou results page
//!
//! Secondary provider. Entries are `.vrwrap` blocks inside `.results`;
//! links point at Sogou's `/link?url=` redirector and are resolved
//! against the base URL.

use super::layout::{AbstractRule, ItemRule, ResultsLayout, TitleRule};
use super::provider::ProviderId;

pub const LAYOUT: ResultsLayout = ResultsLayout {
    provider: ProviderId::Sogou,
    search_url,
    container: ".results",
    items: ItemRule::Each(".results > .vrwrap"),
    link: "h3 a",
    title: TitleRule::LinkText,
    abstract_rule: AbstractRule::First(".space-txt"),
};

fn search_url(base: &str, query: &str) -> String {
    format!(
        "{}/sogou?pid=sogou-site-7985672db979303a&query={}",
        base, query
    )
}
