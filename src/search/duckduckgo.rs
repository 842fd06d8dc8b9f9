// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! DuckDuckGo results page
//!
//! Tertiary provider. Uses the JavaScript results page, where each result is
//! an `li` of the `#react-layout` ordered list: the second child block holds
//! the link, the third holds the snippet.

use super::layout::{AbstractRule, ItemRule, ResultsLayout, TitleRule};
use super::provider::ProviderId;

pub const LAYOUT: ResultsLayout = ResultsLayout {
    provider: ProviderId::DuckDuckGo,
    search_url,
    container: "#react-layout ol",
    items: ItemRule::Each("#react-layout ol li"),
    link: "div:nth-child(2) > a",
    title: TitleRule::LinkText,
    abstract_rule: AbstractRule::First("div:nth-child(3) > div"),
};

fn search_url(base: &str, query: &str) -> String {
    format!("{}/?q={}&kl=hk-tzh&ia=web", base, query)
}
