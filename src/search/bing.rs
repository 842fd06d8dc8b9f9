// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Bing results page
//!
//! Primary provider. Results are `li.b_algo` entries under `#b_results`,
//! with the snippet in `.b_caption > p`.

use super::layout::{AbstractRule, ItemRule, ResultsLayout, TitleRule};
use super::provider::ProviderId;

pub const LAYOUT: ResultsLayout = ResultsLayout {
    provider: ProviderId::Bing,
    search_url,
    container: "#b_results",
    items: ItemRule::Each("#b_results > .b_algo"),
    link: "a",
    title: TitleRule::LinkText,
    abstract_rule: AbstractRule::First(".b_caption > p"),
};

fn search_url(base: &str, query: &str) -> String {
    format!("{}/search?form=QBRE&q={}&cc=CN", base, query)
}
