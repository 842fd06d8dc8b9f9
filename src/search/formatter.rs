// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Instruction payload rendering
//!
//! The output is read by a downstream language model, so each rendering is
//! a fixed instruction preamble followed by the material to answer from.
//! Search blocks keep cascade order, which is what the model uses to number
//! its `[[index](link)]` citations.

use super::types::{EnrichedSearchResult, SearchBundle};

/// Preamble for forecast answers
pub const WEATHER_INSTRUCTIONS: &str = "Your task is to give a more precise, detailed and \
specific answer to the user's question using the search results below. The answer must be \
in the same language as the user's question. Here are the search results:";

/// Preamble for web search answers
pub const SEARCH_INSTRUCTIONS: &str = "Your task is to give a more precise, detailed and \
specific answer to the user's question using the search results below. Wherever you cite a \
result, mark it with a link in the format [[index](link)]. The answer must be in the same \
language as the user's question. Here are the search results:";

/// Wrap a rendered forecast with its instructions
pub fn format_weather(forecast: &str) -> String {
    format!("{}\n{}", WEATHER_INSTRUCTIONS, forecast)
}

/// Render a search bundle, one block per result, blank line between blocks
pub fn format_search_bundle(bundle: &SearchBundle) -> String {
    let blocks = bundle
        .results
        .iter()
        .map(format_result)
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{}\n{}", SEARCH_INSTRUCTIONS, blocks)
}

fn format_result(result: &EnrichedSearchResult) -> String {
    format!(
        "Link: {}\nAbstract: {}\nContent: {}",
        result.href, result.abstract_text, result.content
    )
}
