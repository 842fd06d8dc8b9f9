// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Intent routing
//!
//! A query is a weather query exactly when it names a gazetteer city.
//! There is no weather-keyword gate: "天气" alone, or with a city the
//! gazetteer does not know, routes to general search, and a query that
//! names a city routes to weather whatever else it says.

use super::types::Intent;
use super::weather::CityGazetteer;

/// Classify `query` against `gazetteer`
pub fn classify(query: &str, gazetteer: &CityGazetteer) -> Intent {
    match gazetteer.lookup(query) {
        Some(code) => Intent::Weather(code.to_string()),
        None => Intent::General,
    }
}
