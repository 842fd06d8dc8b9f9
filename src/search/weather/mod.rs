// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Weather answers for queries that name a known city

mod cities;
pub mod client;
pub mod gazetteer;

pub use client::{format_forecast, parse_forecast, ForecastEntry, ForecastSource, WeatherClient};
pub use gazetteer::CityGazetteer;

#[cfg(test)]
pub use client::MockForecastSource;
