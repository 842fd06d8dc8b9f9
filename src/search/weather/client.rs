// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Forecast API client
//!
//! `GET {base}/api/weather/city/{cityCode}` returns
//! `{ data: { forecast: [ ... ] } }`. Every forecast day is rendered as one
//! line and the lines are joined with a single space.
//!
//! The API bans callers that hit it more than once per 3 seconds or more
//! than 300 times a minute. This client does not pace or retry; callers
//! that need throughput must rate-limit in front of it.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use crate::search::types::SearchError;

/// One day of forecast data
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub high: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub low: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub ymd: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub week: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sunrise: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub sunset: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub aqi: String,
    /// Wind direction
    #[serde(default, deserialize_with = "lenient_string")]
    pub fx: String,
    /// Wind force
    #[serde(default, deserialize_with = "lenient_string")]
    pub fl: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_string")]
    pub weather_type: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub notice: String,
}

impl ForecastEntry {
    /// One line with every field in API order
    pub fn to_line(&self) -> String {
        format!(
            "date: {}, high: {}, low: {}, ymd: {}, week: {}, sunrise: {}, sunset: {}, \
             aqi: {}, wind direction: {}, wind force: {}, type: {}, notice: {}",
            self.date,
            self.high,
            self.low,
            self.ymd,
            self.week,
            self.sunrise,
            self.sunset,
            self.aqi,
            self.fx,
            self.fl,
            self.weather_type,
            self.notice
        )
    }
}

/// Accept strings, numbers or null for a text field
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[derive(Debug, Deserialize)]
struct WeatherEnvelope {
    data: Option<WeatherData>,
}

#[derive(Debug, Deserialize)]
struct WeatherData {
    forecast: Option<Vec<ForecastEntry>>,
}

/// Parse the API envelope, failing when `data.forecast` is absent
pub fn parse_forecast(body: &str) -> Result<Vec<ForecastEntry>, SearchError> {
    let envelope: WeatherEnvelope =
        serde_json::from_str(body).map_err(|e| SearchError::InvalidResponseShape {
            reason: format!("malformed weather response: {}", e),
        })?;

    envelope
        .data
        .and_then(|d| d.forecast)
        .ok_or_else(|| SearchError::InvalidResponseShape {
            reason: "missing data.forecast".to_string(),
        })
}

/// Render forecast days as one space-joined paragraph
pub fn format_forecast(entries: &[ForecastEntry]) -> String {
    entries
        .iter()
        .map(ForecastEntry::to_line)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Source of rendered forecasts
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn forecast(&self, city_code: &str) -> Result<String, SearchError>;
}

/// HTTP client for the forecast API
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn forecast_url(&self, city_code: &str) -> String {
        format!("{}/api/weather/city/{}", self.base_url, city_code)
    }
}

#[async_trait]
impl ForecastSource for WeatherClient {
    async fn forecast(&self, city_code: &str) -> Result<String, SearchError> {
        info!("Fetching forecast for city code: {}", city_code);

        let response = self
            .client
            .get(self.forecast_url(city_code))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout { timeout_ms: 0 }
                } else {
                    SearchError::WeatherApi {
                        status: 0,
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::WeatherApi {
                status: status.as_u16(),
                message: "forecast request failed".to_string(),
            });
        }

        let body = response.text().await.map_err(|e| SearchError::WeatherApi {
            status: status.as_u16(),
            message: e.to_string(),
        })?;

        let entries = parse_forecast(&body)?;
        debug!("Parsed {} forecast days", entries.len());

        Ok(format_forecast(&entries))
    }
}
