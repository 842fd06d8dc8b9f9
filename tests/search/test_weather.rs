// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Forecast client tests against a local stub of the weather API

use axum::{extract::Path, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use fabstir_net_search::search::{
    formatter::{format_weather, WEATHER_INSTRUCTIONS},
    ForecastSource, SearchError, WeatherClient,
};
use serde_json::json;
use std::net::SocketAddr;

async fn city_handler(Path(code): Path<String>) -> impl IntoResponse {
    match code.as_str() {
        "101010100" => (
            StatusCode::OK,
            Json(json!({
                "status": 200,
                "data": {
                    "forecast": [
                        {
                            "date": "19", "high": "高温 20℃", "low": "低温 8℃",
                            "ymd": "2026-10-19", "week": "星期一",
                            "sunrise": "06:31", "sunset": "17:25",
                            "aqi": 48, "fx": "西北风", "fl": "3级",
                            "type": "晴", "notice": "愿你拥有比阳光明媚的心情"
                        },
                        {
                            "date": "20", "high": "高温 18℃", "low": "低温 7℃",
                            "ymd": "2026-10-20", "week": "星期二",
                            "sunrise": "06:32", "sunset": "17:24",
                            "aqi": 51, "fx": "北风", "fl": "2级",
                            "type": "多云", "notice": "阴晴之间，谨防紫外线侵扰"
                        }
                    ]
                }
            })),
        ),
        "000000000" => (StatusCode::OK, Json(json!({ "status": 200, "data": {} }))),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "error" })),
        ),
    }
}

/// Start the stub on an ephemeral port and return its base URL
async fn start_stub() -> String {
    let app = Router::new().route("/api/weather/city/:code", get(city_handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_two_day_forecast_rendered_on_one_line() {
    let client = WeatherClient::new(&start_stub().await);

    let forecast = client.forecast("101010100").await.unwrap();

    assert!(!forecast.contains('\n'));
    assert_eq!(forecast.matches("date: ").count(), 2);
    assert!(forecast.starts_with("date: 19, high: 高温 20℃"));
    assert!(forecast.contains("notice: 愿你拥有比阳光明媚的心情 date: 20"));
    assert!(forecast.contains("aqi: 48"));
    assert!(forecast.ends_with("notice: 阴晴之间，谨防紫外线侵扰"));

    let payload = format_weather(&forecast);
    assert_eq!(payload, format!("{}\n{}", WEATHER_INSTRUCTIONS, forecast));
}

#[tokio::test]
async fn test_missing_forecast_is_invalid_shape() {
    let client = WeatherClient::new(&start_stub().await);

    let result = client.forecast("000000000").await;

    assert!(matches!(
        result,
        Err(SearchError::InvalidResponseShape { .. })
    ));
}

#[tokio::test]
async fn test_server_error_is_weather_api_error() {
    let client = WeatherClient::new(&start_stub().await);

    let result = client.forecast("123456789").await;

    assert!(matches!(
        result,
        Err(SearchError::WeatherApi { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_api_is_error() {
    // Nothing listens on the discard port
    let client = WeatherClient::new("http://127.0.0.1:9");

    assert!(client.forecast("101010100").await.is_err());
}

#[test]
fn test_forecast_url_trims_trailing_slash() {
    let client = WeatherClient::new("http://t.weather.itboy.net/");
    assert_eq!(
        client.forecast_url("101010100"),
        "http://t.weather.itboy.net/api/weather/city/101010100"
    );
}
