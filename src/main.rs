// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use fabstir_net_search::{
    api::start_server,
    search::{NetSearchConfig, NetSearchService},
};
use std::{env, net::SocketAddr};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Fabstir Net Search...\n");

    let api_host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let api_port = env::var("API_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or(8080);

    let config = NetSearchConfig::from_env();
    config.validate().map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    println!("🌐 Browserless: {}", config.render.base_url);
    println!("🌤️  Weather API: {}", config.weather_base_url);
    println!(
        "⚡ Quick search: {}",
        if config.quick_search { "enabled" } else { "disabled" }
    );

    let service = NetSearchService::new(config);
    println!("🔍 Providers: {}", service.provider_names().join(" → "));

    let addr: SocketAddr = format!("{}:{}", api_host, api_port).parse()?;
    println!("✅ Listening on http://{}", addr);

    start_server(service, addr).await?;

    println!("👋 Goodbye!");
    Ok(())
}
