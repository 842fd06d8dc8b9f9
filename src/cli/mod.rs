// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};

use crate::search::{Intent, NetSearchConfig, NetSearchService};

/// Net-search CLI
#[derive(Parser, Debug)]
#[command(name = "net-search-cli")]
#[command(version = "1.0.0")]
#[command(about = "Run net-search queries from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a query and print the instruction payload
    Search {
        /// The query to answer
        query: String,

        /// Skip page content enrichment
        #[arg(long)]
        quick: bool,
    },

    /// Show how a query would be routed without running it
    Classify {
        /// The query to classify
        query: String,
    },
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let mut config = NetSearchConfig::from_env();

    match cli.command {
        Commands::Search { query, quick } => {
            if query.trim().is_empty() {
                return Err(anyhow!("Query cannot be empty"));
            }
            config.quick_search |= quick;
            config.validate().map_err(|e| anyhow!(e))?;

            let service = NetSearchService::new(config);
            let output = service.handle(&query).await;
            println!("{}", output);
            Ok(())
        }
        Commands::Classify { query } => {
            let service = NetSearchService::new(config);
            println!("{}", describe_intent(&service.classify(&query)));
            Ok(())
        }
    }
}

/// Human-readable routing decision
pub fn describe_intent(intent: &Intent) -> String {
    match intent {
        Intent::Weather(code) => format!("🌤️  weather (city code {})", code),
        Intent::General => "🔍 general web search".to_string(),
    }
}
