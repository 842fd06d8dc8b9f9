// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod search;

// Re-export main types
pub use api::{router, start_server, AppState, NetSearchRequest, NetSearchResponse};
pub use search::{
    CityGazetteer, Intent, NetSearchConfig, NetSearchService, ProviderId, SearchBundle,
    SearchError,
};
