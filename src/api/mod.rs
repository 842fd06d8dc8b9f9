// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP surface for the hosting framework

pub mod http_server;
pub mod search;

pub use http_server::{router, start_server, AppState};
pub use search::{NetSearchRequest, NetSearchResponse};
