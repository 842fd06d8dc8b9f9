// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Net-search plugin endpoint
//!
//! Provides the `/v1/plugins/net-search` HTTP endpoint.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::net_search_handler;
pub use request::NetSearchRequest;
pub use response::NetSearchResponse;
