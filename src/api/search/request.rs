// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Net-search request types

use serde::{Deserialize, Serialize};

/// Request body for POST /v1/plugins/net-search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetSearchRequest {
    /// The user's question, passed through untouched
    pub prompt: String,
}

impl NetSearchRequest {
    /// Validate the request
    pub fn validate(&self) -> Result<(), String> {
        if self.prompt.trim().is_empty() {
            return Err("Prompt cannot be empty".to_string());
        }
        Ok(())
    }
}
