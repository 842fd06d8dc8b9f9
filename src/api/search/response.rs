// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Net-search response types

use serde::{Deserialize, Serialize};

/// Response body for POST /v1/plugins/net-search
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetSearchResponse {
    /// Instruction payload, or the prompt itself when nothing was found
    pub result: String,
}
