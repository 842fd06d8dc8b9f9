// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! City gazetteer
//!
//! Ordered `(city name, city code)` pairs, fixed at construction. Lookup is
//! substring containment of the city name in the raw query, scanned in
//! table order; the first hit wins, with no preference for longer or
//! shorter names.

use super::cities::CITY_CODES;

#[derive(Debug, Clone)]
pub struct CityGazetteer {
    entries: Vec<(String, String)>,
}

impl CityGazetteer {
    /// Gazetteer with the built-in city table
    pub fn builtin() -> Self {
        Self::from_entries(
            CITY_CODES
                .iter()
                .map(|(name, code)| (name.to_string(), code.to_string())),
        )
    }

    /// Gazetteer over caller-supplied entries, order preserved
    pub fn from_entries<I, N, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(n, c)| (n.into(), c.into()))
                .collect(),
        }
    }

    /// First entry whose name occurs in `query`, as `(name, code)`
    pub fn find(&self, query: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .find(|(name, _)| !name.is_empty() && query.contains(name.as_str()))
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }

    /// City code for the first matching entry
    pub fn lookup(&self, query: &str) -> Option<&str> {
        self.find(query).map(|(_, code)| code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CityGazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}
