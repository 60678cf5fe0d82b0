// ABOUTME: Environment configuration for the ranking engine
// ABOUTME: Parses ranking and throttling settings from environment variables with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

//! Environment-based runtime configuration.
//!
//! All settings have sensible defaults; unset variables fall back silently
//! and malformed values fall back with a warning, so a bare environment
//! always yields a working configuration.

use crate::rate_limiting::{FixedWindowPolicy, DEFAULT_MAX_PER_WINDOW, DEFAULT_WINDOW_SECS};
use crate::ranking::SortOrder;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::warn;

/// Default cap on returned search results per page
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// Runtime configuration for ranking and dispatch throttling
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Maximum ranked results returned per search page
    pub max_results: usize,

    /// Sort order applied when the caller does not choose one
    pub default_sort: SortOrder,

    /// Notification dispatch throttling policy
    pub rate_limit: FixedWindowPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_MAX_RESULTS,
            default_sort: SortOrder::Score,
            rate_limit: FixedWindowPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset or malformed.
    #[must_use]
    pub fn from_env() -> Self {
        let max_results = parse_env("RANKING_MAX_RESULTS", DEFAULT_MAX_RESULTS);

        let default_sort = match env::var("RANKING_DEFAULT_SORT").as_deref() {
            Ok("rating") => SortOrder::Rating,
            Ok("years_experience") => SortOrder::YearsExperience,
            Ok("score") | Err(_) => SortOrder::Score,
            Ok(other) => {
                warn!(value = other, "unknown RANKING_DEFAULT_SORT, using score");
                SortOrder::Score
            }
        };

        let rate_limit = FixedWindowPolicy {
            max_per_window: parse_env("NOTIFY_MAX_PER_WINDOW", DEFAULT_MAX_PER_WINDOW),
            window_secs: parse_env("NOTIFY_WINDOW_SECS", DEFAULT_WINDOW_SECS),
        };

        Self {
            max_results,
            default_sort,
            rate_limit,
        }
    }
}

/// Parse an environment variable, warning and falling back on bad values
fn parse_env<T: FromStr + Copy>(name: &str, default: T) -> T {
    env::var(name).map_or(default, |raw| {
        raw.parse().unwrap_or_else(|_| {
            warn!(variable = name, value = %raw, "malformed value, using default");
            default
        })
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.max_results, 50);
        assert_eq!(config.default_sort, SortOrder::Score);
        assert_eq!(config.rate_limit.max_per_window, 10);
        assert_eq!(config.rate_limit.window_secs, 3600);
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = AppConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let restored: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
