// ABOUTME: Unified error handling for the IronMatch ranking crate
// ABOUTME: Error types for ingestion, configuration, and CLI boundaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

//! Unified error handling.
//!
//! Scoring and ranking are total functions and never fail; errors only
//! arise at the crate's boundaries, where profile documents are ingested,
//! configuration is read, or the CLI touches the filesystem.

use thiserror::Error;

/// Result alias used throughout the crate
pub type AppResult<T> = Result<T, AppError>;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration value missing or malformed
    #[error("configuration error: {0}")]
    Config(String),

    /// Input document failed validation at the ingestion boundary
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Filesystem failure while reading profile documents
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile document could not be parsed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Build a configuration error from any displayable cause
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Build an invalid-input error from any displayable cause
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_context() {
        let err = AppError::config("RANKING_MAX_RESULTS must be a positive integer");
        assert!(err.to_string().contains("configuration error"));

        let err = AppError::invalid_input("profile missing display_name");
        assert!(err.to_string().contains("invalid input"));
    }

    #[test]
    fn test_serde_errors_convert() {
        let parse_err =
            serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = parse_err.into();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
