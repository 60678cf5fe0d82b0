// ABOUTME: Main library entry point for the IronMatch coach ranking engine
// ABOUTME: Provides coach scoring, search ranking, and notification dispatch throttling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

#![deny(unsafe_code)]

//! # IronMatch Ranking Engine
//!
//! Ranking core for the IronMatch marketplace, which connects strength
//! athletes (bodybuilding / powerlifting) with coaches. The web and mobile
//! clients fetch candidate coach profiles from the platform's document store
//! and call into this crate to score, filter, and order them.
//!
//! ## Features
//!
//! - **Coach scoring**: pure weighted-average scoring of a coach profile
//!   into five sub-scores and one final ranking score
//! - **Search ranking**: filter composition and score-ordered ranking of
//!   candidate lists, parallelized for large result pages
//! - **Dispatch throttling**: fixed-window rate limiting for notification
//!   fan-out
//!
//! ## Example Usage
//!
//! ```rust
//! use ironmatch::models::CoachProfile;
//! use ironmatch::scoring::ScoreCalculator;
//!
//! let coach = CoachProfile::new("Alex Ruiz");
//! let components = ScoreCalculator::calculate(&coach);
//! assert!(components.final_score <= 100.0);
//! ```

/// Scoring weights, baselines, and caps used by the ranking formulas
pub mod constants;

/// Environment-driven runtime configuration
pub mod config;

/// Unified error handling for ingestion, configuration, and CLI boundaries
pub mod errors;

/// Structured logging setup built on tracing
pub mod logging;

/// Coach profile data model and ingestion normalization
pub mod models;

/// Search-result filtering and score-ordered ranking
pub mod ranking;

/// Fixed-window rate limiting for notification dispatch
pub mod rate_limiting;

/// Coach score calculation
pub mod scoring;

pub use errors::{AppError, AppResult};
pub use models::CoachProfile;
pub use ranking::{CoachFilters, CoachRanker, RankedCoach, SortOrder};
pub use scoring::{ScoreCalculator, ScoreComponents};
