// ABOUTME: Tuning constants for the coach ranking formulas
// ABOUTME: Weights, baselines, and caps shared by the scoring sub-components
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

//! Tuning constants for coach ranking.
//!
//! These values were carried over from the original marketplace scoring
//! formula for behavioral compatibility. They are product tuning constants,
//! not derived quantities; changing any of them changes the relative order
//! of coaches in search results.

/// Weights applied to the five sub-scores when combining into the final score.
///
/// The five weights sum to 1.0.
pub mod weights {
    /// Weight of the satisfaction sub-score (review rating + testimonials)
    pub const SATISFACTION: f64 = 0.20;

    /// Weight of the consistency sub-score
    pub const CONSISTENCY: f64 = 0.25;

    /// Weight of the experience sub-score
    pub const EXPERIENCE: f64 = 0.15;

    /// Weight of the contest-prep success ratio sub-score
    pub const SUCCESS_RATIO: f64 = 0.25;

    /// Weight of the client retention sub-score
    pub const RETENTION: f64 = 0.15;
}

/// Neutral fallback values substituted when optional profile data is absent.
///
/// An incomplete profile still receives a usable, comparable score rather
/// than blocking the search flow.
pub mod baselines {
    /// Satisfaction score for coaches with no reviews yet
    pub const SATISFACTION: f64 = 70.0;

    /// Starting consistency score before experience bonuses
    pub const CONSISTENCY: f64 = 75.0;

    /// Starting retention score before experience and expertise bonuses
    pub const RETENTION: f64 = 75.0;

    /// Success ratio for coaches with no contest-prep record
    pub const SUCCESS_RATIO: f64 = 75.0;

    /// Success ratio starting point for beginner-level prep coaches
    pub const PREP_BEGINNER: f64 = 75.0;

    /// Success ratio starting point for intermediate-level prep coaches
    pub const PREP_INTERMEDIATE: f64 = 80.0;

    /// Success ratio starting point for expert-level prep coaches
    pub const PREP_EXPERT: f64 = 85.0;
}

/// Caps on individual bonus terms, bounding how much any one signal can move
/// a sub-score.
pub mod caps {
    /// Every sub-score is clamped to this ceiling before weighting
    pub const SUB_SCORE_MAX: f64 = 100.0;

    /// Testimonial count at which the testimonial component saturates
    pub const TESTIMONIAL_SATURATION: f64 = 10.0;

    /// Maximum consistency bonus from coaching years (2 points per year)
    pub const CONSISTENCY_YEARS_BONUS: f64 = 15.0;

    /// Maximum consistency bonus from competition years (1 point per year)
    pub const CONSISTENCY_COMPETING_BONUS: f64 = 10.0;

    /// Maximum experience bonus from competition years (2 points per year)
    pub const EXPERIENCE_COMPETING_BONUS: f64 = 20.0;

    /// Maximum experience bonus from achievements (5 points per achievement)
    pub const EXPERIENCE_ACHIEVEMENT_BONUS: f64 = 20.0;

    /// Maximum success-ratio bonus from completed preps (3 points per prep)
    pub const SUCCESS_PREPS_BONUS: f64 = 15.0;

    /// Maximum retention bonus from coaching years (2 points per year)
    pub const RETENTION_YEARS_BONUS: f64 = 15.0;

    /// Maximum retention bonus from expertise flags (2.5 points per flag)
    pub const RETENTION_EXPERTISE_BONUS: f64 = 10.0;
}

/// Per-signal rates feeding the bonus terms above.
pub mod rates {
    /// Satisfaction blend: share contributed by the review rating
    pub const SATISFACTION_RATING_SHARE: f64 = 0.7;

    /// Satisfaction blend: share contributed by testimonial volume
    pub const SATISFACTION_TESTIMONIAL_SHARE: f64 = 0.3;

    /// Consistency and retention points per year of coaching experience
    pub const POINTS_PER_COACHING_YEAR: f64 = 2.0;

    /// Experience points per year of coaching experience
    pub const EXPERIENCE_POINTS_PER_YEAR: f64 = 10.0;

    /// Experience points per year of competition history
    pub const POINTS_PER_COMPETING_YEAR: f64 = 2.0;

    /// Experience points per listed achievement
    pub const POINTS_PER_ACHIEVEMENT: f64 = 5.0;

    /// Success-ratio points per successful contest prep
    pub const POINTS_PER_SUCCESSFUL_PREP: f64 = 3.0;

    /// Retention points per active technical-expertise flag
    pub const POINTS_PER_EXPERTISE_FLAG: f64 = 2.5;
}

/// Service identity used by logging and the CLI.
pub mod service {
    /// Service name reported in structured logs
    pub const NAME: &str = "ironmatch-ranking";
}
