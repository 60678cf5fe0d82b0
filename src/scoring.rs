// ABOUTME: Coach score calculation for marketplace search ranking
// ABOUTME: Pure weighted-average scoring of a coach profile into five sub-scores
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

//! Coach score calculation.
//!
//! [`ScoreCalculator::calculate`] maps a [`CoachProfile`] to five sub-scores
//! and one weighted final score used to order coaches in search results.
//! The function is pure and total: it performs no I/O, holds no state, and
//! never fails. Missing optional profile data degrades to neutral baselines
//! so an incomplete profile still receives a comparable score instead of
//! blocking the search flow.

use crate::constants::{baselines, caps, rates, weights};
use crate::models::{CoachProfile, ExperienceLevel};
use serde::{Deserialize, Serialize};

/// The five sub-scores and the combined final score for one coach.
///
/// Each sub-score lies in `[0, 100]`. `final_score` is always the fixed
/// weighted sum of the other five, rounded to the nearest integer; it is
/// never set independently.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ScoreComponents {
    /// Review rating and testimonial volume (weight 0.20)
    pub satisfaction_score: f64,

    /// Coaching longevity and competition tenure (weight 0.25)
    pub consistency_score: f64,

    /// Coaching years plus competition accolades (weight 0.15)
    pub experience_score: f64,

    /// Contest-prep track record (weight 0.25)
    pub success_ratio: f64,

    /// Longevity plus breadth of technical capabilities (weight 0.15)
    pub client_retention_score: f64,

    /// Weighted sum of the five sub-scores, rounded to the nearest integer
    pub final_score: f64,
}

/// Coach score calculator
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Compute the ranking score components for a coach profile.
    ///
    /// Stateless and idempotent: identical input always yields identical
    /// output, and concurrent callers need no coordination.
    #[must_use]
    pub fn calculate(coach: &CoachProfile) -> ScoreComponents {
        let satisfaction_score = Self::score_satisfaction(coach);
        let consistency_score = Self::score_consistency(coach);
        let experience_score = Self::score_experience(coach);
        let success_ratio = Self::score_success_ratio(coach);
        let client_retention_score = Self::score_client_retention(coach);

        let final_score = (weights::SATISFACTION * satisfaction_score
            + weights::CONSISTENCY * consistency_score
            + weights::EXPERIENCE * experience_score
            + weights::SUCCESS_RATIO * success_ratio
            + weights::RETENTION * client_retention_score)
            .round();

        ScoreComponents {
            satisfaction_score,
            consistency_score,
            experience_score,
            success_ratio,
            client_retention_score,
            final_score,
        }
    }

    /// Score review satisfaction: 70% review rating, 30% testimonial volume.
    ///
    /// Testimonial volume has diminishing returns and saturates at ten
    /// testimonials. Coaches without reviews get a neutral baseline.
    #[doc(hidden)]
    #[must_use]
    pub fn score_satisfaction(coach: &CoachProfile) -> f64 {
        let (Some(rating), Some(testimonial_count)) = (coach.rating, coach.testimonial_count)
        else {
            return baselines::SATISFACTION;
        };

        let rating_score = rating / 5.0 * 100.0;
        let testimonial_score = (f64::from(testimonial_count) / caps::TESTIMONIAL_SATURATION
            * 100.0)
            .min(caps::SUB_SCORE_MAX);

        clamp_score(
            rates::SATISFACTION_RATING_SHARE * rating_score
                + rates::SATISFACTION_TESTIMONIAL_SHARE * testimonial_score,
        )
    }

    /// Score consistency: baseline plus capped bonuses for coaching years
    /// and competition tenure.
    #[doc(hidden)]
    #[must_use]
    pub fn score_consistency(coach: &CoachProfile) -> f64 {
        let mut score = baselines::CONSISTENCY
            + (f64::from(coach.years_experience) * rates::POINTS_PER_COACHING_YEAR)
                .min(caps::CONSISTENCY_YEARS_BONUS);

        if let Some(history) = &coach.competition_history {
            score += f64::from(history.years_competing).min(caps::CONSISTENCY_COMPETING_BONUS);
        }

        clamp_score(score)
    }

    /// Score experience: coaching years, plus competition tenure and
    /// achievement bonuses when a competition history is present.
    #[doc(hidden)]
    #[must_use]
    pub fn score_experience(coach: &CoachProfile) -> f64 {
        let mut score = (f64::from(coach.years_experience) * rates::EXPERIENCE_POINTS_PER_YEAR)
            .min(caps::SUB_SCORE_MAX);

        if let Some(history) = &coach.competition_history {
            score += (f64::from(history.years_competing) * rates::POINTS_PER_COMPETING_YEAR)
                .min(caps::EXPERIENCE_COMPETING_BONUS)
                + (history.achievements.len() as f64 * rates::POINTS_PER_ACHIEVEMENT)
                    .min(caps::EXPERIENCE_ACHIEVEMENT_BONUS);
        }

        clamp_score(score)
    }

    /// Score contest-prep success: experience-level baseline plus a capped
    /// bonus per successful prep, or a neutral baseline without prep data.
    #[doc(hidden)]
    #[must_use]
    pub fn score_success_ratio(coach: &CoachProfile) -> f64 {
        let Some(prep) = coach.contest_prep else {
            return baselines::SUCCESS_RATIO;
        };

        let base = match prep.experience_level {
            ExperienceLevel::Beginner => baselines::PREP_BEGINNER,
            ExperienceLevel::Intermediate => baselines::PREP_INTERMEDIATE,
            ExperienceLevel::Expert => baselines::PREP_EXPERT,
        };

        clamp_score(
            base + (f64::from(prep.successful_preps) * rates::POINTS_PER_SUCCESSFUL_PREP)
                .min(caps::SUCCESS_PREPS_BONUS),
        )
    }

    /// Score client retention: baseline plus capped bonuses for coaching
    /// years and for the breadth of technical capability flags.
    #[doc(hidden)]
    #[must_use]
    pub fn score_client_retention(coach: &CoachProfile) -> f64 {
        let mut score = baselines::RETENTION
            + (f64::from(coach.years_experience) * rates::POINTS_PER_COACHING_YEAR)
                .min(caps::RETENTION_YEARS_BONUS);

        if let Some(expertise) = &coach.technical_expertise {
            score += (f64::from(expertise.active_flag_count())
                * rates::POINTS_PER_EXPERTISE_FLAG)
                .min(caps::RETENTION_EXPERTISE_BONUS);
        }

        clamp_score(score)
    }
}

/// Clamp a sub-score to the `[0, 100]` range before weighting
fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, caps::SUB_SCORE_MAX)
}
