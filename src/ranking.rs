// ABOUTME: Search-result filtering and score-ordered ranking of coach candidates
// ABOUTME: Composes optional filter constraints and ranks by final score with rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

//! Coach search ranking.
//!
//! The search layer fetches candidate profiles from the document store and
//! hands the page to [`CoachRanker::rank`], which applies the caller's
//! filter constraints, scores every surviving candidate, and orders the
//! result. Scoring each candidate is independent, so batches are scored in
//! parallel; the output order is deterministic either way.

use crate::models::{CoachProfile, ExperienceLevel, ExpertiseArea};
use crate::scoring::{ScoreCalculator, ScoreComponents};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Optional search constraints composed per request.
///
/// Absent fields impose no constraint, mirroring the conditional filter
/// assembly in the marketplace search UI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoachFilters {
    /// Minimum review rating; coaches without a rating are excluded when set
    #[serde(default)]
    pub min_rating: Option<f64>,

    /// Minimum years of coaching experience
    #[serde(default)]
    pub min_years_experience: Option<u32>,

    /// Required contest-prep experience tier; coaches without prep data are
    /// excluded when set
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,

    /// Capability flags the coach must have ticked
    #[serde(default)]
    pub required_expertise: Vec<ExpertiseArea>,
}

impl CoachFilters {
    /// Whether a profile satisfies every set constraint
    #[must_use]
    pub fn matches(&self, coach: &CoachProfile) -> bool {
        if let Some(min_rating) = self.min_rating {
            if !coach.rating.is_some_and(|r| r >= min_rating) {
                return false;
            }
        }

        if let Some(min_years) = self.min_years_experience {
            if coach.years_experience < min_years {
                return false;
            }
        }

        if let Some(level) = self.experience_level {
            if !coach
                .contest_prep
                .is_some_and(|prep| prep.experience_level == level)
            {
                return false;
            }
        }

        self.required_expertise.iter().all(|&area| {
            coach
                .technical_expertise
                .is_some_and(|expertise| expertise.has(area))
        })
    }
}

/// Sort order for ranked search results
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Final ranking score, descending
    #[default]
    Score,
    /// Review rating, descending; unrated coaches last
    Rating,
    /// Years of coaching experience, descending
    YearsExperience,
}

/// One scored entry in a ranked search result page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCoach {
    /// The candidate profile
    pub profile: CoachProfile,

    /// Scores computed for this candidate
    pub components: ScoreComponents,
}

/// Coach search ranker
pub struct CoachRanker;

impl CoachRanker {
    /// Filter, score, and order a page of candidate profiles.
    ///
    /// Candidates are scored in parallel since each score is an independent
    /// pure computation. Ties are broken by review rating and then by
    /// profile id so repeated searches return a stable order.
    #[must_use]
    pub fn rank(
        candidates: &[CoachProfile],
        filters: &CoachFilters,
        sort: SortOrder,
    ) -> Vec<RankedCoach> {
        let mut ranked: Vec<RankedCoach> = candidates
            .par_iter()
            .filter(|coach| filters.matches(coach))
            .map(|coach| RankedCoach {
                profile: coach.clone(),
                components: ScoreCalculator::calculate(coach),
            })
            .collect();

        debug!(
            candidates = candidates.len(),
            matched = ranked.len(),
            ?sort,
            "ranked coach search page"
        );

        ranked.sort_by(|a, b| Self::compare(a, b, sort));
        ranked
    }

    /// Descending comparison for the selected sort order
    fn compare(a: &RankedCoach, b: &RankedCoach, sort: SortOrder) -> Ordering {
        let primary = match sort {
            SortOrder::Score => {
                total_cmp_desc(a.components.final_score, b.components.final_score)
            }
            SortOrder::Rating => total_cmp_desc(
                a.profile.rating.unwrap_or(f64::MIN),
                b.profile.rating.unwrap_or(f64::MIN),
            ),
            SortOrder::YearsExperience => {
                b.profile.years_experience.cmp(&a.profile.years_experience)
            }
        };

        primary
            .then_with(|| {
                total_cmp_desc(
                    a.profile.rating.unwrap_or(f64::MIN),
                    b.profile.rating.unwrap_or(f64::MIN),
                )
            })
            .then_with(|| a.profile.id.cmp(&b.profile.id))
    }
}

/// Descending total order over floats (scores contain no NaN by construction)
fn total_cmp_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
