// ABOUTME: Integration tests for coach score calculation
// ABOUTME: Verifies documented baselines, weighting, saturation, and the never-fails contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(clippy::float_cmp)]
#![allow(missing_docs)]

use ironmatch::models::{
    CoachProfile, CompetitionHistory, ContestPrep, ExperienceLevel, TechnicalExpertise,
};
use ironmatch::scoring::ScoreCalculator;

#[test]
fn test_bare_profile_document_scores_without_error() {
    // A document with only the required fields must deserialize and score.
    let coach: CoachProfile = serde_json::from_str(
        r#"{"display_name": "Fresh Coach"}"#,
    )
    .unwrap();

    let components = ScoreCalculator::calculate(&coach);
    assert_eq!(components.final_score, 63.0);
}

#[test]
fn test_documented_baseline_profile_value() {
    let coach = CoachProfile::new("Baseline");
    let c = ScoreCalculator::calculate(&coach);

    assert_eq!(
        (
            c.satisfaction_score,
            c.consistency_score,
            c.experience_score,
            c.success_ratio,
            c.client_retention_score,
        ),
        (70.0, 75.0, 0.0, 75.0, 75.0)
    );
    assert_eq!(c.final_score, 63.0);
}

#[test]
fn test_full_profile_document_scores_deterministically() {
    let document = r#"{
        "display_name": "Dana Flores",
        "rating": 4.9,
        "testimonial_count": 31,
        "years_experience": "10+",
        "competition_history": {
            "years_competing": 9,
            "achievements": ["USAPL national qualifier", "State record 93kg deadlift"]
        },
        "technical_expertise": {
            "form_correction": true,
            "program_design": true,
            "meet_day_handling": true
        },
        "contest_prep": {
            "successful_preps": 12,
            "experience_level": "expert"
        }
    }"#;

    let coach: CoachProfile = serde_json::from_str(document).unwrap();
    assert_eq!(coach.years_experience, 10);

    let first = ScoreCalculator::calculate(&coach);
    let second = ScoreCalculator::calculate(&coach.clone());
    assert_eq!(first, second);

    // Expert baseline 85 + capped prep bonus 15, clamped at 100
    assert_eq!(first.success_ratio, 100.0);
}

#[test]
fn test_scores_stay_in_range_across_profile_grid() {
    let levels = [
        None,
        Some(ExperienceLevel::Beginner),
        Some(ExperienceLevel::Intermediate),
        Some(ExperienceLevel::Expert),
    ];

    for years in [0_u32, 1, 7, 15, 100] {
        for level in levels {
            for flags in 0..=6_u32 {
                let mut builder = CoachProfile::builder("Grid")
                    .rating(4.0)
                    .testimonial_count(years)
                    .years_experience(years);

                if let Some(level) = level {
                    builder = builder.contest_prep(ContestPrep {
                        successful_preps: years,
                        experience_level: level,
                    });
                }
                if flags > 0 {
                    builder = builder.technical_expertise(TechnicalExpertise {
                        form_correction: flags >= 1,
                        posing_coaching: flags >= 2,
                        nutrition_planning: flags >= 3,
                        program_design: flags >= 4,
                        injury_management: flags >= 5,
                        meet_day_handling: flags >= 6,
                    });
                }
                if years > 0 {
                    builder = builder.competition_history(CompetitionHistory {
                        years_competing: years,
                        achievements: (0..years.min(8)).map(|i| format!("A{i}")).collect(),
                    });
                }

                let c = ScoreCalculator::calculate(&builder.build());
                for score in [
                    c.satisfaction_score,
                    c.consistency_score,
                    c.experience_score,
                    c.success_ratio,
                    c.client_retention_score,
                    c.final_score,
                ] {
                    assert!((0.0..=100.0).contains(&score), "score {score} out of range");
                }
            }
        }
    }
}

#[test]
fn test_final_score_matches_published_weights() {
    let coach = CoachProfile::builder("Weighted")
        .rating(3.7)
        .testimonial_count(6)
        .years_experience(9)
        .contest_prep(ContestPrep {
            successful_preps: 2,
            experience_level: ExperienceLevel::Intermediate,
        })
        .build();

    let c = ScoreCalculator::calculate(&coach);
    let weighted = 0.20 * c.satisfaction_score
        + 0.25 * c.consistency_score
        + 0.15 * c.experience_score
        + 0.25 * c.success_ratio
        + 0.15 * c.client_retention_score;
    assert_eq!(c.final_score, weighted.round());
}

#[test]
fn test_satisfaction_saturates_but_rating_still_matters() {
    let base = |rating: f64, count: u32| {
        ScoreCalculator::calculate(
            &CoachProfile::builder("S")
                .rating(rating)
                .testimonial_count(count)
                .build(),
        )
        .satisfaction_score
    };

    // Saturation: testimonial growth past ten has no effect
    assert_eq!(base(4.0, 10), base(4.0, 200));

    // Monotonicity: rating growth always helps, even after saturation
    assert!(base(4.5, 10) > base(4.0, 10));
    assert!(base(5.0, 10) > base(4.5, 10));
}
