// ABOUTME: Integration tests for search filtering and score-ordered ranking
// ABOUTME: Verifies filter composition, sort orders, and parallel/sequential equivalence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use ironmatch::models::{CoachProfile, ContestPrep, ExperienceLevel, ExpertiseArea, TechnicalExpertise};
use ironmatch::ranking::{CoachFilters, CoachRanker, SortOrder};
use ironmatch::scoring::ScoreCalculator;

fn candidate_page() -> Vec<CoachProfile> {
    (0..200)
        .map(|i| {
            let mut builder = CoachProfile::builder(format!("Coach {i}"))
                .years_experience(i % 20);
            if i % 3 != 0 {
                builder = builder
                    .rating(f64::from(i % 6) * 0.9)
                    .testimonial_count(i % 25);
            }
            if i % 4 == 0 {
                builder = builder.contest_prep(ContestPrep {
                    successful_preps: i % 7,
                    experience_level: match i % 3 {
                        0 => ExperienceLevel::Beginner,
                        1 => ExperienceLevel::Intermediate,
                        _ => ExperienceLevel::Expert,
                    },
                });
            }
            if i % 5 == 0 {
                builder = builder.technical_expertise(TechnicalExpertise {
                    posing_coaching: true,
                    nutrition_planning: i % 2 == 0,
                    ..TechnicalExpertise::default()
                });
            }
            builder.build()
        })
        .collect()
}

#[test]
fn test_score_sort_matches_recomputed_scores() {
    let page = candidate_page();
    let ranked = CoachRanker::rank(&page, &CoachFilters::default(), SortOrder::Score);

    assert_eq!(ranked.len(), page.len());
    for entry in &ranked {
        // Ranker must carry the same components the pure scorer produces
        assert_eq!(entry.components, ScoreCalculator::calculate(&entry.profile));
    }
    for pair in ranked.windows(2) {
        assert!(pair[0].components.final_score >= pair[1].components.final_score);
    }
}

#[test]
fn test_parallel_ranking_equals_sequential_scoring() {
    // Batch ranking of N coaches is N independent calls; parallelism must
    // not change the output.
    let page = candidate_page();
    let ranked = CoachRanker::rank(&page, &CoachFilters::default(), SortOrder::Score);

    let mut expected: Vec<(uuid::Uuid, f64)> = page
        .iter()
        .map(|coach| (coach.id, ScoreCalculator::calculate(coach).final_score))
        .collect();
    expected.sort_by(|a, b| {
        b.1.total_cmp(&a.1)
            .then_with(|| a.0.cmp(&b.0))
    });

    // Same multiset of (id, score); order checked separately per tie policy
    let mut got: Vec<(uuid::Uuid, f64)> = ranked
        .iter()
        .map(|r| (r.profile.id, r.components.final_score))
        .collect();
    got.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    assert_eq!(got, expected);
}

#[test]
fn test_combined_filters_are_conjunctive() {
    let page = candidate_page();
    let filters = CoachFilters {
        min_rating: Some(3.5),
        min_years_experience: Some(5),
        required_expertise: vec![ExpertiseArea::PosingCoaching],
        ..CoachFilters::default()
    };
    let ranked = CoachRanker::rank(&page, &filters, SortOrder::Score);

    for entry in &ranked {
        assert!(entry.profile.rating.unwrap() >= 3.5);
        assert!(entry.profile.years_experience >= 5);
        assert!(entry.profile.technical_expertise.unwrap().posing_coaching);
    }

    // And nothing that matched was dropped
    let matched = page.iter().filter(|c| filters.matches(c)).count();
    assert_eq!(ranked.len(), matched);
}

#[test]
fn test_rating_sort_places_unrated_last() {
    let page = vec![
        CoachProfile::builder("Unrated").years_experience(10).build(),
        CoachProfile::builder("Rated")
            .rating(2.0)
            .testimonial_count(1)
            .build(),
    ];
    let ranked = CoachRanker::rank(&page, &CoachFilters::default(), SortOrder::Rating);

    assert_eq!(ranked[0].profile.display_name, "Rated");
    assert_eq!(ranked[1].profile.display_name, "Unrated");
}

#[test]
fn test_empty_page_ranks_to_empty() {
    let ranked = CoachRanker::rank(&[], &CoachFilters::default(), SortOrder::Score);
    assert!(ranked.is_empty());
}
