// ABOUTME: Coach profile data model for the IronMatch marketplace
// ABOUTME: Serde-backed records with ingestion-boundary normalization of legacy fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

//! Coach profile data structures.
//!
//! Profiles arrive as JSON documents fetched from the platform's document
//! store. The legacy web client stored "years of experience" inconsistently,
//! sometimes as a number and sometimes as a bucketed string such as `"5-7"`;
//! ingestion normalizes that to a canonical `u32` here so the scoring and
//! ranking layers only ever see numeric data.

use crate::errors::AppResult;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

/// Contest-prep experience tier declared on a coach profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// First seasons coaching athletes through a prep
    Beginner,
    /// Several complete prep cycles coached
    Intermediate,
    /// Long record of preps across divisions
    Expert,
}

/// Competition background of the coach as an athlete
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitionHistory {
    /// Years the coach has competed themselves
    pub years_competing: u32,

    /// Placings, titles, and records (free-form strings from the profile form)
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Named coaching capability used in search filters and retention scoring
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExpertiseArea {
    /// Lift technique review and correction
    FormCorrection,
    /// Stage posing for physique divisions
    PosingCoaching,
    /// Diet and macro planning
    NutritionPlanning,
    /// Training block programming
    ProgramDesign,
    /// Working around and rehabbing injuries
    InjuryManagement,
    /// Meet-day attempt selection and handling
    MeetDayHandling,
}

/// Boolean capability flags from the coach onboarding form.
///
/// Flags the coach did not tick are absent in stored documents, so every
/// field defaults to `false` on deserialization.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TechnicalExpertise {
    /// Lift technique review and correction
    #[serde(default)]
    pub form_correction: bool,

    /// Stage posing for physique divisions
    #[serde(default)]
    pub posing_coaching: bool,

    /// Diet and macro planning
    #[serde(default)]
    pub nutrition_planning: bool,

    /// Training block programming
    #[serde(default)]
    pub program_design: bool,

    /// Working around and rehabbing injuries
    #[serde(default)]
    pub injury_management: bool,

    /// Meet-day attempt selection and handling
    #[serde(default)]
    pub meet_day_handling: bool,
}

impl TechnicalExpertise {
    /// Whether the given capability flag is set
    #[must_use]
    pub const fn has(&self, area: ExpertiseArea) -> bool {
        match area {
            ExpertiseArea::FormCorrection => self.form_correction,
            ExpertiseArea::PosingCoaching => self.posing_coaching,
            ExpertiseArea::NutritionPlanning => self.nutrition_planning,
            ExpertiseArea::ProgramDesign => self.program_design,
            ExpertiseArea::InjuryManagement => self.injury_management,
            ExpertiseArea::MeetDayHandling => self.meet_day_handling,
        }
    }

    /// Number of capability flags the coach has set
    #[must_use]
    pub const fn active_flag_count(&self) -> u32 {
        self.form_correction as u32
            + self.posing_coaching as u32
            + self.nutrition_planning as u32
            + self.program_design as u32
            + self.injury_management as u32
            + self.meet_day_handling as u32
    }
}

/// Contest-prep track record declared on the profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ContestPrep {
    /// Preps the coach has taken an athlete through to the stage
    pub successful_preps: u32,

    /// Self-declared prep experience tier
    pub experience_level: ExperienceLevel,
}

/// A coach profile document as fetched from the marketplace store.
///
/// Only the fields relevant to scoring and ranking are modeled; the web
/// application's remaining profile fields (bio, photos, pricing) never
/// reach this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoachProfile {
    /// Stable profile identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,

    /// Public display name
    pub display_name: String,

    /// Average submitted review rating, 0.0 to 5.0; absent for new coaches
    #[serde(default)]
    pub rating: Option<f64>,

    /// Count of reviews received; absent for new coaches
    #[serde(default)]
    pub testimonial_count: Option<u32>,

    /// Years coaching, normalized from legacy number-or-string documents
    #[serde(default, deserialize_with = "deserialize_years")]
    pub years_experience: u32,

    /// Competition background as an athlete, if any
    #[serde(default)]
    pub competition_history: Option<CompetitionHistory>,

    /// Capability flags from onboarding, if any were set
    #[serde(default)]
    pub technical_expertise: Option<TechnicalExpertise>,

    /// Contest-prep track record, if declared
    #[serde(default)]
    pub contest_prep: Option<ContestPrep>,
}

impl CoachProfile {
    /// Create a minimal profile with only the required fields set
    #[must_use]
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            rating: None,
            testimonial_count: None,
            years_experience: 0,
            competition_history: None,
            technical_expertise: None,
            contest_prep: None,
        }
    }

    /// Start building a profile for tests and seed tooling
    #[must_use]
    pub fn builder(display_name: impl Into<String>) -> CoachProfileBuilder {
        CoachProfileBuilder {
            profile: Self::new(display_name),
        }
    }
}

/// Fluent builder over [`CoachProfile`] used by tests, benches, and seeders
#[derive(Debug, Clone)]
pub struct CoachProfileBuilder {
    profile: CoachProfile,
}

impl CoachProfileBuilder {
    /// Set the review rating (0.0 to 5.0)
    #[must_use]
    pub const fn rating(mut self, rating: f64) -> Self {
        self.profile.rating = Some(rating);
        self
    }

    /// Set the testimonial count
    #[must_use]
    pub const fn testimonial_count(mut self, count: u32) -> Self {
        self.profile.testimonial_count = Some(count);
        self
    }

    /// Set the years of coaching experience
    #[must_use]
    pub const fn years_experience(mut self, years: u32) -> Self {
        self.profile.years_experience = years;
        self
    }

    /// Attach a competition history record
    #[must_use]
    pub fn competition_history(mut self, history: CompetitionHistory) -> Self {
        self.profile.competition_history = Some(history);
        self
    }

    /// Attach technical expertise flags
    #[must_use]
    pub const fn technical_expertise(mut self, expertise: TechnicalExpertise) -> Self {
        self.profile.technical_expertise = Some(expertise);
        self
    }

    /// Attach a contest-prep record
    #[must_use]
    pub const fn contest_prep(mut self, prep: ContestPrep) -> Self {
        self.profile.contest_prep = Some(prep);
        self
    }

    /// Finish building
    #[must_use]
    pub fn build(self) -> CoachProfile {
        self.profile
    }
}

/// Load a JSON array of coach profile documents from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or a document fails
/// ingestion validation.
pub fn load_profiles(path: &Path) -> AppResult<Vec<CoachProfile>> {
    let raw = fs::read_to_string(path)?;
    let profiles: Vec<CoachProfile> = serde_json::from_str(&raw)?;
    info!(count = profiles.len(), path = %path.display(), "loaded coach profiles");
    Ok(profiles)
}

/// Accepts a plain number, a numeric string (`"5"`), or a legacy bucketed
/// string (`"5-7"`, `"10+"`), taking the leading integer as the canonical
/// value. Anything without a leading integer is an ingestion error.
fn deserialize_years<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u32),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(years) => Ok(years),
        NumberOrString::Text(raw) => {
            let digits: String = raw
                .trim()
                .chars()
                .take_while(char::is_ascii_digit)
                .collect();
            digits.parse().map_err(|_| {
                serde::de::Error::custom(format!(
                    "invalid years_experience value: {raw:?} (expected a number or a bucketed string like \"5-7\")"
                ))
            })
        }
    }
}
