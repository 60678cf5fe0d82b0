// ABOUTME: Command-line ranking utility for the IronMatch coach marketplace
// ABOUTME: Scores and ranks coach profile documents exported as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 IronMatch

//! Command-line scoring and ranking over exported coach profiles.
//!
//! Usage:
//! ```bash
//! # Score every profile in a JSON export
//! cargo run --bin ironmatch-cli -- score --input coaches.json
//!
//! # Rank with search filters, machine-readable output
//! cargo run --bin ironmatch-cli -- rank --input coaches.json \
//!     --min-rating 4.0 --expertise posing-coaching --json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use ironmatch::config::AppConfig;
use ironmatch::logging::LoggingConfig;
use ironmatch::models::{CoachProfile, ExperienceLevel, ExpertiseArea};
use ironmatch::ranking::{CoachFilters, CoachRanker, SortOrder};
use ironmatch::scoring::ScoreCalculator;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "ironmatch-cli",
    about = "IronMatch coach ranking utility",
    long_about = "Score and rank coach profile documents exported from the IronMatch marketplace"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score every profile in a JSON export
    Score {
        /// Path to a JSON array of coach profiles
        #[arg(long)]
        input: PathBuf,

        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Filter, score, and rank profiles the way the search page does
    Rank {
        /// Path to a JSON array of coach profiles
        #[arg(long)]
        input: PathBuf,

        /// Minimum review rating
        #[arg(long)]
        min_rating: Option<f64>,

        /// Minimum years of coaching experience
        #[arg(long)]
        min_years: Option<u32>,

        /// Required contest-prep experience tier
        #[arg(long, value_enum)]
        level: Option<LevelArg>,

        /// Required capability flags (repeatable)
        #[arg(long, value_enum)]
        expertise: Vec<ExpertiseArg>,

        /// Sort order (defaults to the configured default)
        #[arg(long, value_enum)]
        sort: Option<SortArg>,

        /// Cap on returned results (defaults to the configured page size)
        #[arg(long)]
        limit: Option<usize>,

        /// Emit machine-readable JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

/// Contest-prep tier argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    Beginner,
    Intermediate,
    Expert,
}

impl From<LevelArg> for ExperienceLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Beginner => Self::Beginner,
            LevelArg::Intermediate => Self::Intermediate,
            LevelArg::Expert => Self::Expert,
        }
    }
}

/// Capability flag argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExpertiseArg {
    FormCorrection,
    PosingCoaching,
    NutritionPlanning,
    ProgramDesign,
    InjuryManagement,
    MeetDayHandling,
}

impl From<ExpertiseArg> for ExpertiseArea {
    fn from(arg: ExpertiseArg) -> Self {
        match arg {
            ExpertiseArg::FormCorrection => Self::FormCorrection,
            ExpertiseArg::PosingCoaching => Self::PosingCoaching,
            ExpertiseArg::NutritionPlanning => Self::NutritionPlanning,
            ExpertiseArg::ProgramDesign => Self::ProgramDesign,
            ExpertiseArg::InjuryManagement => Self::InjuryManagement,
            ExpertiseArg::MeetDayHandling => Self::MeetDayHandling,
        }
    }
}

/// Sort order argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    Score,
    Rating,
    YearsExperience,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Score => Self::Score,
            SortArg::Rating => Self::Rating,
            SortArg::YearsExperience => Self::YearsExperience,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init().context("failed to initialize logging")?;

    let config = AppConfig::from_env();

    match cli.command {
        Command::Score { input, json } => run_score(&input, json),
        Command::Rank {
            input,
            min_rating,
            min_years,
            level,
            expertise,
            sort,
            limit,
            json,
        } => {
            let filters = CoachFilters {
                min_rating,
                min_years_experience: min_years,
                experience_level: level.map(Into::into),
                required_expertise: expertise.into_iter().map(Into::into).collect(),
            };
            let sort = sort.map_or(config.default_sort, Into::into);
            let limit = limit.unwrap_or(config.max_results);
            run_rank(&input, &filters, sort, limit, json)
        }
    }
}

fn load_profiles(input: &Path) -> Result<Vec<CoachProfile>> {
    ironmatch::models::load_profiles(input)
        .with_context(|| format!("failed to load coach profiles from {}", input.display()))
}

fn run_score(input: &Path, json: bool) -> Result<()> {
    let profiles = load_profiles(input)?;

    if json {
        let scored: Vec<_> = profiles
            .iter()
            .map(|coach| {
                serde_json::json!({
                    "id": coach.id,
                    "display_name": coach.display_name,
                    "components": ScoreCalculator::calculate(coach),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&scored)?);
        return Ok(());
    }

    println!(
        "{:<24} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6}",
        "coach", "satis", "consis", "exper", "succ", "retain", "final"
    );
    for coach in &profiles {
        let c = ScoreCalculator::calculate(coach);
        println!(
            "{:<24} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.1} {:>6.0}",
            coach.display_name,
            c.satisfaction_score,
            c.consistency_score,
            c.experience_score,
            c.success_ratio,
            c.client_retention_score,
            c.final_score,
        );
    }
    Ok(())
}

fn run_rank(
    input: &Path,
    filters: &CoachFilters,
    sort: SortOrder,
    limit: usize,
    json: bool,
) -> Result<()> {
    let profiles = load_profiles(input)?;

    let mut ranked = CoachRanker::rank(&profiles, filters, sort);
    ranked.truncate(limit);
    info!(results = ranked.len(), ?sort, "ranked search page");

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    println!("{:<4} {:<24} {:>6} {:>7} {:>6}", "#", "coach", "final", "rating", "years");
    for (position, entry) in ranked.iter().enumerate() {
        println!(
            "{:<4} {:<24} {:>6.0} {:>7} {:>6}",
            position + 1,
            entry.profile.display_name,
            entry.components.final_score,
            entry
                .profile
                .rating
                .map_or_else(|| "-".into(), |r| format!("{r:.1}")),
            entry.profile.years_experience,
        );
    }
    Ok(())
}
