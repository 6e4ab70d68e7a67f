//! Shared arguments for locating a course and the player's position.

use crate::client::CourseClient;
use crate::config::{parse_club_list, Config};
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use yardage_core::{ClubSet, Course, CourseHole, GeoPoint, PlannerConfig, TeeColor};

/// Where course data comes from.
#[derive(Args, Debug, Clone)]
pub struct CourseArgs {
    /// Holes document saved from the course provider
    #[arg(long, requires = "polygons", conflicts_with = "course_id")]
    pub holes: Option<PathBuf>,

    /// Polygons document saved from the course provider
    #[arg(long, requires = "holes")]
    pub polygons: Option<PathBuf>,

    /// Fetch the course from the provider instead of local files
    #[arg(long)]
    pub course_id: Option<u32>,

    /// Hole number to play
    #[arg(long, default_value_t = 1)]
    pub hole: u32,
}

/// Tee markers a round can start from.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TeeArg {
    Black,
    Red,
    Silver,
}

impl From<TeeArg> for TeeColor {
    fn from(value: TeeArg) -> Self {
        match value {
            TeeArg::Black => TeeColor::Black,
            TeeArg::Red => TeeColor::Red,
            TeeArg::Silver => TeeColor::Silver,
        }
    }
}

/// Where the player is standing and what they carry.
#[derive(Args, Debug, Clone)]
pub struct PlayerArgs {
    /// Player latitude (defaults to the tee)
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Player longitude (defaults to the tee)
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Tee to start from when no position is given
    #[arg(long, value_enum, default_value = "black")]
    pub tee: TeeArg,

    /// Club ranges in meters, e.g. 250,200,150 (overrides YARDAGE_CLUBS)
    #[arg(long)]
    pub clubs: Option<String>,

    /// Maximum legs to plan (overrides YARDAGE_MAX_ITERATIONS)
    #[arg(long)]
    pub max_iterations: Option<usize>,
}

impl PlayerArgs {
    pub fn start(&self, hole: &CourseHole<'_>) -> Result<GeoPoint> {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(GeoPoint::new(lat, lon)),
            _ => Ok(hole.tee(self.tee.into())?),
        }
    }

    pub fn clubs(&self, config: &Config) -> Result<ClubSet> {
        match self.clubs.as_deref() {
            Some(raw) => parse_club_list(raw).context("invalid --clubs"),
            None => Ok(config.clubs.clone()),
        }
    }

    pub fn planner_config(&self, config: &Config) -> PlannerConfig {
        PlannerConfig {
            max_iterations: self.max_iterations.unwrap_or(config.max_iterations),
        }
    }
}

impl CourseArgs {
    /// Load the course from files or the provider.
    pub async fn load(&self, config: &Config) -> Result<Course> {
        if let (Some(holes), Some(polygons)) = (&self.holes, &self.polygons) {
            let holes_json = tokio::fs::read_to_string(holes)
                .await
                .with_context(|| format!("reading {}", holes.display()))?;
            let polygons_json = tokio::fs::read_to_string(polygons)
                .await
                .with_context(|| format!("reading {}", polygons.display()))?;
            return Ok(Course::from_json(&holes_json, &polygons_json)?);
        }

        let Some(course_id) = self.course_id else {
            anyhow::bail!("pass --holes and --polygons, or --course-id");
        };
        let client = CourseClient::new(&config.course_api_url, config.course_api_key.clone());
        client.course(course_id).await
    }
}
