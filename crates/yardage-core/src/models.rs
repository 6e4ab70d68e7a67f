//! Core data models for shot planning.

use crate::clubs::ClubSet;
use crate::error::PlanError;
use crate::planner::{plan_path, PlanResult, PlannerConfig};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A WGS84 position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

/// One leg of a planned shot path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub point: GeoPoint,
    /// Heading from the previous waypoint (or start), degrees clockwise from north.
    pub bearing_deg: f64,
    pub leg_distance_m: f64,
}

/// Everything the planner needs to know about the hole being played.
///
/// Callers rebuild this per hole instead of threading per-hole state through
/// long-lived objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoleContext {
    pub hole_number: u32,
    pub target: GeoPoint,
    /// Fairway and green reference points.
    pub candidates: Vec<GeoPoint>,
    pub clubs: ClubSet,
}

impl HoleContext {
    /// Plan from the player's current position to this hole's flag.
    pub fn plan_from(
        &self,
        start: GeoPoint,
        config: &PlannerConfig,
    ) -> Result<PlanResult, PlanError> {
        plan_path(start, self.target, &self.candidates, &self.clubs, config)
    }
}

/// Overlays the rendering layer should draw on its next frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayOptions {
    /// Hole numbers whose flag markers are visible.
    pub visible_holes: BTreeSet<u32>,
    pub show_bunkers: bool,
    pub show_path: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            visible_holes: BTreeSet::new(),
            show_bunkers: false,
            show_path: true,
        }
    }
}

impl DisplayOptions {
    pub fn is_hole_visible(&self, hole_number: u32) -> bool {
        self.visible_holes.contains(&hole_number)
    }
}
