//! Terminal rendering of planned shot paths.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use yardage_core::{ClubSet, GeoPoint, IncompleteReason, PlanResult, PlanStatus};

/// A plan plus the context needed to show it to a player.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub hole_number: u32,
    pub start: GeoPoint,
    pub target: GeoPoint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub club_name: Option<String>,
    pub plan: PlanResult,
    pub generated_at: DateTime<Utc>,
}

impl PlanReport {
    pub fn new(
        hole_number: u32,
        start: GeoPoint,
        target: GeoPoint,
        clubs: &ClubSet,
        plan: PlanResult,
    ) -> Self {
        let club_name = clubs.get(plan.club_index).and_then(|club| club.name.clone());
        Self {
            hole_number,
            start,
            target,
            club_name,
            plan,
            generated_at: Utc::now(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let club = match &self.club_name {
            Some(name) => format!("{} ({:.0}m)", name, self.plan.club_range_m),
            None => format!("{:.0}m club", self.plan.club_range_m),
        };
        let _ = writeln!(
            out,
            "Hole {}: {:.1}m to the flag, playing {}",
            self.hole_number, self.plan.straight_distance_m, club
        );

        for (idx, waypoint) in self.plan.waypoints.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {:>2}. {:>6.1}m @ {:>5.1}° {} -> {:.6}, {:.6}",
                idx + 1,
                waypoint.leg_distance_m,
                waypoint.bearing_deg,
                compass_point(waypoint.bearing_deg),
                waypoint.point.lat,
                waypoint.point.lon,
            );
        }

        let status = match self.plan.status {
            PlanStatus::Complete => "on the green".to_string(),
            PlanStatus::Incomplete(IncompleteReason::Stuck) => {
                "no reachable point closer to the flag".to_string()
            }
            PlanStatus::Incomplete(IncompleteReason::IterationLimit) => {
                format!("stopped after {} shots", self.plan.waypoints.len())
            }
        };
        let _ = write!(out, "  {}", status);
        out
    }
}

/// Eight-wind compass label for a bearing.
pub fn compass_point(bearing_deg: f64) -> &'static str {
    const POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let sector = ((bearing_deg.rem_euclid(360.0) + 22.5) / 45.0) as usize % 8;
    POINTS[sector]
}
