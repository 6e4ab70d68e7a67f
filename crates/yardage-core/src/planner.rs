//! Greedy shot-path planner.
//!
//! Walks from the player's position toward the flag, always hitting to the
//! reachable reference point closest to the hole. Not globally optimal, but
//! cheap, stable and close to how players actually pick targets.

use crate::clubs::{choose_club, ClubSet};
use crate::error::PlanError;
use crate::models::{GeoPoint, Waypoint};
use crate::scoring::{layup_points, score_points, ScoredPoint};
use crate::spatial::{distance_m, initial_bearing_deg};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_ITERATIONS: usize = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Upper bound on planned legs.
    pub max_iterations: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncompleteReason {
    /// No reference point in range moved the ball closer to the hole.
    Stuck,
    /// Ran out of iterations before reaching the hole.
    IterationLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "reason")]
pub enum PlanStatus {
    Complete,
    Incomplete(IncompleteReason),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanResult {
    pub waypoints: Vec<Waypoint>,
    pub status: PlanStatus,
    /// Index into the club set of the club every leg was planned with.
    pub club_index: usize,
    pub club_range_m: f64,
    pub straight_distance_m: f64,
}

impl PlanResult {
    pub fn is_complete(&self) -> bool {
        self.status == PlanStatus::Complete
    }

    /// Sum of all leg distances.
    pub fn total_distance_m(&self) -> f64 {
        self.waypoints.iter().map(|wp| wp.leg_distance_m).sum()
    }
}

/// Plan a shot path from `start` to `target`.
///
/// `candidates` are the hole's fairway/green reference points. With none, the
/// straight line to the flag is split into in-range layups instead.
///
/// Unreachable targets produce an incomplete plan, not an error. Errors are
/// reserved for configuration problems.
pub fn plan_path(
    start: GeoPoint,
    target: GeoPoint,
    candidates: &[GeoPoint],
    clubs: &ClubSet,
    config: &PlannerConfig,
) -> Result<PlanResult, PlanError> {
    if config.max_iterations == 0 {
        return Err(PlanError::InvalidConfiguration(
            "max_iterations must be at least 1".to_string(),
        ));
    }
    if !start.is_finite() || !target.is_finite() {
        return Err(PlanError::InvalidConfiguration(format!(
            "start {start:?} and target {target:?} must be finite coordinates"
        )));
    }

    let straight_distance_m = distance_m(start, target);
    let club_index = choose_club(straight_distance_m, clubs);
    let range_m = clubs.range_m(club_index);

    tracing::debug!(
        straight_distance_m,
        club_index,
        range_m,
        candidates = candidates.len(),
        "planning shot path"
    );

    let mut pool = if candidates.is_empty() {
        let layups = layup_points(start, target, range_m, config.max_iterations);
        let mut scored = score_points(&layups, start, target);
        // Layups are made up too; they should not look like caller input.
        for point in &mut scored {
            point.source_index = None;
        }
        scored
    } else {
        score_points(candidates, start, target)
    };
    pool.retain(|point| point.point.is_finite());
    // Stable, so equal distances keep input order.
    pool.sort_by(|a, b| a.distance_to_target_m.total_cmp(&b.distance_to_target_m));

    let mut waypoints = Vec::new();
    let mut current = start;

    loop {
        let remaining_m = distance_m(current, target);
        if remaining_m <= range_m {
            waypoints.push(leg(current, target));
            tracing::debug!(legs = waypoints.len(), "shot path reaches the flag");
            return Ok(finish(
                waypoints,
                PlanStatus::Complete,
                club_index,
                range_m,
                straight_distance_m,
            ));
        }

        // Only intermediate legs count against the cap; the closing shot is free.
        if waypoints.len() >= config.max_iterations {
            tracing::debug!(
                max_iterations = config.max_iterations,
                remaining_m,
                "iteration limit reached before the flag"
            );
            return Ok(finish(
                waypoints,
                PlanStatus::Incomplete(IncompleteReason::IterationLimit),
                club_index,
                range_m,
                straight_distance_m,
            ));
        }

        let Some(next) = next_point(&pool, current, remaining_m, range_m) else {
            tracing::debug!(
                legs = waypoints.len(),
                remaining_m,
                "no reachable point makes progress"
            );
            return Ok(finish(
                waypoints,
                PlanStatus::Incomplete(IncompleteReason::Stuck),
                club_index,
                range_m,
                straight_distance_m,
            ));
        };

        let waypoint = leg(current, next.point);
        tracing::trace!(
            lat = next.point.lat,
            lon = next.point.lon,
            bearing_deg = waypoint.bearing_deg,
            leg_distance_m = waypoint.leg_distance_m,
            "planned leg"
        );
        waypoints.push(waypoint);
        current = next.point;
    }
}

/// First point, closest to the hole, that is in range and strictly nearer the
/// hole than `current`.
fn next_point(
    pool: &[ScoredPoint],
    current: GeoPoint,
    remaining_m: f64,
    range_m: f64,
) -> Option<&ScoredPoint> {
    pool.iter()
        .take_while(|point| point.distance_to_target_m < remaining_m)
        .find(|point| distance_m(current, point.point) <= range_m)
}

fn leg(from: GeoPoint, to: GeoPoint) -> Waypoint {
    Waypoint {
        point: to,
        bearing_deg: initial_bearing_deg(from, to),
        leg_distance_m: distance_m(from, to),
    }
}

fn finish(
    waypoints: Vec<Waypoint>,
    status: PlanStatus,
    club_index: usize,
    club_range_m: f64,
    straight_distance_m: f64,
) -> PlanResult {
    PlanResult {
        waypoints,
        status,
        club_index,
        club_range_m,
        straight_distance_m,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::destination;

    fn bag() -> ClubSet {
        ClubSet::new([250.0, 200.0, 150.0, 100.0, 50.0]).unwrap()
    }

    const TEE: GeoPoint = GeoPoint::new(34.4100, -119.8500);

    fn heading_error(actual: f64, expected: f64) -> f64 {
        let diff = (actual - expected).abs() % 360.0;
        diff.min(360.0 - diff)
    }

    #[test]
    fn target_in_range_is_a_single_shot() {
        let target = destination(TEE, 120.0, 45.0);
        let plan = plan_path(TEE, target, &[], &bag(), &PlannerConfig::default()).unwrap();

        assert!(plan.is_complete());
        assert_eq!(plan.waypoints.len(), 1);
        assert_eq!(plan.waypoints[0].point, target);
        assert_eq!(plan.club_index, 2);
        assert!(heading_error(plan.waypoints[0].bearing_deg, 45.0) < 0.01);
    }

    #[test]
    fn coincident_start_and_target() {
        let plan = plan_path(TEE, TEE, &[], &bag(), &PlannerConfig::default()).unwrap();
        assert!(plan.is_complete());
        assert_eq!(plan.waypoints.len(), 1);
        assert_eq!(plan.waypoints[0].bearing_deg, 0.0);
        assert_eq!(plan.waypoints[0].leg_distance_m, 0.0);
    }

    #[test]
    fn follows_dogleg_reference_points() {
        // Fairway bends right: straight at 0°, then east to the green.
        let corner = destination(TEE, 240.0, 0.0);
        let target = destination(corner, 200.0, 90.0);
        let far_short = destination(TEE, 100.0, 0.0);
        let candidates = vec![far_short, corner];

        let plan = plan_path(TEE, target, &candidates, &bag(), &PlannerConfig::default()).unwrap();

        assert!(plan.is_complete());
        assert_eq!(plan.waypoints.len(), 2);
        assert_eq!(plan.waypoints[0].point, corner);
        assert!(heading_error(plan.waypoints[0].bearing_deg, 0.0) < 0.01);
        assert_eq!(plan.waypoints[1].point, target);
        assert!(heading_error(plan.waypoints[1].bearing_deg, 90.0) < 0.01);
    }

    #[test]
    fn stuck_when_nothing_in_range() {
        let target = destination(TEE, 900.0, 90.0);
        let candidates = vec![destination(TEE, 600.0, 90.0), destination(TEE, 400.0, 180.0)];
        let config = PlannerConfig { max_iterations: 10 };

        let plan = plan_path(TEE, target, &candidates, &bag(), &config).unwrap();

        assert_eq!(plan.status, PlanStatus::Incomplete(IncompleteReason::Stuck));
        assert!(plan.waypoints.is_empty());
    }

    #[test]
    fn partial_plan_when_chain_breaks() {
        let target = destination(TEE, 900.0, 90.0);
        let first = destination(TEE, 200.0, 90.0);
        let plan = plan_path(TEE, target, &[first], &bag(), &PlannerConfig::default()).unwrap();

        assert_eq!(plan.status, PlanStatus::Incomplete(IncompleteReason::Stuck));
        assert_eq!(plan.waypoints.len(), 1);
        assert_eq!(plan.waypoints[0].point, first);
    }

    #[test]
    fn iteration_limit_bounds_plan_length() {
        let target = destination(TEE, 900.0, 90.0);
        let candidates: Vec<GeoPoint> = (1..5)
            .map(|i| destination(TEE, 200.0 * i as f64, 90.0))
            .collect();

        let config = PlannerConfig { max_iterations: 2 };
        let plan = plan_path(TEE, target, &candidates, &bag(), &config).unwrap();

        assert_eq!(
            plan.status,
            PlanStatus::Incomplete(IncompleteReason::IterationLimit)
        );
        assert_eq!(plan.waypoints.len(), 2);

        let plan = plan_path(TEE, target, &candidates, &bag(), &PlannerConfig::default()).unwrap();
        assert!(plan.is_complete());
        assert_eq!(plan.waypoints.len(), 5);
    }

    #[test]
    fn closing_shot_is_not_blocked_by_the_cap() {
        let clubs = ClubSet::new([250.0]).unwrap();
        let target = destination(TEE, 400.0, 90.0);
        let halfway = destination(TEE, 200.0, 90.0);
        let config = PlannerConfig { max_iterations: 1 };

        let plan = plan_path(TEE, target, &[halfway], &clubs, &config).unwrap();

        assert!(plan.is_complete(), "{plan:?}");
        assert_eq!(plan.waypoints.len(), 2);
        assert_eq!(plan.waypoints[0].point, halfway);
        assert_eq!(plan.waypoints[1].point, target);
    }

    #[test]
    fn tiny_club_over_long_distance_stays_bounded() {
        let clubs = ClubSet::new([1.0]).unwrap();
        let start = GeoPoint::new(0.0, 0.0);
        let target = GeoPoint::new(0.0, 179.0);
        let config = PlannerConfig { max_iterations: 1 };

        let plan = plan_path(start, target, &[], &clubs, &config).unwrap();

        assert_eq!(
            plan.status,
            PlanStatus::Incomplete(IncompleteReason::IterationLimit)
        );
        assert_eq!(plan.waypoints.len(), 1);
        assert!(plan.waypoints[0].leg_distance_m <= 1.0);
    }

    #[test]
    fn point_behind_the_player_is_never_chosen() {
        // Standing on a candidate must not loop on it until the cap.
        let target = destination(TEE, 900.0, 90.0);
        let behind = destination(TEE, 50.0, 270.0);
        let plan = plan_path(TEE, target, &[TEE, behind], &bag(), &PlannerConfig::default()).unwrap();

        assert_eq!(plan.status, PlanStatus::Incomplete(IncompleteReason::Stuck));
        assert!(plan.waypoints.is_empty());
    }

    #[test]
    fn ties_keep_input_order() {
        // Mirrored across the prime meridian so both sit exactly the same distance from the flag.
        let tee = GeoPoint::new(0.0, 0.0);
        let target = GeoPoint::new(0.0036, 0.0);
        let left = GeoPoint::new(0.0018, -0.0006);
        let right = GeoPoint::new(0.0018, 0.0006);
        let config = PlannerConfig::default();

        let plan = plan_path(tee, target, &[right, left], &bag(), &config).unwrap();
        assert_eq!(plan.waypoints[0].point, right);

        let plan = plan_path(tee, target, &[left, right], &bag(), &config).unwrap();
        assert_eq!(plan.waypoints[0].point, left);
        assert!(plan.is_complete());
    }

    #[test]
    fn rejects_zero_iterations() {
        let config = PlannerConfig { max_iterations: 0 };
        let err = plan_path(TEE, TEE, &[], &bag(), &config).unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfiguration(_)));
    }

    #[test]
    fn rejects_non_finite_start() {
        let start = GeoPoint::new(f64::NAN, -119.85);
        assert!(plan_path(start, TEE, &[], &bag(), &PlannerConfig::default()).is_err());
    }
}
