//! Candidate scoring for the shot planner.

use crate::models::GeoPoint;
use crate::spatial::{destination, distance_m, initial_bearing_deg};
use serde::{Deserialize, Serialize};

/// Synthetic layups are spaced a touch inside the club's range so rounding
/// never pushes a leg past it.
const LAYUP_RANGE_FRACTION: f64 = 0.99;

/// A candidate point measured against one start/target pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredPoint {
    pub point: GeoPoint,
    pub distance_to_target_m: f64,
    pub distance_from_start_m: f64,
    /// Position in the caller's candidate list; `None` for points the planner made up.
    pub source_index: Option<usize>,
}

impl ScoredPoint {
    fn measure(
        point: GeoPoint,
        start: GeoPoint,
        target: GeoPoint,
        source_index: Option<usize>,
    ) -> Self {
        Self {
            point,
            distance_to_target_m: distance_m(point, target),
            distance_from_start_m: distance_m(start, point),
            source_index,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        self.source_index.is_none()
    }
}

/// Score every candidate against `start` and `target`.
///
/// Output keeps input order with no deduplication, followed by the target
/// itself so the planner always has a terminal option.
pub fn score_points(candidates: &[GeoPoint], start: GeoPoint, target: GeoPoint) -> Vec<ScoredPoint> {
    let mut scored: Vec<ScoredPoint> = candidates
        .iter()
        .enumerate()
        .map(|(idx, point)| ScoredPoint::measure(*point, start, target, Some(idx)))
        .collect();
    scored.push(ScoredPoint::measure(target, start, target, None));
    scored
}

/// Evenly spaced points on the great circle from `start` to `target`, none
/// further than `range_m` apart. Endpoints are excluded, and at most
/// `max_points` are returned, nearest the start first.
///
/// Stands in for fairway geometry when a hole has none.
pub fn layup_points(
    start: GeoPoint,
    target: GeoPoint,
    range_m: f64,
    max_points: usize,
) -> Vec<GeoPoint> {
    let total_m = distance_m(start, target);
    if range_m.is_nan() || range_m <= 0.0 || total_m <= range_m {
        return Vec::new();
    }

    let legs = (total_m / (range_m * LAYUP_RANGE_FRACTION)).ceil().max(1.0) as usize;
    let step_m = total_m / legs as f64;
    let heading = initial_bearing_deg(start, target);

    (1..legs)
        .take(max_points)
        .map(|leg| destination(start, step_m * leg as f64, heading))
        .collect()
}
