//! Club ranges and club selection.

use crate::error::PlanError;
use serde::{Deserialize, Serialize};

/// A single club and how far the player reliably hits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub range_m: f64,
}

impl Club {
    pub fn new(name: impl Into<String>, range_m: f64) -> Self {
        Self {
            name: Some(name.into()),
            range_m,
        }
    }
}

/// The player's bag, longest club first.
///
/// Always non-empty with finite, positive ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Club>", into = "Vec<Club>")]
pub struct ClubSet {
    clubs: Vec<Club>,
}

impl ClubSet {
    /// Build a set from bare ranges in meters, in any order.
    pub fn new(ranges_m: impl IntoIterator<Item = f64>) -> Result<Self, PlanError> {
        Self::from_clubs(
            ranges_m
                .into_iter()
                .map(|range_m| Club {
                    name: None,
                    range_m,
                })
                .collect(),
        )
    }

    /// Build a set from named clubs, sorting them longest first.
    pub fn from_clubs(mut clubs: Vec<Club>) -> Result<Self, PlanError> {
        if clubs.is_empty() {
            return Err(PlanError::InvalidConfiguration(
                "club set must contain at least one club".to_string(),
            ));
        }
        if let Some(bad) = clubs
            .iter()
            .find(|club| !club.range_m.is_finite() || club.range_m <= 0.0)
        {
            return Err(PlanError::InvalidConfiguration(format!(
                "club range must be a positive number of meters, got {}",
                bad.range_m
            )));
        }
        clubs.sort_by(|a, b| b.range_m.total_cmp(&a.range_m));
        Ok(Self { clubs })
    }

    /// Never zero; construction rejects an empty bag.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.clubs.len()
    }

    pub fn get(&self, index: usize) -> Option<&Club> {
        self.clubs.get(index)
    }

    /// Range of the club at `index`. Panics on an out-of-bounds index like slice indexing.
    pub fn range_m(&self, index: usize) -> f64 {
        self.clubs[index].range_m
    }

    pub fn longest_m(&self) -> f64 {
        self.clubs[0].range_m
    }

    pub fn iter(&self) -> impl Iterator<Item = &Club> {
        self.clubs.iter()
    }

    pub fn ranges_m(&self) -> impl Iterator<Item = f64> + '_ {
        self.clubs.iter().map(|club| club.range_m)
    }
}

impl Default for ClubSet {
    fn default() -> Self {
        Self {
            clubs: vec![
                Club::new("Driver", 230.0),
                Club::new("3 Wood", 210.0),
                Club::new("5 Iron", 170.0),
                Club::new("7 Iron", 150.0),
                Club::new("9 Iron", 125.0),
                Club::new("Pitching Wedge", 110.0),
                Club::new("Sand Wedge", 80.0),
            ],
        }
    }
}

impl TryFrom<Vec<Club>> for ClubSet {
    type Error = PlanError;

    fn try_from(clubs: Vec<Club>) -> Result<Self, Self::Error> {
        Self::from_clubs(clubs)
    }
}

impl From<ClubSet> for Vec<Club> {
    fn from(set: ClubSet) -> Self {
        set.clubs
    }
}

/// Pick the club to play for a shot of `distance_m`.
///
/// Returns the shortest club whose range covers the distance. When nothing
/// covers it the longest club (index 0) is played and the shot comes up short.
pub fn choose_club(distance_m: f64, clubs: &ClubSet) -> usize {
    clubs
        .clubs
        .iter()
        .rposition(|club| club.range_m >= distance_m)
        .unwrap_or(0)
}
