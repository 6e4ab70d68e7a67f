//! Error types for planning and course decoding.

use thiserror::Error;

/// Errors returned by the shot planner.
///
/// An unreachable target is not an error; see [`crate::planner::PlanStatus`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors raised while turning course feeds into planning input.
#[derive(Error, Debug)]
pub enum CourseError {
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("hole {0} not found in course feed")]
    HoleNotFound(u32),
    #[error("hole {hole} has no {color} tee marker")]
    MissingTee { hole: u32, color: String },
}
