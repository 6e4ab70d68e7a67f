pub mod clubs;
pub mod commands;
pub mod course;
pub mod error;
pub mod models;
pub mod planner;
pub mod scoring;
pub mod spatial;

pub use clubs::{choose_club, ClubSet};
pub use commands::{dispatch, RankedIntent, VoiceCommand, COMMAND_PHRASES, MIN_INTENT_CONFIDENCE};
pub use course::{
    Course, CourseHole, HoleRecord, Resources, SurfacePolygon, SurfaceType, TeeColor,
};
pub use error::{CourseError, PlanError};
pub use models::{DisplayOptions, GeoPoint, HoleContext, Waypoint};
pub use planner::{
    plan_path, IncompleteReason, PlanResult, PlanStatus, PlannerConfig, DEFAULT_MAX_ITERATIONS,
};
pub use scoring::{layup_points, score_points, ScoredPoint};
pub use spatial::{destination, distance_m, haversine_distance, initial_bearing_deg};
