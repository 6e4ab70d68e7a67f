//! CLI configuration from environment.

use std::env;
use yardage_core::{ClubSet, PlanError, DEFAULT_MAX_ITERATIONS};

#[derive(Debug, Clone)]
pub struct Config {
    pub clubs: ClubSet,
    pub max_iterations: usize,
    pub course_api_url: String,
    pub course_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let clubs = match env::var("YARDAGE_CLUBS") {
            Ok(raw) => parse_club_list(&raw).unwrap_or_else(|err| {
                tracing::warn!("ignoring YARDAGE_CLUBS={raw:?}: {err}");
                ClubSet::default()
            }),
            Err(_) => ClubSet::default(),
        };

        Self {
            clubs,
            max_iterations: env::var("YARDAGE_MAX_ITERATIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_ITERATIONS),
            course_api_url: env::var("COURSE_API_URL")
                .unwrap_or_else(|_| "https://api.golfbert.com".to_string()),
            course_api_key: env::var("COURSE_API_KEY").ok().filter(|s| !s.is_empty()),
        }
    }
}

/// Parse a comma-separated list of club ranges in meters, e.g. `250,200,150`.
pub fn parse_club_list(raw: &str) -> Result<ClubSet, PlanError> {
    let ranges = raw
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f64>().map_err(|_| {
                PlanError::InvalidConfiguration(format!("club range {part:?} is not a number"))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    ClubSet::new(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_sorts_club_list() {
        let clubs = parse_club_list("100, 250,50 ,200").unwrap();
        assert_eq!(clubs.ranges_m().collect::<Vec<_>>(), vec![250.0, 200.0, 100.0, 50.0]);
    }

    #[test]
    fn rejects_bad_club_lists() {
        assert!(parse_club_list("").is_err());
        assert!(parse_club_list(" , ").is_err());
        assert!(parse_club_list("250,driver").is_err());
        assert!(parse_club_list("250,-5").is_err());
    }
}
