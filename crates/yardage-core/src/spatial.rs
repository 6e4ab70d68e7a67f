//! Spatial math for shot distances and headings.
//!
//! All trigonometry runs on radians; inputs and outputs are decimal degrees.

use crate::models::GeoPoint;

/// Mean Earth radius used by every great-circle calculation here.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate distance between two points in meters using Haversine formula.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in meters
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two points in meters.
pub fn distance_m(a: GeoPoint, b: GeoPoint) -> f64 {
    haversine_distance(a.lat, a.lon, b.lat, b.lon)
}

/// Initial bearing from `from` to `to`, degrees clockwise from true north in `[0, 360)`.
///
/// Coincident points have no defined heading; they return `0.0`.
pub fn initial_bearing_deg(from: GeoPoint, to: GeoPoint) -> f64 {
    if from == to {
        return 0.0;
    }

    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let delta_lambda = (to.lon - from.lon).to_radians();

    let x = phi2.cos() * delta_lambda.sin();
    let y = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * delta_lambda.cos();
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }

    let degrees = (x.atan2(y).to_degrees() + 360.0) % 360.0;
    // Rounding can land exactly on 360 for headings a hair west of north.
    if degrees >= 360.0 {
        0.0
    } else {
        degrees
    }
}

/// Offset a position by distance and bearing.
///
/// # Arguments
/// * `from` - Starting position
/// * `distance_m` - Distance in meters
/// * `bearing_deg` - Bearing in degrees (0 = north, 90 = east)
pub fn destination(from: GeoPoint, distance_m: f64, bearing_deg: f64) -> GeoPoint {
    if distance_m.abs() <= f64::EPSILON {
        return from;
    }

    let lat1 = from.lat.to_radians();
    let lon1 = from.lon.to_radians();
    let bearing_rad = bearing_deg.to_radians();
    let angular_distance = distance_m / EARTH_RADIUS_M;

    let sin_lat1 = lat1.sin();
    let cos_lat1 = lat1.cos();
    let sin_ad = angular_distance.sin();
    let cos_ad = angular_distance.cos();

    let sin_lat2 = sin_lat1 * cos_ad + cos_lat1 * sin_ad * bearing_rad.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();

    let y = bearing_rad.sin() * sin_ad * cos_lat1;
    let x = cos_ad - sin_lat1 * sin_lat2;
    let mut lon2 = lon1 + y.atan2(x);
    lon2 =
        (lon2 + std::f64::consts::PI).rem_euclid(2.0 * std::f64::consts::PI) - std::f64::consts::PI;

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
}

// ==== Local meter/degree scaling ====

/// Meters per degree of latitude at a given latitude (WGS84 approximation).
pub fn meters_per_deg_lat(lat_deg: f64) -> f64 {
    let lat_rad = lat_deg.to_radians();
    111_132.954 - 559.822 * (2.0 * lat_rad).cos() + 1.175 * (4.0 * lat_rad).cos()
        - 0.0023 * (6.0 * lat_rad).cos()
}

/// Meters per degree of longitude at a given latitude (WGS84 approximation).
pub fn meters_per_deg_lon(lat_deg: f64) -> f64 {
    let lat_rad = lat_deg.to_radians();
    111_412.84 * lat_rad.cos() - 93.5 * (3.0 * lat_rad).cos() + 0.118 * (5.0 * lat_rad).cos()
}

/// Offset a position by meters in the north and east directions.
///
/// Small offsets only; used for GPS noise and test fixtures.
pub fn offset_position(from: GeoPoint, north_m: f64, east_m: f64) -> GeoPoint {
    let dlat = north_m / meters_per_deg_lat(from.lat).max(1e-9);
    let dlon = east_m / meters_per_deg_lon(from.lat).max(1e-9);
    GeoPoint::new(from.lat + dlat, from.lon + dlon)
}
