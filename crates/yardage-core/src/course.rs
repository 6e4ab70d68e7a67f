//! Course-data feed records and conversion into planning input.
//!
//! The provider serves two documents per course: hole records (flag position,
//! tee markers, map framing) and surface polygons tagged by terrain type.

use crate::clubs::ClubSet;
use crate::error::CourseError;
use crate::models::{GeoPoint, HoleContext};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `{"resources": [...]}` envelope used by every provider response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Resources<T> {
    pub resources: Vec<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

impl From<LatLong> for GeoPoint {
    fn from(value: LatLong) -> Self {
        GeoPoint::new(value.lat, value.long)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

/// Map framing of the hole image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleRange {
    pub x: Span,
    pub y: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Marker colors found in a hole's vector list. `Flag` marks the pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeeColor {
    Black,
    Flag,
    Red,
    Silver,
}

impl fmt::Display for TeeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TeeColor::Black => "Black",
            TeeColor::Flag => "Flag",
            TeeColor::Red => "Red",
            TeeColor::Silver => "Silver",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoleVector {
    #[serde(rename = "type")]
    pub color: TeeColor,
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoleRecord {
    pub id: u32,
    pub number: u32,
    pub courseid: u32,
    pub rotation: f64,
    pub range: HoleRange,
    pub dimensions: Dimensions,
    pub vectors: Vec<HoleVector>,
    pub flagcoords: LatLong,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceType {
    Fairway,
    Green,
    Sand,
    Woods,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacePolygon {
    pub holeid: u32,
    pub surfacetype: SurfaceType,
    pub polygon: Vec<LatLong>,
}

/// A decoded course: hole records plus every surface polygon.
#[derive(Debug, Clone, Default)]
pub struct Course {
    holes: Vec<HoleRecord>,
    polygons: Vec<SurfacePolygon>,
}

impl Course {
    pub fn new(holes: Vec<HoleRecord>, polygons: Vec<SurfacePolygon>) -> Self {
        Self { holes, polygons }
    }

    /// Decode the holes and polygons documents.
    pub fn from_json(holes_json: &str, polygons_json: &str) -> Result<Self, CourseError> {
        let holes: Resources<HoleRecord> = serde_json::from_str(holes_json)?;
        let polygons: Resources<SurfacePolygon> = serde_json::from_str(polygons_json)?;
        tracing::debug!(
            holes = holes.resources.len(),
            polygons = polygons.resources.len(),
            "decoded course feed"
        );
        Ok(Self::new(holes.resources, polygons.resources))
    }

    pub fn hole_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.holes.iter().map(|hole| hole.number)
    }

    /// Look up a hole by its number on the card (not the provider id).
    pub fn hole(&self, number: u32) -> Result<CourseHole<'_>, CourseError> {
        let record = self
            .holes
            .iter()
            .find(|hole| hole.number == number)
            .ok_or(CourseError::HoleNotFound(number))?;
        Ok(CourseHole {
            record,
            polygons: self
                .polygons
                .iter()
                .filter(|polygon| polygon.holeid == record.id)
                .collect(),
        })
    }

    pub fn hole_context(&self, number: u32, clubs: ClubSet) -> Result<HoleContext, CourseError> {
        Ok(self.hole(number)?.context(clubs))
    }
}

/// One hole with its polygons, borrowed from a [`Course`].
#[derive(Debug, Clone)]
pub struct CourseHole<'a> {
    record: &'a HoleRecord,
    polygons: Vec<&'a SurfacePolygon>,
}

impl<'a> CourseHole<'a> {
    pub fn number(&self) -> u32 {
        self.record.number
    }

    pub fn record(&self) -> &'a HoleRecord {
        self.record
    }

    pub fn flag(&self) -> GeoPoint {
        self.record.flagcoords.into()
    }

    pub fn tee(&self, color: TeeColor) -> Result<GeoPoint, CourseError> {
        self.record
            .vectors
            .iter()
            .find(|vector| vector.color == color)
            .map(|vector| GeoPoint::new(vector.lat, vector.long))
            .ok_or_else(|| CourseError::MissingTee {
                hole: self.record.number,
                color: color.to_string(),
            })
    }

    /// Vertices of every polygon of `surface`, in feed order.
    pub fn surface_points(&self, surface: SurfaceType) -> Vec<GeoPoint> {
        self.polygons
            .iter()
            .filter(|polygon| polygon.surfacetype == surface)
            .flat_map(|polygon| polygon.polygon.iter().copied().map(GeoPoint::from))
            .collect()
    }

    /// Fairway vertices followed by green vertices.
    pub fn candidate_points(&self) -> Vec<GeoPoint> {
        let mut points = self.surface_points(SurfaceType::Fairway);
        points.extend(self.surface_points(SurfaceType::Green));
        points
    }

    pub fn bunker_points(&self) -> Vec<GeoPoint> {
        self.surface_points(SurfaceType::Sand)
    }

    pub fn context(&self, clubs: ClubSet) -> HoleContext {
        HoleContext {
            hole_number: self.record.number,
            target: self.flag(),
            candidates: self.candidate_points(),
            clubs,
        }
    }
}
