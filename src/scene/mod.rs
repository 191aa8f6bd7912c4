//! Scene-space value types consumed by the rendering layer
//!
//! Everything here is a plain owned value: bodies and constellations are
//! constructed fresh by each projection or catalog-load call and never
//! mutated in place. When time or catalog input changes, the caller
//! replaces the whole collection rather than updating it.

use crate::constants::GREAT_CIRCLE_SEGMENTS;
use crate::geometry::great_circle_points;
use crate::Result;
use nalgebra::Vector3;

/// A renderable object positioned in scene space
///
/// Covers both catalog stars and projected solar-system bodies. The `id`
/// is unique within the collection that produced the body, not globally.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    /// Identifier, unique within the originating collection
    pub id: String,
    /// Display name
    pub name: String,
    /// Position in scene units
    pub position: Vector3<f64>,
    /// Visual radius in scene units, always positive
    pub size: f64,
    /// Display color as a hex string, e.g. `"#ffcc00"`
    pub color: String,
    /// Optional human-readable description for UI panels
    pub description: Option<String>,
    /// Optional spectral class, e.g. `"K2"`
    pub spectral_class: Option<String>,
    /// Name of the constellation this body belongs to, if any
    pub constellation: Option<String>,
}

impl CelestialBody {
    /// Create a new body with no optional metadata
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        position: Vector3<f64>,
        size: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position,
            size,
            color: color.into(),
            description: None,
            spectral_class: None,
            constellation: None,
        }
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach a spectral class
    pub fn with_spectral_class(mut self, spectral_class: impl Into<String>) -> Self {
        self.spectral_class = Some(spectral_class.into());
        self
    }

    /// Attach the owning constellation's name
    pub fn with_constellation(mut self, constellation: impl Into<String>) -> Self {
        self.constellation = Some(constellation.into());
        self
    }
}

/// A straight line segment between two scene-space positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub start: Vector3<f64>,
    pub end: Vector3<f64>,
}

impl LineSegment {
    pub fn new(start: Vector3<f64>, end: Vector3<f64>) -> Self {
        Self { start, end }
    }
}

/// A constellation with its positioned stars and figure lines
///
/// Every line segment's endpoints correspond to positions of stars in the
/// same constellation's star list; edges that referenced a missing star id
/// were dropped at build time.
#[derive(Debug, Clone)]
pub struct Constellation {
    /// Stable catalog identifier, e.g. `"Sco"`
    pub id: String,
    /// Display name, e.g. `"Scorpius"`
    pub name: String,
    /// Localized (Chinese) name
    pub chinese_name: String,
    /// Stars in catalog declaration order
    pub stars: Vec<CelestialBody>,
    /// Figure lines as straight segments between member stars
    pub lines: Vec<LineSegment>,
    /// Display color for the figure lines, borrowed from the matching
    /// zodiac sign where there is one
    pub line_color: String,
}

impl Constellation {
    /// Curve each figure line into a great-circle polyline at the given
    /// radius
    ///
    /// Produces one polyline of `GREAT_CIRCLE_SEGMENTS + 1` points per line
    /// segment, following the shorter arc between the two star directions.
    pub fn arcs(&self, radius: f64) -> Result<Vec<Vec<Vector3<f64>>>> {
        self.lines
            .iter()
            .map(|line| great_circle_points(&line.start, &line.end, radius, GREAT_CIRCLE_SEGMENTS))
            .collect()
    }
}
