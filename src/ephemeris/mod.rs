//! Solar-system body projection onto the visualization sphere
//!
//! Geocentric positions come from an external ephemeris collaborator and
//! are rescaled onto a fixed radius so every body sits on the same sphere
//! as the stars. The true distance is kept only as display metadata; the
//! projection is a deliberate distortion, not a physical position.

use crate::constants::PROJECTED_RADIUS;
use crate::scene::CelestialBody;
use crate::{Result, SkyError};
use chrono::{DateTime, Utc};
use log::warn;
use nalgebra::Vector3;
use std::collections::HashMap;

/// Solar-system bodies tracked by the projector
///
/// Earth is excluded: it defines the coordinate origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Mercury,
    Venus,
    Moon,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl Body {
    /// Get the body's display name
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    fn config(&self) -> &'static BodyConfig {
        BODY_CONFIGS
            .iter()
            .find(|config| config.body == *self)
            .expect("every Body variant has a config entry")
    }
}

/// Display configuration for a projected body
#[derive(Debug, Clone, Copy)]
struct BodyConfig {
    body: Body,
    id: &'static str,
    name: &'static str,
    color: &'static str,
    size: f64,
}

/// Fixed body set and display attributes, in projection order
const BODY_CONFIGS: [BodyConfig; 9] = [
    BodyConfig { body: Body::Sun, id: "sun", name: "Sun", color: "#ffcc00", size: 20.0 },
    BodyConfig { body: Body::Mercury, id: "mercury", name: "Mercury", color: "#aaaaaa", size: 6.0 },
    BodyConfig { body: Body::Venus, id: "venus", name: "Venus", color: "#ffcc99", size: 9.0 },
    BodyConfig { body: Body::Moon, id: "moon", name: "Moon", color: "#dddddd", size: 6.0 },
    BodyConfig { body: Body::Mars, id: "mars", name: "Mars", color: "#ff4400", size: 8.0 },
    BodyConfig { body: Body::Jupiter, id: "jupiter", name: "Jupiter", color: "#dcbba1", size: 16.0 },
    BodyConfig { body: Body::Saturn, id: "saturn", name: "Saturn", color: "#d4cfa1", size: 14.0 },
    BodyConfig { body: Body::Uranus, id: "uranus", name: "Uranus", color: "#99ccff", size: 10.0 },
    BodyConfig { body: Body::Neptune, id: "neptune", name: "Neptune", color: "#3333ff", size: 10.0 },
];

/// External ephemeris collaborator
///
/// Returns the geocentric position of a body in the equatorial J2000
/// frame, in astronomical units. A valid body/time pair must never map to
/// the zero vector; if it does, projection of that body fails with
/// `ZeroDistanceVector`.
pub trait EphemerisSource {
    fn geocentric_vector(&self, body: Body, time: DateTime<Utc>) -> Result<Vector3<f64>>;
}

/// Project every configured body onto the visualization sphere
///
/// Queries the ephemeris source once per body, in the fixed order of the
/// body table, and returns one entry per body. A failed body (ephemeris
/// error or degenerate zero vector) yields an `Err` in its slot without
/// affecting the other bodies.
///
/// The ephemeris frame maps into scene space by the fixed axis permutation
/// `(x, y, z) -> (x, z, -y)`; every successful position has magnitude
/// `PROJECTED_RADIUS`.
pub fn project_solar_system(
    source: &impl EphemerisSource,
    time: DateTime<Utc>,
) -> Vec<(Body, Result<CelestialBody>)> {
    BODY_CONFIGS
        .iter()
        .map(|config| (config.body, project_body(source, config, time)))
        .collect()
}

/// Project the solar system, keeping only the bodies that succeeded
///
/// Failures are logged and skipped so one bad ephemeris answer never
/// blanks the whole sky.
pub fn project_visible(source: &impl EphemerisSource, time: DateTime<Utc>) -> Vec<CelestialBody> {
    project_solar_system(source, time)
        .into_iter()
        .filter_map(|(body, result)| match result {
            Ok(projected) => Some(projected),
            Err(err) => {
                warn!("skipping {}: {}", body.name(), err);
                None
            }
        })
        .collect()
}

fn project_body(
    source: &impl EphemerisSource,
    config: &BodyConfig,
    time: DateTime<Utc>,
) -> Result<CelestialBody> {
    let vec = source.geocentric_vector(config.body, time)?;

    let distance = vec.norm();
    if distance == 0.0 {
        return Err(SkyError::ZeroDistanceVector {
            body: config.name.to_string(),
        });
    }

    let ratio = PROJECTED_RADIUS / distance;
    let scaled = vec * ratio;

    // Equatorial J2000 -> scene frame: (x, y, z) becomes (x, z, -y).
    let position = Vector3::new(scaled.x, scaled.z, -scaled.y);

    Ok(
        CelestialBody::new(config.id, config.name, position, config.size, config.color)
            .with_description(format!(
                "Distance: {:.2} AU (projected to {})",
                distance, PROJECTED_RADIUS
            )),
    )
}

/// Ephemeris stub backed by a fixed body -> vector table
///
/// Useful for tests and offline tools; bodies without an entry report
/// `InvalidInput`.
#[derive(Debug, Default)]
pub struct FixedEphemeris {
    vectors: HashMap<Body, Vector3<f64>>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the geocentric vector returned for a body, in AU
    pub fn with_body(mut self, body: Body, vector: Vector3<f64>) -> Self {
        self.vectors.insert(body, vector);
        self
    }
}

impl EphemerisSource for FixedEphemeris {
    fn geocentric_vector(&self, body: Body, _time: DateTime<Utc>) -> Result<Vector3<f64>> {
        self.vectors
            .get(&body)
            .copied()
            .ok_or_else(|| SkyError::InvalidInput(format!("no ephemeris entry for {}", body.name())))
    }
}
