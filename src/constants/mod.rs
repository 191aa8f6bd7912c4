//! Constants for scene-space projection and angle conversions

use std::f64::consts::PI;

// Scene-space radii
/// Fixed sphere radius onto which all solar-system bodies are projected,
/// in scene units. A deliberate visualization distortion: true distances
/// are discarded.
pub const PROJECTED_RADIUS: f64 = 900.0;
/// Radius at which constellation stars are rendered, in scene units
pub const STAR_DISTANCE: f64 = 1100.0;
/// Default radius for building constellations when the caller has no
/// preference
pub const DEFAULT_CONSTELLATION_RADIUS: f64 = 2000.0;
/// Scene units per astronomical unit (zodiac ring layout)
pub const AU_SCALE: f64 = 50.0;

// Background star field
/// Minimum background-star distance in scene units
pub const BACKGROUND_MIN_DISTANCE: f64 = 400.0;
/// Spread of background-star distances beyond the minimum
pub const BACKGROUND_DISTANCE_SPREAD: f64 = 200.0;

// Great-circle sampling
/// Default number of segments per constellation arc
pub const GREAT_CIRCLE_SEGMENTS: usize = 32;
/// Below this value of sin(angle) two directions are treated as coincident
pub const GREAT_CIRCLE_EPSILON: f64 = 1e-4;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Hours of right ascension to degrees
pub const HOURS2DEG: f64 = 15.0;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;
