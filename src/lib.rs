//! Skysphere: celestial coordinate and projection engine for night-sky scenes
//!
//! This crate converts astronomical catalog and ephemeris data into a
//! consistent 3D Cartesian scene space: equatorial coordinates to scene
//! vectors, great-circle arcs for constellation lines, observer-relative
//! sky orientation, solar-system projection onto a fixed visualization
//! radius, and free-text search over the resulting objects.
//!
//! The rendering layer is deliberately out of scope: every public function
//! here is a pure computation over value types, and the renderer consumes
//! the resulting [`CelestialBody`] and line-segment collections directly.

use thiserror::Error;

pub mod catalog;
pub mod constants;
pub mod coordinates;
pub mod ephemeris;
pub mod geometry;
pub mod observer;
pub mod orientation;
pub mod scene;
pub mod search;
pub mod starfield;
pub mod zodiac;

// Re-export commonly used types
pub use catalog::SkyCatalog;
pub use ephemeris::{Body, EphemerisSource};
pub use scene::{CelestialBody, Constellation, LineSegment};

/// Main error type for the skysphere library
#[derive(Debug, Error)]
pub enum SkyError {
    /// Input outside the documented domain of an operation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The ephemeris collaborator returned a zero vector for a body
    #[error("Ephemeris returned a zero-distance vector for {body}")]
    ZeroDistanceVector { body: String },

    /// Catalog content failed schema or range validation
    #[error("Data error: {0}")]
    DataError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Result type for skysphere operations
pub type Result<T> = std::result::Result<T, SkyError>;
