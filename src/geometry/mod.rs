//! Spherical geometry for constellation line art
//!
//! Constellation figures are drawn as arcs on the celestial sphere rather
//! than chords through it, so each catalog edge is expanded into a sampled
//! great-circle polyline between the two star directions.

use crate::constants::{GREAT_CIRCLE_EPSILON, GREAT_CIRCLE_SEGMENTS};
use crate::{Result, SkyError};
use nalgebra::Vector3;

/// Sample points along the great circle between two directions
///
/// Normalizes `v1` and `v2`, then spherical-linearly interpolates
/// `segments + 1` points from the first direction to the second along the
/// shorter arc, each scaled to `radius`. The first point is the normalized
/// `v1` at `radius`, the last the normalized `v2` at `radius`, and every
/// point has magnitude `radius`.
///
/// If the directions are effectively coincident (`sin(angle)` below
/// `GREAT_CIRCLE_EPSILON`) every returned point equals the first direction
/// scaled to `radius`. Antipodal inputs hit the same threshold and collapse
/// to the same fallback; the arc plane is undefined there, so no attempt is
/// made to pick one.
///
/// Fails with `InvalidInput` for a zero-length input vector, a non-positive
/// radius, or zero segments.
pub fn great_circle_points(
    v1: &Vector3<f64>,
    v2: &Vector3<f64>,
    radius: f64,
    segments: usize,
) -> Result<Vec<Vector3<f64>>> {
    if radius <= 0.0 {
        return Err(SkyError::InvalidInput(format!(
            "radius {} must be positive",
            radius
        )));
    }
    if segments == 0 {
        return Err(SkyError::InvalidInput(
            "great circle needs at least one segment".to_string(),
        ));
    }

    let a = normalize_direction(v1)?;
    let b = normalize_direction(v2)?;

    // The dot product can land just outside [-1, 1] from rounding; without
    // the clamp, acos returns NaN for near-identical or near-antipodal
    // directions.
    let angle = a.dot(&b).clamp(-1.0, 1.0).acos();
    let sin_total = angle.sin();

    let mut points = Vec::with_capacity(segments + 1);

    if sin_total < GREAT_CIRCLE_EPSILON {
        // Coincident (or antipodal) directions: repeat the first endpoint.
        for _ in 0..=segments {
            points.push(a * radius);
        }
        return Ok(points);
    }

    for i in 0..=segments {
        let t = i as f64 / segments as f64;
        let sin_a = ((1.0 - t) * angle).sin();
        let sin_b = (t * angle).sin();

        let p = (a * sin_a + b * sin_b) / sin_total;
        points.push(p.normalize() * radius);
    }

    Ok(points)
}

/// Sample a great-circle arc with the default segment count
pub fn great_circle_arc(
    v1: &Vector3<f64>,
    v2: &Vector3<f64>,
    radius: f64,
) -> Result<Vec<Vector3<f64>>> {
    great_circle_points(v1, v2, radius, GREAT_CIRCLE_SEGMENTS)
}

fn normalize_direction(v: &Vector3<f64>) -> Result<Vector3<f64>> {
    let norm = v.norm();
    if norm == 0.0 {
        return Err(SkyError::InvalidInput(
            "cannot interpolate from a zero-length vector".to_string(),
        ));
    }
    Ok(v / norm)
}
