//! Equatorial to scene-space coordinate conversion
//!
//! The scene frame is fixed by the rendering convention of the sky
//! visualization and must not drift, since catalog stars, constellation
//! arcs, and projected solar-system bodies all have to land on the same
//! sphere:
//!
//! - **X**: toward the vernal equinox (RA = 0h, Dec = 0°)
//! - **Y**: toward the north celestial pole (Dec = +90°)
//! - **Z**: toward RA = 18h in the equatorial plane (scene "depth" axis,
//!   i.e. `z = -sin(ra)` at Dec = 0°)

use crate::constants::{DEG2RAD, HOURS2DEG};
use crate::{Result, SkyError};
use nalgebra::Vector3;

/// Convert equatorial coordinates to a scene-space Cartesian vector
///
/// `ra_hours` is right ascension in hours `[0, 24)`, `dec_degrees` is
/// declination in degrees `[-90, 90]`, and `radius` is the distance from
/// the origin in scene units. The result has magnitude `radius` to within
/// 1e-6 relative for all in-range inputs.
///
/// The conversion is:
///
/// ```text
/// x =  radius * cos(dec) * cos(ra)
/// y =  radius * sin(dec)
/// z = -radius * cos(dec) * sin(ra)
/// ```
///
/// This function performs no validation: an out-of-range declination still
/// produces a mathematically valid vector, just not a meaningful sky
/// position. Use [`checked_ra_dec_to_scene`] when the inputs come from an
/// untrusted source.
pub fn ra_dec_to_scene(ra_hours: f64, dec_degrees: f64, radius: f64) -> Vector3<f64> {
    let ra_rad = ra_hours * HOURS2DEG * DEG2RAD;
    let dec_rad = dec_degrees * DEG2RAD;

    let cos_dec = dec_rad.cos();
    Vector3::new(
        radius * cos_dec * ra_rad.cos(),
        radius * dec_rad.sin(),
        -radius * cos_dec * ra_rad.sin(),
    )
}

/// Validating wrapper around [`ra_dec_to_scene`]
///
/// Surfaces `InvalidInput` for `ra_hours` outside `[0, 24)`, `dec_degrees`
/// outside `[-90, 90]`, or a non-positive radius.
pub fn checked_ra_dec_to_scene(
    ra_hours: f64,
    dec_degrees: f64,
    radius: f64,
) -> Result<Vector3<f64>> {
    if !(0.0..24.0).contains(&ra_hours) {
        return Err(SkyError::InvalidInput(format!(
            "right ascension {} h outside [0, 24)",
            ra_hours
        )));
    }
    if !(-90.0..=90.0).contains(&dec_degrees) {
        return Err(SkyError::InvalidInput(format!(
            "declination {}° outside [-90, 90]",
            dec_degrees
        )));
    }
    if radius <= 0.0 {
        return Err(SkyError::InvalidInput(format!(
            "radius {} must be positive",
            radius
        )));
    }
    Ok(ra_dec_to_scene(ra_hours, dec_degrees, radius))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_cardinal_directions() {
        let r = 1000.0;

        // RA 0h, Dec 0° is the +X axis
        let vernal = ra_dec_to_scene(0.0, 0.0, r);
        assert_relative_eq!(vernal.x, r, max_relative = 1e-12);
        assert_relative_eq!(vernal.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(vernal.z, 0.0, epsilon = 1e-9);

        // RA 6h, Dec 0° is the -Z axis
        let six_hours = ra_dec_to_scene(6.0, 0.0, r);
        assert_relative_eq!(six_hours.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(six_hours.y, 0.0, epsilon = 1e-9);
        assert_relative_eq!(six_hours.z, -r, max_relative = 1e-12);

        // The north celestial pole is the +Y axis
        let pole = ra_dec_to_scene(0.0, 90.0, r);
        assert_relative_eq!(pole.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(pole.y, r, max_relative = 1e-12);
        assert_relative_eq!(pole.z, 0.0, epsilon = 1e-9);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(6.0, 45.0)]
    #[case(12.0, -45.0)]
    #[case(18.0, 89.9)]
    #[case(23.99, -89.9)]
    #[case(4.6, 16.51)]
    fn test_magnitude_preserved(#[case] ra: f64, #[case] dec: f64) {
        for radius in [1.0, 900.0, 2000.0] {
            let v = ra_dec_to_scene(ra, dec, radius);
            assert_relative_eq!(v.norm(), radius, max_relative = 1e-6);
        }
    }

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(checked_ra_dec_to_scene(24.0, 0.0, 1.0).is_err());
        assert!(checked_ra_dec_to_scene(-0.1, 0.0, 1.0).is_err());
        assert!(checked_ra_dec_to_scene(0.0, 90.1, 1.0).is_err());
        assert!(checked_ra_dec_to_scene(0.0, -90.1, 1.0).is_err());
        assert!(checked_ra_dec_to_scene(0.0, 0.0, 0.0).is_err());
        assert!(checked_ra_dec_to_scene(0.0, 0.0, -5.0).is_err());

        assert!(checked_ra_dec_to_scene(0.0, 90.0, 1.0).is_ok());
        assert!(checked_ra_dec_to_scene(23.999, -90.0, 1.0).is_ok());
    }

    #[test]
    fn test_deterministic() {
        let a = ra_dec_to_scene(16.49, -26.43, 1100.0);
        let b = ra_dec_to_scene(16.49, -26.43, 1100.0);
        assert_eq!(a, b);
    }
}
