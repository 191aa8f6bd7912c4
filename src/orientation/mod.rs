//! Observer-relative sky orientation
//!
//! The star field is rendered in equatorial scene space and then rotated
//! as a whole to match the observer's local sky: a spin about the polar
//! axis from the local sidereal time, plus a fixed tilt from the
//! observer's latitude. Both are pure functions of the observer location
//! and the wall-clock instant.

use crate::constants::{DEG2RAD, TAU};
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Approximate local sidereal time as a rotation angle in `[0, 2π)`
///
/// Uses the day-of-year approximation
///
/// ```text
/// lst_hours = ((100.46 + 0.985647 * day_of_year + longitude + 15 * utc_hours) mod 360) / 15
/// ```
///
/// where `day_of_year` is 1-based and `utc_hours` is the fractional UTC
/// hour of `now`. The error is on the order of a few arc minutes, which is
/// sufficient for orienting a rendered sky but not for pointing
/// instruments.
pub fn local_sidereal_time(longitude_degrees: f64, now: DateTime<Utc>) -> f64 {
    let day_of_year = now.ordinal() as f64;
    let utc_hours = now.hour() as f64 + now.minute() as f64 / 60.0;

    // rem_euclid of a tiny negative value can round to exactly 360.0,
    // which would push the result to TAU and out of [0, 2π).
    let mut lst_degrees =
        (100.46 + 0.985647 * day_of_year + longitude_degrees + 15.0 * utc_hours).rem_euclid(360.0);
    if lst_degrees >= 360.0 {
        lst_degrees = 0.0;
    }
    let lst_hours = lst_degrees / 15.0;

    (lst_hours / 24.0) * TAU
}

/// Tilt of the sky dome for an observer at the given latitude, in radians
///
/// Applied as a rotation about the scene X axis after the sidereal spin.
/// At the north pole (latitude 90°) the tilt is zero and the celestial
/// pole sits at the zenith.
pub fn latitude_tilt(latitude_degrees: f64) -> f64 {
    (latitude_degrees - 90.0) * DEG2RAD
}
