//! Observer location collaborator
//!
//! The sky orientation needs a latitude and longitude but places no
//! accuracy contract on them beyond valid ranges; a static stub is as
//! acceptable as a live geolocation service.

use crate::{Result, SkyError};

/// A validated observer position on the planet's surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    pub latitude_degrees: f64,
    pub longitude_degrees: f64,
}

impl GeoLocation {
    /// Create a location, rejecting out-of-range coordinates
    pub fn new(latitude_degrees: f64, longitude_degrees: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude_degrees) {
            return Err(SkyError::InvalidInput(format!(
                "latitude {}° outside [-90, 90]",
                latitude_degrees
            )));
        }
        if !(-180.0..=180.0).contains(&longitude_degrees) {
            return Err(SkyError::InvalidInput(format!(
                "longitude {}° outside [-180, 180]",
                longitude_degrees
            )));
        }
        Ok(Self {
            latitude_degrees,
            longitude_degrees,
        })
    }
}

/// Source of the observer's location
pub trait ObserverProvider {
    fn observer_location(&self) -> Result<GeoLocation>;
}

/// Static observer location stub
#[derive(Debug, Clone, Copy)]
pub struct FixedObserver {
    location: GeoLocation,
}

impl FixedObserver {
    pub fn new(location: GeoLocation) -> Self {
        Self { location }
    }
}

impl Default for FixedObserver {
    /// Taipei, the default vantage point of the visualization
    fn default() -> Self {
        Self {
            location: GeoLocation {
                latitude_degrees: 25.0330,
                longitude_degrees: 121.5654,
            },
        }
    }
}

impl ObserverProvider for FixedObserver {
    fn observer_location(&self) -> Result<GeoLocation> {
        Ok(self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        assert!(GeoLocation::new(90.0, 180.0).is_ok());
        assert!(GeoLocation::new(-90.0, -180.0).is_ok());
        assert!(GeoLocation::new(90.1, 0.0).is_err());
        assert!(GeoLocation::new(0.0, -180.5).is_err());
    }

    #[test]
    fn test_default_observer() {
        let location = FixedObserver::default().observer_location().unwrap();
        assert!((location.latitude_degrees - 25.0330).abs() < 1e-9);
        assert!((location.longitude_degrees - 121.5654).abs() < 1e-9);
    }
}
