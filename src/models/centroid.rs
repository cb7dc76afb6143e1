//! Geographic centroid model.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees representing a postal code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    /// Latitude in decimal degrees, positive north.
    pub lat: f64,
    /// Longitude in decimal degrees, positive east.
    pub lon: f64,
}

impl Centroid {
    /// Creates a centroid from latitude and longitude in decimal degrees.
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

impl From<(f64, f64)> for Centroid {
    fn from((lat, lon): (f64, f64)) -> Self {
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tuple() {
        let c: Centroid = (33.75288, -84.392708).into();
        assert_eq!(c.lat, 33.75288);
        assert_eq!(c.lon, -84.392708);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let c: Centroid = serde_yaml::from_str("lat: 40.75\nlon: -73.99\n").unwrap();
        assert_eq!(c, Centroid::new(40.75, -73.99));
    }
}
