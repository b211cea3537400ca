//! Great-circle distance between two points on the Earth's surface.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in meters, matching the reference dataset's precision.
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A latitude/longitude pair, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other`, in meters, via the spherical law of
    /// cosines. Degenerate when `self == other` (falls out of the formula as
    /// `0.0` without a special case).
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        if self.lat == other.lat && self.lng == other.lng {
            return 0.0;
        }
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let dlng = (self.lng - other.lng).to_radians();
        (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * dlng.cos()).acos()
            * EARTH_RADIUS_METERS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_has_zero_distance() {
        let a = Coordinate::new(55.611_087, 37.208_290);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn known_pair_is_within_tolerance() {
        // Moscow landmarks, ~1 km apart along Leninsky Prospekt.
        let a = Coordinate::new(55.611_087, 37.208_290);
        let b = Coordinate::new(55.595_884, 37.209_755);
        let d = a.distance_to(&b);
        assert!((1500.0..1700.0).contains(&d), "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Coordinate::new(55.611_087, 37.208_290);
        let b = Coordinate::new(55.595_884, 37.209_755);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }
}
