//! Aspect-preserving projection of geographic coordinates onto a bounded
//! canvas ("ScalingPoints" in the reference renderer).

use crate::geo::Coordinate;
use crate::render::svg::Point;

#[derive(Debug, Clone, Copy)]
pub struct Projector {
    min_lon: f64,
    max_lat: f64,
    padding: f64,
    zoom: f64,
}

impl Projector {
    /// Builds a projector over `coords`. Degenerate ranges (a single
    /// distinct longitude, a single distinct latitude, or both) are handled
    /// without dividing by zero, per the branch table below.
    pub fn new(coords: impl Iterator<Item = Coordinate>, width: f64, height: f64, padding: f64) -> Self {
        let mut min_lon = f64::INFINITY;
        let mut max_lon = f64::NEG_INFINITY;
        let mut min_lat = f64::INFINITY;
        let mut max_lat = f64::NEG_INFINITY;
        let mut any = false;
        for c in coords {
            any = true;
            min_lon = min_lon.min(c.lng);
            max_lon = max_lon.max(c.lng);
            min_lat = min_lat.min(c.lat);
            max_lat = max_lat.max(c.lat);
        }
        if !any {
            return Self { min_lon: 0.0, max_lat: 0.0, padding, zoom: 0.0 };
        }

        let lon_degenerate = max_lon == min_lon;
        let lat_degenerate = max_lat == min_lat;

        let zoom = if lon_degenerate && lat_degenerate {
            0.0
        } else if lon_degenerate {
            (height - 2.0 * padding) / (max_lat - min_lat)
        } else if lat_degenerate {
            (width - 2.0 * padding) / (max_lon - min_lon)
        } else {
            let width_zoom = (width - 2.0 * padding) / (max_lon - min_lon);
            let height_zoom = (height - 2.0 * padding) / (max_lat - min_lat);
            width_zoom.min(height_zoom)
        };

        Self { min_lon, max_lat, padding, zoom }
    }

    pub fn project(&self, coord: &Coordinate) -> Point {
        Point::new(
            (coord.lng - self.min_lon) * self.zoom + self.padding,
            (self.max_lat - coord.lat) * self.zoom + self.padding,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_extreme_corners() {
        let coords = vec![Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0)];
        let projector = Projector::new(coords.into_iter(), 100.0, 100.0, 10.0);
        let top_left = projector.project(&Coordinate::new(10.0, 0.0));
        assert!((top_left.x - 10.0).abs() < 1e-9);
        assert!((top_left.y - 10.0).abs() < 1e-9);
        let bottom_right = projector.project(&Coordinate::new(0.0, 10.0));
        assert!((bottom_right.x - 90.0).abs() < 1e-9);
        assert!((bottom_right.y - 90.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_longitude_uses_height_ratio() {
        let coords = vec![Coordinate::new(0.0, 5.0), Coordinate::new(10.0, 5.0)];
        let projector = Projector::new(coords.into_iter(), 100.0, 200.0, 10.0);
        assert!((projector.zoom - (200.0 - 20.0) / 10.0).abs() < 1e-9);
    }

    #[test]
    fn fully_degenerate_range_has_zero_zoom() {
        let coords = vec![Coordinate::new(5.0, 5.0), Coordinate::new(5.0, 5.0)];
        let projector = Projector::new(coords.into_iter(), 100.0, 100.0, 10.0);
        assert_eq!(projector.zoom, 0.0);
    }
}
