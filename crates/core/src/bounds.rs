//! Geographic bounding boxes in WGS-84 degrees.

use serde::{Deserialize, Serialize};

/// A WGS-84 bounding box: west/south/east/north in degrees.
///
/// Overlays are anchored wholesale to a box like this; there is no
/// per-pixel reprojection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLonBounds {
    pub west: f64,
    pub south: f64,
    pub east: f64,
    pub north: f64,
}

impl LatLonBounds {
    /// The full WGS-84 extent.
    pub const WORLD: Self = Self {
        west: -180.0,
        south: -90.0,
        east: 180.0,
        north: 90.0,
    };

    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// Center of the box as (lon, lat).
    pub fn center(&self) -> (f64, f64) {
        (
            (self.west + self.east) / 2.0,
            (self.south + self.north) / 2.0,
        )
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// True when west < east and south < north.
    pub fn is_valid(&self) -> bool {
        self.west < self.east && self.south < self.north
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_of_world() {
        let (lon, lat) = LatLonBounds::WORLD.center();
        assert_eq!(lon, 0.0);
        assert_eq!(lat, 0.0);
    }

    #[test]
    fn degenerate_box_invalid() {
        let b = LatLonBounds::new(10.0, 5.0, 10.0, 8.0);
        assert!(!b.is_valid());
        assert!(LatLonBounds::WORLD.is_valid());
    }
}
