//! The single-channel raster grid displayed as a map overlay.

use ndarray::Array2;

use crate::bounds::LatLonBounds;
use crate::error::{Error, Result};

/// Gray level used as the "no data" marker.
pub const NODATA: u8 = 0;

/// A single-channel byte raster anchored to a geographic bounding box.
///
/// Values are suitability percentages rescaled to bytes (255 = 100 %);
/// gray level 0 means "no data". A `GrayRaster` is immutable once built
/// and is replaced wholesale when a new scenario loads.
#[derive(Debug, Clone)]
pub struct GrayRaster {
    data: Array2<u8>,
    bounds: LatLonBounds,
}

impl GrayRaster {
    /// Build a raster from row-major pixel data.
    pub fn from_vec(data: Vec<u8>, rows: usize, cols: usize) -> Result<Self> {
        let len = data.len();
        let data = Array2::from_shape_vec((rows, cols), data)
            .map_err(|_| Error::InvalidDimensions { rows, cols, len })?;
        Ok(Self {
            data,
            bounds: LatLonBounds::WORLD,
        })
    }

    /// Build a raster from an existing 2D array.
    pub fn from_array(data: Array2<u8>) -> Self {
        Self {
            data,
            bounds: LatLonBounds::WORLD,
        }
    }

    /// Anchor the raster to the given bounding box.
    pub fn with_bounds(mut self, bounds: LatLonBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<u8> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::OutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    pub fn data(&self) -> &Array2<u8> {
        &self.data
    }

    pub fn bounds(&self) -> LatLonBounds {
        self.bounds
    }

    /// Min and max over cells that carry data, or `None` if everything is
    /// nodata.
    pub fn value_range(&self) -> Option<(u8, u8)> {
        let mut range: Option<(u8, u8)> = None;
        for &v in self.data.iter() {
            if v == NODATA {
                continue;
            }
            range = Some(match range {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        }
        range
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vec_checks_dimensions() {
        let err = GrayRaster::from_vec(vec![1, 2, 3], 2, 2).unwrap_err();
        assert!(matches!(err, Error::InvalidDimensions { len: 3, .. }));
    }

    #[test]
    fn get_and_bounds() {
        let r = GrayRaster::from_vec(vec![0, 10, 20, 30], 2, 2)
            .unwrap()
            .with_bounds(LatLonBounds::new(-20.0, -35.0, 55.0, 38.0));
        assert_eq!(r.get(0, 1).unwrap(), 10);
        assert_eq!(r.get(1, 0).unwrap(), 20);
        assert!(r.get(2, 0).is_err());
        assert_eq!(r.bounds().east, 55.0);
    }

    #[test]
    fn value_range_skips_nodata() {
        let r = GrayRaster::from_vec(vec![0, 0, 40, 200], 2, 2).unwrap();
        assert_eq!(r.value_range(), Some((40, 200)));

        let empty = GrayRaster::from_vec(vec![0; 4], 2, 2).unwrap();
        assert_eq!(empty.value_range(), None);
    }
}
