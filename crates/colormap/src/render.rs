//! Grayscale-to-RGBA rendering using a color ramp.

use cropatlas_core::raster::NODATA;
use cropatlas_core::GrayRaster;

use crate::ramp::{evaluate, Ramp};

/// Convert a grayscale raster to an RGBA pixel buffer.
///
/// Each gray level is rescaled from [0, 255] to [0, 100] and pushed
/// through the ramp; gray level 0 is "no data" and comes out fully
/// transparent regardless of the ramp. Returns `rows * cols * 4` bytes in
/// row-major order, suitable for uploading as a GPU texture.
pub fn grayscale_to_rgba(raster: &GrayRaster, ramp: Ramp) -> Vec<u8> {
    let mut rgba = vec![0u8; raster.rows() * raster.cols() * 4];

    for (i, &gray) in raster.data().iter().enumerate() {
        if gray == NODATA {
            continue;
        }

        let value = gray as f64 * 100.0 / 255.0;
        let c = evaluate(ramp, value);

        let offset = i * 4;
        rgba[offset] = c.r;
        rgba[offset + 1] = c.g;
        rgba[offset + 2] = c.b;
        rgba[offset + 3] = (c.alpha * 255.0).round() as u8;
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nodata_pixels_are_transparent() {
        let raster = GrayRaster::from_vec(vec![0, 255, 0, 128], 2, 2).unwrap();

        for ramp in [Ramp::Suitability, Ramp::Difference] {
            let rgba = grayscale_to_rgba(&raster, ramp);
            assert_eq!(rgba.len(), 16);
            assert_eq!(&rgba[0..4], &[0, 0, 0, 0], "{:?}", ramp);
            assert_eq!(&rgba[8..12], &[0, 0, 0, 0], "{:?}", ramp);
        }
    }

    #[test]
    fn full_byte_maps_to_ramp_top() {
        let raster = GrayRaster::from_vec(vec![255], 1, 1).unwrap();
        let rgba = grayscale_to_rgba(&raster, Ramp::Suitability);
        // 255 -> 100 % -> final suitability stop, opaque.
        assert_eq!(&rgba[..], &[26, 150, 65, 255]);
    }

    #[test]
    fn faded_band_quantizes_alpha() {
        // gray 51 -> 20 % exactly: alpha 1.0 on the suitability ramp.
        let raster = GrayRaster::from_vec(vec![51], 1, 1).unwrap();
        let rgba = grayscale_to_rgba(&raster, Ramp::Suitability);
        assert_eq!(rgba[3], 255);

        // gray 26 -> ~10.2 %: alpha 0.02 * 10.2 ~= 0.204 -> 52.
        let raster = GrayRaster::from_vec(vec![26], 1, 1).unwrap();
        let rgba = grayscale_to_rgba(&raster, Ramp::Suitability);
        assert_eq!(rgba[3], 52);
    }
}
