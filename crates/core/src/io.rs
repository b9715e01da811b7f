//! Decoding of the published raster formats.
//!
//! The remote archive serves single-channel PNGs; local files opened through
//! the viewer or CLI may also be single-band GeoTIFFs (u8, or float percent
//! values). Decoded rasters default to [`LatLonBounds::WORLD`] unless the
//! TIFF carries ModelPixelScale/ModelTiepoint tags.

use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;

use crate::bounds::LatLonBounds;
use crate::error::{Error, Result};
use crate::raster::GrayRaster;

// GeoTIFF tags (not named by the tiff crate).
const MODEL_PIXEL_SCALE: u16 = 33550;
const MODEL_TIEPOINT: u16 = 33922;

/// Decode an in-memory single-channel PNG into a raster.
///
/// Multi-channel inputs are collapsed to luma. The result is anchored to
/// [`LatLonBounds::WORLD`]; callers attach the real bounds with
/// [`GrayRaster::with_bounds`].
pub fn decode_png(bytes: &[u8]) -> Result<GrayRaster> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)?;
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    GrayRaster::from_vec(gray.into_raw(), height as usize, width as usize)
}

/// Read a single-band GeoTIFF from disk.
pub fn read_geotiff<P: AsRef<Path>>(path: P) -> Result<GrayRaster> {
    let file = File::open(path.as_ref())?;
    decode_geotiff(file)
}

/// Decode a single-band GeoTIFF from an in-memory buffer.
pub fn decode_geotiff_bytes(bytes: &[u8]) -> Result<GrayRaster> {
    decode_geotiff(Cursor::new(bytes))
}

fn decode_geotiff<R>(reader: R) -> Result<GrayRaster>
where
    R: std::io::Read + std::io::Seek,
{
    let mut decoder = Decoder::new(reader)?;
    let (width, height) = decoder.dimensions()?;
    let rows = height as usize;
    let cols = width as usize;

    let data: Vec<u8> = match decoder.read_image()? {
        DecodingResult::U8(buf) => buf,
        // Float bands carry suitability percent; rescale to bytes so a
        // full 100 % maps to 255 and anything negative clamps to nodata.
        DecodingResult::F32(buf) => buf.iter().map(|&v| percent_to_byte(v as f64)).collect(),
        DecodingResult::F64(buf) => buf.iter().map(|&v| percent_to_byte(v)).collect(),
        _ => return Err(Error::UnsupportedSampleFormat("expected u8 or float samples")),
    };

    // Geo tags are optional; a plain TIFF falls back to world bounds.
    let bounds = read_bounds(&mut decoder, rows, cols).unwrap_or(LatLonBounds::WORLD);

    GrayRaster::from_vec(data, rows, cols).map(|r| r.with_bounds(bounds))
}

fn percent_to_byte(v: f64) -> u8 {
    if !v.is_finite() || v <= 0.0 {
        return 0;
    }
    (v.clamp(0.0, 100.0) * 255.0 / 100.0).round() as u8
}

/// Bounds from ModelPixelScaleTag + ModelTiepointTag.
///
/// tiepoint is `[I, J, K, X, Y, Z]`, scale `[sx, sy, sz]`; the tiepoint
/// anchors pixel (I, J) at geographic (X, Y) with north-up orientation.
fn read_bounds<R>(decoder: &mut Decoder<R>, rows: usize, cols: usize) -> Option<LatLonBounds>
where
    R: std::io::Read + std::io::Seek,
{
    // The tiff crate exposes these GeoTIFF tags under named variants, so the
    // decoder keys them as `ModelPixelScaleTag`/`ModelTiepointTag` rather than
    // `Tag::Unknown(..)` — look them up by the names it actually stores.
    let scale = decoder.get_tag_f64_vec(Tag::ModelPixelScaleTag).ok()?;
    let tiepoint = decoder.get_tag_f64_vec(Tag::ModelTiepointTag).ok()?;

    if scale.len() < 2 || tiepoint.len() < 6 {
        return None;
    }

    let west = tiepoint[3] - tiepoint[0] * scale[0];
    let north = tiepoint[4] + tiepoint[1] * scale[1];
    let east = west + cols as f64 * scale[0];
    let south = north - rows as f64 * scale[1];

    let bounds = LatLonBounds::new(west, south, east, north);
    bounds.is_valid().then_some(bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tiff::encoder::colortype::Gray8;
    use tiff::encoder::TiffEncoder;

    fn png_bytes(pixels: &[u8], width: u32, height: u32) -> Vec<u8> {
        let img = image::GrayImage::from_raw(width, height, pixels.to_vec()).unwrap();
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn png_roundtrip() {
        let pixels = [0u8, 51, 128, 255, 10, 20];
        let bytes = png_bytes(&pixels, 3, 2);

        let raster = decode_png(&bytes).unwrap();
        assert_eq!(raster.rows(), 2);
        assert_eq!(raster.cols(), 3);
        assert_eq!(raster.get(0, 1).unwrap(), 51);
        assert_eq!(raster.get(1, 2).unwrap(), 20);
    }

    #[test]
    fn png_garbage_is_a_decode_error() {
        let err = decode_png(&[0xde, 0xad, 0xbe, 0xef]).unwrap_err();
        assert!(matches!(err, Error::Png(_)));
    }

    #[test]
    fn geotiff_u8_with_geo_tags() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = TiffEncoder::new(&mut buf).unwrap();
            let mut image = encoder.new_image::<Gray8>(4, 2).unwrap();
            // 0.5 degree pixels anchored at (-20, 38): a 4x2 grid spans
            // west -20..-18, north 38..37.
            image
                .encoder()
                .write_tag(Tag::Unknown(MODEL_PIXEL_SCALE), [0.5, 0.5, 0.0].as_slice())
                .unwrap();
            image
                .encoder()
                .write_tag(
                    Tag::Unknown(MODEL_TIEPOINT),
                    [0.0, 0.0, 0.0, -20.0, 38.0, 0.0].as_slice(),
                )
                .unwrap();
            image.write_data(&[0u8, 10, 20, 30, 40, 50, 60, 70]).unwrap();
        }

        let raster = decode_geotiff_bytes(&buf.into_inner()).unwrap();
        assert_eq!((raster.rows(), raster.cols()), (2, 4));
        assert_eq!(raster.get(1, 3).unwrap(), 70);

        let b = raster.bounds();
        assert_eq!(b.west, -20.0);
        assert_eq!(b.north, 38.0);
        assert_eq!(b.east, -18.0);
        assert_eq!(b.south, 37.0);
    }

    #[test]
    fn geotiff_without_tags_defaults_to_world() {
        let mut buf = Cursor::new(Vec::new());
        {
            let mut encoder = TiffEncoder::new(&mut buf).unwrap();
            encoder.write_image::<Gray8>(2, 2, &[1u8, 2, 3, 4]).unwrap();
        }
        let raster = decode_geotiff_bytes(&buf.into_inner()).unwrap();
        assert_eq!(raster.bounds(), LatLonBounds::WORLD);
    }

    #[test]
    fn percent_scaling() {
        assert_eq!(percent_to_byte(0.0), 0);
        assert_eq!(percent_to_byte(-3.0), 0);
        assert_eq!(percent_to_byte(100.0), 255);
        assert_eq!(percent_to_byte(f64::NAN), 0);
        assert_eq!(percent_to_byte(50.0), 128);
    }
}
