//! # Cropatlas Core
//!
//! Shared building blocks for the cropatlas viewer and CLI:
//!
//! - [`GrayRaster`]: a single-channel byte grid anchored to a WGS-84
//!   bounding box. Gray level 0 is "no data".
//! - [`Selection`] and the scenario enums: crop, emissions scenario,
//!   period, solution and climate model, plus the URL templates that name
//!   the published rasters.
//! - [`io`]: decoding of single-channel PNGs and single-band GeoTIFFs.

pub mod bounds;
pub mod error;
pub mod io;
pub mod raster;
pub mod scenario;

pub use bounds::LatLonBounds;
pub use error::{Error, Result};
pub use raster::GrayRaster;
pub use scenario::{ClimateModel, Crop, Period, Selection, Solution, Ssp};
