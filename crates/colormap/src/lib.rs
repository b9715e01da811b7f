//! # Cropatlas Colormap
//!
//! Color ramps and grayscale-to-RGBA rendering for the suitability maps.
//!
//! Two ramps are defined: [`Ramp::Suitability`] for absolute suitability
//! (0–100 %, gray → orange → yellow → green) and [`Ramp::Difference`] for
//! scenario-minus-baseline change (white → blue → indigo → purple). Both
//! fade to transparent near zero so low values don't paint the basemap
//! over. The main entry point is [`grayscale_to_rgba`], which turns a
//! [`GrayRaster`](cropatlas_core::GrayRaster) into an RGBA pixel buffer
//! suitable for a GPU texture.

mod ramp;
mod render;

pub use ramp::{evaluate, ColorStop, Ramp, Rgb, Rgba};
pub use render::grayscale_to_rgba;
