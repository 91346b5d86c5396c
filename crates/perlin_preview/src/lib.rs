//! # PERLIN Preview
//!
//! Headless host for the noise engine.
//!
//! ## Modules
//!
//! - `args`: Command line parsing
//! - `color`: Noise value to `0xRRGGBB` mapping and the sampled pixel buffer
//! - `report`: Statistics and ASCII preview

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod args;
pub mod color;
pub mod report;

pub use args::{PreviewArgs, USAGE};
pub use color::{noise_color, PixelBuffer};
pub use report::{ascii_preview, NoiseStats};
