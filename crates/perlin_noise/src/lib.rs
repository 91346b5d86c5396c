//! # PERLIN Noise Engine
//!
//! Deterministic, tileable gradient noise over a 2D pixel grid.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Same lattice and parameters always give the same values
//! 2. **Tileable**: Coordinates wrap around the declared area
//! 3. **Pure sampling**: Randomness happens once, when the lattice is built
//! 4. **Infallible sampling**: Every integer coordinate is valid
//!
//! ## Core Components
//!
//! - `GradientField`: The lattice of unit gradients, one per chunk corner
//! - `NoiseSampler`: Raw bilinear noise and multi-octave summation
//! - `NoiseParameters`: Octaves, persistence, lacunarity, output transform
//! - `NoiseConfig`: TOML description of all of the above
//!
//! ## Example
//!
//! ```rust,ignore
//! use perlin_noise::{GradientField, NoiseSampler};
//!
//! let field = GradientField::from_seed(640, 480, 40, 42)?;
//! let mut sampler = NoiseSampler::new(field);
//! sampler.set_persistence(0.6)?;
//!
//! let value = sampler.sample(320, 240);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod gradient;
pub mod params;
pub mod sampler;

pub use config::NoiseConfig;
pub use error::{NoiseError, NoiseResult};
pub use gradient::{Gradient, GradientField};
pub use params::{NoiseParameters, OutputBounds, OutputShaping};
pub use sampler::{NoiseSampler, MAX_RAW_NOISE};
