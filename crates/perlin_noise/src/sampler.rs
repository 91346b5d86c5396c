//! # Noise Sampler
//!
//! Bilinear gradient noise over a [`GradientField`], summed over octaves.
//!
//! ## Raw Noise
//!
//! A pixel is wrapped into the area (the field tiles), located in its chunk
//! and given a local position `(p, q)` in `[0, 1)`. Each of the four chunk
//! corners contributes the dot product of its gradient with the offset from
//! that corner to the pixel; the four contributions are blended bilinearly
//! and divided by [`MAX_RAW_NOISE`].
//!
//! ## Octaves
//!
//! Octave 0 is raw noise at the pixel itself. Octave `i` samples raw noise at
//! `floor(lacunarity^i * x)`, weighted by `persistence^i`. The weighted sum is
//! divided by the total weight, shaped and mapped into the output bounds.
//!
//! ## Determinism Guarantee
//!
//! `sample` is a pure function of the lattice, the parameters and the
//! coordinates. All randomness lives in [`GradientField`] construction.

use std::sync::Arc;

use crate::error::NoiseResult;
use crate::gradient::GradientField;
use crate::params::{NoiseParameters, OutputShaping};

/// Upper bound on the magnitude of one bilinear evaluation with unit
/// gradients on a unit square, `2 * sqrt(2)`.
pub const MAX_RAW_NOISE: f64 = 2.0 * std::f64::consts::SQRT_2;

/// Samples fractal gradient noise from a shared [`GradientField`].
///
/// # Example
///
/// ```rust,ignore
/// let field = GradientField::from_seed(640, 480, 40, 42)?;
/// let mut sampler = NoiseSampler::new(field);
/// sampler.set_octave_count(4)?;
///
/// let value = sampler.sample(100, 200);
/// let row = sampler.sample_many((0..640).map(|x| (x, 200)));
/// ```
#[derive(Clone, Debug)]
pub struct NoiseSampler {
    field: Arc<GradientField>,
    params: NoiseParameters,
}

impl NoiseSampler {
    /// Creates a sampler with default parameters (3 octaves, persistence 0.5,
    /// lacunarity 2.0).
    #[must_use]
    pub fn new(field: impl Into<Arc<GradientField>>) -> Self {
        Self::with_params(field, NoiseParameters::default())
    }

    /// Creates a sampler with explicit parameters.
    #[must_use]
    pub fn with_params(field: impl Into<Arc<GradientField>>, params: NoiseParameters) -> Self {
        Self {
            field: field.into(),
            params,
        }
    }

    /// The lattice this sampler reads.
    #[must_use]
    pub fn field(&self) -> &Arc<GradientField> {
        &self.field
    }

    /// Snapshot of the current parameters.
    #[must_use]
    pub fn params(&self) -> NoiseParameters {
        self.params
    }

    /// Sets the octave count, keeping the old one on error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NoiseError::InvalidParameter`] for zero.
    pub fn set_octave_count(&mut self, octave_count: u32) -> NoiseResult<()> {
        self.params.set_octave_count(octave_count)
    }

    /// Sets the persistence, keeping the old one on error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NoiseError::InvalidParameter`] unless `0 < persistence < 1`.
    pub fn set_persistence(&mut self, persistence: f64) -> NoiseResult<()> {
        self.params.set_persistence(persistence)
    }

    /// Sets the lacunarity, keeping the old one on error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NoiseError::InvalidParameter`] unless `lacunarity > 1`.
    pub fn set_lacunarity(&mut self, lacunarity: f64) -> NoiseResult<()> {
        self.params.set_lacunarity(lacunarity)
    }

    /// Sets the output shaping.
    pub fn set_shaping(&mut self, shaping: OutputShaping) {
        self.params.set_shaping(shaping);
    }

    /// Sets the output bounds, keeping the old ones on error.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NoiseError::InvalidParameter`] unless `lower < upper`
    /// and both are finite.
    pub fn set_bounds(&mut self, lower: f64, upper: f64) -> NoiseResult<()> {
        self.params.set_bounds(lower, upper)
    }

    /// Single-octave noise at a pixel, in `[-1, 1]`.
    ///
    /// Any coordinate is valid: the area tiles in both directions.
    #[must_use]
    pub fn raw_noise(&self, x: i64, y: i64) -> f64 {
        let field = &*self.field;
        let chunk = i64::from(field.chunk_size());

        // Floored modulo keeps negative inputs inside the area
        let x = x.rem_euclid(i64::from(field.width()));
        let y = y.rem_euclid(i64::from(field.height()));

        let col = x / chunk;
        let row = y / chunk;
        let p = (x - col * chunk) as f64 / chunk as f64;
        let q = (y - row * chunk) as f64 / chunk as f64;

        chunk_noise(field, col as usize, row as usize, p, q)
    }

    /// Fractal noise at a pixel using the sampler's own parameters.
    #[must_use]
    pub fn sample(&self, x: i64, y: i64) -> f64 {
        self.sample_with(&self.params, x, y)
    }

    /// Fractal noise at a pixel using an explicit parameter snapshot.
    #[must_use]
    pub fn sample_with(&self, params: &NoiseParameters, x: i64, y: i64) -> f64 {
        let persistence = params.persistence();
        let lacunarity = params.lacunarity();

        let mut total = self.raw_noise(x, y);
        let mut max_value = 1.0;
        let mut frequency = lacunarity;
        let mut amplitude = persistence;

        for _ in 1..params.octave_count() {
            let sx = scale(x, frequency);
            let sy = scale(y, frequency);
            total += self.raw_noise(sx, sy) * amplitude;
            max_value += amplitude;
            frequency *= lacunarity;
            amplitude *= persistence;
        }

        let normalized = total / max_value;
        params.bounds().map(params.shaping().apply(normalized))
    }

    /// Samples every coordinate, in input order.
    ///
    /// Parameters are read once, so the whole batch sees one snapshot.
    pub fn sample_many<I>(&self, coords: I) -> Vec<f64>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let params = self.params;
        coords
            .into_iter()
            .map(|(x, y)| self.sample_with(&params, x, y))
            .collect()
    }
}

/// Bilinear gradient noise inside chunk `(col, row)` at local `(p, q)`.
///
/// Corners: A top-left, B top-right, C bottom-left, D bottom-right.
#[inline]
fn chunk_noise(field: &GradientField, col: usize, row: usize, p: f64, q: f64) -> f64 {
    let a = field.corner(col, row).dot(p, q);
    let b = field.corner(col + 1, row).dot(p - 1.0, q);
    let c = field.corner(col, row + 1).dot(p, q - 1.0);
    let d = field.corner(col + 1, row + 1).dot(p - 1.0, q - 1.0);

    let top = lerp(a, b, p);
    let bottom = lerp(c, d, p);
    lerp(top, bottom, q) / MAX_RAW_NOISE
}

#[inline]
fn lerp(left: f64, right: f64, weight: f64) -> f64 {
    left + weight * (right - left)
}

/// `floor(frequency * coord)`, saturating at the `i64` range.
#[inline]
fn scale(coord: i64, frequency: f64) -> i64 {
    (coord as f64 * frequency).floor() as i64
}
