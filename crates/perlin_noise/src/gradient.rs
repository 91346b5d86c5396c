//! # Gradient Field
//!
//! The lattice of unit gradient vectors that drives the noise.
//!
//! The area is divided into square chunks of `chunk_size` pixels. Every chunk
//! corner carries one gradient, so the lattice has one more column and one
//! more row than there are chunks:
//!
//! ```text
//! cols = ceil(width / chunk_size) + 1
//! rows = ceil(height / chunk_size) + 1
//! ```
//!
//! ## Randomness
//!
//! Gradients are drawn exactly once, at construction. The generator is
//! injectable: [`GradientField::with_rng`] accepts any [`Rng`],
//! [`GradientField::from_seed`] uses ChaCha8 for reproducible lattices, and
//! [`GradientField::new`] draws from the thread-local entropy source.
//! Nothing mutates the lattice afterwards.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{NoiseError, NoiseResult};

/// A unit-length 2D gradient vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Gradient {
    /// Creates the unit vector `(cos θ, sin θ)`.
    #[inline]
    #[must_use]
    pub fn from_angle(angle: f64) -> Self {
        let (y, x) = angle.sin_cos();
        Self { x, y }
    }

    /// Creates a gradient pointing along `(x, y)`, normalized to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidParameter`] for a zero-length or
    /// non-finite direction.
    pub fn new(x: f64, y: f64) -> NoiseResult<Self> {
        let length = x.hypot(y);
        if !length.is_finite() || length == 0.0 {
            return Err(NoiseError::parameter("gradient", format!("({x}, {y})")));
        }
        Ok(Self {
            x: x / length,
            y: y / length,
        })
    }

    /// Dot product with the offset vector `(dx, dy)`.
    #[inline]
    #[must_use]
    pub fn dot(self, dx: f64, dy: f64) -> f64 {
        self.x * dx + self.y * dy
    }
}

/// The immutable lattice of gradients covering an area.
///
/// Gradients are stored column-major: the vector at `(col, row)` lives at
/// `col * rows + row`.
#[derive(Clone, Debug)]
pub struct GradientField {
    width: u32,
    height: u32,
    chunk_size: u32,
    cols: usize,
    rows: usize,
    gradients: Vec<Gradient>,
}

impl GradientField {
    /// Creates a field with gradients drawn from the thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidDimension`] if any argument is zero.
    pub fn new(width: u32, height: u32, chunk_size: u32) -> NoiseResult<Self> {
        Self::with_rng(width, height, chunk_size, &mut rand::thread_rng())
    }

    /// Creates a reproducible field from a 64-bit seed.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidDimension`] if any argument is zero.
    pub fn from_seed(width: u32, height: u32, chunk_size: u32, seed: u64) -> NoiseResult<Self> {
        Self::with_rng(width, height, chunk_size, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates a field, drawing every gradient angle uniformly from `[0, 2π)`.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::InvalidDimension`] if any argument is zero.
    pub fn with_rng<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        chunk_size: u32,
        rng: &mut R,
    ) -> NoiseResult<Self> {
        let (cols, rows) = lattice_shape(width, height, chunk_size)?;

        let gradients = (0..cols * rows)
            .map(|_| Gradient::from_angle(rng.gen_range(0.0..TAU)))
            .collect();

        Ok(Self::assemble(width, height, chunk_size, cols, rows, gradients))
    }

    /// Creates a field from an explicit column-major gradient list.
    ///
    /// Each vector is normalized to unit length.
    ///
    /// # Errors
    ///
    /// - [`NoiseError::InvalidDimension`] if any dimension is zero.
    /// - [`NoiseError::GradientCountMismatch`] if the list is not `cols * rows` long.
    /// - [`NoiseError::InvalidParameter`] if a vector has zero length.
    pub fn from_gradients(
        width: u32,
        height: u32,
        chunk_size: u32,
        gradients: Vec<Gradient>,
    ) -> NoiseResult<Self> {
        let (cols, rows) = lattice_shape(width, height, chunk_size)?;
        if gradients.len() != cols * rows {
            return Err(NoiseError::GradientCountMismatch {
                expected: cols * rows,
                actual: gradients.len(),
            });
        }

        let gradients = gradients
            .into_iter()
            .map(|g| Gradient::new(g.x, g.y))
            .collect::<NoiseResult<Vec<_>>>()?;

        Ok(Self::assemble(width, height, chunk_size, cols, rows, gradients))
    }

    fn assemble(
        width: u32,
        height: u32,
        chunk_size: u32,
        cols: usize,
        rows: usize,
        gradients: Vec<Gradient>,
    ) -> Self {
        if chunk_size >= width || chunk_size >= height {
            tracing::warn!(
                width,
                height,
                chunk_size,
                "chunk size is not smaller than the area; the field will look flat"
            );
        }
        tracing::debug!(cols, rows, chunk_size, "generated gradient lattice");

        Self {
            width,
            height,
            chunk_size,
            cols,
            rows,
            gradients,
        }
    }

    /// Width of the sampled area, in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the sampled area, in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Side of a chunk, in pixels.
    #[inline]
    #[must_use]
    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    /// Number of lattice columns.
    #[inline]
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of lattice rows.
    #[inline]
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the gradient at a lattice corner, or `None` outside the lattice.
    #[inline]
    #[must_use]
    pub fn gradient_at(&self, col: usize, row: usize) -> Option<Gradient> {
        if col < self.cols && row < self.rows {
            Some(self.gradients[col * self.rows + row])
        } else {
            None
        }
    }

    /// Iterates over all gradients in column-major order.
    pub fn gradients(&self) -> impl ExactSizeIterator<Item = Gradient> + '_ {
        self.gradients.iter().copied()
    }

    /// Unchecked corner lookup for the sampler.
    ///
    /// Callers must pass `col < cols` and `row < rows`; wrapped sample
    /// coordinates always satisfy this.
    #[inline]
    pub(crate) fn corner(&self, col: usize, row: usize) -> Gradient {
        self.gradients[col * self.rows + row]
    }
}

/// Validates dimensions and returns `(cols, rows)` of the lattice.
fn lattice_shape(width: u32, height: u32, chunk_size: u32) -> NoiseResult<(usize, usize)> {
    if width == 0 || height == 0 || chunk_size == 0 {
        return Err(NoiseError::InvalidDimension {
            width,
            height,
            chunk_size,
        });
    }
    let cols = width.div_ceil(chunk_size) as usize + 1;
    let rows = height.div_ceil(chunk_size) as usize + 1;
    Ok((cols, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_dimensions() {
        let field = GradientField::from_seed(100, 100, 10, 1).unwrap();
        assert_eq!(field.cols(), 11);
        assert_eq!(field.rows(), 11);
        assert_eq!(field.gradients().len(), 121);

        // Partial chunks still get a closing column/row
        let field = GradientField::from_seed(105, 95, 10, 1).unwrap();
        assert_eq!(field.cols(), 12);
        assert_eq!(field.rows(), 11);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        for (w, h, c) in [(0, 100, 10), (100, 0, 10), (100, 100, 0)] {
            assert_eq!(
                GradientField::from_seed(w, h, c, 1).unwrap_err(),
                NoiseError::InvalidDimension {
                    width: w,
                    height: h,
                    chunk_size: c
                }
            );
        }
    }

    #[test]
    fn test_gradients_are_unit_length() {
        let field = GradientField::new(64, 48, 8).unwrap();
        for g in field.gradients() {
            let length = g.x.hypot(g.y);
            assert!((length - 1.0).abs() < 1e-12, "gradient length {length}");
        }
    }

    #[test]
    fn test_seeded_fields_match() {
        let a = GradientField::from_seed(50, 40, 10, 7).unwrap();
        let b = GradientField::from_seed(50, 40, 10, 7).unwrap();
        let c = GradientField::from_seed(50, 40, 10, 8).unwrap();

        assert!(a.gradients().eq(b.gradients()));
        assert!(!a.gradients().eq(c.gradients()));
    }

    #[test]
    fn test_gradient_lookup_bounds() {
        let field = GradientField::from_seed(20, 20, 10, 3).unwrap();
        assert!(field.gradient_at(2, 2).is_some());
        assert!(field.gradient_at(3, 0).is_none());
        assert!(field.gradient_at(0, 3).is_none());
    }

    #[test]
    fn test_from_gradients_layout() {
        // 10x10 area, chunk 10 -> 2x2 lattice, column-major
        let gradients = vec![
            Gradient::from_angle(0.0),
            Gradient::from_angle(1.0),
            Gradient::from_angle(2.0),
            Gradient::from_angle(3.0),
        ];
        let field = GradientField::from_gradients(10, 10, 10, gradients.clone()).unwrap();
        let close = |a: Gradient, b: Gradient| (a.x - b.x).abs() < 1e-12 && (a.y - b.y).abs() < 1e-12;
        assert!(close(field.gradient_at(0, 1).unwrap(), gradients[1]));
        assert!(close(field.gradient_at(1, 0).unwrap(), gradients[2]));
    }

    #[test]
    fn test_from_gradients_normalizes_and_validates() {
        let raw = vec![Gradient { x: 3.0, y: 4.0 }; 4];
        let field = GradientField::from_gradients(10, 10, 10, raw).unwrap();
        let g = field.gradient_at(0, 0).unwrap();
        assert!((g.x - 0.6).abs() < 1e-12);
        assert!((g.y - 0.8).abs() < 1e-12);

        let short = vec![Gradient::from_angle(0.0); 3];
        assert_eq!(
            GradientField::from_gradients(10, 10, 10, short).unwrap_err(),
            NoiseError::GradientCountMismatch {
                expected: 4,
                actual: 3
            }
        );

        let zero = vec![Gradient { x: 0.0, y: 0.0 }; 4];
        assert!(matches!(
            GradientField::from_gradients(10, 10, 10, zero),
            Err(NoiseError::InvalidParameter { name: "gradient", .. })
        ));
    }

    #[test]
    fn test_gradient_dot() {
        let g = Gradient::from_angle(0.0);
        assert!((g.dot(0.5, 0.25) - 0.5).abs() < 1e-12);
    }
}
