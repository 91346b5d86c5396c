//! # Color Mapping
//!
//! Turns noise values into `0xRRGGBB` pixels.
//!
//! Positive values are shades of red, non-positive values shades of blue;
//! the magnitude sets the intensity. Values are clamped to `[-1, 1]`.

use perlin_noise::NoiseSampler;

/// Maps a noise value to a packed `0xRRGGBB` color.
#[inline]
#[must_use]
pub fn noise_color(value: f64) -> u32 {
    let value = value.clamp(-1.0, 1.0);
    if value > 0.0 {
        channel(value) << 16
    } else {
        channel(-value)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel(intensity: f64) -> u32 {
    // Truncation matches integer pixel conversion
    (intensity * 255.0) as u32
}

/// A fully sampled area: noise values and their colors, row-major.
#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    values: Vec<f64>,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Samples every pixel of the sampler's area.
    #[must_use]
    pub fn render(sampler: &NoiseSampler) -> Self {
        let width = sampler.field().width();
        let height = sampler.field().height();

        let coords = (0..i64::from(height))
            .flat_map(|y| (0..i64::from(width)).map(move |x| (x, y)));
        let values = sampler.sample_many(coords);
        let pixels = values.iter().copied().map(noise_color).collect();

        Self {
            width,
            height,
            values,
            pixels,
        }
    }

    /// Buffer width, in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height, in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sampled values, row-major.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Packed colors, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Value at a pixel, or `None` outside the buffer.
    #[must_use]
    pub fn value(&self, x: u32, y: u32) -> Option<f64> {
        self.index(x, y).map(|i| self.values[i])
    }

    /// Color at a pixel, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}
