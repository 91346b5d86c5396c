//! # Field Report
//!
//! Summary statistics and a coarse ASCII rendering of a [`PixelBuffer`].

use std::fmt;

use crate::color::PixelBuffer;

/// Shades from lowest to highest value.
const SHADES: &[u8] = b" .:-=+*#%@";

/// Summary statistics over sampled values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseStats {
    /// Number of samples.
    pub count: usize,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Arithmetic mean.
    pub mean: f64,
    /// Share of strictly positive samples, in `[0, 1]`.
    pub positive_fraction: f64,
}

impl NoiseStats {
    /// Computes statistics, or `None` for an empty slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        let mut positive = 0usize;
        for &value in values {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            if value > 0.0 {
                positive += 1;
            }
        }

        let count = values.len();
        Some(Self {
            count,
            min,
            max,
            mean: sum / count as f64,
            positive_fraction: positive as f64 / count as f64,
        })
    }
}

impl fmt::Display for NoiseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "samples:   {}", self.count)?;
        writeln!(f, "min:       {:+.5}", self.min)?;
        writeln!(f, "max:       {:+.5}", self.max)?;
        writeln!(f, "mean:      {:+.5}", self.mean)?;
        write!(f, "positive:  {:.1}%", self.positive_fraction * 100.0)
    }
}

/// Renders the buffer as text, at most `max_cols` characters wide.
///
/// Rows are sampled at twice the column step to compensate for the aspect
/// ratio of terminal cells. Shades are scaled between the buffer's own
/// minimum and maximum.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn ascii_preview(buffer: &PixelBuffer, max_cols: u32) -> String {
    let Some(stats) = NoiseStats::from_values(buffer.values()) else {
        return String::new();
    };

    let step = buffer.width().div_ceil(max_cols.max(1)).max(1);
    let range = stats.max - stats.min;
    let top = (SHADES.len() - 1) as f64;

    let mut out = String::new();
    for y in (0..buffer.height()).step_by(step as usize * 2) {
        for x in (0..buffer.width()).step_by(step as usize) {
            let value = buffer.value(x, y).unwrap_or(stats.min);
            let level = if range > 0.0 {
                ((value - stats.min) / range * top).round() as usize
            } else {
                0
            };
            out.push(char::from(SHADES[level.min(SHADES.len() - 1)]));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use perlin_noise::{GradientField, NoiseSampler};

    #[test]
    fn test_stats() {
        let stats = NoiseStats::from_values(&[-0.5, 0.0, 0.25, 0.75]).unwrap();
        assert_eq!(stats.count, 4);
        assert_eq!(stats.min, -0.5);
        assert_eq!(stats.max, 0.75);
        assert_eq!(stats.mean, 0.125);
        assert_eq!(stats.positive_fraction, 0.5);
        assert!(stats.to_string().contains("positive:  50.0%"));

        assert!(NoiseStats::from_values(&[]).is_none());
    }

    #[test]
    fn test_ascii_preview_shape() {
        let field = GradientField::from_seed(128, 64, 16, 4).unwrap();
        let buffer = PixelBuffer::render(&NoiseSampler::new(field));

        let preview = ascii_preview(&buffer, 32);
        let lines: Vec<&str> = preview.lines().collect();
        // step 4 horizontally, 8 vertically
        assert_eq!(lines.len(), 8);
        assert!(lines.iter().all(|line| line.len() == 32));
        // Only shade characters and line breaks
        assert!(preview.bytes().all(|b| SHADES.contains(&b) || b == b'\n'));
    }

    #[test]
    fn test_ascii_preview_small_buffer() {
        let field = GradientField::from_seed(10, 4, 2, 4).unwrap();
        let buffer = PixelBuffer::render(&NoiseSampler::new(field));
        let preview = ascii_preview(&buffer, 64);
        assert_eq!(preview.lines().count(), 2);
        assert!(preview.lines().all(|line| line.len() == 10));
    }
}
